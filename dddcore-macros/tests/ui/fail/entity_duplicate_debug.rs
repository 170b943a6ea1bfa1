#[dddcore_macros::entity(debug = true, debug = false)]
struct User {
    name: String,
}

fn main() {}

#[dddcore_macros::entity(hash = true)]
struct User {
    name: String,
}

fn main() {}

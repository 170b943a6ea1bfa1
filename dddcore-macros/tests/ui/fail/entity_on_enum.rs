#[dddcore_macros::entity]
enum Status {
    Active,
    Closed,
}

fn main() {}

#[dddcore_macros::domain_event(name = "a", name = "b")]
struct Pinged;

fn main() {}

#[dddcore_macros::domain_event]
struct Renamed(String);

fn main() {}

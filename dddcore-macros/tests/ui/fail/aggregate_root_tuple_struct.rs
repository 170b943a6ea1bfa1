#[dddcore_macros::aggregate_root]
struct Ledger(Vec<i64>);

fn main() {}

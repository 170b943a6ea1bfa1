#[dddcore_macros::value_object(hash = true)]
struct Sku(String);

fn main() {}

#[dddcore_macros::value_object(eq = 1)]
struct Sku(String);

fn main() {}

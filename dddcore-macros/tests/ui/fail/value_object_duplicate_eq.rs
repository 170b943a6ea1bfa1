#[dddcore_macros::value_object(eq = false, debug = true, eq = true)]
struct Ratio {
    value: f64,
}

fn main() {}

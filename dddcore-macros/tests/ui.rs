#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*_basic.rs");
    t.pass("tests/ui/event_all_shapes.rs");
    t.compile_fail("tests/ui/fail/*.rs");
}

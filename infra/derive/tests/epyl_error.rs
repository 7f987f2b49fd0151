#[test]
fn epyl_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/epyl_error_pass.rs");
}

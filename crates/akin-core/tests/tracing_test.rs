use akin_core::tracing::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

use scalargrad_core::Scalar;

/// Installs a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates labelled leaves from `(label, value)` pairs.
#[allow(dead_code)]
pub fn leaves(specs: &[(&str, f64)]) -> Vec<Scalar> {
    specs
        .iter()
        .map(|&(label, value)| Scalar::with_label(value, label))
        .collect()
}

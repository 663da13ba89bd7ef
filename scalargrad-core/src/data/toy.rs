use crate::data::vec_dataset::VecDataset;

/// The four three-feature examples with targets `[1, -1, -1, 1]`.
pub fn toy_dataset() -> VecDataset {
    VecDataset {
        inputs: vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ],
        targets: vec![1.0, -1.0, -1.0, 1.0],
    }
}

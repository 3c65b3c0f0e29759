use ndarray::Array3;
/// One materialized batch of windows.
///
/// `features` is `(batch, channels, example_length)`,
/// `labels` is `(batch, number_of_labels, example_length)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub features: Array3<f64>,
    pub labels: Array3<f64>,
}
impl Batch {
    pub(crate) fn zeros(size: usize, channels: usize, labels: usize, length: usize) -> Self {
        Self {
            features: Array3::zeros((size, channels, length)),
            labels: Array3::zeros((size, labels, length)),
        }
    }
    /// Number of windows in the batch.
    pub fn size(&self) -> usize {
        self.features.dim().0
    }
    pub fn feature_shape(&self) -> (usize, usize, usize) {
        self.features.dim()
    }
    pub fn label_shape(&self) -> (usize, usize, usize) {
        self.labels.dim()
    }
    pub fn into_parts(self) -> (Array3<f64>, Array3<f64>) {
        (self.features, self.labels)
    }
}

//! Shuffled, fixed-length window batches over multi-channel physiological
//! recordings (ECG/EEG), for sequence models.
//!
//! A recording is loaded whole through a [`dataset::SignalSource`], split into
//! non-overlapping windows, and served in random order by
//! [`dataset::WindowedBatchIterator`] as `(features, labels)` tensors.
pub mod dataset;
pub use dataset::{
    Batch, DataSetIterator, IteratorConfig, SignalBuffer, WindowError, WindowedBatchIterator,
};

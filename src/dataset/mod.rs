// src/dataset/mod.rs
pub mod batch;
pub mod buffer;
pub mod config;
pub mod error;
pub mod iterator;
pub mod offsets;
pub mod source;
// re-export the types a training loop needs
pub use batch::Batch;
pub use buffer::SignalBuffer;
pub use config::IteratorConfig;
pub use error::{ErrorKind, Result, WindowError};
pub use iterator::{BatchPreProcessor, DataSetIterator, WindowedBatchIterator};
pub use offsets::{window_count, OffsetQueue, RESERVED_WINDOWS};
pub use source::{
    open_source, CsvSignalSource, JsonSignalSource, ManualSource, SignalDocument, SignalSource,
};

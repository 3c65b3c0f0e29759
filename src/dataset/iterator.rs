use std::path::Path;
use log::{debug, info, trace};
use ndarray::s;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::dataset::batch::Batch;
use crate::dataset::buffer::SignalBuffer;
use crate::dataset::config::IteratorConfig;
use crate::dataset::error::{Result, WindowError};
use crate::dataset::offsets::{window_count, OffsetQueue};
use crate::dataset::source::{open_source, SignalSource};
/// Hook applied to every batch before it is handed out.
pub trait BatchPreProcessor {
    fn pre_process(&self, batch: &mut Batch);
}
/// Pull-based batch producer consumed by a training loop.
///
/// Members with default bodies that return [`WindowError::Unsupported`]
/// are optional capabilities this crate does not provide.
pub trait DataSetIterator {
    fn has_more(&self) -> bool;
    /// Produces up to `size` windows. The last batch of an epoch may be smaller.
    fn next_batch_of(&mut self, size: usize) -> Result<Batch>;
    fn next_batch(&mut self) -> Result<Batch> {
        let size = self.configured_batch_size();
        self.next_batch_of(size)
    }
    /// Starts a new epoch with a fresh shuffle. Safe to call mid-epoch.
    fn reset(&mut self);
    fn remaining_window_count(&self) -> usize;
    fn total_window_count(&self) -> i64;
    fn consumed_count(&self) -> i64 {
        self.total_window_count() - self.remaining_window_count() as i64
    }
    fn channel_count(&self) -> usize;
    fn configured_batch_size(&self) -> usize;
    fn input_columns(&self) -> usize {
        self.channel_count()
    }
    fn num_examples(&self) -> i64 {
        self.total_window_count()
    }
    fn cursor(&self) -> i64 {
        self.consumed_count()
    }
    fn supports_reset(&self) -> bool {
        true
    }
    fn supports_async(&self) -> bool {
        true
    }
    fn labels(&self) -> Result<Vec<String>> {
        Err(WindowError::Unsupported("label vocabulary"))
    }
    fn total_outcomes(&self) -> Result<usize> {
        Err(WindowError::Unsupported("total outcome count"))
    }
    fn set_pre_processor(&mut self, _pre_processor: Box<dyn BatchPreProcessor>) -> Result<()> {
        Err(WindowError::Unsupported("batch pre-processor"))
    }
    fn pre_processor(&self) -> Result<&dyn BatchPreProcessor> {
        Err(WindowError::Unsupported("batch pre-processor"))
    }
}
/// Cuts an in-memory recording into non-overlapping windows and serves them
/// in shuffled order, one batch at a time.
pub struct WindowedBatchIterator {
    signal: SignalBuffer,
    config: IteratorConfig,
    offsets: OffsetQueue,
    rng: StdRng,
}
impl WindowedBatchIterator {
    /// Loads the recording at `path` and prepares the first epoch.
    pub fn build(path: impl AsRef<Path>, config: IteratorConfig) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| WindowError::NotFound(path.to_path_buf()))?;
        let directory = path.parent().unwrap_or_else(|| Path::new("."));
        let mut source = open_source(directory, name)?;
        Self::from_source(source.as_mut(), config)
    }
    pub fn from_source<S: SignalSource + ?Sized>(
        source: &mut S,
        config: IteratorConfig,
    ) -> Result<Self> {
        config.validate()?;
        let signal = source.load_signal()?;
        info!(
            "loaded {}: {} channel(s) x {} sample(s)",
            source.name(),
            signal.channel_count(),
            signal.sample_count()
        );
        Self::new(signal, config)
    }
    pub fn new(signal: SignalBuffer, config: IteratorConfig) -> Result<Self> {
        config.validate()?;
        let length = config.example_length;
        let windows = window_count(signal.sample_count(), length).ok_or_else(|| {
            WindowError::invalid(format!(
                "{} sample(s) is too short for a window of {length}",
                signal.sample_count()
            ))
        })?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let offsets = OffsetQueue::new(windows, length, &mut rng);
        debug!(
            "{} trailing sample(s) fall outside every window",
            signal.sample_count() - windows * length
        );
        info!(
            "{windows} window(s) of {length} sample(s), batch size {}",
            config.batch_size
        );
        Ok(Self {
            signal,
            config,
            offsets,
            rng,
        })
    }
    pub fn window_length(&self) -> usize {
        self.config.example_length
    }
    /// Windows in a full epoch.
    pub fn epoch_window_count(&self) -> usize {
        self.offsets.len()
    }
    /// Start offsets still to be served this epoch, in serving order.
    pub fn pending_offsets(&self) -> &[usize] {
        self.offsets.pending()
    }
    pub fn config(&self) -> &IteratorConfig {
        &self.config
    }
    pub fn signal(&self) -> &SignalBuffer {
        &self.signal
    }
}
impl DataSetIterator for WindowedBatchIterator {
    fn has_more(&self) -> bool {
        !self.offsets.is_empty()
    }
    fn next_batch_of(&mut self, size: usize) -> Result<Batch> {
        if size == 0 {
            return Err(WindowError::invalid("requested batch size must be positive"));
        }
        if self.offsets.is_empty() {
            return Err(WindowError::Exhausted);
        }
        let length = self.config.example_length;
        let label_channel = self.config.label_channel;
        let effective = size.min(self.offsets.remaining());
        let mut batch = Batch::zeros(
            effective,
            self.signal.channel_count(),
            self.config.number_of_labels,
            length,
        );
        let signal = self.signal.view();
        for (i, &t0) in self.offsets.take(effective).iter().enumerate() {
            // Sample t0 itself is never copied; slot 0 of each window stays zero.
            let t_n = t0 + length;
            batch
                .features
                .slice_mut(s![i, .., 1..])
                .assign(&signal.slice(s![.., t0 + 1..t_n]));
            batch.labels.slice_mut(s![i, label_channel, 1..]).fill(1.0);
        }
        trace!(
            "batch of {effective}, {} window(s) left",
            self.offsets.remaining()
        );
        Ok(batch)
    }
    fn reset(&mut self) {
        let dropped = self.offsets.remaining();
        self.offsets.reshuffle(&mut self.rng);
        debug!(
            "new epoch: {} window(s) shuffled, {dropped} unconsumed dropped",
            self.offsets.len()
        );
    }
    fn remaining_window_count(&self) -> usize {
        self.offsets.remaining()
    }
    /// `floor((samples - 1) / batch_size) - 2`. Divides by the batch size, not
    /// the window length; see [`WindowedBatchIterator::epoch_window_count`] for
    /// the per-epoch window count.
    fn total_window_count(&self) -> i64 {
        let samples = self.signal.sample_count() as i64;
        (samples - 1) / self.config.batch_size as i64 - 2
    }
    fn channel_count(&self) -> usize {
        self.signal.channel_count()
    }
    fn configured_batch_size(&self) -> usize {
        self.config.batch_size
    }
}
impl Iterator for WindowedBatchIterator {
    type Item = Batch;
    fn next(&mut self) -> Option<Batch> {
        if !self.has_more() {
            return None;
        }
        self.next_batch().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = self
            .offsets
            .remaining()
            .div_ceil(self.config.batch_size);
        (batches, Some(batches))
    }
}

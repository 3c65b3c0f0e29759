use ndarray::{Array2, ArrayView1, ArrayView2};
use crate::dataset::error::{Result, WindowError};
/// Whole recording held in memory, one row per channel.
#[derive(Clone, Debug)]
pub struct SignalBuffer {
    samples: Array2<f64>, // channels x samples
    channel_labels: Vec<String>,
    sample_rate_hz: Option<f64>,
}
impl SignalBuffer {
    /// Builds a buffer from per-channel rows, checking that every row has the
    /// same length as the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let channel_count = rows.len();
        let Some(sample_count) = rows.first().map(|r| r.len()) else {
            return Err(WindowError::EmptySignal);
        };
        if let Some((channel, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != sample_count)
        {
            return Err(WindowError::ChannelLengthMismatch {
                channel,
                expected: sample_count,
                actual: row.len(),
            });
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let samples = Array2::from_shape_vec((channel_count, sample_count), flat)?;
        Ok(Self::from_array(samples))
    }
    pub fn from_array(samples: Array2<f64>) -> Self {
        let channel_labels = (0..samples.nrows()).map(|i| format!("Ch{i}")).collect();
        Self {
            samples,
            channel_labels,
            sample_rate_hz: None,
        }
    }
    /// Replaces the default `Ch{n}` labels. Extra or missing labels are a
    /// channel mismatch.
    pub fn with_channel_labels(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.channel_count() {
            return Err(WindowError::invalid(format!(
                "{} channel label(s) for {} channel(s)",
                labels.len(),
                self.channel_count()
            )));
        }
        self.channel_labels = labels;
        Ok(self)
    }
    pub fn with_sample_rate(mut self, sample_rate_hz: f64) -> Result<Self> {
        if sample_rate_hz.is_nan() || sample_rate_hz <= 0.0 {
            return Err(WindowError::invalid("sample rate must be greater than zero"));
        }
        self.sample_rate_hz = Some(sample_rate_hz);
        Ok(self)
    }
    pub fn channel_count(&self) -> usize {
        self.samples.nrows()
    }
    pub fn sample_count(&self) -> usize {
        self.samples.ncols()
    }
    pub fn channel(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.channel_count()).then(|| self.samples.row(index))
    }
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.samples.view()
    }
    pub fn channel_labels(&self) -> &[String] {
        &self.channel_labels
    }
    pub fn sample_rate_hz(&self) -> Option<f64> {
        self.sample_rate_hz
    }
    pub fn duration_seconds(&self) -> Option<f64> {
        self.sample_rate_hz
            .map(|rate| self.sample_count() as f64 / rate)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rows_become_channels() {
        let buffer = SignalBuffer::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.sample_count(), 3);
        assert_eq!(buffer.view()[[1, 2]], 6.0);
        assert_eq!(buffer.channel(0).unwrap().to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(buffer.channel(2).is_none());
        assert_eq!(buffer.channel_labels(), ["Ch0", "Ch1"]);
    }
    #[test]
    fn ragged_rows_are_rejected() {
        let err = SignalBuffer::from_rows(vec![vec![0.0; 5], vec![0.0; 5], vec![0.0; 4]]).unwrap_err();
        match err {
            WindowError::ChannelLengthMismatch {
                channel,
                expected,
                actual,
            } => {
                assert_eq!((channel, expected, actual), (2, 5, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
    #[test]
    fn no_rows_is_empty_signal() {
        assert!(matches!(
            SignalBuffer::from_rows(Vec::new()),
            Err(WindowError::EmptySignal)
        ));
    }
    #[test]
    fn metadata_is_checked() {
        let buffer = SignalBuffer::from_rows(vec![vec![0.0; 500]]).unwrap();
        assert!(buffer.clone().with_channel_labels(vec![]).is_err());
        assert!(buffer.clone().with_sample_rate(0.0).is_err());
        let buffer = buffer.with_sample_rate(250.0).unwrap();
        assert_eq!(buffer.duration_seconds(), Some(2.0));
    }
}

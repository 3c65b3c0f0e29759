use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::dataset::error::{Result, WindowError};
/// Parameters controlling how a recording is cut into batches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IteratorConfig {
    /// Windows per batch when no explicit size is requested.
    pub batch_size: usize,
    /// Window length in samples.
    pub example_length: usize,
    /// Channel count of the label tensor.
    pub number_of_labels: usize,
    /// Label channel marked with `1.0` inside each window.
    pub label_channel: usize,
    /// Seed for the shuffle RNG; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}
impl Default for IteratorConfig {
    fn default() -> Self {
        Self {
            batch_size: 32,
            example_length: 256,
            number_of_labels: 1,
            label_channel: 0,
            seed: None,
        }
    }
}
impl IteratorConfig {
    pub fn new(batch_size: usize, example_length: usize) -> Self {
        Self {
            batch_size,
            example_length,
            ..Self::default()
        }
    }
    pub fn batch_size(mut self, bs: usize) -> Self {
        self.batch_size = bs;
        self
    }
    pub fn example_length(mut self, len: usize) -> Self {
        self.example_length = len;
        self
    }
    pub fn number_of_labels(mut self, n: usize) -> Self {
        self.number_of_labels = n;
        self
    }
    pub fn label_channel(mut self, channel: usize) -> Self {
        self.label_channel = channel;
        self
    }
    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(WindowError::NotFound(path.to_path_buf()));
        }
        Self::from_json_str(&fs::read_to_string(path)?)
    }
    pub fn validate(&self) -> Result<()> {
        if self.example_length == 0 {
            return Err(WindowError::invalid("example length must be positive"));
        }
        if self.batch_size == 0 {
            return Err(WindowError::invalid("batch size must be positive"));
        }
        if self.number_of_labels == 0 {
            return Err(WindowError::invalid("number of labels must be positive"));
        }
        if self.label_channel >= self.number_of_labels {
            return Err(WindowError::invalid(format!(
                "label channel {} out of range for {} label(s)",
                self.label_channel, self.number_of_labels
            )));
        }
        Ok(())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::error::ErrorKind;
    #[test]
    fn missing_fields_take_defaults() {
        let cfg = IteratorConfig::from_json_str(r#"{ "batch_size": 3, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.batch_size, 3);
        assert_eq!(cfg.example_length, 256);
        assert_eq!(cfg.number_of_labels, 1);
        assert_eq!(cfg.label_channel, 0);
        assert_eq!(cfg.seed, Some(7));
    }
    #[test]
    fn zero_sizes_are_rejected() {
        for cfg in [
            IteratorConfig::new(0, 10),
            IteratorConfig::new(3, 0),
            IteratorConfig::new(3, 10).number_of_labels(0),
        ] {
            assert_eq!(
                cfg.validate().unwrap_err().kind(),
                ErrorKind::InvalidConfiguration
            );
        }
    }
    #[test]
    fn label_channel_must_fit() {
        let cfg = IteratorConfig::new(3, 10).label_channel(1);
        assert!(cfg.validate().is_err());
        assert!(cfg.number_of_labels(2).validate().is_ok());
    }
    #[test]
    fn malformed_json_is_a_source_error() {
        let err = IteratorConfig::from_json_str("{ batch_size: }").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Source);
    }
}

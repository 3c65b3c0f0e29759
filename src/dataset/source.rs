use std::fs;
use std::path::{Path, PathBuf};
use log::info;
use serde::{Deserialize, Serialize};
use crate::dataset::buffer::SignalBuffer;
use crate::dataset::error::{Result, WindowError};
/// Anything that can hand over a complete multi-channel recording.
pub trait SignalSource {
    fn load_signal(&mut self) -> Result<SignalBuffer>;
    fn name(&self) -> &str {
        "signal"
    }
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    rows: Vec<Vec<f64>>, // channels x samples
}
impl ManualSource {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}
impl SignalSource for ManualSource {
    fn load_signal(&mut self) -> Result<SignalBuffer> {
        SignalBuffer::from_rows(self.rows.clone())
    }
    fn name(&self) -> &str {
        "manual"
    }
}
/// Recording stored as CSV: one row per sample, one column per channel.
///
/// A header row is optional. When present, a leading `Timestamp` column is
/// dropped and the remaining column names become channel labels.
pub struct CsvSignalSource {
    path: PathBuf,
    name: String,
}
impl CsvSignalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self { path, name }
    }
    fn parse(text: &str) -> Result<SignalBuffer> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .peekable();
        let mut labels: Option<Vec<String>> = None;
        let mut skip_first = false;
        if let Some(&(_, first)) = lines.peek() {
            let fields: Vec<&str> = first.split(',').map(str::trim).collect();
            if fields.iter().any(|f| f.parse::<f64>().is_err()) {
                skip_first = fields
                    .first()
                    .is_some_and(|f| f.eq_ignore_ascii_case("timestamp"));
                let start = usize::from(skip_first);
                labels = Some(fields[start..].iter().map(|f| f.to_string()).collect());
                lines.next();
            }
        }
        let mut channels: Vec<Vec<f64>> = Vec::new();
        for (line_no, line) in lines {
            let values = line
                .split(',')
                .skip(usize::from(skip_first))
                .map(|field| {
                    field.trim().parse::<f64>().map_err(|e| WindowError::Parse {
                        line: line_no,
                        message: format!("{:?}: {e}", field.trim()),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if channels.is_empty() {
                channels = vec![Vec::new(); values.len()];
            }
            if values.len() != channels.len() {
                return Err(WindowError::Parse {
                    line: line_no,
                    message: format!("expected {} column(s), found {}", channels.len(), values.len()),
                });
            }
            for (channel, value) in channels.iter_mut().zip(values) {
                channel.push(value);
            }
        }
        let buffer = SignalBuffer::from_rows(channels)?;
        match labels {
            Some(labels) => buffer.with_channel_labels(labels),
            None => Ok(buffer),
        }
    }
}
impl SignalSource for CsvSignalSource {
    fn load_signal(&mut self) -> Result<SignalBuffer> {
        let text = read_existing(&self.path)?;
        Self::parse(&text)
    }
    fn name(&self) -> &str {
        &self.name
    }
}
/// Serialized form read by [`JsonSignalSource`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignalDocument {
    #[serde(default)]
    pub sample_rate_hz: Option<f64>,
    #[serde(default)]
    pub channel_labels: Vec<String>,
    pub samples: Vec<Vec<f64>>, // channels x samples
}
impl SignalDocument {
    pub fn into_buffer(self) -> Result<SignalBuffer> {
        let mut buffer = SignalBuffer::from_rows(self.samples)?;
        if !self.channel_labels.is_empty() {
            buffer = buffer.with_channel_labels(self.channel_labels)?;
        }
        if let Some(rate) = self.sample_rate_hz {
            buffer = buffer.with_sample_rate(rate)?;
        }
        Ok(buffer)
    }
}
pub struct JsonSignalSource {
    path: PathBuf,
    name: String,
}
impl JsonSignalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = file_name(&path);
        Self { path, name }
    }
}
impl SignalSource for JsonSignalSource {
    fn load_signal(&mut self) -> Result<SignalBuffer> {
        let text = read_existing(&self.path)?;
        let document: SignalDocument = serde_json::from_str(&text)?;
        document.into_buffer()
    }
    fn name(&self) -> &str {
        &self.name
    }
}
/// Locates `name` inside `directory` and picks a reader by file extension.
pub fn open_source(directory: impl AsRef<Path>, name: &str) -> Result<Box<dyn SignalSource>> {
    let path = directory.as_ref().join(name);
    if !path.is_file() {
        return Err(WindowError::NotFound(path));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    info!("opening signal source {}", path.display());
    match extension.as_deref() {
        Some("csv") => Ok(Box::new(CsvSignalSource::new(path))),
        Some("json") => Ok(Box::new(JsonSignalSource::new(path))),
        _ => Err(WindowError::Unsupported(
            "signal files other than .csv or .json",
        )),
    }
}
fn read_existing(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(WindowError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::error::ErrorKind;
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ekg-windows-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }
    #[test]
    fn manual_source_returns_rows() {
        let mut source = ManualSource::new(vec![vec![0.5; 4], vec![1.5; 4]]);
        let buffer = source.load_signal().unwrap();
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.sample_count(), 4);
    }
    #[test]
    fn csv_with_timestamp_header() {
        let text = "Timestamp,Ch0,Ch1\n0.000,1.0,10.0\n0.004,2.0,20.0\n\n0.008,3.0,30.0\n";
        let buffer = CsvSignalSource::parse(text).unwrap();
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.sample_count(), 3);
        assert_eq!(buffer.channel_labels(), ["Ch0", "Ch1"]);
        assert_eq!(buffer.channel(1).unwrap().to_vec(), vec![10.0, 20.0, 30.0]);
    }
    #[test]
    fn csv_without_header() {
        let buffer = CsvSignalSource::parse("1,2\n3,4\n").unwrap();
        assert_eq!(buffer.channel(0).unwrap().to_vec(), vec![1.0, 3.0]);
        assert_eq!(buffer.channel_labels(), ["Ch0", "Ch1"]);
    }
    #[test]
    fn csv_reports_bad_line() {
        let err = CsvSignalSource::parse("MLII,V5\n1,2\n3,x\n").unwrap_err();
        assert!(matches!(err, WindowError::Parse { line: 3, .. }));
        let err = CsvSignalSource::parse("1,2\n3\n").unwrap_err();
        assert!(matches!(err, WindowError::Parse { line: 2, .. }));
    }
    #[test]
    fn json_document_loads_with_metadata() {
        let dir = scratch_dir("json");
        let path = dir.join("rec.json");
        fs::write(
            &path,
            r#"{ "sample_rate_hz": 360.0, "channel_labels": ["MLII", "V5"], "samples": [[1, 2, 3], [4, 5, 6]] }"#,
        )
        .unwrap();
        let mut source = open_source(&dir, "rec.json").unwrap();
        assert_eq!(source.name(), "rec.json");
        let buffer = source.load_signal().unwrap();
        assert_eq!(buffer.channel_labels(), ["MLII", "V5"]);
        assert_eq!(buffer.sample_rate_hz(), Some(360.0));
        assert_eq!(buffer.view()[[1, 0]], 4.0);
        fs::remove_dir_all(&dir).ok();
    }
    #[test]
    fn missing_file_is_not_found() {
        let dir = scratch_dir("missing");
        let err = open_source(&dir, "absent.csv").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = CsvSignalSource::new(dir.join("gone.csv")).load_signal().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        fs::remove_dir_all(&dir).ok();
    }
    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = scratch_dir("ext");
        fs::write(dir.join("100.dat"), [0u8; 4]).unwrap();
        let err = open_source(&dir, "100.dat").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
        fs::remove_dir_all(&dir).ok();
    }
}

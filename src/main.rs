// src/main.rs
use std::env;
use anyhow::{bail, Context};
use log::{info, warn};
use ekg_windows::{DataSetIterator, IteratorConfig, WindowedBatchIterator};
fn usage() -> String {
    "usage: ekg-windows <signal.csv|signal.json> [config.json] [epochs]".to_owned()
}
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(signal_path) = args.first() else {
        bail!(usage());
    };
    let config = match args.get(1) {
        Some(path) => IteratorConfig::from_json_file(path)
            .with_context(|| format!("reading config {path}"))?,
        None => IteratorConfig::default(),
    };
    let epochs: usize = match args.get(2) {
        Some(n) => n.parse().with_context(usage)?,
        None => 1,
    };
    let mut iterator = WindowedBatchIterator::build(signal_path, config)
        .with_context(|| format!("loading {signal_path}"))?;
    for epoch in 0..epochs {
        if epoch > 0 {
            iterator.reset();
        }
        let mut batches = 0;
        while iterator.has_more() {
            match iterator.next_batch() {
                Ok(batch) => {
                    batches += 1;
                    info!(
                        "epoch {epoch} batch {batches}: features {:?}, labels {:?}",
                        batch.feature_shape(),
                        batch.label_shape()
                    );
                }
                Err(e) => {
                    warn!("epoch {epoch}: {e}");
                    break;
                }
            }
        }
        if batches == 0 {
            warn!("epoch {epoch} produced no batches");
        }
        info!(
            "epoch {epoch} done: {batches} batch(es), {} window(s)",
            iterator.epoch_window_count()
        );
    }
    Ok(())
}

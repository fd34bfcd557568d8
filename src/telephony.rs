//! Platform seam: snapshot sources and device metadata.
//!
//! The telephony service itself lives outside this crate; it is reached
//! through [`SnapshotSource`]. A live integration pushes stringified
//! snapshots into a [`ChannelSource`] from its callback; a pipe or replay
//! file feeds a [`ReaderSource`] one snapshot per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crossbeam_channel::{Receiver, Sender, bounded};

use serde::Deserialize;

/// Stream of raw snapshot strings. `None` means the stream ended.
pub trait SnapshotSource: Send {
    fn next_snapshot(&mut self) -> anyhow::Result<Option<String>>;
}

impl SnapshotSource for Box<dyn SnapshotSource> {
    fn next_snapshot(&mut self) -> anyhow::Result<Option<String>> {
        (**self).next_snapshot()
    }
}

/// Channel-backed source for live feeds.
///
/// The platform callback side holds the [`Sender`] and pushes one snapshot
/// per radio update. The channel is bounded; updates are infrequent enough
/// that a full queue means the consumer is gone, not backlogged.
pub struct ChannelSource {
    rx: Receiver<String>,
}

impl ChannelSource {
    /// Create a bounded feed. Returns the sender for the platform side and
    /// the source for the session side.
    pub fn channel(capacity: usize) -> (Sender<String>, ChannelSource) {
        let (tx, rx) = bounded(capacity);
        (tx, ChannelSource { rx })
    }
}

impl SnapshotSource for ChannelSource {
    fn next_snapshot(&mut self) -> anyhow::Result<Option<String>> {
        match self.rx.recv() {
            Ok(raw) => Ok(Some(raw)),
            // All senders dropped: the feed is over.
            Err(_) => Ok(None),
        }
    }
}

/// Line-per-snapshot source over any buffered reader (stdin pipe or replay
/// file). Blank lines and `#` comments are skipped.
pub struct ReaderSource<R: BufRead + Send> {
    reader: R,
}

impl ReaderSource<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<ReaderSource<BufReader<File>>> {
        let file = File::open(path.as_ref())?;
        Ok(ReaderSource {
            reader: BufReader::new(file),
        })
    }
}

impl ReaderSource<BufReader<io::Stdin>> {
    pub fn stdin() -> ReaderSource<BufReader<io::Stdin>> {
        ReaderSource {
            reader: BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead + Send> ReaderSource<R> {
    pub fn from_reader(reader: R) -> ReaderSource<R> {
        ReaderSource { reader }
    }
}

impl<R: BufRead + Send> SnapshotSource for ReaderSource<R> {
    fn next_snapshot(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
    }
}

/// Device/build metadata, displayed verbatim in the screen header.
///
/// There is no portable way to read another platform's build properties, so
/// these come from the config file; anything unset shows as `unknown`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub manufacturer: String,
    pub model: String,
    pub product: String,
    pub device: String,
    pub build_id: String,
    pub os_version: String,
    pub sdk_version: String,
    pub build_host: String,
    pub operator: String,
}

impl DeviceInfo {
    /// `<manufacturer> <model>`
    pub fn name_line(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    /// `<product>/<device> (<build id>)`
    pub fn model_line(&self) -> String {
        format!("{}/{} ({})", self.product, self.device, self.build_id)
    }

    /// `<os version> (API version <sdk>)`
    pub fn os_line(&self) -> String {
        format!("{} (API version {})", self.os_version, self.sdk_version)
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        let unknown = || "unknown".to_string();
        Self {
            manufacturer: unknown(),
            model: unknown(),
            product: unknown(),
            device: unknown(),
            build_id: unknown(),
            os_version: unknown(),
            sdk_version: unknown(),
            build_host: unknown(),
            operator: unknown(),
        }
    }
}

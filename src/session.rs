//! Listener session with an explicit start/stop lifecycle.
//!
//! The hosting screen owns a [`MonitorSession`] and toggles it with the
//! screen's own visibility: `start()` when shown, `stop()` when hidden.
//! While listening, `next()` blocks on the source and yields parsed
//! snapshots; malformed snapshots are logged and dropped rather than ending
//! the session. There is no queuing beyond the source's own bound and no
//! retry — updates are infrequent and drops are not monitored.
//!
//! Live wiring hands the channel sender to the platform callback:
//!
//! ```
//! use signalinfo::config::MonitorConfig;
//! use signalinfo::session::MonitorSession;
//! use signalinfo::telephony::ChannelSource;
//!
//! let config = MonitorConfig::default();
//! let (updates, source) = ChannelSource::channel(config.session.queue_capacity);
//! let mut session = MonitorSession::new(source, config.sanitize.clone());
//! session.start();
//!
//! // the platform callback pushes one stringified snapshot per radio update
//! updates
//!     .send("SignalStrength: 20 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0".into())
//!     .unwrap();
//! drop(updates);
//!
//! assert!(session.next().unwrap().is_some());
//! ```

use crate::config::SanitizeConfig;
use crate::snapshot::SignalSnapshot;
use crate::telephony::SnapshotSource;

pub struct MonitorSession<S: SnapshotSource> {
    source: S,
    rules: SanitizeConfig,
    listening: bool,
    updates: u64,
}

impl<S: SnapshotSource> MonitorSession<S> {
    /// Create a session over a source. Not listening until [`start`] is
    /// called.
    ///
    /// [`start`]: MonitorSession::start
    pub fn new(source: S, rules: SanitizeConfig) -> MonitorSession<S> {
        MonitorSession {
            source,
            rules,
            listening: false,
            updates: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.listening {
            log::info!("signal listener started");
            self.listening = true;
        }
    }

    pub fn stop(&mut self) {
        if self.listening {
            log::info!("signal listener stopped after {} updates", self.updates);
            self.listening = false;
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Snapshots seen since the session was created.
    pub fn updates_seen(&self) -> u64 {
        self.updates
    }

    /// Next parsed snapshot, or `None` when stopped or the source ended.
    pub fn next(&mut self) -> anyhow::Result<Option<SignalSnapshot>> {
        while self.listening {
            let Some(raw) = self.source.next_snapshot()? else {
                log::info!("snapshot source closed");
                self.listening = false;
                break;
            };
            log::debug!("signal update: {}", raw);

            match SignalSnapshot::parse(&raw, &self.rules) {
                Ok(snapshot) => {
                    self.updates += 1;
                    return Ok(Some(snapshot));
                }
                Err(e) => {
                    log::warn!("dropping snapshot: {}", e);
                }
            }
        }
        Ok(None)
    }
}

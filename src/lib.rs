pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod metric;
pub mod output;
pub mod session;
pub mod snapshot;
pub mod telephony;

pub use config::MonitorConfig;
pub use error::{Result, SignalInfoError};
pub use metric::Metric;
pub use session::MonitorSession;
pub use snapshot::{FieldValue, SignalSnapshot};

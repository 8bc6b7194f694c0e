//! extlog: structured workflow log entries for CLI extensions.
//!
//! A [`LogBuilder`] accumulates workflow steps, a [`Status`] and a [`Level`],
//! then builds an immutable [`LogEntry`]. The [`codec`] module turns entries
//! into flat JSON objects and back.
//!
//! ```
//! let entry = extlog::builder()
//!     .add_workflow_steps(["Base", "Extended"])
//!     .add_workflow_steps(["Extra"])
//!     .set_status(extlog::Status::InProgress)
//!     .build("ext_id", "test_message");
//!
//! assert_eq!(entry.workflow_step(), "Base/Extended/Extra");
//! assert_eq!(extlog::decode(&entry.to_json()).unwrap(), entry);
//! ```
pub mod builder;
pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod sink;

pub use builder::{LogBuilder, STEP_SEPARATOR};
pub use codec::{decode, encode, ParseError};
pub use config::{LoggingConfig, OutputTarget};
pub use entry::{Level, LogEntry, Status};
pub use error::LogError;
pub use logging::{builder, global, init, init_with, Logging};
pub use sink::{LogSink, TracingSink, WriterSink};

//! End-to-end tests for building, encoding and decoding log entries.
//!
//! ```text
//! init_with(LoggingConfig::default())
//!     ↓
//! builder() → add_workflow_steps("Base", "Extended") → add_workflow_steps("Extra")
//!     ↓ set_status(InProgress)
//! build("ext_id", "test_message")
//!     ↓ to_json / decode
//! LogEntry (equal field by field)
//! ```

use extlog::{
    builder, decode, global, init, init_with, Level, LogBuilder, LogEntry, LoggingConfig, Status,
    WriterSink,
};
use serde_json::{json, Value};

fn reference_entry() -> LogEntry {
    init_with(LoggingConfig::default());

    let log_builder = builder();
    let base = log_builder.add_workflow_steps(["Base", "Extended"]);
    let extended = base.add_workflow_steps(["Extra"]).set_status(Status::InProgress);
    extended.build("ext_id", "test_message")
}

#[test]
fn test_reference_scenario() {
    let entry = reference_entry();

    assert_eq!(entry.workflow_step(), "Base/Extended/Extra");
    assert_eq!(entry.extension_id(), "ext_id");
    assert_eq!(entry.message(), "test_message");
    assert_eq!(entry.status(), Status::InProgress);
    assert_eq!(entry.level(), Level::Info);
}

#[test]
fn test_environment_does_not_override_explicit_init() {
    std::env::set_var("EXTLOG_LEVEL", "error");
    std::env::set_var("EXTLOG_STATUS", "failed");

    let entry = reference_entry();
    let again = init().unwrap();

    assert!(std::ptr::eq(again, global().unwrap()));
    assert_eq!(again.config(), &LoggingConfig::default());
    assert_eq!(entry.level(), Level::Info);
    assert_eq!(entry.status(), Status::InProgress);
}

#[test]
fn test_reference_scenario_round_trip() {
    let entry = reference_entry();
    let parsed = decode(&entry.to_json()).unwrap();

    assert_eq!(parsed.workflow_step(), entry.workflow_step(), "context is not equal");
    assert_eq!(parsed.extension_id(), entry.extension_id(), "extension ID is not equal");
    assert_eq!(parsed.status(), entry.status(), "status is not equal");
    assert_eq!(parsed.level(), entry.level(), "level is not equal");
}

#[test]
fn test_wire_format() {
    let entry = reference_entry();
    let value: Value = serde_json::from_str(&entry.to_json()).unwrap();

    assert_eq!(
        value,
        json!({
            "WorkflowStep": "Base/Extended/Extra",
            "ExtensionID": "ext_id",
            "Message": "test_message",
            "Status": "InProgress",
            "Level": "Info",
        })
    );
}

#[test]
fn test_branching_builders_are_independent() {
    let base = LogBuilder::new().add_workflow_steps(["Base"]);
    let x = base.add_workflow_steps(["X"]).set_status(Status::Success);
    let y = base.add_workflow_steps(["Y"]).set_status(Status::Failed);

    let base_entry = base.build("ext", "base");
    let x_entry = x.build("ext", "x");
    let y_entry = y.build("ext", "y");

    assert_eq!(base_entry.workflow_step(), "Base");
    assert_eq!(base_entry.status(), Status::InProgress);
    assert_eq!(x_entry.workflow_step(), "Base/X");
    assert_eq!(y_entry.workflow_step(), "Base/Y");
    assert_eq!(x_entry.status(), Status::Success);
    assert_eq!(y_entry.status(), Status::Failed);
}

#[test]
fn test_every_status_and_level_round_trips() {
    let statuses = [Status::InProgress, Status::Success, Status::Failed];
    let levels = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    for status in statuses {
        for level in levels {
            let entry = LogBuilder::new()
                .add_workflow_steps(["Deploy"])
                .set_status(status)
                .set_level(level)
                .build("ext", "msg");
            assert_eq!(decode(&entry.to_json()).unwrap(), entry);
        }
    }
}

#[test]
fn test_sink_output_decodes_line_by_line() {
    let mut sink = WriterSink::new(Vec::new());
    let logging = extlog::Logging::default();
    let steps = logging.builder().add_workflow_steps(["Install"]);

    for message in ["fetching", "unpacking", "done"] {
        logging
            .emit(&mut sink, &steps.clone().build("ext", message))
            .unwrap();
    }

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let messages: Vec<String> = output
        .lines()
        .map(|line| decode(line).unwrap().message().to_string())
        .collect();
    assert_eq!(messages, ["fetching", "unpacking", "done"]);
}

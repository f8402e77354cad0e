#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use gifs::api::{ApiClient, ImportRequest, MediaClient, UploadRequest};
use log::{Level, LevelFilter, Log, Metadata, Record};
use mockito::Server;

/// Keeps every record so tests can look at what the client logged.
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn install() -> &'static CapturingLogger {
    // Only the first test to get here installs it.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    &LOGGER
}

fn warnings_containing(logger: &CapturingLogger, needle: &str) -> Vec<String> {
    logger
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == Level::Warn && message.contains(needle))
        .map(|(_, message)| message.clone())
        .collect()
}

#[test]
fn rejected_upload_body_is_logged_at_warn() {
    let logger = install();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/media/upload")
        .with_status(500)
        .with_body("rate limited")
        .create();

    let client = ApiClient::with_endpoint(server.url(), "key").unwrap();
    let err = client
        .upload(&UploadRequest::new("clip.gif"), &mut &b"GIF89a"[..])
        .unwrap_err();
    mock.assert();

    assert!(!err.to_string().contains("rate limited"));
    let warnings = warnings_containing(logger, "rate limited");
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("500"));
    assert!(warnings[0].contains("/media/upload"));
}

#[test]
fn rejected_import_body_is_logged_at_warn() {
    let logger = install();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/media/import")
        .with_status(422)
        .with_body("source is not reachable")
        .create();

    let client = ApiClient::with_endpoint(server.url(), "key").unwrap();
    client
        .import(&ImportRequest::new("https://example.com/missing.gif"))
        .unwrap_err();
    mock.assert();

    let warnings = warnings_containing(logger, "source is not reachable");
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("422"));
}

#[test]
fn accepted_request_logs_no_warning() {
    let logger = install();

    let mut server = Server::new();
    let mock = server
        .mock("POST", "/media/import")
        .with_status(200)
        .with_body("all good here")
        .create();

    let client = ApiClient::with_endpoint(server.url(), "key").unwrap();
    client
        .import(&ImportRequest::new("https://example.com/fine.gif"))
        .unwrap();
    mock.assert();

    assert!(warnings_containing(logger, "all good here").is_empty());
}

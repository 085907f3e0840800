// Logger test double that keeps every record for inspection.

use crate::modules::calendar::core::ports::{LogFields, Logger};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(&'static str, String)>,
}

impl LogRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    fn push(&self, level: Level, message: &str, fields: &LogFields) {
        if let Ok(mut guard) = self.records.lock() {
            guard.push(LogRecord {
                level,
                message: message.to_string(),
                fields: fields.to_vec(),
            });
        }
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str, fields: &LogFields) {
        self.push(Level::Info, message, fields);
    }

    fn error(&self, message: &str, fields: &LogFields) {
        self.push(Level::Error, message, fields);
    }
}

use std::sync::{Mutex, PoisonError};

use crate::errors::AppError;

/// Receives handler failures before they are turned into responses.
pub trait Diagnostics: Send + Sync {
    fn report(&self, route: &str, request_id: Option<&str>, error: &AppError);
}

/// Writes failures through the `log` facade.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, route: &str, request_id: Option<&str>, error: &AppError) {
        let request_id = request_id.unwrap_or("-");
        if error.is_internal() {
            log::error!("[{}] {} failed: {}", request_id, route, error);
        } else {
            log::debug!("[{}] {} rejected: {}", request_id, route, error);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub route: String,
    pub request_id: Option<String>,
    pub internal: bool,
    pub detail: String,
}

/// Keeps every report in memory.
#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn internal_entries(&self) -> Vec<DiagnosticEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.internal)
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, route: &str, request_id: Option<&str>, error: &AppError) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DiagnosticEntry {
                route: route.to_string(),
                request_id: request_id.map(str::to_string),
                internal: error.is_internal(),
                detail: error.to_string(),
            });
    }
}

//! # Admin log book
//!
//! The system-logs screen shows a list of [`LogEntry`] records kept in storage.
//! The portal has no real backend to log from, so an empty book is filled with
//! generated sample entries spread over the past week, newest first.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use store::json::{read_json, write_json};
use store::{Collection, KeyValueStore, StorageKeys};

use crate::error::Result;

/// Number of entries produced by [`generate_sample_logs`].
pub const SAMPLE_LOG_COUNT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub module: String,
}

const MODULES: &[&str] = &[
    "authentication",
    "dashboard",
    "courses",
    "events",
    "admin",
    "file-upload",
    "notifications",
];
const USERS: &[&str] = &["student1", "faculty1", "admin", "john.doe", "jane.smith"];
const INFO_MESSAGES: &[&str] = &[
    "User logged in successfully",
    "Page loaded",
    "Data fetched successfully",
    "Settings updated",
    "Profile viewed",
    "Document downloaded",
    "Email notification sent",
];
const WARNING_MESSAGES: &[&str] = &[
    "Failed login attempt",
    "Slow response time",
    "Low disk space",
    "Multiple login attempts",
    "Resource usage high",
    "Session about to expire",
];
const ERROR_MESSAGES: &[&str] = &[
    "Database connection failed",
    "API request timeout",
    "File upload failed",
    "Authentication error",
    "Permission denied",
    "Invalid input detected",
];

fn pick<R: Rng>(rng: &mut R, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

/// Generate [`SAMPLE_LOG_COUNT`] entries dated within a week before `now`,
/// sorted newest first. Roughly 70% are info, the rest split between warning
/// and error; about 80% name a user.
pub fn generate_sample_logs<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<LogEntry> {
    let stamp = now.timestamp_millis();
    let mut entries: Vec<LogEntry> = (0..SAMPLE_LOG_COUNT)
        .map(|i| {
            let age = Duration::days(rng.gen_range(0..7))
                + Duration::hours(rng.gen_range(0..24))
                + Duration::minutes(rng.gen_range(0..60));

            let level = if rng.gen_bool(0.7) {
                LogLevel::Info
            } else if rng.gen_bool(0.5) {
                LogLevel::Warning
            } else {
                LogLevel::Error
            };
            let message = match level {
                LogLevel::Info => pick(rng, INFO_MESSAGES),
                LogLevel::Warning => pick(rng, WARNING_MESSAGES),
                LogLevel::Error => pick(rng, ERROR_MESSAGES),
            };
            let module = pick(rng, MODULES);
            let user = rng.gen_bool(0.8).then(|| pick(rng, USERS));

            LogEntry {
                id: format!("log-{stamp}-{i}"),
                timestamp: now - age,
                level,
                message,
                user,
                module,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

/// Entries whose message, module or user contains `term`, ignoring case.
pub fn search_logs(entries: &[LogEntry], term: &str) -> Vec<LogEntry> {
    let term = term.to_lowercase();
    entries
        .iter()
        .filter(|log| {
            log.message.to_lowercase().contains(&term)
                || log.module.to_lowercase().contains(&term)
                || log
                    .user
                    .as_ref()
                    .is_some_and(|u| u.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

#[derive(Clone, Debug)]
pub struct LogBook<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LogBook<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.key(Collection::Logs),
        }
    }

    /// Stored entries, generating and storing a sample set when there are none.
    pub fn load(&self) -> Result<Vec<LogEntry>> {
        match read_json::<Vec<LogEntry>, _>(&self.store, &self.key) {
            Some(entries) if !entries.is_empty() => Ok(entries),
            _ => self.regenerate(&mut rand::thread_rng()),
        }
    }

    /// Replace the stored entries with a fresh sample set.
    pub fn regenerate<R: Rng>(&self, rng: &mut R) -> Result<Vec<LogEntry>> {
        let entries = generate_sample_logs(rng, Utc::now());
        write_json(&self.store, &self.key, &entries)?;
        tracing::debug!(count = entries.len(), "sample logs generated");
        Ok(entries)
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}

use serde::{Deserialize, Serialize};

/// Top-level dashboard settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardSettings {
    #[serde(default)]
    pub security: SecuritySettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Edit-mode credential and lockout policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SecuritySettings {
    pub edit_secret: String,
    pub max_attempts: u32,
    pub lockout_minutes: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            edit_secret: "novanav".to_string(),
            max_attempts: 5,
            lockout_minutes: 30,
        }
    }
}

impl SecuritySettings {
    pub fn lockout_duration_ms(&self) -> i64 {
        i64::from(self.lockout_minutes) * 60 * 1000
    }
}

/// Where the key/value store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// `None` selects `novanav.db` in the platform data directory.
    pub database_path: Option<String>,
}

/// Log filter used when `RUST_LOG` is unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

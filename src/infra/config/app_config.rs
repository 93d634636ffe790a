use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub replies: ReplyConfig,
    pub shell: ShellConfig,
    /// Replaces the built-in seed contacts when set.
    pub contacts: Option<Vec<ContactConfig>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyConfig {
    pub delay_ms: u64,
    pub text: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1_000,
            text: "Auto-reply: Got your message!".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    pub width: usize,
    pub tick_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            width: 72,
            tick_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    pub id: String,
    pub name: String,
    pub photo: String,
}

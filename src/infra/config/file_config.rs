use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ContactConfig, LogConfig, ReplyConfig, ShellConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub replies: Option<FileReplyConfig>,
    pub shell: Option<FileShellConfig>,
    pub contacts: Option<Vec<ContactConfig>>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(replies) = self.replies {
            replies.merge_into(&mut config.replies);
        }

        if let Some(shell) = self.shell {
            shell.merge_into(&mut config.shell);
        }

        if let Some(contacts) = self.contacts {
            config.contacts = Some(contacts);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileReplyConfig {
    pub delay_ms: Option<u64>,
    pub text: Option<String>,
}

impl FileReplyConfig {
    fn merge_into(self, config: &mut ReplyConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        if let Some(text) = self.text {
            config.text = text;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileShellConfig {
    pub width: Option<usize>,
    pub tick_ms: Option<u64>,
}

impl FileShellConfig {
    fn merge_into(self, config: &mut ShellConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }

        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
    }
}

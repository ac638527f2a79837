//! macOS TTS backend using the `say` command
//!
//! `say` ships with every macOS installation and takes the text to
//! speak as a plain argument, so this backend is a single blocking
//! invocation per announcement.

use std::process::Command;

use crate::exec;
use crate::speech::Speaker;
use crate::Result;
use log::debug;

/// macOS `say` backend
pub struct SaySpeaker {
    /// Path to the `say` binary
    say_path: String,
}

impl SaySpeaker {
    pub fn new() -> Self {
        Self {
            say_path: "say".to_string(),
        }
    }

    #[cfg(test)]
    fn with_command(say_path: &str) -> Self {
        Self {
            say_path: say_path.to_string(),
        }
    }
}

impl Default for SaySpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for SaySpeaker {
    fn speak(&self, message: &str) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        debug!("Speaking via say: {}", message);
        let mut cmd = Command::new(&self.say_path);
        cmd.arg(message);
        exec::run(&mut cmd)?.into_result(&self.say_path)
    }

    fn name(&self) -> &'static str {
        "say"
    }
}

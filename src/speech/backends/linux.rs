//! Linux TTS backend using espeak with a festival fallback
//!
//! espeak takes the message as an argument. When the espeak binary is
//! absent (as opposed to present but failing), the message is piped
//! into `festival --tts` instead. A failing espeak does not engage
//! the fallback.

use std::process::Command;

use crate::exec::{self, Invocation};
use crate::speech::Speaker;
use crate::Result;
use log::{debug, info};

/// Linux espeak backend with festival fallback
pub struct EspeakSpeaker {
    /// Path to the espeak binary
    espeak_path: String,

    /// Fallback argv; the message is fed through stdin
    fallback: Vec<String>,
}

impl EspeakSpeaker {
    pub fn new() -> Self {
        Self {
            espeak_path: "espeak".to_string(),
            fallback: vec!["festival".to_string(), "--tts".to_string()],
        }
    }

    #[cfg(test)]
    fn with_commands(espeak_path: &str, fallback: &[&str]) -> Self {
        Self {
            espeak_path: espeak_path.to_string(),
            fallback: fallback.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Pipe the message into the fallback reader
    fn speak_fallback(&self, message: &str) -> Result<()> {
        let program = &self.fallback[0];
        info!("{} not found, falling back to {}", self.espeak_path, program);

        let mut cmd = Command::new(program);
        cmd.args(&self.fallback[1..]);
        exec::run_with_input(&mut cmd, message)?.into_result(program)
    }
}

impl Default for EspeakSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for EspeakSpeaker {
    fn speak(&self, message: &str) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        debug!("Speaking via espeak: {}", message);
        let mut cmd = Command::new(&self.espeak_path);
        cmd.arg(message);

        match exec::run(&mut cmd)? {
            Invocation::NotFound => self.speak_fallback(message),
            outcome => outcome.into_result(&self.espeak_path),
        }
    }

    fn name(&self) -> &'static str {
        "espeak"
    }
}

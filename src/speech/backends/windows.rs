//! Windows TTS backend using SAPI (System.Speech.Synthesis)
//!
//! Speaks through PowerShell loading the System.Speech assembly. The
//! script text is a fixed constant; the message reaches it through an
//! environment variable, never by splicing into the script.

use std::process::Command;

use crate::exec;
use crate::speech::Speaker;
use crate::Result;
use log::debug;

/// Environment variable the speech script reads its text from
const MESSAGE_VAR: &str = "ANNOUNCER_MESSAGE";

/// PowerShell script that speaks the contents of ANNOUNCER_MESSAGE
const SPEAK_SCRIPT: &str = r#"
Add-Type -AssemblyName System.Speech
$synth = New-Object System.Speech.Synthesis.SpeechSynthesizer
$synth.Speak($env:ANNOUNCER_MESSAGE)
"#;

/// Windows SAPI backend
pub struct SapiSpeaker {
    /// Path to powershell.exe
    powershell_path: String,
}

impl SapiSpeaker {
    pub fn new() -> Self {
        Self {
            powershell_path: "powershell".to_string(),
        }
    }

    #[cfg(test)]
    fn with_command(powershell_path: &str) -> Self {
        Self {
            powershell_path: powershell_path.to_string(),
        }
    }
}

impl Default for SapiSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for SapiSpeaker {
    fn speak(&self, message: &str) -> Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        debug!("Speaking via SAPI: {}", message);
        let mut cmd = Command::new(&self.powershell_path);
        cmd.arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(SPEAK_SCRIPT)
            .env(MESSAGE_VAR, message);
        exec::run(&mut cmd)?.into_result(&self.powershell_path)
    }

    fn name(&self) -> &'static str {
        "sapi"
    }
}

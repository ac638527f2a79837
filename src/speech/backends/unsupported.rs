//! Reporting backend for unrecognized platforms
//!
//! Spawns nothing. The announcement is printed so the text is not
//! lost on systems with no known speech command.

use crate::speech::Speaker;
use crate::Result;

/// Backend for platforms with no speech mechanism
pub struct UnsupportedSpeaker {
    /// Raw OS identifier, for the report
    platform: String,
}

impl UnsupportedSpeaker {
    pub fn new(platform: String) -> Self {
        Self { platform }
    }

    fn report(&self, message: &str) -> String {
        format!(
            "Unsupported system: {}\nMessage: {}\n",
            self.platform, message
        )
    }
}

impl Speaker for UnsupportedSpeaker {
    fn speak(&self, message: &str) -> Result<()> {
        print!("{}", self.report(message));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "unsupported"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_names_platform_and_message() {
        let speaker = UnsupportedSpeaker::new("freebsd".to_string());
        let report = speaker.report("Hi");
        assert!(report.contains("freebsd"));
        assert!(report.contains("Hi"));
    }

    #[test]
    fn test_speak_always_succeeds() {
        let speaker = UnsupportedSpeaker::new("freebsd".to_string());
        assert!(speaker.speak("Hi").is_ok());
    }
}

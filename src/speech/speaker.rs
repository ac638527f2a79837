//! Speaker abstraction
//!
//! Provides a unified interface over the platform speech mechanisms.
//! The announcer calls `speak` once and reports whatever comes back.

use crate::platform::Platform;
use crate::Result;
use log::debug;

/// A platform speech mechanism
///
/// Implementations block until the underlying speech command has run
/// to completion.
pub trait Speaker {
    /// Speak a message out loud
    fn speak(&self, message: &str) -> Result<()>;

    /// Backend name, for logging
    fn name(&self) -> &'static str;
}

/// Create the speaker for a platform
///
/// Total over the platform set: unrecognized systems get a speaker
/// that reports instead of speaking.
pub fn create_speaker(platform: &Platform) -> Box<dyn Speaker> {
    let speaker: Box<dyn Speaker> = match platform {
        Platform::MacOs => Box::new(super::backends::macos::SaySpeaker::new()),
        Platform::Windows => Box::new(super::backends::windows::SapiSpeaker::new()),
        Platform::Linux => Box::new(super::backends::linux::EspeakSpeaker::new()),
        Platform::Other(name) => {
            Box::new(super::backends::unsupported::UnsupportedSpeaker::new(name.clone()))
        }
    };
    debug!("Selected {} backend for {}", speaker.name(), platform);
    speaker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        assert_eq!(create_speaker(&Platform::MacOs).name(), "say");
        assert_eq!(create_speaker(&Platform::Windows).name(), "sapi");
        assert_eq!(create_speaker(&Platform::Linux).name(), "espeak");
        let other = Platform::Other("freebsd".to_string());
        assert_eq!(create_speaker(&other).name(), "unsupported");
    }
}

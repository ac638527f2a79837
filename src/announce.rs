//! Top-level announcement entry point
//!
//! `announce` owns the never-fails contract: whatever goes wrong
//! underneath, the message is echoed to stdout and control returns
//! normally to the caller.

use crate::error::AnnounceError;
use crate::platform::Platform;
use crate::speech::create_speaker;
use log::debug;

/// Message spoken when the command line supplies none
pub const DEFAULT_MESSAGE: &str = "Development milestone completed!";

/// Join positional arguments into the announcement message
///
/// An empty argument list yields [`DEFAULT_MESSAGE`].
pub fn message_from_args<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let words: Vec<String> = args.into_iter().collect();
    if words.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        words.join(" ")
    }
}

/// Announce a message on the current platform
pub fn announce(message: &str) {
    announce_on(&Platform::detect(), message);
}

/// Announce a message on a specific platform
///
/// Errors never propagate: every failure is reported on stdout
/// together with the original message.
pub fn announce_on(platform: &Platform, message: &str) {
    let speaker = create_speaker(platform);
    debug!("Announcing on {}: {}", platform, message);

    if let Err(e) = speaker.speak(message) {
        print!("{}", failure_report(&e, message));
    }
}

/// Render the diagnostic for a failed announcement
///
/// A command that ran and failed gets the text-to-speech headline;
/// everything else (missing binary with no fallback, I/O trouble)
/// gets the generic one.
fn failure_report(error: &AnnounceError, message: &str) -> String {
    let headline = match error {
        AnnounceError::CommandFailed { .. } => {
            format!("Error running text-to-speech: {}", error)
        }
        _ => format!("Unexpected error: {}", error),
    };
    format!("{}\nMessage: {}\n", headline, message)
}

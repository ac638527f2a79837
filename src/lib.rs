//! Announcer - milestone announcements over OS text-to-speech
//!
//! A one-shot command-line utility that speaks a message through the
//! host operating system's speech facility (`say` on macOS, SAPI via
//! PowerShell on Windows, `espeak`/`festival` on Linux).

pub mod announce;
pub mod error;
pub mod exec;
pub mod platform;
pub mod speech;

pub use announce::{announce, announce_on, message_from_args, DEFAULT_MESSAGE};
pub use error::{AnnounceError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "announcer";

//! Announcer main entry point
//!
//! Joins the positional arguments into one message and speaks it on
//! the platform the program is running on. With no arguments, speaks
//! the default milestone message.

use announcer::{announce, message_from_args};
use log::debug;

fn main() {
    // Minimal logging to stderr, only errors
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .init();

    let message = message_from_args(std::env::args().skip(1));
    debug!(
        "{} {} announcing: {}",
        announcer::APP_NAME,
        announcer::VERSION,
        message
    );

    announce(&message);
}

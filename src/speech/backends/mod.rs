//! Platform-specific speech backends

// macOS `say` command
pub mod macos;

// Windows SAPI via PowerShell
pub mod windows;

// Linux espeak with festival fallback
pub mod linux;

// Reporting backend for unrecognized systems
pub mod unsupported;

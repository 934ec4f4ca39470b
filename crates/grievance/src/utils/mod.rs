//! Utility modules for common patterns.

pub mod signal_ext;

pub use signal_ext::SignalExt;

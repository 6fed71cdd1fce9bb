// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording localization and persistence problems.
//!
//! Missing translation keys, malformed attribute directives, and storage
//! failures never interrupt a kiosk session; they are recorded here instead.
//! Events land in a memory-bounded circular buffer so unattended sessions
//! cannot grow without bound, and each event is echoed to stderr for anyone
//! watching the console.

mod buffer;
mod events;
mod log;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticKind};
pub use log::{DiagnosticLog, DEFAULT_LOG_CAPACITY};

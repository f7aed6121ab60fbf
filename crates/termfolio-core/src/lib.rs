//! Session state machine for termfolio.
//!
//! `session` holds the state aggregate and its pure reducer, `edit` the
//! edit-line transitions built on it, `boot` the startup sequence, and
//! `terminal` the controller that ties them to the command registry,
//! preferences and sound.

pub mod boot;
pub mod edit;
pub mod session;
pub mod terminal;

pub use boot::{BOOT_MESSAGES, BootSequence, BootStep};
pub use session::{Action, HistoryEntry, SessionState, reduce};
pub use terminal::{INTERRUPT_MARKER, Signal, Terminal};

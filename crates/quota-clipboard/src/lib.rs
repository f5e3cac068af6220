//! Quota table clipboard boundary.
//!
//! Structured clipboard writes are not universally available, so one copy
//! action runs a two-tier chain: a multi-MIME system clipboard write
//! (HTML plus plain text atomically), then a pipe into the platform copy
//! utility. A failed copy is reported as an outcome value; nothing here
//! panics or returns an error to the caller.

pub mod backend;
pub mod error;
pub mod payload;
pub mod writer;

pub use backend::{ClipboardBackend, CommandClipboard, SystemClipboard};
pub use error::ClipboardError;
pub use payload::ClipboardPayload;
pub use writer::{CopyOutcome, Tier, copy_payload, copy_with_backends};

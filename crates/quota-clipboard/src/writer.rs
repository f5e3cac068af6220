use tracing::{debug, warn};

use crate::backend::{ClipboardBackend, CommandClipboard, SystemClipboard};
use crate::payload::ClipboardPayload;

/// Which write path carried the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Structured multi-MIME system clipboard write.
    Structured,
    /// Plain-text pipe into a platform copy utility.
    Command,
}

/// Result of one copy action. Total failure is an outcome, not an error:
/// the caller simply does not show a "copied" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(Tier),
    Unavailable,
}

impl CopyOutcome {
    pub fn is_copied(self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Tries each backend in order until one accepts the payload.
///
/// Failures are logged and swallowed; this function never propagates an
/// error past the caller.
pub fn copy_with_backends(
    payload: &ClipboardPayload,
    backends: &mut [&mut dyn ClipboardBackend],
) -> CopyOutcome {
    for backend in backends.iter_mut() {
        let tier = backend.tier();
        match backend.write(payload) {
            Ok(()) => {
                debug!(?tier, "clipboard write succeeded");
                return CopyOutcome::Copied(tier);
            }
            Err(err) => {
                warn!(?tier, error = %err, "clipboard tier failed, trying next");
            }
        }
    }
    warn!("all clipboard tiers failed");
    CopyOutcome::Unavailable
}

/// Copies with the default tier order: structured write first, command
/// utility fallback second.
pub fn copy_payload(payload: &ClipboardPayload) -> CopyOutcome {
    let mut system = SystemClipboard;
    let mut command = CommandClipboard;
    copy_with_backends(payload, &mut [&mut system, &mut command])
}

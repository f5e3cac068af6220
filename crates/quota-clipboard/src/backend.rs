use std::io::Write;
use std::process::{Command, Stdio};

use arboard::Clipboard;

use crate::error::ClipboardError;
use crate::payload::ClipboardPayload;
use crate::writer::Tier;

/// One way of getting a payload onto the platform clipboard.
///
/// The transform pipeline never talks to a clipboard directly; it hands a
/// payload to whatever backends the caller assembled. Tests substitute
/// scripted implementations.
pub trait ClipboardBackend {
    fn tier(&self) -> Tier;

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;
}

/// Structured multi-MIME write through the system clipboard service.
///
/// HTML and plain text land in one atomic operation, so rich-text and
/// spreadsheet paste targets each see their preferred representation.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
    fn tier(&self) -> Tier {
        Tier::Structured
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_html(payload.html.as_str(), Some(payload.text.as_str()))
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

struct Utility {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const UTILITIES: &[Utility] = &[Utility {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const UTILITIES: &[Utility] = &[Utility {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const UTILITIES: &[Utility] = &[
    Utility {
        program: "wl-copy",
        args: &[],
    },
    Utility {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
];

/// Fallback tier: pipe the plain-text payload into the platform's copy
/// utility. Single representation only, but it works where no clipboard
/// service is reachable from this process.
pub struct CommandClipboard;

impl CommandClipboard {
    fn write_through(utility: &Utility, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(utility.program)
            .args(utility.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|err| ClipboardError::Write(err.to_string()))?;
        }
        let status = child
            .wait()
            .map_err(|err| ClipboardError::Write(err.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Write(format!(
                "{} exited with {status}",
                utility.program
            )))
        }
    }
}

impl ClipboardBackend for CommandClipboard {
    fn tier(&self) -> Tier {
        Tier::Command
    }

    fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let mut last = ClipboardError::Unavailable("no clipboard utility found".to_string());
        for utility in UTILITIES {
            match Self::write_through(utility, &payload.text) {
                Ok(()) => return Ok(()),
                Err(err) => last = err,
            }
        }
        Err(last)
    }
}

//! Clipboard export.
//!
//! The system clipboard is only available with the `clipboard` feature and a
//! running display server. Callers report [`ScaffoldError::Clipboard`] to the
//! user instead of aborting.
//!
//! On X11 the copied text is served by the process that owns the selection,
//! so the handle is opened on first copy and kept for the rest of the session.

use crate::error::{Result, ScaffoldError};

/// Destination for copied templates.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// An open connection to a clipboard.
pub trait ClipboardHandle {
    fn put_text(&mut self, text: &str) -> Result<()>;
}

/// Opens a handle with `open` on first copy and reuses it afterwards.
///
/// A failed open is not cached; the next copy tries again.
pub struct SessionClipboard<H, F> {
    handle: Option<H>,
    open: F,
}

impl<H, F> SessionClipboard<H, F>
where
    H: ClipboardHandle,
    F: FnMut() -> Result<H>,
{
    pub fn new(open: F) -> Self {
        Self { handle: None, open }
    }
}

impl<H, F> Clipboard for SessionClipboard<H, F>
where
    H: ClipboardHandle,
    F: FnMut() -> Result<H>,
{
    fn copy(&mut self, text: &str) -> Result<()> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => (self.open)()?,
        };
        self.handle.insert(handle).put_text(text)?;
        tracing::debug!(bytes = text.len(), "copied template to clipboard");
        Ok(())
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardHandle for arboard::Clipboard {
    fn put_text(&mut self, text: &str) -> Result<()> {
        self.set_text(text.to_string())
            .map_err(|e| ScaffoldError::Clipboard(e.to_string()))
    }
}

#[cfg(feature = "clipboard")]
fn open_system_clipboard() -> Result<arboard::Clipboard> {
    arboard::Clipboard::new().map_err(|e| ScaffoldError::Clipboard(e.to_string()))
}

/// The operating system clipboard, held open for the session.
pub struct SystemClipboard {
    #[cfg(feature = "clipboard")]
    session: SessionClipboard<arboard::Clipboard, fn() -> Result<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "clipboard")]
            session: SessionClipboard::new(open_system_clipboard as fn() -> Result<_>),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn copy(&mut self, text: &str) -> Result<()> {
        self.session.copy(text)
    }

    #[cfg(not(feature = "clipboard"))]
    fn copy(&mut self, _text: &str) -> Result<()> {
        Err(ScaffoldError::Clipboard(
            "built without the `clipboard` feature".to_string(),
        ))
    }
}

//! Export targets for rendered templates: files and the system clipboard.

mod clipboard;
mod file;

pub use clipboard::{Clipboard, ClipboardHandle, SessionClipboard, SystemClipboard};
pub use file::save_template;

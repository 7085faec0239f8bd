//! System clipboard backed by `arboard`

use honeybee_gallery::{Clipboard, GalleryError};

/// The desktop clipboard; opened fresh for every write
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> honeybee_gallery::Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| GalleryError::Clipboard(format!("failed to access clipboard: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| GalleryError::Clipboard(format!("failed to copy: {}", e)))
    }
}

//! Clipped text helpers
//!
//! Pulls the characters of a MuPDF page that fall inside a rectangle.

use mupdf::{Page, TextPageOptions};

use crate::document::{Rect, Result};

/// Text of `page` whose characters lie inside `clip`.
///
/// `clip` is in MuPDF page space (origin top-left, y down). A character
/// belongs to the clip when the centre of its quad does. Each text line with
/// at least one visible character yields one output line.
pub fn clipped_text(page: &Page, clip: &Rect) -> Result<String> {
    let text_page = page.to_text_page(TextPageOptions::empty())?;
    let mut lines = Vec::new();

    for block in text_page.blocks() {
        for line in block.lines() {
            let mut line_text = String::new();

            for ch in line.chars() {
                if let Some(c) = ch.char() {
                    let quad = ch.quad();
                    let center_x = (quad.ul.x + quad.ur.x + quad.ll.x + quad.lr.x) / 4.0;
                    let center_y = (quad.ul.y + quad.ur.y + quad.ll.y + quad.lr.y) / 4.0;

                    if clip.contains(center_x, center_y) {
                        line_text.push(c);
                    }
                }
            }

            if !line_text.trim().is_empty() {
                lines.push(line_text);
            }
        }
    }

    Ok(lines.join("\n"))
}

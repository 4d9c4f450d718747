//! Annotation dictionaries
//!
//! Reads a page's `/Annots` array through `lopdf`. Entries that are not
//! dictionaries, lack a `/Subtype` name or carry an unusable `/Rect` are
//! skipped rather than failing the page.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::document::{AnnotationKind, DocumentError, PageAnnotation, Rect, Result};

/// US Letter, used when no page box is found anywhere in the page tree
const DEFAULT_PAGE_BOX: Rect = Rect {
    x0: 0.0,
    y0: 0.0,
    x1: 612.0,
    y1: 792.0,
};

/// Follow an indirect reference, if the object is one
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn page_dict(doc: &Document, page_id: ObjectId) -> Result<&Dictionary> {
    doc.get_object(page_id)
        .and_then(|o| o.as_dict())
        .map_err(|e| DocumentError::ParseError(format!("failed to get page dictionary: {}", e)))
}

/// List the annotations of one page in `/Annots` order
pub fn read_page_annotations(doc: &Document, page_id: ObjectId) -> Result<Vec<PageAnnotation>> {
    let page = page_dict(doc, page_id)?;

    let annots = match page.get(b"Annots") {
        Ok(obj) => obj,
        Err(_) => return Ok(Vec::new()),
    };
    let annots = resolve(doc, annots)
        .ok_or_else(|| DocumentError::ParseError("failed to resolve /Annots ref".into()))?
        .as_array()
        .map_err(|e| DocumentError::ParseError(format!("/Annots is not an array: {}", e)))?;

    let mut annotations = Vec::with_capacity(annots.len());

    for entry in annots {
        let dict = match resolve(doc, entry).and_then(|o| o.as_dict().ok()) {
            Some(dict) => dict,
            None => continue,
        };

        let kind = match dict.get(b"Subtype") {
            Ok(Object::Name(name)) => AnnotationKind::from_subtype(&String::from_utf8_lossy(name)),
            _ => continue,
        };

        let rect = match dict
            .get(b"Rect")
            .ok()
            .and_then(|o| resolve(doc, o))
            .and_then(|o| o.as_array().ok())
            .and_then(|arr| rect_from_array(arr))
        {
            Some(rect) => rect,
            None => continue,
        };

        let note = string_entry(doc, dict, b"Contents")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        annotations.push(PageAnnotation { kind, rect, note });
    }

    Ok(annotations)
}

/// Visible page box: `/CropBox`, else `/MediaBox`, both inheritable
pub fn page_box(doc: &Document, page_id: ObjectId) -> Rect {
    inherited(doc, page_id, b"CropBox")
        .or_else(|| inherited(doc, page_id, b"MediaBox"))
        .and_then(|o| o.as_array().ok())
        .and_then(|arr| rect_from_array(arr))
        .unwrap_or(DEFAULT_PAGE_BOX)
}

/// Page `/Rotate` (inheritable) snapped the way MuPDF does: 0, 90, 180 or 270
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> u16 {
    let raw = match inherited(doc, page_id, b"Rotate") {
        Some(Object::Integer(i)) => *i,
        Some(Object::Real(f)) => *f as i64,
        _ => 0,
    };
    snap_rotation(raw)
}

fn snap_rotation(raw: i64) -> u16 {
    let degrees = raw.rem_euclid(360);
    (((degrees + 45) / 90 * 90) % 360) as u16
}

/// Look a key up on the page, walking `/Parent` links up the page tree
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current = doc.get_object(page_id).ok()?.as_dict().ok()?;
    // Page trees are shallow; the bound only guards against /Parent cycles.
    for _ in 0..64 {
        if let Ok(value) = current.get(key) {
            return resolve(doc, value);
        }
        current = match current.get(b"Parent") {
            Ok(Object::Reference(id)) => doc.get_object(*id).ok()?.as_dict().ok()?,
            _ => return None,
        };
    }
    None
}

fn number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(f) => Some(*f as f32),
        _ => None,
    }
}

fn rect_from_array(arr: &[Object]) -> Option<Rect> {
    if arr.len() != 4 {
        return None;
    }
    Some(Rect::new(
        number(&arr[0])?,
        number(&arr[1])?,
        number(&arr[2])?,
        number(&arr[3])?,
    ))
}

fn string_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    match resolve(doc, dict.get(key).ok()?)? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

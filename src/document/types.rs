//! Core document types
//!
//! Annotation and geometry types shared by the PDF backend and the
//! highlight extractor.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by two corners.
///
/// Coordinates are in PDF user space (origin bottom-left, y up) unless a
/// function says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    /// Build a rectangle from any two opposite corners
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Whether the point lies inside the rectangle (edges included)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Map a user-space rectangle into the top-left based page space MuPDF
    /// reports character quads in.
    ///
    /// `page_box` is the visible page box and `rotation` the page's
    /// `/Rotate`, already snapped to 0, 90, 180 or 270. MuPDF applies the
    /// rotation clockwise before moving the rotated box to the origin.
    pub fn to_page_space(&self, page_box: &Rect, rotation: u16) -> Rect {
        let b = page_box;
        match rotation {
            90 => Rect::new(self.y0 - b.y0, self.x0 - b.x0, self.y1 - b.y0, self.x1 - b.x0),
            180 => Rect::new(b.x1 - self.x1, self.y0 - b.y0, b.x1 - self.x0, self.y1 - b.y0),
            270 => Rect::new(b.y1 - self.y1, b.x1 - self.x1, b.y1 - self.y0, b.x1 - self.x0),
            _ => Rect::new(self.x0 - b.x0, b.y1 - self.y1, self.x1 - b.x0, b.y1 - self.y0),
        }
    }
}

/// PDF annotation subtype.
///
/// Numeric codes follow MuPDF's `pdf_annot_type` numbering, which is what
/// PDF tooling usually reports (highlight = 8, underline = 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Text,
    Link,
    FreeText,
    Line,
    Square,
    Circle,
    Polygon,
    PolyLine,
    Highlight,
    Underline,
    Squiggly,
    StrikeOut,
    Redact,
    Stamp,
    Caret,
    Ink,
    Popup,
    FileAttachment,
    Sound,
    Movie,
    RichMedia,
    Widget,
    Screen,
    PrinterMark,
    TrapNet,
    Watermark,
    ThreeD,
    Projection,
    Unknown,
}

impl AnnotationKind {
    /// Map a `/Subtype` name to a kind
    pub fn from_subtype(subtype: &str) -> Self {
        match subtype {
            "Text" => Self::Text,
            "Link" => Self::Link,
            "FreeText" => Self::FreeText,
            "Line" => Self::Line,
            "Square" => Self::Square,
            "Circle" => Self::Circle,
            "Polygon" => Self::Polygon,
            "PolyLine" => Self::PolyLine,
            "Highlight" => Self::Highlight,
            "Underline" => Self::Underline,
            "Squiggly" => Self::Squiggly,
            "StrikeOut" => Self::StrikeOut,
            "Redact" => Self::Redact,
            "Stamp" => Self::Stamp,
            "Caret" => Self::Caret,
            "Ink" => Self::Ink,
            "Popup" => Self::Popup,
            "FileAttachment" => Self::FileAttachment,
            "Sound" => Self::Sound,
            "Movie" => Self::Movie,
            "RichMedia" => Self::RichMedia,
            "Widget" => Self::Widget,
            "Screen" => Self::Screen,
            "PrinterMark" => Self::PrinterMark,
            "TrapNet" => Self::TrapNet,
            "Watermark" => Self::Watermark,
            "3D" => Self::ThreeD,
            "Projection" => Self::Projection,
            _ => Self::Unknown,
        }
    }

    /// Numeric type code, `-1` for unknown subtypes
    pub fn type_code(self) -> i32 {
        match self {
            Self::Text => 0,
            Self::Link => 1,
            Self::FreeText => 2,
            Self::Line => 3,
            Self::Square => 4,
            Self::Circle => 5,
            Self::Polygon => 6,
            Self::PolyLine => 7,
            Self::Highlight => 8,
            Self::Underline => 9,
            Self::Squiggly => 10,
            Self::StrikeOut => 11,
            Self::Redact => 12,
            Self::Stamp => 13,
            Self::Caret => 14,
            Self::Ink => 15,
            Self::Popup => 16,
            Self::FileAttachment => 17,
            Self::Sound => 18,
            Self::Movie => 19,
            Self::RichMedia => 20,
            Self::Widget => 21,
            Self::Screen => 22,
            Self::PrinterMark => 23,
            Self::TrapNet => 24,
            Self::Watermark => 25,
            Self::ThreeD => 26,
            Self::Projection => 27,
            Self::Unknown => -1,
        }
    }
}

/// One annotation as listed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnnotation {
    pub kind: AnnotationKind,
    /// `/Rect` in PDF user space
    pub rect: Rect,
    /// `/Contents` popup text, if any
    pub note: Option<String>,
}

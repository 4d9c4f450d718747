//! Shared fixtures for integration tests

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// One annotation to place on a fixture page
pub struct FixtureAnnot {
    pub subtype: &'static str,
    pub rect: [i64; 4],
    pub contents: Option<&'static str>,
}

impl FixtureAnnot {
    pub fn new(subtype: &'static str, rect: [i64; 4]) -> Self {
        Self {
            subtype,
            rect,
            contents: None,
        }
    }

    pub fn with_note(mut self, note: &'static str) -> Self {
        self.contents = Some(note);
        self
    }
}

/// One Letter page with a single line of Helvetica 12pt at (100, 700)
pub struct FixturePage {
    pub text: &'static str,
    pub rotate: Option<i64>,
    pub annots: Vec<FixtureAnnot>,
}

impl FixturePage {
    pub fn new(text: &'static str, annots: Vec<FixtureAnnot>) -> Self {
        Self {
            text,
            rotate: None,
            annots,
        }
    }

    pub fn rotated(mut self, degrees: i64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Build a single-page PDF with `text` and the given annotations
pub fn pdf_with_annotations(text: &'static str, annots: Vec<FixtureAnnot>) -> Vec<u8> {
    pdf_with_pages(vec![FixturePage::new(text, annots)])
}

/// Build a PDF with one page per entry, in order
pub fn pdf_with_pages(pages: Vec<FixturePage>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|page| add_page(&mut doc, pages_id, resources_id, page).into())
        .collect();
    let count = kids.len() as i64;

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

fn add_page(doc: &mut Document, pages_id: ObjectId, resources_id: ObjectId, page: &FixturePage) -> ObjectId {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![100.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(page.text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let annot_refs: Vec<Object> = page
        .annots
        .iter()
        .map(|annot| {
            let mut dict = dictionary! {
                "Type" => "Annot",
                "Subtype" => annot.subtype,
                "Rect" => annot.rect.iter().map(|v| Object::Integer(*v)).collect::<Vec<_>>(),
            };
            if let Some(note) = annot.contents {
                dict.set("Contents", Object::string_literal(note));
            }
            doc.add_object(dict).into()
        })
        .collect();

    let mut page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "Annots" => annot_refs,
    };
    if let Some(degrees) = page.rotate {
        page_dict.set("Rotate", Object::Integer(degrees));
    }
    doc.add_object(page_dict)
}

/// Rectangle covering the fixture text line
pub const TEXT_RECT: [i64; 4] = [90, 690, 300, 715];

/// Rectangle well away from any text
pub const EMPTY_RECT: [i64; 4] = [90, 100, 300, 120];

//! HTML report rendering
//!
//! Produces one self-contained document with embedded CSS. Rendering is a
//! pure function of the [`Report`]; the same report always yields the same
//! bytes.

use std::fmt::Write;

use html_escape::encode_text;

use super::types::{PageGroup, Report, ReportEntry};

pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_HIGHLIGHTS: &str = "No highlights found in this document.";

const REPORT_CSS: &str = r#"
        body { font-family: 'Charter', 'Georgia', serif; background: #fdfdfb; color: #222; max-width: 800px; margin: 50px auto; line-height: 1.7; padding: 20px; }
        .header { text-align: center; margin-bottom: 60px; border-bottom: 2px solid #1a73e8; padding-bottom: 20px; }
        .summary { background: #fff9e6; padding: 25px; border-radius: 12px; border-left: 6px solid #f1c40f; margin-bottom: 50px; font-style: italic; box-shadow: 0 4px 6px rgba(0,0,0,0.05); }
        .page-block { margin-bottom: 45px; }
        .page-num { font-size: 13px; font-weight: bold; color: #1a73e8; letter-spacing: 2px; margin-bottom: 15px; border-bottom: 1px solid #eee; }
        .highlight-box { background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.03); margin-bottom: 15px; border-left: 4px solid #1a73e8; }
        .type-label { font-size: 11px; font-weight: bold; letter-spacing: 1px; }
        .comment { color: #555; font-size: 0.95em; display: block; margin-top: 8px; font-style: normal; font-family: sans-serif; background: #f9f9f9; padding: 8px; border-radius: 4px; }
"#;

impl Report {
    /// Render the report as a standalone HTML document
    pub fn to_html(&self) -> String {
        let source = encode_text(&self.source_name);
        let mut out = String::with_capacity(4096 + self.entry_count() * 512);

        // Writing into a String cannot fail
        out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "    <title>Reading Insights - {source}</title>");
        let _ = writeln!(out, "    <style>{REPORT_CSS}    </style>");
        out.push_str("</head>\n<body>\n");

        out.push_str("    <div class=\"header\">\n        <h1>Reading Insights</h1>\n");
        let _ = writeln!(out, "        <p>Source: {source}</p>");
        out.push_str("    </div>\n");

        let summary = if self.summary.trim().is_empty() {
            NO_SUMMARY.into()
        } else {
            encode_text(self.summary.trim())
        };
        let _ = writeln!(
            out,
            "    <div class=\"summary\"><strong>✨ AI Executive Summary:</strong><br>{summary}</div>"
        );

        if self.pages.iter().all(|p| p.entries.is_empty()) {
            let _ = writeln!(out, "    <p>{NO_HIGHLIGHTS}</p>");
        } else {
            for group in self.pages.iter().filter(|p| !p.entries.is_empty()) {
                render_page(&mut out, group);
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

fn render_page(out: &mut String, group: &PageGroup) {
    out.push_str("    <div class=\"page-block\">\n");
    let _ = writeln!(out, "        <div class=\"page-num\">PAGE {}</div>", group.page);
    for entry in &group.entries {
        render_entry(out, entry);
    }
    out.push_str("    </div>\n");
}

fn render_entry(out: &mut String, entry: &ReportEntry) {
    let color = entry.color();
    let _ = writeln!(
        out,
        "        <div class=\"highlight-box\" style=\"border-left-color: {color}\">"
    );
    let _ = writeln!(
        out,
        "            <span class=\"type-label\" style=\"color: {color}\">{}</span><br>",
        entry.label()
    );
    let _ = writeln!(out, "            {}", encode_text(&entry.text));
    if let Some(note) = entry.visible_note() {
        let _ = writeln!(
            out,
            "            <div class=\"comment\">📝 Note: {}</div>",
            encode_text(note)
        );
    }
    out.push_str("        </div>\n");
}

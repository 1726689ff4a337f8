//! Word-processor container extraction.
//!
//! A `.docx` file is a ZIP archive whose main document part lives at
//! `word/document.xml`; visible text sits in `<w:t>` runs grouped into
//! `<w:p>` paragraphs. Everything else (styling, tables-of-contents
//! plumbing, revision marks) is skipped.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::errors::SummarizeError;

const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Concatenated paragraph text of the document body, paragraphs separated
/// by newlines. A missing part or malformed XML is a read failure; the
/// engine treats it like any unreadable file.
pub fn body_text(bytes: &[u8]) -> Result<String, SummarizeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut document_xml = String::new();
    archive
        .by_name(MAIN_DOCUMENT_PART)
        .map_err(|e| SummarizeError::ReadFailure(format!("missing {MAIN_DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut document_xml)?;

    let mut reader = Reader::from_str(&document_xml);
    let mut body = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref element)) if element.local_name().as_ref() == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(ref element)) => match element.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => body.push('\n'),
                _ => {}
            },
            Ok(Event::Text(text)) if in_text_run => {
                let run = text
                    .unescape()
                    .map_err(|e| SummarizeError::ReadFailure(e.to_string()))?;
                body.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SummarizeError::ReadFailure(e.to_string())),
        }
    }
    Ok(body)
}

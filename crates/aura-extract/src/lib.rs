//! AURA Extract - Document-to-text extraction
//!
//! Turns uploaded research files into plain text for the generation
//! pipeline. Pure functions, no internal state: given a filename and its
//! raw bytes, return extracted text or a labeled error.
//!
//! Recognized extensions: `.txt`, `.docx`, `.pdf`, `.csv`, `.xlsx`,
//! `.xls`. Anything else fails with [`ExtractError::Unsupported`]
//! without touching a parser.

pub mod error;
pub mod tabular;

use std::io::{Cursor, Read};

use calamine::{Data, Range, Reader as SpreadsheetReader, Xls, Xlsx};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

pub use error::ExtractError;
use error::Result;

/// Extract plain text from an uploaded file based on its extension
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String> {
    let lower = filename.to_ascii_lowercase();

    let text = if lower.ends_with(".txt") {
        read_txt(bytes)
    } else if lower.ends_with(".docx") {
        read_docx(filename, bytes)?
    } else if lower.ends_with(".pdf") {
        read_pdf(filename, bytes)?
    } else if lower.ends_with(".csv") {
        read_csv(bytes)?
    } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        read_spreadsheet(filename, &lower, bytes)?
    } else {
        return Err(ExtractError::Unsupported {
            filename: filename.to_string(),
        });
    };

    debug!("Extracted {} chars from {}", text.len(), filename);
    Ok(text)
}

fn read_txt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Pull the `w:t` text runs out of `word/document.xml`, one line per
/// paragraph
fn read_docx(filename: &str, bytes: &[u8]) -> Result<String> {
    let malformed = |details: String| ExtractError::Malformed {
        filename: filename.to_string(),
        details,
    };

    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| malformed(e.to_string()))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| malformed(e.to_string()))?;
    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text_run => {
                let text = e.unescape().map_err(|e| malformed(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(e.to_string())),
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

fn read_pdf(filename: &str, bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Malformed {
        filename: filename.to_string(),
        details: e.to_string(),
    })
}

/// CSV files become a tabular profile rather than raw cell dumps
fn read_csv(bytes: &[u8]) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(Cursor::new(bytes));

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(tabular::summarize(&headers, &rows))
}

/// First worksheet of an Excel workbook, profiled like CSV
fn read_spreadsheet(filename: &str, lower: &str, bytes: &[u8]) -> Result<String> {
    let malformed = |details: String| ExtractError::Malformed {
        filename: filename.to_string(),
        details,
    };

    let range: Range<Data> = if lower.ends_with(".xlsx") {
        let mut workbook = Xlsx::new(Cursor::new(bytes)).map_err(|e| malformed(e.to_string()))?;
        first_sheet_range(&mut workbook).map_err(malformed)?
    } else {
        let mut workbook = Xls::new(Cursor::new(bytes)).map_err(|e| malformed(e.to_string()))?;
        first_sheet_range(&mut workbook).map_err(malformed)?
    };

    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| match cell {
                Data::Empty => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<String>>()
    });

    let headers = rows.next().unwrap_or_default();
    let data: Vec<Vec<String>> = rows.collect();
    Ok(tabular::summarize(&headers, &data))
}

fn first_sheet_range<RS, R>(workbook: &mut R) -> std::result::Result<Range<Data>, String>
where
    RS: std::io::Read + std::io::Seek,
    R: SpreadsheetReader<RS>,
    R::Error: std::fmt::Display,
{
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| "workbook has no sheets".to_string())?;
    workbook
        .worksheet_range(&name)
        .map_err(|e| e.to_string())
}

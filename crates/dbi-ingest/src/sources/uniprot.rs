//! UniProt XML parser
//!
//! Streams the Swiss-Prot XML document with a pull parser. Only the entry
//! currently being read is held in memory; it is folded into the result
//! mapping as soon as its closing tag is seen.
//!
//! Captured per `<entry>`:
//!
//! - the first `<accession>` (the primary accession)
//! - `<gene>/<name>` values typed `primary` or `synonym`
//! - `<dbReference type="RefSeq">` ids
//! - the `<sequence>` text, with whitespace removed
//!
//! See: https://www.uniprot.org/docs/uniprot.xsd

use dbi_common::{DbiError, Result, UniProtRecord, UniProtRecords};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, warn};

use super::open_source;

/// Parse the UniProt XML document at `path`
pub fn parse_uniprot_document(path: &Path) -> Result<UniProtRecords> {
    UniProtXmlParser::new().parse_file(path)
}

/// Streaming parser for UniProt XML documents
pub struct UniProtXmlParser {
    /// Maximum number of entries to parse (None for unlimited)
    limit: Option<usize>,
}

impl UniProtXmlParser {
    /// Create a new parser with no limit
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Create a new parser that stops after `limit` entries
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Parse a document from a file path, decompressing `.gz` transparently
    pub fn parse_file(&self, path: &Path) -> Result<UniProtRecords> {
        debug!(path = %path.display(), "Parsing UniProt document");
        self.parse_reader(open_source(path)?)
    }

    /// Parse a document from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<UniProtRecords> {
        let mut reader = Reader::from_reader(reader);
        reader.config_mut().trim_text(true);

        let mut records = UniProtRecords::new();
        let mut stack: Vec<Tag> = Vec::new();
        let mut current: Option<EntryBuilder> = None;
        let mut buf = Vec::new();

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| xml_error(reader.buffer_position(), e))?;

            match event {
                Event::Start(ref e) => {
                    let tag = classify(e, stack.last(), &mut current);
                    stack.push(tag);
                },
                Event::Empty(ref e) => {
                    // Self-closing elements carry attributes only
                    if classify(e, stack.last(), &mut current) == Tag::Entry {
                        if let Some(builder) = current.take() {
                            builder.finish(&mut records);
                        }
                    }
                },
                Event::Text(ref t) => {
                    if let Some(builder) = current.as_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| xml_error(reader.buffer_position(), e))?;
                        builder.add_text(stack.last(), &text);
                    }
                },
                Event::End(_) => {
                    if stack.pop() == Some(Tag::Entry) {
                        if let Some(builder) = current.take() {
                            builder.finish(&mut records);
                        }
                        if self.limit.is_some_and(|limit| records.len() >= limit) {
                            break;
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }

            buf.clear();
        }

        if current.is_some() {
            warn!("UniProt document ended inside an entry; the partial entry was dropped");
        }

        debug!(entries = records.len(), "Finished UniProt document");
        Ok(records)
    }
}

impl Default for UniProtXmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Elements the parser cares about, tracked on the open-element stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Entry,
    Accession,
    Gene,
    GeneName { kept: bool },
    Sequence,
    Other,
}

/// Map an opening element to a [`Tag`], starting a new entry or recording
/// attribute-only data on the way
fn classify(e: &BytesStart<'_>, parent: Option<&Tag>, current: &mut Option<EntryBuilder>) -> Tag {
    let name = e.local_name();

    match (name.as_ref(), parent) {
        (b"entry", _) if current.is_none() => {
            *current = Some(EntryBuilder::default());
            Tag::Entry
        },
        (b"accession", Some(Tag::Entry)) => Tag::Accession,
        (b"gene", Some(Tag::Entry)) => Tag::Gene,
        (b"name", Some(Tag::Gene)) => {
            let kept = matches!(
                attribute(e, b"type").as_deref(),
                Some("primary") | Some("synonym")
            );
            Tag::GeneName { kept }
        },
        (b"dbReference", Some(Tag::Entry)) => {
            if attribute(e, b"type").as_deref() == Some("RefSeq") {
                match (current.as_mut(), attribute(e, b"id")) {
                    (Some(builder), Some(id)) => builder.record.push_refseq_id(id),
                    (Some(_), None) => warn!("RefSeq dbReference without an id attribute"),
                    _ => {},
                }
            }
            Tag::Other
        },
        (b"sequence", Some(Tag::Entry)) => Tag::Sequence,
        _ => Tag::Other,
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

fn xml_error(position: impl std::fmt::Display, err: impl std::fmt::Display) -> DbiError {
    DbiError::Xml(format!("at byte {}: {}", position, err))
}

/// Working state for the entry being read
#[derive(Default)]
struct EntryBuilder {
    accession: Option<String>,
    record: UniProtRecord,
    sequence: String,
}

impl EntryBuilder {
    fn add_text(&mut self, tag: Option<&Tag>, text: &str) {
        match tag {
            Some(Tag::Accession) if self.accession.is_none() => {
                self.accession = Some(text.to_string());
            },
            Some(Tag::GeneName { kept: true }) if !text.is_empty() => {
                self.record.push_symbol(text.to_string());
            },
            Some(Tag::Sequence) => {
                self.sequence
                    .extend(text.chars().filter(|c| !c.is_whitespace()));
            },
            _ => {},
        }
    }

    fn finish(mut self, records: &mut UniProtRecords) {
        let Some(accession) = self.accession else {
            warn!("UniProt entry without an accession was skipped");
            return;
        };
        if !self.sequence.is_empty() {
            self.record.sequence = Some(self.sequence);
        }
        records.insert(accession, self.record);
    }
}

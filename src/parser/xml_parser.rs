use super::element::Element;
use crate::errors::{AppError, AppResult};
use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Builder for the element tree during XML parsing.
/// Holds the chain of currently open elements and the finished root.
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            open: Vec::with_capacity(16),
            root: None,
        }
    }

    fn open(&mut self, element: Element) -> AppResult<()> {
        if self.open.is_empty() && self.root.is_some() {
            return Err(AppError::ParseError(format!(
                "Unexpected second root element <{}>",
                element.name()
            )));
        }
        self.open.push(element);
        Ok(())
    }

    fn close(&mut self) -> AppResult<()> {
        let element = self
            .open
            .pop()
            .ok_or_else(|| AppError::ParseError("Unmatched closing tag".to_string()))?;
        match self.open.last_mut() {
            Some(parent) => parent.push_child(element),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        // Character data outside the root (whitespace around it) has no owner
        if let Some(current) = self.open.last_mut() {
            current.push_text(text);
        }
    }

    fn build(self) -> AppResult<Element> {
        if let Some(unclosed) = self.open.last() {
            return Err(AppError::ParseError(format!(
                "Unexpected end of document inside <{}>",
                unclosed.name()
            )));
        }
        self.root
            .ok_or_else(|| AppError::ParseError("Document has no root element".to_string()))
    }
}

/// Internal general entity declaration with a quoted replacement text.
/// Parameter entities (`<!ENTITY % ...>`) and external ones never match.
const ENTITY_DECL_PATTERN: &str = r#"<!ENTITY\s+([^\s%"'<>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#;

/// General entities a reference may name: the predefined five plus those
/// declared in the document's internal DTD subset.
#[derive(Default)]
struct Entities {
    declared: HashMap<String, String>,
}

impl Entities {
    fn declare_from_doctype(&mut self, doctype: &str) -> AppResult<()> {
        let pattern = Regex::new(ENTITY_DECL_PATTERN)?;
        for caps in pattern.captures_iter(doctype) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            let expanded = unescape_with(value, |entity| self.resolve(entity))?.into_owned();
            // The first declaration of a name is binding
            self.declared
                .entry(caps[1].to_string())
                .or_insert(expanded);
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        resolve_predefined_entity(name).or_else(|| self.declared.get(name).map(String::as_str))
    }
}

/// Replaces literal tabs and line breaks in an attribute value with spaces
/// (a CRLF pair counts as one break). Character references are untouched.
fn normalize_attribute_value(raw: &str) -> Cow<'_, str> {
    if raw.contains(['\t', '\n', '\r']) {
        Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(raw)
    }
}

fn start_element(
    reader: &Reader<Cursor<&[u8]>>,
    e: &BytesStart,
    entities: &Entities,
) -> AppResult<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = reader.decoder().decode(&attr.value)?;
        let value = unescape_with(&normalize_attribute_value(&raw), |entity| {
            entities.resolve(entity)
        })?
        .into_owned();
        element = element.with_attribute(key, value);
    }
    Ok(element)
}

/// Parses a complete XML document held in memory into an element tree.
pub fn parse_document_bytes(content: &[u8]) -> AppResult<Element> {
    let mut reader = Reader::from_reader(Cursor::new(content));
    let mut buf = Vec::with_capacity(8192);
    let mut builder = TreeBuilder::new();
    let mut entities = Entities::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let element = start_element(&reader, &e, &entities)?;
                builder.open(element)?;
            }
            Event::Empty(e) => {
                let element = start_element(&reader, &e, &entities)?;
                builder.open(element)?;
                builder.close()?;
            }
            Event::End(_) => builder.close()?,
            // Line breaks are normalized to `\n` in both text and CDATA
            Event::Text(e) => {
                let txt = e.xml10_content()?;
                builder.text(&txt);
            }
            Event::CData(e) => {
                let txt = e.xml10_content()?;
                builder.text(&txt);
            }
            Event::DocType(e) => entities.declare_from_doctype(&e.decode()?)?,
            Event::GeneralRef(e) => {
                let resolved = match e.resolve_char_ref()? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let entity = e.decode()?;
                        entities
                            .resolve(&entity)
                            .map(str::to_string)
                            .ok_or_else(|| {
                                AppError::ParseError(format!("Unknown entity reference &{entity};"))
                            })?
                    }
                };
                builder.text(&resolved);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    builder.build()
}

/// Reads an XML file from disk and delegates to `parse_document_bytes`.
pub fn load_document(path: &Path) -> AppResult<Element> {
    let content = fs::read(path).map_err(|e| {
        AppError::IoError(format!("Failed to read XML file {}: {e}", path.display()))
    })?;
    parse_document_bytes(&content)
}

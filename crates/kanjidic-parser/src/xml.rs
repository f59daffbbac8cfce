//! Owned element tree built from quick-xml events.
//!
//! The whole document is materialized up front; decoders then walk plain
//! structs instead of juggling reader state.

use std::borrow::Cow;

use kanjidic_core::KanjidicError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in source order, values unescaped
    pub attributes: Vec<(String, String)>,
    /// Direct text content with surrounding whitespace trimmed
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text content, `None` for an empty element
    pub fn text(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    /// First child named `name`
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Parse a complete XML document and return its root element.
///
/// DOCTYPE, comments and processing instructions are skipped. Mismatched or
/// unclosed tags, stray text and a second root are document errors.
pub fn parse(xml: &str) -> Result<Element, KanjidicError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                ensure_single_root(&stack, &root)?;
                stack.push(open_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                ensure_single_root(&stack, &root)?;
                let element = open_element(e)?;
                close_element(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                // quick-xml has already checked the end name against the open tag
                let element = stack
                    .pop()
                    .ok_or_else(|| document_error("Unexpected closing tag"))?;
                close_element(&mut stack, &mut root, element);
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| {
                    document_error(format!("Failed to unescape text: {err}"))
                })?;
                push_text(&mut stack, &text)?;
            }
            Ok(Event::CData(e)) => {
                let bytes = e.into_inner();
                let text = String::from_utf8_lossy(&bytes);
                push_text(&mut stack, &text)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(document_error(format!(
                    "XML error at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(document_error(format!("Unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| document_error("No root element"))
}

fn document_error(message: impl Into<String>) -> KanjidicError {
    KanjidicError::Document(message.into())
}

fn ensure_single_root(stack: &[Element], root: &Option<Element>) -> Result<(), KanjidicError> {
    if stack.is_empty() && root.is_some() {
        return Err(document_error("Content after the root element"));
    }
    Ok(())
}

fn open_element(e: &BytesStart<'_>) -> Result<Element, KanjidicError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr
            .map_err(|err| document_error(format!("Bad attribute on <{name}>: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| document_error(format!("Bad value for {name}/@{key}: {err}")))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn close_element(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &Cow<'_, str>) -> Result<(), KanjidicError> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(document_error("Text outside the root element")),
    }
}

//! Minimal in-memory element tree over `quick-xml`'s namespace-aware reader.
//!
//! Only what the TEI extractor needs is kept: local names, whether an element
//! belongs to the TEI namespace, and the text that precedes the first child.

use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::{DictError, Result};

pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    /// Bound to the TEI namespace, or not bound to any namespace.
    pub in_tei: bool,
    /// Text before the first child element, entity-unescaped.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn open(name: &[u8], in_tei: bool) -> Self {
        Element {
            name: String::from_utf8_lossy(name).into_owned(),
            in_tei,
            ..Default::default()
        }
    }

    pub fn is(&self, local_name: &str) -> bool {
        self.in_tei && self.name == local_name
    }

    pub fn first_child(&self, local_name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(local_name))
    }

    /// Every element matching a child-step path such as `["sense", "cit", "quote"]`,
    /// in document order.
    pub fn find_all(&self, path: &[&str]) -> Vec<&Element> {
        let mut current = vec![self];
        for step in path {
            current = current
                .into_iter()
                .flat_map(|el| el.children.iter().filter(move |c| c.is(step)))
                .collect();
        }
        current
    }

    /// First element matching a child-step path, in document order.
    pub fn find(&self, path: &[&str]) -> Option<&Element> {
        self.find_all(path).into_iter().next()
    }

    /// All descendants (not `self`) with the given local name, pre-order.
    pub fn descendants_named<'a>(&'a self, local_name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(el) = pending.pop() {
            if el.is(local_name) {
                found.push(el);
            }
            pending.extend(el.children.iter().rev());
        }
        found
    }
}

fn is_tei(resolved: &ResolveResult) -> bool {
    match resolved {
        ResolveResult::Bound(ns) => ns.as_ref() == TEI_NS.as_bytes(),
        ResolveResult::Unbound => true,
        ResolveResult::Unknown(_) => false,
    }
}

fn parse_error(position: u64, message: impl Into<String>) -> DictError {
    DictError::Parse {
        position,
        message: message.into(),
    }
}

/// Parses a complete document and returns its root element.
pub fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let outcome = match reader.read_resolved_event() {
            Ok((resolved, event)) => Ok((is_tei(&resolved), event)),
            Err(e) => Err(e.to_string()),
        };
        let (in_tei, event) = match outcome {
            Ok(read) => read,
            Err(message) => return Err(parse_error(reader.error_position() as u64, message)),
        };
        let position = reader.buffer_position() as u64;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(parse_error(position, "junk after document element"));
                }
                stack.push(Element::open(start.local_name().as_ref(), in_tei));
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(parse_error(position, "junk after document element"));
                }
                let element = Element::open(start.local_name().as_ref(), in_tei);
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| parse_error(position, "closing tag without an open element"))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| parse_error(position, e.to_string()))?;
                push_text(&mut stack, &unescaped, position)?;
            }
            Event::CData(data) => {
                let raw = std::str::from_utf8(&data)
                    .map_err(|e| parse_error(position, e.to_string()))?;
                push_text(&mut stack, raw, position)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(parse_error(
            reader.buffer_position() as u64,
            format!("unclosed element <{}>", open.name),
        ));
    }
    root.ok_or_else(|| parse_error(0, "no element found"))
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str, position: u64) -> Result<()> {
    match stack.last_mut() {
        Some(current) => {
            if current.children.is_empty() {
                current.text.push_str(text);
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(parse_error(position, "text outside the document element")),
    }
}

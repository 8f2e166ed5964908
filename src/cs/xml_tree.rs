//! In-memory XML tree for documentation exports
//!
//! The extractor needs random access to a member's children, their text value and
//! their re-serialized markup, so the export is read once with quick-xml into a
//! small owned tree instead of being processed as a stream.

use std::path::Path;
use quick_xml::escape::{escape, partial_escape, resolve_predefined_entity};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use super::error::{CsError, CsResult, IoContext};

/// A node inside an element: either a child element or a run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes (in source order) and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Value of the attribute with the given name, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter_map(move |node| match node {
            XmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children_named(name).next()
    }

    /// All elements with the given name in this subtree, this element included,
    /// in document order
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }

    /// Concatenated text of every descendant text node, markup dropped
    pub fn text(&self) -> String {
        let mut out = String::new();
        append_text(self, &mut out);
        out
    }

    /// Serialized markup of the children, without this element's own tags
    pub fn inner_xml(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serialized markup of this element including its own tags
    pub fn outer_xml(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn collect_descendants<'a>(element: &'a XmlElement, name: &str, found: &mut Vec<&'a XmlElement>) {
    if element.name == name {
        found.push(element);
    }
    for child in &element.children {
        if let XmlNode::Element(child) = child {
            collect_descendants(child, name, found);
        }
    }
}

fn append_text(element: &XmlElement, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(child) => append_text(child, out),
        }
    }
}

fn write_node(node: &XmlNode, out: &mut String) {
    match node {
        XmlNode::Text(text) => out.push_str(&partial_escape(text.as_str())),
        XmlNode::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &XmlElement, out: &mut String) {
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value.as_str()));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

/// A parsed documentation export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Wraps an already built element tree
    pub fn from_root(root: XmlElement) -> Self {
        Self { root }
    }

    /// Read and parse a documentation export from disk
    pub async fn load(path: &Path) -> CsResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_io_context(&format!("Failed to read {}", path.display()))?;
        log::info!("Loaded documentation export {} ({} bytes)", path.display(), content.len());
        Self::parse(&content)
    }

    /// Parse XML text into a tree
    ///
    /// Text is kept untrimmed. Comments, processing instructions, declarations and
    /// doctypes are dropped. CDATA sections become plain text.
    pub fn parse(content: &str) -> CsResult<Self> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    stack.push(read_start(&reader, e));
                }
                Event::Empty(ref e) => {
                    let element = read_start(&reader, e);
                    attach_element(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| CsError::XmlParsing {
                        message: "Unexpected closing tag".to_string(),
                    })?;
                    attach_element(&mut stack, &mut root, element)?;
                }
                Event::Text(ref e) => {
                    let text = decode_bytes(&reader, e);
                    push_text(&mut stack, &text);
                }
                Event::GeneralRef(ref e) => {
                    let text = match e.resolve_char_ref() {
                        Ok(Some(c)) => c.to_string(),
                        _ => {
                            let entity = decode_bytes(&reader, e);
                            // Unknown entities are kept as written
                            resolve_predefined_entity(&entity)
                                .map_or_else(|| format!("&{entity};"), str::to_string)
                        }
                    };
                    push_text(&mut stack, &text);
                }
                Event::CData(ref e) => {
                    let text = decode_bytes(&reader, e);
                    push_text(&mut stack, &text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(CsError::XmlParsing {
                message: format!("Unclosed element <{}>", open.name),
            });
        }

        root.map(Self::from_root).ok_or_else(|| CsError::XmlParsing {
            message: "Document has no root element".to_string(),
        })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// All elements with the given name in document order
    pub fn descendants(&self, name: &str) -> Vec<&XmlElement> {
        self.root.descendants(name)
    }
}

fn read_start(reader: &Reader<&[u8]>, e: &BytesStart) -> XmlElement {
    let mut element = XmlElement::new(decode_bytes(reader, e.name().as_ref()));
    for attr in e.attributes().flatten() {
        let key = decode_bytes(reader, attr.key.as_ref());
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        element.attributes.push((key, value));
    }
    element
}

fn attach_element(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> CsResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(CsError::XmlParsing {
            message: format!("Second root element <{}>", element.name),
        });
    }
    *root = Some(element);
    Ok(())
}

/// Append text to the open element, merging with a preceding text run.
/// Text outside the root element is ignored.
fn push_text(stack: &mut [XmlElement], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    if let Some(XmlNode::Text(last)) = parent.children.last_mut() {
        last.push_str(text);
    } else if !text.is_empty() {
        parent.children.push(XmlNode::Text(text.to_string()));
    }
}

fn decode_bytes(reader: &Reader<&[u8]>, bytes: &[u8]) -> String {
    reader.decoder().decode(bytes).map_or_else(
        |_| String::from_utf8_lossy(bytes).into_owned(),
        std::borrow::Cow::into_owned,
    )
}

#[cfg(test)]
#[path = "xml_tree_tests.rs"]
mod tests;

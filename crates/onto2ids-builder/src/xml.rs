// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimal XML tree with an indenting serializer
//!
//! Text and attribute values are escaped on output, so callers build the
//! tree from raw strings.

use quick_xml::escape::escape;
use std::fmt;

const INDENT: &str = "  ";

/// A node in the tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with ordered attributes and children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute; attributes are written in insertion order
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn child(mut self, child: XmlElement) -> Self {
        self.push(child);
        self
    }

    /// Add a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Append a child element in place
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given name
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text of direct text children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        write!(f, "{indent}<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape(value.as_str()))?;
        }

        if self.children.is_empty() {
            return writeln!(f, " />");
        }

        let text_only = self
            .children
            .iter()
            .all(|node| matches!(node, XmlNode::Text(_)));
        if text_only {
            return writeln!(
                f,
                ">{}</{}>",
                escape(self.text_content().as_str()),
                self.name
            );
        }

        writeln!(f, ">")?;
        for node in &self.children {
            match node {
                XmlNode::Element(e) => e.write(f, depth + 1)?,
                XmlNode::Text(t) => {
                    writeln!(f, "{indent}{INDENT}{}", escape(t.as_str()))?;
                }
            }
        }
        writeln!(f, "{indent}</{}>", self.name)
    }
}

/// A document: optional declaration plus the root element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDocument {
    pub declaration: Option<&'static str>,
    pub root: XmlElement,
}

impl XmlDocument {
    pub fn new(declaration: Option<&'static str>, root: XmlElement) -> Self {
        Self { declaration, root }
    }
}

impl fmt::Display for XmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(declaration) = self.declaration {
            writeln!(f, "{declaration}")?;
        }
        self.root.write(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_nested() {
        let root = XmlElement::new("a")
            .attr("x", "1")
            .child(XmlElement::new("b").text("hello"))
            .child(XmlElement::new("c").attr("value", "v"));
        let doc = XmlDocument::new(Some("<?xml version=\"1.0\"?>"), root);
        assert_eq!(
            doc.to_string(),
            "<?xml version=\"1.0\"?>\n<a x=\"1\">\n  <b>hello</b>\n  <c value=\"v\" />\n</a>\n"
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let root = XmlElement::new("a")
            .attr("name", "Tom & \"Jerry\"")
            .child(XmlElement::new("b").text("x < y"));
        let out = XmlDocument::new(None, root).to_string();
        assert!(out.contains("name=\"Tom &amp; &quot;Jerry&quot;\""));
        assert!(out.contains("<b>x &lt; y</b>"));
    }

    #[test]
    fn test_lookup_helpers() {
        let root = XmlElement::new("a")
            .child(XmlElement::new("b").text("1"))
            .child(XmlElement::new("b").text("2"))
            .child(XmlElement::new("c"));
        assert_eq!(root.elements().count(), 3);
        assert_eq!(root.find("b").unwrap().text_content(), "1");
        assert!(root.find("d").is_none());
        assert_eq!(root.attribute("missing"), None);
    }
}

//! Parsed SVG tree.
//!
//! Only elements and their attributes survive parsing.
//! Comments, CDATA sections, processing instructions and text are dropped by the parser.

use std::borrow::Cow;

/// Result of parsing a whole document: its first top-level element, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Root<'s> {
    pub element: Option<Element<'s>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute<'s> {
    pub name: &'s str,
    /// Value with the predefined XML entities decoded. Empty for bare attributes.
    pub value: Cow<'s, str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<'s> {
    pub tag_name: &'s str,
    pub attrs: Vec<Attribute<'s>>,
    pub children: Vec<Child<'s>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child<'s> {
    Element(Element<'s>),
    /// A bare string attached under `key`.
    /// It is emitted as an attribute of the enclosing element.
    Text { key: &'s str, value: Cow<'s, str> },
}

impl<'s> Element<'s> {
    pub fn new(tag_name: &'s str) -> Self {
        Self {
            tag_name,
            attrs: vec![],
            children: vec![],
        }
    }

    pub fn with_attr(mut self, name: &'s str, value: impl Into<Cow<'s, str>>) -> Self {
        self.attrs.push(Attribute {
            name,
            value: value.into(),
        });
        self
    }

    pub fn with_child(mut self, child: Element<'s>) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn with_text(mut self, key: &'s str, value: impl Into<Cow<'s, str>>) -> Self {
        self.children.push(Child::Text {
            key,
            value: value.into(),
        });
        self
    }
}

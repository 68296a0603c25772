//! A small XML parser that keeps only what the emitter needs:
//! elements, their attributes and their element children, all in source order.
//!
//! Like a hand-written recursive descent parser, it consumes the source directly
//! without a separate tokenizing pass.

use crate::{
    ast::*,
    error::{SyntaxError, SyntaxErrorKind},
    helpers::{self, is_attr_name_char, is_tag_name_char},
};
use memchr::memmem;
use std::{iter::Peekable, str::CharIndices};

/// Deepest element nesting accepted, counting the root as the first level.
const MAX_DEPTH: usize = 1024;

pub struct Parser<'s> {
    source: &'s str,
    chars: Peekable<CharIndices<'s>>,
    depth: usize,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            depth: 0,
        }
    }

    fn emit_error(&mut self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            kind,
            pos: self.offset(),
        }
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.source.len())
    }

    fn skip_ws(&mut self) {
        while self
            .chars
            .next_if(|(_, c)| c.is_ascii_whitespace())
            .is_some()
        {}
    }

    /// Consume `expected` if the source continues with it.
    fn eat(&mut self, expected: &str) -> bool {
        let mut chars = self.chars.clone();
        if expected
            .chars()
            .all(|e| chars.next_if(|(_, c)| *c == e).is_some())
        {
            self.chars = chars;
            true
        } else {
            false
        }
    }

    fn lookahead(&self, expected: &str) -> bool {
        let mut chars = self.chars.clone();
        expected
            .chars()
            .all(|e| chars.next_if(|(_, c)| *c == e).is_some())
    }

    fn advance_to(&mut self, end: usize) {
        while self.chars.next_if(|(i, _)| *i < end).is_some() {}
    }

    /// Consume everything up to and including `terminator`, returning what came before it.
    fn take_until(&mut self, terminator: &str, kind: SyntaxErrorKind) -> PResult<&'s str> {
        let start = self.offset();
        let rest = &self.source[start..];
        let Some(len) = memmem::find(rest.as_bytes(), terminator.as_bytes()) else {
            return Err(SyntaxError {
                kind,
                pos: self.source.len(),
            });
        };
        self.advance_to(start + len + terminator.len());
        Ok(&rest[..len])
    }

    fn skip_text(&mut self) {
        let start = self.offset();
        let end = memchr::memchr(b'<', self.source[start..].as_bytes())
            .map(|i| start + i)
            .unwrap_or(self.source.len());
        self.advance_to(end);
    }

    fn parse_attr(&mut self) -> PResult<Attribute<'s>> {
        let name = self.parse_attr_name()?;
        self.skip_ws();
        let value = if self.chars.next_if(|(_, c)| *c == '=').is_some() {
            self.skip_ws();
            helpers::unescape_attr_value(self.parse_attr_value()?)
        } else {
            "".into()
        };
        Ok(Attribute { name, value })
    }

    fn parse_attr_name(&mut self) -> PResult<&'s str> {
        let Some((start, _)) = self.chars.next_if(|(_, c)| is_attr_name_char(*c)) else {
            return Err(self.emit_error(SyntaxErrorKind::ExpectAttrName));
        };

        while self.chars.next_if(|(_, c)| is_attr_name_char(*c)).is_some() {}

        let end = self.offset();
        Ok(&self.source[start..end])
    }

    fn parse_attr_value(&mut self) -> PResult<&'s str> {
        if let Some((start, quote)) = self.chars.next_if(|(_, c)| *c == '"' || *c == '\'') {
            let start = start + 1;
            let Some(len) = memchr::memchr(quote as u8, self.source[start..].as_bytes()) else {
                return Err(SyntaxError {
                    kind: SyntaxErrorKind::ExpectChar(quote),
                    pos: self.source.len(),
                });
            };
            self.advance_to(start + len + 1);
            Ok(&self.source[start..start + len])
        } else {
            fn is_unquoted_attr_value_char(c: char) -> bool {
                !c.is_ascii_whitespace() && !matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
            }

            let start = self.offset();
            while self
                .chars
                .next_if(|(_, c)| is_unquoted_attr_value_char(*c) && *c != '/')
                .is_some()
            {}
            let end = self.offset();
            if start == end {
                Err(self.emit_error(SyntaxErrorKind::ExpectAttrValue))
            } else {
                Ok(&self.source[start..end])
            }
        }
    }

    fn parse_cdata(&mut self) -> PResult<&'s str> {
        if !self.eat("<![CDATA[") {
            return Err(self.emit_error(SyntaxErrorKind::ExpectCData));
        }
        self.take_until("]]>", SyntaxErrorKind::ExpectCData)
    }

    fn parse_comment(&mut self) -> PResult<&'s str> {
        if !self.eat("<!--") {
            return Err(self.emit_error(SyntaxErrorKind::ExpectComment));
        }
        self.take_until("-->", SyntaxErrorKind::ExpectComment)
    }

    /// The internal subset may contain `>`, so brackets are balanced before looking for the end.
    fn parse_doctype(&mut self) -> PResult<()> {
        if !self.eat("<!DOCTYPE") {
            return Err(self.emit_error(SyntaxErrorKind::ExpectDoctype));
        }

        let mut brackets = 0usize;
        let mut quote = None;
        loop {
            match (self.chars.next(), quote) {
                (Some((_, c)), Some(q)) if c == q => quote = None,
                (Some(..), Some(..)) => continue,
                (Some((_, c @ ('"' | '\''))), None) => quote = Some(c),
                (Some((_, '[')), None) => brackets += 1,
                (Some((_, ']')), None) => brackets = brackets.saturating_sub(1),
                (Some((_, '>')), None) if brackets == 0 => return Ok(()),
                (Some(..), None) => continue,
                (None, _) => {
                    return Err(SyntaxError {
                        kind: SyntaxErrorKind::ExpectDoctype,
                        pos: self.source.len(),
                    });
                }
            }
        }
    }

    fn parse_element(&mut self) -> PResult<Element<'s>> {
        if self.depth >= MAX_DEPTH {
            return Err(self.emit_error(SyntaxErrorKind::NestingTooDeep));
        }
        let Some(..) = self.chars.next_if(|(_, c)| *c == '<') else {
            return Err(self.emit_error(SyntaxErrorKind::ExpectElement));
        };
        let tag_name = self.parse_tag_name()?;

        let mut attrs = vec![];
        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some((_, '/')) => {
                    self.chars.next();
                    if self.chars.next_if(|(_, c)| *c == '>').is_some() {
                        return Ok(Element {
                            tag_name,
                            attrs,
                            children: vec![],
                        });
                    } else {
                        return Err(self.emit_error(SyntaxErrorKind::ExpectSelfCloseTag));
                    }
                }
                Some((_, '>')) => {
                    self.chars.next();
                    break;
                }
                Some(..) => {
                    attrs.push(self.parse_attr()?);
                }
                None => return Err(self.emit_error(SyntaxErrorKind::ExpectChar('>'))),
            }
        }

        let mut children = vec![];
        loop {
            match self.chars.peek() {
                Some((_, '<')) => {
                    let mut chars = self.chars.clone();
                    chars.next();
                    match chars.peek() {
                        Some((pos, '/')) => {
                            let pos = *pos;
                            chars.next();
                            self.chars = chars;
                            let close_tag_name = self.parse_tag_name()?;
                            if close_tag_name != tag_name {
                                return Err(SyntaxError {
                                    kind: SyntaxErrorKind::ExpectCloseTag,
                                    pos,
                                });
                            }
                            self.skip_ws();
                            if self.chars.next_if(|(_, c)| *c == '>').is_some() {
                                break;
                            } else {
                                return Err(self.emit_error(SyntaxErrorKind::ExpectCloseTag));
                            }
                        }
                        Some((_, '!')) => {
                            if self.lookahead("<![CDATA[") {
                                self.parse_cdata()?;
                            } else {
                                self.parse_comment()?;
                            }
                        }
                        Some((_, '?')) => {
                            self.parse_processing_instruction()?;
                        }
                        Some((_, c)) if is_tag_name_char(*c) => {
                            self.depth += 1;
                            let child = self.parse_element();
                            self.depth -= 1;
                            children.push(Child::Element(child?));
                        }
                        _ => return Err(self.emit_error(SyntaxErrorKind::ExpectElement)),
                    }
                }
                Some(..) => self.skip_text(),
                None => return Err(self.emit_error(SyntaxErrorKind::ExpectCloseTag)),
            }
        }

        Ok(Element {
            tag_name,
            attrs,
            children,
        })
    }

    fn parse_processing_instruction(&mut self) -> PResult<&'s str> {
        if !self.eat("<?") {
            return Err(self.emit_error(SyntaxErrorKind::ExpectProcessingInstruction));
        }
        self.take_until("?>", SyntaxErrorKind::ExpectProcessingInstruction)
    }

    /// Parse up to and including the first top-level element.
    ///
    /// Prolog items before it are skipped and anything after it is ignored.
    pub fn parse_root(&mut self) -> PResult<Root<'s>> {
        loop {
            self.skip_ws();
            if self.lookahead("<?") {
                self.parse_processing_instruction()?;
            } else if self.lookahead("<!--") {
                self.parse_comment()?;
            } else if self.lookahead("<!DOCTYPE") {
                self.parse_doctype()?;
            } else if self.lookahead("<![CDATA[") {
                self.parse_cdata()?;
            } else if self.lookahead("<") {
                let mut chars = self.chars.clone();
                chars.next();
                if chars.next_if(|(_, c)| is_tag_name_char(*c)).is_some() {
                    return self.parse_element().map(|element| Root {
                        element: Some(element),
                    });
                }
                return Err(self.emit_error(SyntaxErrorKind::ExpectElement));
            } else if self.chars.peek().is_some() {
                self.skip_text();
            } else {
                return Ok(Root { element: None });
            }
        }
    }

    fn parse_tag_name(&mut self) -> PResult<&'s str> {
        let Some((start, _)) = self.chars.next_if(|(_, c)| is_tag_name_char(*c)) else {
            return Err(self.emit_error(SyntaxErrorKind::ExpectTagName));
        };

        while self.chars.next_if(|(_, c)| is_tag_name_char(*c)).is_some() {}

        let end = self.offset();
        Ok(&self.source[start..end])
    }
}

pub type PResult<T> = Result<T, SyntaxError>;

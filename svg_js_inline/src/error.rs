use std::{borrow::Cow, error::Error, fmt};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Syntax error when parsing the SVG markup.
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte offset in the source.
    pub pos: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    ExpectAttrName,
    ExpectAttrValue,
    ExpectCData,
    ExpectChar(char),
    ExpectCloseTag,
    ExpectComment,
    ExpectDoctype,
    ExpectElement,
    ExpectProcessingInstruction,
    ExpectSelfCloseTag,
    ExpectTagName,
    NestingTooDeep,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason: Cow<_> = match self.kind {
            SyntaxErrorKind::ExpectAttrName => "expect attribute name".into(),
            SyntaxErrorKind::ExpectAttrValue => "expect attribute value".into(),
            SyntaxErrorKind::ExpectCData => "expect end of CDATA section".into(),
            SyntaxErrorKind::ExpectChar(c) => format!("expect char '{c}'").into(),
            SyntaxErrorKind::ExpectCloseTag => "expect close tag".into(),
            SyntaxErrorKind::ExpectComment => "expect comment".into(),
            SyntaxErrorKind::ExpectDoctype => "expect doctype".into(),
            SyntaxErrorKind::ExpectElement => "expect element".into(),
            SyntaxErrorKind::ExpectProcessingInstruction => {
                "expect end of processing instruction".into()
            }
            SyntaxErrorKind::ExpectSelfCloseTag => "expect self close tag".into(),
            SyntaxErrorKind::ExpectTagName => "expect tag name".into(),
            SyntaxErrorKind::NestingTooDeep => "elements nested too deeply".into(),
        };

        write!(f, "syntax error '{reason}' at position {}", self.pos)
    }
}

impl Error for SyntaxError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The error type for svg_js_inline.
///
/// Any of these aborts the whole transform; no partial output is produced.
pub enum MalformedDocument {
    /// The input is not well-formed markup.
    Syntax(SyntaxError),
    /// The input contains no element at all.
    NoRootElement,
    /// The root element is not `<svg>`.
    UnexpectedRootElement { tag_name: String },
}

impl fmt::Display for MalformedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedDocument::Syntax(e) => write!(f, "unable to parse SVG: {e}"),
            MalformedDocument::NoRootElement => {
                write!(f, "unable to parse SVG: no root element found")
            }
            MalformedDocument::UnexpectedRootElement { tag_name } => write!(
                f,
                "unable to parse SVG: root element is `<{tag_name}>`, expected `<svg>`"
            ),
        }
    }
}

impl Error for MalformedDocument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MalformedDocument::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SyntaxError> for MalformedDocument {
    fn from(value: SyntaxError) -> Self {
        MalformedDocument::Syntax(value)
    }
}

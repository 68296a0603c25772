//! Turn an SVG document into a JavaScript module whose default export
//! rebuilds the same element tree with `document.createElement` and `setAttribute`.
//!
//! ```
//! use svg_js_inline::transform;
//!
//! let code = transform(r#"<svg width="24"><path d="M0 0"/></svg>"#, &Default::default()).unwrap();
//! assert_eq!(
//!     code,
//!     "export default function(){\
//!      const s=document.createElement('svg');\
//!      s.setAttribute('width','24');\
//!      let p=s;\
//!      let e=document.createElement('path');\
//!      p.appendChild(e);\
//!      e.setAttribute('d','M0 0');\
//!      return s;\
//!      }"
//! );
//! ```
//!
//! Attribute values and tag names are written into single-quoted string literals
//! as they are. A value containing `'` produces JavaScript that doesn't parse;
//! inputs are expected to be trusted assets.
//!
//! Besides the creation and attribute statements, the generated code contains
//! `e=e.parentNode;` whenever a later sibling or text child has to move `e`
//! back up to the element it belongs to.
//!
//! Text, CDATA sections, comments and processing instructions are dropped.
//! Namespaced names such as `xlink:href` are set with plain `setAttribute`.

pub mod ast;
pub mod config;
mod ctx;
mod emitter;
mod error;
mod helpers;
mod parser;
mod printer;
mod state;

use crate::{config::TransformOptions, parser::Parser};
pub use crate::{
    emitter::{Binding, Statement, emit},
    error::*,
};

/// Parse SVG markup into a tree holding its first top-level element.
pub fn parse(code: &str) -> Result<ast::Root<'_>, SyntaxError> {
    Parser::new(code).parse_root()
}

/// Transform the given SVG source into a JavaScript module.
///
/// Fails when the markup can't be parsed, is nested more than 1024 elements deep,
/// or its root element isn't `<svg>`.
pub fn transform(code: &str, options: &TransformOptions) -> Result<String, MalformedDocument> {
    let root = parse(code)?;
    let Some(svg) = root.element else {
        log::debug!("no root element found");
        return Err(MalformedDocument::NoRootElement);
    };

    let statements = emit(&svg)?;
    log::debug!(
        "emitted {} statements for <{}>",
        statements.len(),
        svg.tag_name
    );

    Ok(printer::print(&statements, options))
}

use crate::{
    ast::*, ctx::Ctx, error::MalformedDocument, helpers::ROOT_TAG_NAME, state::State,
};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A variable in the generated function that holds an element.
pub enum Binding {
    /// `s`, the `<svg>` element returned by the function.
    Root,
    /// `e`, the element created most recently (or moved back up to).
    Element,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Binding::Root => "s",
            Binding::Element => "e",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One generated JavaScript statement.
///
/// Names and values are written between single quotes as they are, without escaping.
pub enum Statement<'a> {
    /// `const s=document.createElement('svg');`
    CreateRoot,
    /// `s.setAttribute('name','value');`
    SetAttribute {
        target: Binding,
        name: &'a str,
        value: &'a str,
    },
    /// `let p=s;` or `p=e;`
    BindParent { declare: bool, target: Binding },
    /// `let e=document.createElement('tag');`
    CreateElement { declare: bool, tag_name: &'a str },
    /// `p.appendChild(e);`
    AppendChild,
    /// `e=e.parentNode;`
    Ascend,
    /// `return s;`
    Return,
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::CreateRoot => {
                write!(f, "const s=document.createElement('{ROOT_TAG_NAME}');")
            }
            Statement::SetAttribute {
                target,
                name,
                value,
            } => write!(f, "{target}.setAttribute('{name}','{value}');"),
            Statement::BindParent { declare, target } => {
                write!(f, "{}p={target};", if *declare { "let " } else { "" })
            }
            Statement::CreateElement { declare, tag_name } => write!(
                f,
                "{}e=document.createElement('{tag_name}');",
                if *declare { "let " } else { "" }
            ),
            Statement::AppendChild => f.write_str("p.appendChild(e);"),
            Statement::Ascend => f.write_str("e=e.parentNode;"),
            Statement::Return => f.write_str("return s;"),
        }
    }
}

/// Walk the tree under `root` and produce the body of the generated function,
/// from creating `s` to returning it.
///
/// Statements follow document order: at each element its attributes come first,
/// then its children, depth first.
pub fn emit<'a>(root: &'a Element<'_>) -> Result<Vec<Statement<'a>>, MalformedDocument> {
    if root.tag_name != ROOT_TAG_NAME {
        return Err(MalformedDocument::UnexpectedRootElement {
            tag_name: root.tag_name.to_owned(),
        });
    }

    let mut out = vec![Statement::CreateRoot];
    root.emit(&mut Ctx::new(), State::default(), &mut out);
    out.push(Statement::Return);
    Ok(out)
}

pub(crate) trait Emit<'a> {
    fn emit(&'a self, ctx: &mut Ctx, state: State, out: &mut Vec<Statement<'a>>);
}

impl<'a> Emit<'a> for Attribute<'_> {
    fn emit(&'a self, ctx: &mut Ctx, state: State, out: &mut Vec<Statement<'a>>) {
        let target = ctx.target(state.depth, out);
        out.push(Statement::SetAttribute {
            target,
            name: self.name,
            value: &self.value,
        });
    }
}

impl<'a> Emit<'a> for Child<'_> {
    /// `state` belongs to the element owning this child.
    fn emit(&'a self, ctx: &mut Ctx, state: State, out: &mut Vec<Statement<'a>>) {
        match self {
            Child::Element(element) => {
                let target = ctx.target(state.depth, out);
                out.push(Statement::BindParent {
                    declare: ctx.declare_parent(),
                    target,
                });
                out.push(Statement::CreateElement {
                    declare: ctx.declare_element(),
                    tag_name: element.tag_name,
                });
                out.push(Statement::AppendChild);

                let state = state.child();
                ctx.descend(state.depth);
                element.emit(ctx, state, out);
            }
            Child::Text { key, value } => {
                let target = ctx.target(state.depth, out);
                out.push(Statement::SetAttribute {
                    target,
                    name: key,
                    value,
                });
            }
        }
    }
}

impl<'a> Emit<'a> for Element<'_> {
    fn emit(&'a self, ctx: &mut Ctx, state: State, out: &mut Vec<Statement<'a>>) {
        self.attrs
            .iter()
            .for_each(|attr| attr.emit(ctx, state, out));
        self.children
            .iter()
            .for_each(|child| child.emit(ctx, state, out));
    }
}

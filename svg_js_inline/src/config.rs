//! Types about configuration.

#[cfg(feature = "config_serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "config_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config_serde", serde(rename_all = "camelCase", default))]
/// The whole configuration of svg_js_inline.
pub struct TransformOptions {
    #[cfg_attr(feature = "config_serde", serde(flatten))]
    pub layout: LayoutOptions,
    #[cfg_attr(feature = "config_serde", serde(flatten))]
    pub module: ModuleOptions,
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "config_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config_serde", serde(rename_all = "camelCase", default))]
/// Configuration of the generated module wrapper.
pub struct ModuleOptions {
    /// Emit `module.exports=function(){` instead of `export default function(){`.
    pub cjs_module: bool,
}

impl ModuleOptions {
    pub fn format(&self) -> ModuleFormat {
        if self.cjs_module {
            ModuleFormat::CommonJs
        } else {
            ModuleFormat::EsModule
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleFormat {
    EsModule,
    CommonJs,
}

impl ModuleFormat {
    pub fn open_line(self) -> &'static str {
        match self {
            ModuleFormat::EsModule => "export default function(){",
            ModuleFormat::CommonJs => "module.exports=function(){",
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "config_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config_serde", serde(rename_all = "camelCase", default))]
/// Configuration related to layout of the generated code.
pub struct LayoutOptions {
    /// Put the whole module on a single line without any whitespace.
    ///
    /// When disabled, every statement goes on its own line inside the function body.
    pub compact: bool,
    pub use_tabs: bool,
    pub indent_width: usize,
    pub line_break: LineBreak,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            compact: true,
            use_tabs: false,
            indent_width: 2,
            line_break: LineBreak::Lf,
        }
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "config_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config_serde", serde(rename_all = "camelCase"))]
pub enum LineBreak {
    #[default]
    Lf,
    Crlf,
}

impl From<LineBreak> for tiny_pretty::LineBreak {
    fn from(value: LineBreak) -> Self {
        match value {
            LineBreak::Lf => tiny_pretty::LineBreak::Lf,
            LineBreak::Crlf => tiny_pretty::LineBreak::Crlf,
        }
    }
}

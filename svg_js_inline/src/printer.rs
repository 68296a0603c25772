use crate::{config::TransformOptions, emitter::Statement};
use tiny_pretty::{Doc, IndentKind, PrintOptions};

const CLOSE_LINE: &str = "}";

/// Wrap the function body into the module selected by `options`.
pub(crate) fn print(statements: &[Statement], options: &TransformOptions) -> String {
    let open = Doc::text(options.module.format().open_line());
    let body = statements
        .iter()
        .map(|statement| Doc::text(statement.to_string()));

    let doc = if options.layout.compact {
        open.concat(body).append(Doc::text(CLOSE_LINE))
    } else {
        open.append(
            Doc::hard_line()
                .concat(itertools::intersperse(body, Doc::hard_line()))
                .nest(options.layout.indent_width),
        )
        .append(Doc::hard_line())
        .append(Doc::text(CLOSE_LINE))
    };

    tiny_pretty::print(
        &doc,
        &PrintOptions {
            indent_kind: if options.layout.use_tabs {
                IndentKind::Tab
            } else {
                IndentKind::Space
            },
            line_break: options.layout.line_break.clone().into(),
            width: 80,
            tab_size: options.layout.indent_width,
        },
    )
}

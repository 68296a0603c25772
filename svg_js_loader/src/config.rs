use dprint_core::configuration::{
    ConfigKeyMap, ConfigurationDiagnostic, GlobalConfiguration, NewLineKind,
    ResolveConfigurationResult, get_unknown_property_diagnostics, get_value,
};
use svg_js_inline::config::{LayoutOptions, LineBreak, ModuleOptions, TransformOptions};

pub fn resolve_config(
    mut config: ConfigKeyMap,
    global_config: &GlobalConfiguration,
) -> ResolveConfigurationResult<TransformOptions> {
    let mut diagnostics = Vec::new();
    let default_layout = LayoutOptions::default();
    let options = TransformOptions {
        layout: LayoutOptions {
            compact: get_value(
                &mut config,
                "compact",
                default_layout.compact,
                &mut diagnostics,
            ),
            use_tabs: get_value(
                &mut config,
                "useTabs",
                global_config.use_tabs.unwrap_or(default_layout.use_tabs),
                &mut diagnostics,
            ),
            indent_width: get_value(
                &mut config,
                "indentWidth",
                global_config
                    .indent_width
                    .unwrap_or(default_layout.indent_width as u8),
                &mut diagnostics,
            ) as usize,
            line_break: match &*get_value(
                &mut config,
                "lineBreak",
                match global_config.new_line_kind {
                    Some(NewLineKind::CarriageReturnLineFeed) => "crlf",
                    _ => "lf",
                }
                .to_string(),
                &mut diagnostics,
            ) {
                "lf" => LineBreak::Lf,
                "crlf" => LineBreak::Crlf,
                _ => {
                    diagnostics.push(ConfigurationDiagnostic {
                        property_name: "lineBreak".into(),
                        message: "invalid value for config `lineBreak`".into(),
                    });
                    LineBreak::Lf
                }
            },
        },
        module: ModuleOptions {
            cjs_module: get_value(&mut config, "cjsModule", false, &mut diagnostics),
        },
    };

    diagnostics.extend(get_unknown_property_diagnostics(config));

    ResolveConfigurationResult {
        config: options,
        diagnostics,
    }
}

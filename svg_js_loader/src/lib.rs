//! Glue between a bundler's loader pipeline and [`svg_js_inline`].

pub use crate::config::resolve_config;
use anyhow::Result;
use dprint_core::configuration::{ConfigKeyMap, GlobalConfiguration, ResolveConfigurationResult};
use std::path::Path;
use svg_js_inline::transform;

mod config;

/// What the host bundler exposes to a loader while it processes one asset.
pub trait LoaderContext {
    /// Tell the host the output only depends on the input content and options.
    fn cacheable(&mut self);

    /// Raw options configured for this loader.
    fn options(&self) -> ConfigKeyMap;

    /// Defaults shared with other loaders, such as indentation.
    fn global_config(&self) -> GlobalConfiguration {
        GlobalConfiguration::default()
    }

    /// File being processed, for diagnostics only.
    fn resource_path(&self) -> Option<&Path> {
        None
    }
}

/// Run the loader on one SVG asset.
///
/// The result is marked cacheable before anything else happens, even if the transform fails.
/// Unknown or invalid options are reported as warnings and replaced by their defaults.
pub fn load(ctx: &mut impl LoaderContext, content: &str) -> Result<String> {
    ctx.cacheable();

    let ResolveConfigurationResult {
        config: options,
        diagnostics,
    } = resolve_config(ctx.options(), &ctx.global_config());
    let resource = ctx
        .resource_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unknown>".into());
    for diagnostic in &diagnostics {
        log::warn!(
            "{resource}: {} ({})",
            diagnostic.message,
            diagnostic.property_name
        );
    }

    let module = transform(content, &options)
        .map_err(|err| anyhow::Error::new(err).context(format!("failed to load '{resource}'")))?;
    log::debug!("{resource}: generated {} bytes", module.len());
    Ok(module)
}

/// Read loader options written as a JSON object, as bundler configs usually carry them.
pub fn options_from_json(json: &str) -> Result<ConfigKeyMap> {
    serde_json::from_str(json).map_err(anyhow::Error::from)
}

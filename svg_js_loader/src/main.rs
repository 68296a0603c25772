use anyhow::{Context, Result};
use dprint_core::configuration::ConfigKeyMap;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use svg_js_loader::{LoaderContext, load, options_from_json};

struct FileContext {
    path: PathBuf,
    options: ConfigKeyMap,
}

impl LoaderContext for FileContext {
    fn cacheable(&mut self) {}

    fn options(&self) -> ConfigKeyMap {
        self.options.clone()
    }

    fn resource_path(&self) -> Option<&Path> {
        Some(self.path.as_path())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args().skip(1);
    let path = PathBuf::from(
        args.next()
            .context("usage: svg-js-inline <file.svg> [options-json]")?,
    );
    let options = match args.next() {
        Some(json) => options_from_json(&json).context("invalid options")?,
        None => ConfigKeyMap::new(),
    };
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let mut ctx = FileContext { path, options };
    print!("{}", load(&mut ctx, &content)?);
    Ok(())
}

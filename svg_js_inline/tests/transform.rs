use insta::{Settings, assert_snapshot, glob};
use std::{collections::HashMap, fs, path::Path};
use svg_js_inline::{config::TransformOptions, transform};

#[test]
fn transform_snapshot() {
    glob!("transform/**/*.svg", |path| {
        let input = fs::read_to_string(path).unwrap();

        let options = fs::read_to_string(path.with_file_name("config.toml"))
            .map(|config_file| {
                toml::from_str::<HashMap<String, TransformOptions>>(&config_file).unwrap()
            })
            .ok();

        if let Some(options) = options {
            options.into_iter().for_each(|(option_name, options)| {
                let output = run_transform_test(path, &input, &options);
                build_settings(path).bind(|| {
                    let name = path.file_stem().unwrap().to_str().unwrap();
                    assert_snapshot!(format!("{name}.{option_name}"), output);
                });
            })
        } else {
            let output = run_transform_test(path, &input, &Default::default());
            build_settings(path).bind(|| {
                let name = path.file_stem().unwrap().to_str().unwrap();
                assert_snapshot!(name, output);
            });
        }
    });
}

fn run_transform_test(path: &Path, input: &str, options: &TransformOptions) -> String {
    let output = transform(input, options)
        .map_err(|err| format!("failed to transform '{}': {:?}", path.display(), err))
        .unwrap();
    let second_run = transform(input, options)
        .map_err(|err| format!("failed to transform '{}': {:?}", path.display(), err))
        .unwrap();
    similar_asserts::assert_eq!(
        output,
        second_run,
        "'{}' output is not deterministic",
        path.display()
    );

    output
}

fn build_settings(path: &Path) -> Settings {
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path(path.parent().unwrap());
    settings.remove_snapshot_suffix();
    settings.set_prepend_module_to_snapshot(false);
    settings.remove_input_file();
    settings.set_omit_expression(true);
    settings.remove_info();
    settings
}

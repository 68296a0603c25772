use std::{env, error::Error, fs, io};
use svg_js_inline::{config::TransformOptions, transform};

fn main() -> Result<(), Box<dyn Error>> {
    let file_path = env::args().nth(1).ok_or("usage: transform <file.svg>")?;
    let code = fs::read_to_string(file_path)?;
    let options = match fs::read_to_string("svg_js_inline.toml") {
        Ok(s) => toml::from_str(&s)?,
        Err(error) => {
            if error.kind() == io::ErrorKind::NotFound {
                TransformOptions::default()
            } else {
                return Err(Box::new(error));
            }
        }
    };

    let module = transform(&code, &options)?;
    println!("{module}");
    Ok(())
}

//! Bundles the navbar stylesheets into a single minified file that `App`
//! links through `asset!`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const STYLE_DIR: &str = "assets/css";
const ENTRY_STYLESHEET: &str = "assets/css/main.css";
const BUNDLE_DIR: &str = "assets/dist";
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

/// Resolve `@import`s from `entry` and return the minified CSS.
fn bundle_stylesheets(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundling {}: {e}", entry.display()))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {e}"))?;

    let output = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {e}"))?;
    Ok(output.code)
}

fn main() {
    println!("cargo:rerun-if-changed={STYLE_DIR}");

    let css = match bundle_stylesheets(Path::new(ENTRY_STYLESHEET)) {
        Ok(css) => css,
        Err(e) => panic!("navbar stylesheet bundle failed while {e}"),
    };

    if let Err(e) = fs::create_dir_all(BUNDLE_DIR).and_then(|_| fs::write(BUNDLE_PATH, css)) {
        panic!("could not write {BUNDLE_PATH}: {e}");
    }
}

//! `list` command: show configured bundles.

use crate::config::{BundleConfig, BundlerConfig, Strategy};
use owo_colors::{OwoColorize, Stream};
use std::path::Path;

/// Print one line per bundle.
pub fn list_bundles(config: &BundlerConfig) {
    match &config.config_path {
        Some(path) => crate::log!("config"; "{}", path.display()),
        None => crate::log!("config"; "no config file, using built-in bundles"),
    }
    for bundle in &config.bundle {
        println!("{}", describe(bundle, config.get_root()));
    }
}

/// `name  strategy  inputs -> output`
fn describe(bundle: &BundleConfig, root: &Path) -> String {
    let inputs: Vec<_> = bundle
        .input_specs()
        .iter()
        .map(|spec| spec.path.display().to_string())
        .collect();
    let strategy = match bundle.strategy {
        Strategy::Markers => "markers",
        Strategy::Skeleton => "skeleton",
    };
    format!(
        "{:<12} {:<9} {} -> {}",
        bundle
            .name
            .if_supports_color(Stream::Stdout, |n| n.bold().to_string()),
        strategy,
        inputs.join(", "),
        bundle.output_path(root).display()
    )
}

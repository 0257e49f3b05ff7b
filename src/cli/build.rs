//! Bundle building orchestration.
//!
//! Pipeline per bundle, strictly sequential:
//! - **Load** - read every input file (all-or-nothing)
//! - **Transform** - optional best-effort minification
//! - **Compose** - markers or skeleton strategy
//! - **Write** - overwrite the output file and report its size
//!
//! Nothing is written until every input of the bundle has been read and the
//! document composed, so a failed bundle leaves its previous output intact.

use crate::{
    asset::{AssetKind, Artifact, load_artifacts, minify::minify},
    compose::{self, MarkerInline, SkeletonParts},
    config::{BundleConfig, BundlerConfig, Strategy},
    debug,
    embed::demo,
    log,
    output::{Document, write_document},
};
use anyhow::{Context, Result, anyhow};

/// Build the selected bundles in config order, stopping at the first failure.
pub fn build_bundles(config: &BundlerConfig, names: &[String]) -> Result<()> {
    let bundles = config.select(names)?;
    for bundle in &bundles {
        build_bundle(config, bundle)
            .with_context(|| format!("failed to build bundle `{}`", bundle.name))?;
    }
    if bundles.len() > 1 {
        log!("done"; "built {} bundles", bundles.len());
    }
    Ok(())
}

/// Run Load → Transform → Compose → Write for one bundle.
pub fn build_bundle(config: &BundlerConfig, bundle: &BundleConfig) -> Result<()> {
    let doc = compose_bundle(config, bundle)?;
    let report = write_document(&doc)?;
    log!("build"; "wrote {}", report.path.display());
    log!("build"; "size: {}", report);
    Ok(())
}

/// Load, transform and compose a bundle without touching the output file.
pub fn compose_bundle(config: &BundlerConfig, bundle: &BundleConfig) -> Result<Document> {
    let input_dir = bundle.input_dir(config.get_root());
    debug!("build"; "bundle `{}` from {}", bundle.name, input_dir.display());

    let artifacts = load_artifacts(&input_dir, &bundle.input_specs())?;
    let minify_enabled = bundle.minify_or(config.minify);
    let texts: Vec<String> = artifacts
        .iter()
        .map(|a| prepare_text(a, minify_enabled))
        .collect();

    let html = match bundle.strategy {
        Strategy::Markers => compose_with_markers(config, bundle, &artifacts, &texts)?,
        Strategy::Skeleton => compose_with_skeleton(bundle, &artifacts, &texts, minify_enabled)?,
    };

    Ok(Document::new(bundle.output_path(config.get_root()), html))
}

/// Apply minification if enabled, logging the size change.
fn prepare_text(artifact: &Artifact, minify_enabled: bool) -> String {
    if !minify_enabled || artifact.kind == AssetKind::Markup {
        return artifact.text.clone();
    }
    let minified = minify(artifact.kind, &artifact.text).into_owned();
    debug!("minify"; "{} {} -> {} bytes",
        artifact.path.display(), artifact.text.len(), minified.len());
    minified
}

/// Artifacts are loaded template first, then one per inline rule.
fn compose_with_markers(
    config: &BundlerConfig,
    bundle: &BundleConfig,
    artifacts: &[Artifact],
    texts: &[String],
) -> Result<String> {
    let (template, inputs) = artifacts
        .split_first()
        .ok_or_else(|| anyhow!("bundle `{}` has no template", bundle.name))?;

    let inlines: Vec<_> = bundle
        .inline
        .iter()
        .zip(inputs.iter().zip(&texts[1..]))
        .map(|(rule, (artifact, text))| MarkerInline {
            marker: &rule.marker,
            artifact,
            text,
        })
        .collect();

    Ok(compose::compose_markers(
        template,
        &inlines,
        config.strict_markers,
    )?)
}

/// Artifacts are loaded in the order style?, script, app?; missing optional
/// parts fall back to the built-in stylesheet and application logic.
fn compose_with_skeleton(
    bundle: &BundleConfig,
    artifacts: &[Artifact],
    texts: &[String],
    minify_enabled: bool,
) -> Result<String> {
    let mut loaded = artifacts.iter().zip(texts);

    let builtin_style = Artifact::inline(AssetKind::Style, "<built-in style>", demo::STYLE_CSS);
    let builtin_app = Artifact::inline(AssetKind::Script, "<built-in app>", demo::APP_JS);
    let builtin_style_text = prepare_text(&builtin_style, minify_enabled);
    let builtin_app_text = prepare_text(&builtin_app, minify_enabled);

    let mut next = |present: bool| {
        if present { loaded.next() } else { None }
    };
    let style = next(bundle.style.is_some());
    let script = next(bundle.script.is_some())
        .ok_or_else(|| anyhow!("bundle `{}` has no script", bundle.name))?;
    let app = next(bundle.app.is_some());

    let parts = SkeletonParts {
        title: bundle.title.as_deref().unwrap_or(demo::DEFAULT_TITLE),
        style: style
            .map(|(a, t)| (a, t.as_str()))
            .unwrap_or((&builtin_style, builtin_style_text.as_str())),
        script: (script.0, script.1.as_str()),
        app: app
            .map(|(a, t)| (a, t.as_str()))
            .unwrap_or((&builtin_app, builtin_app_text.as_str())),
    };

    Ok(compose::compose_skeleton(&parts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InlineRule;
    use crate::error::BundleError;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    const LINK: &str = r#"<link rel="stylesheet" href="style.css">"#;
    const SCRIPT: &str = r#"<script src="script.js"></script>"#;

    fn config_at(root: &Path, bundles: Vec<BundleConfig>) -> BundlerConfig {
        BundlerConfig {
            root: root.to_path_buf(),
            bundle: bundles,
            ..BundlerConfig::default()
        }
    }

    fn write_site(root: &Path) {
        let src = root.join("website/src");
        fs::create_dir_all(&src).unwrap();
        fs::write(
            src.join("index.html"),
            format!("<html><head>{LINK}</head><body>{SCRIPT}</body></html>"),
        )
        .unwrap();
        fs::write(src.join("style.css"), "a{color:blue}").unwrap();
        fs::write(src.join("script.js"), "console.log('hi');").unwrap();
    }

    fn bundle_error(err: &anyhow::Error) -> Option<&BundleError> {
        err.chain().find_map(|e| e.downcast_ref::<BundleError>())
    }

    #[test]
    fn test_build_site_bundle() {
        let dir = TempDir::new().unwrap();
        write_site(dir.path());
        let config = config_at(dir.path(), vec![BundleConfig::site()]);

        build_bundles(&config, &[]).unwrap();

        let html = fs::read_to_string(dir.path().join("lxclua_official_site.html")).unwrap();
        assert!(html.contains("<style>\na{color:blue}\n</style>"));
        assert!(html.contains("<script>\nconsole.log('hi');\n</script>"));
        assert!(!html.contains(LINK));
        assert!(!html.contains(SCRIPT));
    }

    #[test]
    fn test_build_site_minified() {
        let dir = TempDir::new().unwrap();
        write_site(dir.path());
        fs::write(
            dir.path().join("website/src/style.css"),
            "body {\n  color: red; /* note */\n}",
        )
        .unwrap();
        let mut config = config_at(dir.path(), vec![BundleConfig::site()]);
        config.minify = true;

        let doc = compose_bundle(&config, &config.bundle[0]).unwrap();
        assert!(doc.html.contains("<style>\nbody{color:red}\n</style>"));
    }

    #[test]
    fn test_build_demo_bundle() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("lxclua.js"), "var LuaModule = function(m){};").unwrap();
        let config = config_at(dir.path(), vec![BundleConfig::demo()]);

        build_bundles(&config, &["demo".to_string()]).unwrap();

        let html = fs::read_to_string(dir.path().join("lxclua_standalone.html")).unwrap();
        assert!(html.contains("<title>LXCLUA WebAssembly</title>"));
        let runtime = html.find("var LuaModule = function(m){};").unwrap();
        let app = html.find("LuaModule(Module)").unwrap();
        let style = html.find("#output").unwrap();
        assert!(style < runtime && runtime < app);
    }

    #[test]
    fn test_demo_with_custom_parts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rt.js"), "rt();").unwrap();
        fs::write(dir.path().join("page.css"), "p{}").unwrap();
        fs::write(dir.path().join("app.js"), "start();").unwrap();
        let bundle = BundleConfig {
            script: Some("rt.js".into()),
            style: Some("page.css".into()),
            app: Some("app.js".into()),
            title: Some("Custom".into()),
            ..BundleConfig::demo()
        };
        let config = config_at(dir.path(), vec![bundle]);

        let doc = compose_bundle(&config, &config.bundle[0]).unwrap();
        assert!(doc.html.contains("<title>Custom</title>"));
        assert!(doc.html.contains("p{}"));
        assert!(doc.html.contains("start();"));
        assert!(!doc.html.contains("LuaModule(Module)"));
        assert!(!doc.html.contains("#output {"));
    }

    #[test]
    fn test_missing_script_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        write_site(dir.path());
        fs::remove_file(dir.path().join("website/src/script.js")).unwrap();
        let output = dir.path().join("lxclua_official_site.html");
        fs::write(&output, "previous").unwrap();
        let config = config_at(dir.path(), vec![BundleConfig::site()]);

        let err = build_bundles(&config, &[]).unwrap_err();

        assert!(matches!(
            bundle_error(&err),
            Some(BundleError::MissingInputFile { .. })
        ));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let config = config_at(dir.path(), vec![BundleConfig::demo()]);

        assert!(build_bundles(&config, &[]).is_err());
        assert!(!dir.path().join("lxclua_standalone.html").exists());
    }

    #[test]
    fn test_repeated_builds_identical() {
        let dir = TempDir::new().unwrap();
        write_site(dir.path());
        let config = config_at(dir.path(), vec![BundleConfig::site()]);
        let output = dir.path().join("lxclua_official_site.html");

        build_bundles(&config, &[]).unwrap();
        let first = fs::read(&output).unwrap();
        build_bundles(&config, &[]).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_strict_marker_missing() {
        let dir = TempDir::new().unwrap();
        write_site(dir.path());
        fs::write(
            dir.path().join("website/src/index.html"),
            format!("<html>{LINK}</html>"),
        )
        .unwrap();
        let mut config = config_at(dir.path(), vec![BundleConfig::site()]);

        let err = compose_bundle(&config, &config.bundle[0]).unwrap_err();
        assert!(matches!(
            bundle_error(&err),
            Some(BundleError::MarkerNotFound { .. })
        ));

        config.strict_markers = false;
        let doc = compose_bundle(&config, &config.bundle[0]).unwrap();
        assert_eq!(doc.html, "<html><style>\na{color:blue}\n</style></html>");
    }

    #[test]
    fn test_custom_rules_in_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("t.html"), "<!--css--><!--js-->").unwrap();
        fs::write(dir.path().join("a.css"), "a{}").unwrap();
        fs::write(dir.path().join("b.js"), "b()").unwrap();
        let bundle = BundleConfig {
            name: "custom".into(),
            template: Some("t.html".into()),
            output: "out/custom.html".into(),
            inline: vec![
                InlineRule::new(AssetKind::Style, "<!--css-->", "a.css"),
                InlineRule::new(AssetKind::Script, "<!--js-->", "b.js"),
            ],
            ..BundleConfig::default()
        };
        let config = config_at(dir.path(), vec![bundle]);

        build_bundles(&config, &[]).unwrap();
        let html = fs::read_to_string(dir.path().join("out/custom.html")).unwrap();
        assert_eq!(html, "<style>\na{}\n</style><script>\nb()\n</script>");
    }
}

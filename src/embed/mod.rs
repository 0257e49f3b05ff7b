//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `demo` - Built-in document skeleton for the interpreter demo page
//!
//! # Usage
//!
//! ```ignore
//! use embed::demo::{self, SkeletonVars};
//!
//! let html = demo::render_page(&SkeletonVars {
//!     title: "LXCLUA WebAssembly",
//!     style: demo::STYLE_CSS,
//!     script: &runtime_js,
//!     app: demo::APP_JS,
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod demo {
    use super::{Template, TemplateVars};

    /// Default page title for the demo skeleton.
    pub const DEFAULT_TITLE: &str = "LXCLUA WebAssembly";

    /// Stylesheet used when the bundle does not provide one.
    pub const STYLE_CSS: &str = include_str!("demo/style.css");

    /// Application logic driving the interpreter module.
    pub const APP_JS: &str = include_str!("demo/app.js");

    /// Variables for the demo page skeleton.
    ///
    /// `title` must already be HTML-escaped.
    pub struct SkeletonVars<'a> {
        pub title: &'a str,
        pub style: &'a str,
        pub script: &'a str,
        pub app: &'a str,
    }

    impl TemplateVars for SkeletonVars<'_> {
        fn bindings(&self) -> Vec<(&'static str, &str)> {
            vec![
                ("__TITLE__", self.title),
                ("__STYLE__", self.style),
                ("__SCRIPT__", self.script),
                ("__APP__", self.app),
            ]
        }
    }

    /// Single-file page: styles, then the runtime script, then the app logic.
    pub const PAGE_HTML: &str = include_str!("demo/page.html");

    /// Render the page skeleton.
    pub fn render_page(vars: &SkeletonVars<'_>) -> String {
        Template::new(PAGE_HTML).render(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::demo::*;

    #[test]
    fn test_page_render() {
        let vars = SkeletonVars {
            title: "Demo",
            style: "body{}",
            script: "var LuaModule;",
            app: "run();",
        };
        let html = render_page(&vars);
        assert!(html.contains("<title>Demo</title>"));
        assert!(html.contains("<h2>Demo</h2>"));
        assert!(!html.contains("__TITLE__"));
        assert!(!html.contains("__STYLE__"));
        assert!(!html.contains("__SCRIPT__"));
        assert!(!html.contains("__APP__"));
    }

    #[test]
    fn test_page_order() {
        let runtime = String::from("/*runtime*/");
        let html = render_page(&SkeletonVars {
            title: DEFAULT_TITLE,
            style: STYLE_CSS,
            script: &runtime,
            app: APP_JS,
        });
        let style = html.find(STYLE_CSS).unwrap();
        let script = html.find("/*runtime*/").unwrap();
        let app = html.find(APP_JS).unwrap();
        assert!(style < script);
        assert!(script < app);
    }

    #[test]
    fn test_app_js_drives_module() {
        assert!(APP_JS.contains("LuaModule(Module)"));
        assert!(APP_JS.contains("function runLua()"));
    }
}

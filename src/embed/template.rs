//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    /// `(placeholder, value)` pairs injected into the template.
    fn bindings(&self) -> Vec<(&'static str, &str)>;

    fn apply(&self, content: &str) -> String {
        substitute(content, &self.bindings())
    }
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace placeholders in a single left-to-right pass.
///
/// Injected values are never rescanned, so a value that happens to contain
/// another placeholder name is embedded verbatim.
pub fn substitute(content: &str, bindings: &[(&str, &str)]) -> String {
    let extra: usize = bindings.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    let mut rest = content;

    loop {
        let next = bindings
            .iter()
            .filter(|(key, _)| !key.is_empty())
            .filter_map(|(key, value)| rest.find(key).map(|pos| (pos, *key, *value)))
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, key, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

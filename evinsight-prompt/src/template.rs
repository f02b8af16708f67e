use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::format::UNKNOWN;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid placeholder pattern"))
}

/// Text with `{{name}}` placeholders.
///
/// Substituted values are inserted verbatim and never rescanned, so user text
/// containing braces stays as typed. A placeholder without a value renders as
/// `Unknown`.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: Cow<'static, str>,
}

impl PromptTemplate {
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, vars: &HashMap<&str, String>) -> String {
        placeholder_pattern()
            .replace_all(&self.template, |caps: &regex::Captures| {
                vars.get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN.to_string())
            })
            .into_owned()
    }
}

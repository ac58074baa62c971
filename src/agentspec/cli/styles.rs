//! Styles for the agentspec CLI.
//!
//! Templates refer to semantic style names only (`rule_id`, `muted`...), never
//! to colors. The theme below maps each name to a `console::Style`, and is
//! built once through `once_cell::sync::Lazy`.
//!
//! A name with no entry in the theme renders with a `(!?)` marker in front of
//! the text, which makes typos in templates visible right away.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Semantic style names used by templates and render code.
pub mod names {
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
    pub const MUTED: &str = "muted";
    pub const RULE_ID: &str = "rule_id";
    pub const FINDING_TITLE: &str = "finding_title";
    pub const PRESET_ID: &str = "preset_id";
    pub const CONFIG_KEY: &str = "config_key";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static AGENTSPEC_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::MUTED, Style::new().color256(245).italic())
        .add(names::RULE_ID, Style::new().cyan())
        .add(names::FINDING_TITLE, Style::new().bold())
        .add(names::PRESET_ID, Style::new().yellow())
        .add(names::CONFIG_KEY, Style::new().bold())
});

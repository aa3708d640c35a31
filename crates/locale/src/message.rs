//! Message model and template rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A translatable message: stable id, default text, named substitutions.
///
/// The default text may reference substitutions as `${name}`. Translations
/// looked up by id are expected to carry the same placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    default: String,
    args: BTreeMap<String, String>,
}

impl Message {
    pub fn new(id: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default: default.into(),
            args: BTreeMap::new(),
        }
    }

    /// Attach a named substitution.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    pub fn args(&self) -> &BTreeMap<String, String> {
        &self.args
    }

    /// Render the default text with substitutions applied.
    pub fn render_default(&self) -> String {
        render_template(&self.default, &self.args)
    }
}

/// Substitute `${name}` placeholders in `template` from `args`.
///
/// Placeholders without a matching argument are left untouched.
pub fn render_template(template: &str, args: &BTreeMap<String, String>) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("${{{}}}", name), value);
    }
    out
}

/// Localization collaborator: renders a message for the current locale.
pub trait Localizer {
    fn translate(&self, message: &Message) -> String;
}

/// Localizer that renders the untranslated default text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLocalizer;

impl Localizer for NullLocalizer {
    fn translate(&self, message: &Message) -> String {
        message.render_default()
    }
}

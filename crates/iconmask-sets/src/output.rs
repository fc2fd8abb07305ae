//! Rule table serialisation

use iconmask_types::StyleRule;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::fmt::Write as _;
use std::str::FromStr;

/// Output format of a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain CSS rules
    #[default]
    Css,
    /// `{ class: { property: value } }` object
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}' (expected css or json)")),
        }
    }
}

/// Serialise rules in the given format
///
/// # Errors
///
/// Only JSON serialisation can fail.
pub fn render(rules: &[StyleRule], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Css => Ok(to_css(rules)),
        OutputFormat::Json => to_json(rules),
    }
}

/// Escape a class name for use in a selector
#[must_use]
pub fn escape_class_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render rules as CSS, one block per utility
#[must_use]
pub fn to_css(rules: &[StyleRule]) -> String {
    let mut css = String::new();

    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        let _ = writeln!(css, ".{} {{", escape_class_name(&rule.class_name));
        for (property, value) in rule.record.iter() {
            let _ = writeln!(css, "  {property}: {value};");
        }
        css.push_str("}\n");
    }

    css
}

struct RuleMap<'a>(&'a [StyleRule]);

impl Serialize for RuleMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rule in self.0 {
            map.serialize_entry(&rule.class_name, &rule.record)?;
        }
        map.end()
    }
}

/// Render rules as a pretty-printed JSON object keyed by class name
///
/// # Errors
///
/// Propagates `serde_json` failures.
pub fn to_json(rules: &[StyleRule]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RuleMap(rules))
}

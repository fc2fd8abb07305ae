//! Mask-based icon style generation

use crate::source::IconSource;
use iconmask_types::{IconError, Result, StyleRecord, Theme};
use std::path::Path;

/// Theme key for the default icon size (24px in the stock scale)
pub const SIZE_DEFAULT: &str = "spacing.6";
/// Theme key for the mini icon size (20px)
pub const SIZE_MINI: &str = "spacing.5";
/// Theme key for the micro icon size (16px)
pub const SIZE_MICRO: &str = "spacing.4";

/// Remove every CR and LF so the SVG fits on one line of a data URI
#[must_use]
pub fn strip_line_breaks(svg: &str) -> String {
    svg.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Read an icon file and return its single-line SVG payload
///
/// # Errors
///
/// Returns [`IconError::ReadFile`] with the raw I/O error if the file is gone
/// or unreadable.
pub fn read_inline_svg(source: &dyn IconSource, path: &Path) -> Result<String> {
    let content = source
        .read_to_string(path)
        .map_err(|source| IconError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(strip_line_breaks(&content))
}

/// Resolve a theme value
///
/// # Errors
///
/// Returns [`IconError::MissingThemeValue`] when the theme has no entry.
pub fn theme_value(theme: &dyn Theme, path: &str) -> Result<String> {
    theme
        .lookup(path)
        .ok_or_else(|| IconError::MissingThemeValue(path.to_string()))
}

/// Build the declarations for one masked icon
///
/// The SVG is bound to the `--{prefix}-{name}` custom property and used as
/// the element mask; the element is painted with `currentColor`.
#[must_use]
pub fn mask_style(prefix: &str, name: &str, svg: &str, size: &str) -> StyleRecord {
    let var = format!("--{prefix}-{name}");
    let var_ref = format!("var({var})");

    StyleRecord::new()
        .with(var, format!("url('data:image/svg+xml;utf8,{svg}')"))
        .with("-webkit-mask", var_ref.clone())
        .with("mask", var_ref)
        .with("mask-repeat", "no-repeat")
        .with("-webkit-mask-size", "contain")
        .with("mask-size", "contain")
        .with("-webkit-mask-position", "center")
        .with("mask-position", "center")
        .with("background-color", "currentColor")
        .with("vertical-align", "middle")
        .with("display", "inline-block")
        .with("width", size)
        .with("height", size)
}

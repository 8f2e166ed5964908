//! Rewriting of inline documentation markup into Markdown friendly text
//!
//! Handles the small inline vocabulary found inside `summary`, `param`,
//! `typeparam` and `example` elements: `<para/>`, `<see cref="..."/>`,
//! `<paramref/>`, `<typeparamref/>` and `<code>` blocks. Anything else passes
//! through untouched.

use std::borrow::Cow;
use std::sync::LazyLock;
use regex::{Captures, Regex};
use super::constants::*;

static PARA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<para\s*/>").expect("Failed to compile para regex")
});

static SEE_CREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<see cref="[^"]:([^"]*)"\s*/>"#).expect("Failed to compile see regex")
});

static PARAMREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:type)?paramref name="([^"]*)"\s*/>"#).expect("Failed to compile paramref regex")
});

/// Rewrite a markup fragment.
///
/// # Arguments
///
/// * `fragment` - Raw XML fragment, e.g. the serialized `summary` element
/// * `wrapper_element` - Name of the element whose own `<name>`/`</name>` tags are
///   stripped first; empty to skip stripping
/// * `resolution_namespace` - Namespace prefix deciding whether a `see` reference
///   becomes a link or stays an inline code name
pub fn rewrite_markup(fragment: &str, wrapper_element: &str, resolution_namespace: &str) -> String {
    let text = strip_wrapper(fragment, wrapper_element);
    let text = PARA_RE.replace_all(&text, "\n");
    let text = SEE_CREF_RE.replace_all(&text, |caps: &Captures| {
        resolve_cref(&caps[1], resolution_namespace)
    });
    let text = PARAMREF_RE.replace_all(&text, "`$1`");

    text.replace(CODE_OPEN_TAG, &format!("\n{}{}", CODE_FENCE, CODE_LANGUAGE))
        .replace(CODE_CLOSE_TAG, CODE_FENCE)
}

fn strip_wrapper<'a>(fragment: &'a str, wrapper_element: &str) -> Cow<'a, str> {
    if wrapper_element.is_empty() {
        return Cow::Borrowed(fragment);
    }
    let pattern = format!("</?{}>", regex::escape(wrapper_element));
    match Regex::new(&pattern) {
        Ok(re) => Cow::Owned(re.replace_all(fragment, "").into_owned()),
        Err(e) => {
            log::warn!("Cannot strip wrapper element '{}': {}", wrapper_element, e);
            Cow::Borrowed(fragment)
        }
    }
}

/// Render a cross reference target.
///
/// Names inside the resolution namespace become `[Name](anchor)` links where the
/// anchor turns the last `.segment` into a lower-cased `#segment`. Everything else
/// (including any target when the namespace is blank) becomes `` `Name` ``.
pub fn resolve_cref(type_name: &str, resolution_namespace: &str) -> String {
    if !resolution_namespace.trim().is_empty() && type_name.starts_with(resolution_namespace) {
        return format!("[{}]({})", type_name, cref_anchor(type_name));
    }
    format!("`{}`", type_name)
}

fn cref_anchor(type_name: &str) -> String {
    match type_name.rfind('.') {
        Some(dot) if dot + 1 < type_name.len() => {
            format!("{}#{}", &type_name[..dot], type_name[dot + 1..].to_lowercase())
        }
        _ => type_name.to_string(),
    }
}

/// Split on carriage returns, newlines and tabs, dropping empty pieces
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n', '\t']).filter(|line| !line.is_empty())
}

/// Collapse a multi-line summary into one line.
///
/// Each line is trimmed and lines are joined with two spaces. Lines that are only
/// whitespace survive the split and collapse to nothing, widening the separator;
/// the result is trimmed.
pub fn normalize_summary(summary: &str) -> String {
    if summary.is_empty() {
        return String::new();
    }
    split_lines(summary)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(SUMMARY_LINE_SEPARATOR)
        .trim()
        .to_string()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove block indentation from an example.
///
/// The width of the leading whitespace on the last line is the baseline. Lines
/// indented at least that far lose exactly that many characters, shallower lines
/// are kept as they are. Empty lines are dropped and the rest joined with `\n`.
pub fn strip_indentation(block: &str) -> String {
    let lines: Vec<&str> = split_lines(block).collect();
    let Some(last) = lines.last() else {
        return String::new();
    };
    let width = leading_whitespace(last);

    lines
        .iter()
        .map(|&line| {
            if leading_whitespace(line) >= width {
                // Width counts chars, not bytes
                line.char_indices().nth(width).map_or("", |(i, _)| &line[i..])
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;

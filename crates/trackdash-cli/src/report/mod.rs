//! Dashboard panel command handlers for the CLI.
//!
//! Each handler turns its arguments into a [`ViewState`], asks the controller
//! for the derived view, and prints one panel of it as a plain-text table or
//! as JSON.
//!
//! [`ViewState`]: trackdash_analytics::ViewState

mod panels;
mod ranking;

use serde::Serialize;

pub(crate) use panels::{run_delta, run_highlights, run_series, run_summary};
pub(crate) use ranking::{run_contents, run_creators};

/// How a handler should print its panel.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Output {
    pub json: bool,
}

/// Print `value` as pretty JSON.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Thousands-separated integer, e.g. `149,856`.
pub(crate) fn fmt_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed percentage with one decimal, or an em dash when undefined.
pub(crate) fn fmt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |pct| format!("{pct:+.1}%"))
}

/// Clip `text` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

//! Report formatting: the single-pair line report and the multi-pair table.
//!
//! Both build plain strings so callers (and integration tests) can check the
//! exact layout without capturing stdout.

use crate::duration::Breakdown;
use crate::error::CaptimeError;
use crate::rate;

/// Fixed two-line table header. Column widths below (8 and 12) match the
/// dashes here.
pub const TABLE_HEADER: &str =
    "cap (GB)  speed (mb/s)  time to reach cap (at advertised capacity)\n\
     --------  ------------  ------------------------------------------";

/// Two-line report for one cap/speed pair: a `"<cap> GB cap @ <speed>
/// megabits:"` headline, then the breakdown indented four spaces.
///
/// Cap and speed print as truncated integers in the headline.
pub fn format_report(cap: f64, speed: f64) -> Result<String, CaptimeError> {
    let seconds = rate::seconds_to_cap(cap, speed)?;
    let breakdown = Breakdown::from_seconds(seconds);
    Ok(format!(
        "{} GB cap @ {} megabits:\n    {}",
        cap as u64, speed as u64, breakdown
    ))
}

/// Table over an ordered sequence of (cap, speed) pairs: the fixed header,
/// then one row per pair with cap right-aligned to 8 columns, speed to 12,
/// two-space separators, and the breakdown rendered as in [`format_report`].
pub fn render_table(
    figures: impl IntoIterator<Item = (f64, f64)>,
) -> Result<String, CaptimeError> {
    let mut out = String::from(TABLE_HEADER);
    for (cap, speed) in figures {
        let seconds = rate::seconds_to_cap(cap, speed)?;
        let breakdown = Breakdown::from_seconds(seconds);
        out.push('\n');
        out.push_str(&format!(
            "{:>8}  {:>12}  {}",
            cap as u64, speed as u64, breakdown
        ));
    }
    Ok(out)
}

//! Header and cell normalization helpers shared by source adapters.

use crate::types::Year;

/// Title-case a column header: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased (`"MODEL"` -> `"Model"`).
pub fn title_case(text: &str) -> String {
    let mut out = String::new();
    let mut previous_alpha = false;
    for ch in text.trim().chars() {
        if ch.is_alphabetic() {
            if previous_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(ch);
            previous_alpha = false;
        }
    }
    out
}

/// Year named by a column header.
///
/// Accepts plain years (`2050`), float-formatted years (`2050.0`), and the
/// World Bank form (`2050 [YR2050]`). Anything else is not a year column.
pub fn parse_year_label(label: &str) -> Option<Year> {
    let label = label.trim();
    let head = match label.split_once(" [YR") {
        Some((head, tail)) => {
            let tagged = tail.strip_suffix(']')?;
            if tagged != head {
                return None;
            }
            head
        }
        None => label.strip_suffix(".0").unwrap_or(label),
    };
    if head.len() != 4 || !head.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

/// Numeric value of a cell; blank and placeholder cells (`..`, `NA`, `-`)
/// are empty. Thousands separators are ignored.
pub fn parse_cell(cell: &str) -> Result<Option<f64>, String> {
    let cell = cell.trim();
    if cell.is_empty() || matches!(cell, ".." | "NA" | "N/A" | "-" | "…") {
        return Ok(None);
    }
    let cleaned: String = cell
        .chars()
        .filter(|ch| *ch != ',' && *ch != ' ' && *ch != '\u{a0}')
        .collect();
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("'{cell}' is not numeric"))
}

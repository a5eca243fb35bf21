//! Text summaries of tabular data (CSV and spreadsheet files).
//!
//! Tables are not fed to the model cell-by-cell; instead they are
//! reduced to a compact profile: column names, row count, numeric
//! ranges, and value counts for categorical columns.

use std::collections::BTreeMap;

/// Render a deterministic text profile of a table.
///
/// The first row of data is expected to have been split off as
/// `headers` already. A column is numeric when every non-empty cell
/// parses as a float; all other columns are treated as categorical and
/// get a value-count breakdown (counts descending, ties by value).
pub fn summarize(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Columns: {}\n", headers.join(", ")));
    out.push_str(&format!("Rows: {}\n", rows.len()));

    for (idx, name) in headers.iter().enumerate() {
        let cells: Vec<&str> = rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
            .collect();

        match numeric_profile(&cells) {
            Some((min, max, mean)) => {
                out.push_str(&format!(
                    "Column '{name}' (numeric): min={min}, max={max}, mean={mean:.2}\n"
                ));
            }
            None => {
                out.push_str(&format!("Value counts for '{name}':\n"));
                for (value, count) in value_counts(&cells) {
                    out.push_str(&format!("  {value}: {count}\n"));
                }
            }
        }
    }

    out
}

/// (min, max, mean) when every non-empty cell is numeric and at least
/// one cell is non-empty
fn numeric_profile(cells: &[&str]) -> Option<(f64, f64, f64)> {
    let values: Vec<f64> = cells
        .iter()
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    if values.is_empty() {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((min, max, mean))
}

/// Distinct values with occurrence counts, most frequent first and ties
/// broken by the value itself
fn value_counts(cells: &[&str]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for cell in cells {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed).or_default() += 1;
    }

    let mut ordered: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

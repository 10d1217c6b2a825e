//! Small numeric helpers used by the aggregator.

use std::collections::HashMap;

/// Returns the most frequent hour, or `None` for an empty slice.
///
/// Ties go to the lowest hour, which keeps the result independent of line
/// order.
pub fn most_active_hour(hours: &[u8]) -> Option<u8> {
    let mut counts = [0usize; 24];
    for &hour in hours {
        counts[usize::from(hour % 24)] += 1;
    }

    let max = *counts.iter().max()?;
    if max == 0 {
        return None;
    }

    counts
        .iter()
        .position(|&count| count == max)
        .map(|hour| hour as u8)
}

/// Formats an hour as a zero-padded two-digit string, e.g. `"09"`.
pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}")
}

/// Arithmetic mean, `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, `NaN` for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean.is_nan() {
        return f64::NAN;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Relative frequency of each distinct emoji, most frequent first.
///
/// Frequencies are `count / total` and sum to 1. Ties keep first-seen order.
/// An empty input gives an empty table.
pub fn emoji_frequencies(emojis: &[&str]) -> Vec<(String, f64)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for &emoji in emojis {
        match positions.get(emoji) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(emoji, counts.len());
                counts.push((emoji, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = emojis.len() as f64;
    counts
        .into_iter()
        .map(|(emoji, count)| (emoji.to_string(), count as f64 / total))
        .collect()
}

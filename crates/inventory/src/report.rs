//! Plain-text daily snapshots of the stock.

use core::fmt::Write;

use crate::item::Item;

/// Column header printed under every day banner.
pub const HEADER: &str = "name, sellIn, quality";

const DAY_PREFIX: &str = "-------- day ";

/// Render one day's block: banner, column header, one line per item, blank line.
pub fn render_day(day: usize, items: &[Item]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{DAY_PREFIX}{day} --------");
    let _ = writeln!(out, "{HEADER}");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push('\n');
    out
}

/// Cut a concatenated transcript back into per-day blocks.
///
/// Anything before the first banner is dropped.
pub fn split_days(text: &str) -> Vec<String> {
    text.split(DAY_PREFIX)
        .skip(1)
        .map(|block| format!("{DAY_PREFIX}{block}"))
        .collect()
}

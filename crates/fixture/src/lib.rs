//! Text-test fixture: ages the canonical shop stock day by day and prints a
//! snapshot per day, optionally checking each against a golden transcript.

pub mod error;

use std::io::Write;

use serde::Serialize;

use gildedrose_inventory::category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};
use gildedrose_inventory::{GildedRose, Item, check_invariants, report};

pub use error::{FixtureError, FixtureResult};

/// Golden transcript for days 0 through 11 of [`canonical_stock`].
pub const GOLDEN: &str = include_str!("../golden/texttest.txt");

/// Last day printed when none is requested.
pub const DEFAULT_LAST_DAY: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Snapshots are printed for days `0..=last_day`.
    pub last_day: usize,
    pub verify: bool,
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            last_day: DEFAULT_LAST_DAY,
            verify: false,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: usize,
    items: &'a [Item],
}

/// The stock the golden transcript was recorded with, in order.
pub fn canonical_stock() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}

/// Run the fixture over [`canonical_stock`], writing the transcript to `out`.
pub fn run<W: Write>(options: &Options, out: &mut W) -> FixtureResult<()> {
    let mut shop = GildedRose::new(canonical_stock());
    let golden = report::split_days(GOLDEN);

    if options.format == OutputFormat::Text {
        writeln!(out, "OMGHAI!")?;
    }

    for day in 0..=options.last_day {
        let rendered = report::render_day(day, shop.items());

        match options.format {
            OutputFormat::Text => writeln!(out, "{rendered}")?,
            OutputFormat::Json => {
                serde_json::to_writer(
                    &mut *out,
                    &DaySnapshot {
                        day,
                        items: shop.items(),
                    },
                )?;
                writeln!(out)?;
            }
        }

        if options.verify {
            verify_day(day, &rendered, golden.get(day).map(String::as_str), shop.items())?;
        }

        shop.update_quality();
    }

    tracing::info!(
        days = options.last_day + 1,
        items = shop.items().len(),
        verified = options.verify,
        "fixture finished"
    );
    Ok(())
}

fn verify_day(
    day: usize,
    rendered: &str,
    expected: Option<&str>,
    items: &[Item],
) -> FixtureResult<()> {
    for item in items {
        check_invariants(item)?;
    }

    let Some(expected) = expected else {
        tracing::warn!(day, "no golden snapshot for day, skipping comparison");
        return Ok(());
    };

    if rendered == expected {
        return Ok(());
    }

    // Narrow the report to the first diverging item when the shapes line up.
    let golden_items = parse_block(expected)?;
    if golden_items.len() == items.len() {
        if let Some((want, got)) = golden_items.iter().zip(items).find(|(w, g)| w != g) {
            return Err(FixtureError::GoldenMismatch {
                day,
                expected: want.to_string(),
                actual: got.to_string(),
            });
        }
    }

    Err(FixtureError::GoldenMismatch {
        day,
        expected: expected.to_string(),
        actual: rendered.to_string(),
    })
}

/// Parse the item lines of one rendered day block.
fn parse_block(block: &str) -> FixtureResult<Vec<Item>> {
    block
        .lines()
        .skip(2)
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<Item>().map_err(FixtureError::from))
        .collect()
}

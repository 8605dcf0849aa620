//! Category policies for the end-of-day update.
//!
//! An item's category is derived from its name on every update; unmatched
//! names age as [`Category::Normal`]. Each category contributes three steps,
//! applied in order:
//!
//! 1. the daily quality step,
//! 2. the sell-in step (a one-day countdown, except for legendary items),
//! 3. the expired step, only once the post-countdown `sell_in` is below zero.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Mana Cake";

/// Upper bound for every non-legendary quality.
pub const MAX_QUALITY: i32 = 50;
/// Lower bound for every non-legendary quality.
pub const MIN_QUALITY: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Normal,
    AgedBrie,
    Legendary,
    BackstagePass,
    Conjured,
}

impl Category {
    /// Classify by exact, case-sensitive name match.
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::BackstagePass,
            CONJURED => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged-brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage-pass",
            Category::Conjured => "conjured",
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }

    /// Apply one day's transition to `item`.
    pub fn update(self, item: &mut Item) {
        self.on_quality(item);
        self.on_sell_in(item);
        if item.is_expired() {
            self.on_expired(item);
        }
    }

    fn on_quality(self, item: &mut Item) {
        match self {
            Category::Normal => lower(item, 1),
            Category::AgedBrie => raise(item, 1),
            Category::Legendary => {}
            Category::BackstagePass => {
                // Tiers read sell_in before today's countdown.
                raise(item, 1);
                if item.sell_in <= 10 {
                    raise(item, 1);
                }
                if item.sell_in <= 5 {
                    raise(item, 1);
                }
            }
            Category::Conjured => lower(item, 2),
        }
    }

    fn on_sell_in(self, item: &mut Item) {
        match self {
            Category::Legendary => {}
            _ => age(item),
        }
    }

    fn on_expired(self, item: &mut Item) {
        match self {
            Category::Normal => lower(item, 1),
            Category::AgedBrie => raise(item, 1),
            Category::Legendary => {}
            Category::BackstagePass => item.quality = MIN_QUALITY,
            Category::Conjured => lower(item, 2),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

// Mutation primitives. Private so no category can hand them a legendary item
// from outside this module; the legendary arms above never call them.

fn raise(item: &mut Item, by: i32) {
    item.quality = item.quality.saturating_add(by).min(MAX_QUALITY);
}

fn lower(item: &mut Item, by: i32) {
    item.quality = item.quality.saturating_sub(by).max(MIN_QUALITY);
}

fn age(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

/// Run one day's update for a single item.
pub fn update_one(item: &mut Item) {
    let category = Category::of(&item.name);
    let (sell_in, quality) = (item.sell_in, item.quality);

    category.update(item);

    tracing::trace!(
        name = %item.name,
        category = category.label(),
        sell_in_before = sell_in,
        sell_in_after = item.sell_in,
        quality_before = quality,
        quality_after = item.quality,
        "item updated"
    );
}

/// Run one day's update over every item, in place and in order.
pub fn update_all(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "running end-of-day update");
    for item in items.iter_mut() {
        update_one(item);
    }
}

/// Check the quality bounds for `item`'s category.
///
/// Legendary items are exempt. For everything else the update keeps quality
/// within bounds only if it started there, so this is meant for callers that
/// seeded their own stock.
pub fn check_invariants(item: &Item) -> DomainResult<()> {
    if Category::of(&item.name).is_legendary() {
        return Ok(());
    }
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
        return Err(DomainError::invariant(format!(
            "{}: quality {} outside {}..={}",
            item.name, item.quality, MIN_QUALITY, MAX_QUALITY
        )));
    }
    Ok(())
}

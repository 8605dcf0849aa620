use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::DomainError;

/// A line of shop stock.
///
/// Plain data: the category is never stored here, it is derived from `name`
/// on every update, so renaming an item changes how it ages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "sellIn")]
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Past its sell-by date.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses the `name, sellIn, quality` form produced by `Display`.
///
/// Names may themselves contain `", "`, so the counters are split off the right.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ", ");
        let quality = fields.next();
        let sell_in = fields.next();
        let name = fields.next();

        let (Some(name), Some(sell_in), Some(quality)) = (name, sell_in, quality) else {
            return Err(DomainError::validation(format!(
                "expected `name, sellIn, quality`, got {s:?}"
            )));
        };

        let sell_in = sell_in
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::validation(format!("sellIn {sell_in:?}: {e}")))?;
        let quality = quality
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::validation(format!("quality {quality:?}: {e}")))?;

        Ok(Self::new(name, sell_in, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_snapshot_format() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn parse_keeps_commas_inside_the_name() {
        let item: Item = "Sulfuras, Hand of Ragnaros, -1, 80".parse().unwrap();
        assert_eq!(item, Item::new("Sulfuras, Hand of Ragnaros", -1, 80));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = "Aged Brie, 2".parse::<Item>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for short line"),
        }
    }

    #[test]
    fn parse_rejects_non_numeric_counters() {
        let err = "Aged Brie, two, 0".parse::<Item>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("sellIn")),
            _ => panic!("Expected Validation error for bad sellIn"),
        }
    }

    #[test]
    fn expiry_starts_below_zero() {
        assert!(!Item::new("Elixir of the Mongoose", 0, 7).is_expired());
        assert!(Item::new("Elixir of the Mongoose", -1, 7).is_expired());
    }

    #[test]
    fn serializes_with_sell_in_camel_case() {
        let json = serde_json::to_value(Item::new("Aged Brie", 2, 0)).unwrap();
        assert_eq!(json["sellIn"], 2);
        assert_eq!(json["quality"], 0);
        assert_eq!(json["name"], "Aged Brie");
    }
}

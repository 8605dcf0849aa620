use crate::category::{Category, update_all};
use crate::item::Item;

/// The shop: owns its stock and ages it one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Each item paired with the category it would age under today.
    pub fn categories(&self) -> impl Iterator<Item = (&Item, Category)> + '_ {
        self.items.iter().map(|item| (item, Category::of(&item.name)))
    }

    /// End of day: age every item once.
    pub fn update_quality(&mut self) {
        update_all(&mut self.items);
    }
}

impl From<Vec<Item>> for GildedRose {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};

    fn starting_stock() -> Vec<Item> {
        vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(AGED_BRIE, 2, 0),
            Item::new(SULFURAS, 0, 80),
            Item::new(BACKSTAGE_PASSES, 15, 20),
            Item::new(BACKSTAGE_PASSES, 10, 49),
            Item::new(CONJURED, 3, 6),
        ]
    }

    #[test]
    fn first_day_matches_known_values() {
        let mut shop = GildedRose::new(starting_stock());
        shop.update_quality();

        let expected = vec![
            Item::new("+5 Dexterity Vest", 9, 19),
            Item::new(AGED_BRIE, 1, 1),
            Item::new(SULFURAS, 0, 80),
            Item::new(BACKSTAGE_PASSES, 14, 21),
            Item::new(BACKSTAGE_PASSES, 9, 50),
            Item::new(CONJURED, 2, 4),
        ];
        assert_eq!(shop.items(), expected.as_slice());
    }

    #[test]
    fn pass_at_zero_expires_to_zero_next_day() {
        let mut shop = GildedRose::new(vec![Item::new(BACKSTAGE_PASSES, 0, 50)]);
        shop.update_quality();
        assert_eq!(shop.into_items(), vec![Item::new(BACKSTAGE_PASSES, -1, 0)]);
    }

    #[test]
    fn categories_follow_current_names() {
        let mut shop = GildedRose::from(starting_stock());
        let before: Vec<Category> = shop.categories().map(|(_, c)| c).collect();
        assert_eq!(
            before,
            vec![
                Category::Normal,
                Category::AgedBrie,
                Category::Legendary,
                Category::BackstagePass,
                Category::BackstagePass,
                Category::Conjured,
            ]
        );

        shop.items_mut()[0].name = CONJURED.to_string();
        let (_, first) = shop.categories().next().unwrap();
        assert_eq!(first, Category::Conjured);
    }

    #[test]
    fn update_is_deterministic() {
        let mut a = GildedRose::new(starting_stock());
        let mut b = a.clone();
        for _ in 0..30 {
            a.update_quality();
            b.update_quality();
        }
        assert_eq!(a, b);
    }
}

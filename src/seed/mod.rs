use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Item;

static BRANDS: &[&str] = &["Brand A", "Brand B", "Brand C"];

/// Fixed startup catalogue: (price, brand) for "Random Item 1".."Random Item 25".
static SEED_ITEMS: &[(f64, &str)] = &[
    (8.69, "Brand C"),
    (43.09, "Brand A"),
    (28.27, "Brand B"),
    (81.08, "Brand B"),
    (40.47, "Brand A"),
    (80.03, "Brand A"),
    (80.45, "Brand A"),
    (79.27, "Brand C"),
    (34.55, "Brand A"),
    (13.42, "Brand A"),
    (34.74, "Brand B"),
    (83.15, "Brand C"),
    (68.47, "Brand C"),
    (23.74, "Brand B"),
    (21.93, "Brand B"),
    (58.9, "Brand B"),
    (85.12, "Brand C"),
    (16.22, "Brand A"),
    (80.12, "Brand B"),
    (45.87, "Brand A"),
    (40.12, "Brand B"),
    (54.18, "Brand C"),
    (35.11, "Brand A"),
    (51.18, "Brand B"),
    (39.85, "Brand B"),
];

/// The seed catalogue as (id, item) pairs, ids starting at "1".
pub fn seed_items() -> Vec<(String, Item)> {
    SEED_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (price, brand))| {
            let id = i + 1;
            (id.to_string(), Item::new(item_name(id as u64), *price, Some(*brand)))
        })
        .collect()
}

pub fn item_name(id: u64) -> String {
    format!("Random Item {}", id)
}

/// Uniform price in [1.00, 100.00], rounded to cents.
pub fn random_price(rng: &mut impl Rng) -> f64 {
    let raw: f64 = rng.gen_range(1.0..=100.0);
    (raw * 100.0).round() / 100.0
}

pub fn random_brand(rng: &mut impl Rng) -> &'static str {
    BRANDS.choose(rng).copied().unwrap_or("Brand A")
}

/// Synthesize the item that `generate` stores under `id`.
pub fn random_item(rng: &mut impl Rng, id: u64) -> Item {
    Item::new(item_name(id), random_price(rng), Some(random_brand(rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seed_has_25_sequential_ids() {
        let items = seed_items();
        assert_eq!(items.len(), 25);
        assert_eq!(items[0].0, "1");
        assert_eq!(items[24].0, "25");
        assert_eq!(items[0].1, Item::new("Random Item 1", 8.69, Some("Brand C")));
        assert_eq!(items[15].1.price, 58.9);
    }

    #[test]
    fn random_prices_stay_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let p = random_price(&mut rng);
            assert!((1.0..=100.0).contains(&p), "price {p} out of range");
            let cents = p * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "price {p} has more than 2 decimals");
        }
    }

    #[test]
    fn random_item_uses_id_in_name_and_known_brand() {
        let mut rng = StdRng::seed_from_u64(42);
        let item = random_item(&mut rng, 31);
        assert_eq!(item.name, "Random Item 31");
        assert!(BRANDS.contains(&item.brand.as_deref().unwrap()));
    }
}

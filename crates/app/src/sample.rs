//! Canonical sample data: the Friday night outing at The Italian Corner.

use domain::{Catalog, LineItem, MenuItem, Money, OutingPlan};

const PIZZA_IMAGE: &str =
    "https://images.pexels.com/photos/2147491/pexels-photo-2147491.jpeg?auto=compress&cs=tinysrgb&w=800";
const SALAD_IMAGE: &str =
    "https://images.pexels.com/photos/257816/pexels-photo-257816.jpeg?auto=compress&cs=tinysrgb&w=800";
const ALFREDO_IMAGE: &str =
    "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg?auto=compress&cs=tinysrgb&w=800";
const TIRAMISU_IMAGE: &str =
    "https://images.pexels.com/photos/6880219/pexels-photo-6880219.jpeg?auto=compress&cs=tinysrgb&w=800";
const GARLIC_BREAD_IMAGE: &str =
    "https://images.pexels.com/photos/1775043/pexels-photo-1775043.jpeg?auto=compress&cs=tinysrgb&w=800";

/// The seeded outing: four participants, three lines already on the
/// ledger, subtotal $73.47.
pub fn friday_night_dinner() -> OutingPlan {
    OutingPlan::new(
        "Friday Night Dinner",
        "The Italian Corner",
        vec!["You".into(), "Sarah".into(), "Mike".into(), "Emma".into()],
    )
    .with_estimated_time("25-35 min")
    .with_seed_item(LineItem::new(
        "1",
        "Margherita Pizza",
        Money::from_cents(1899),
        2,
        "You",
        PIZZA_IMAGE,
    ))
    .with_seed_item(LineItem::new(
        "2",
        "Caesar Salad",
        Money::from_cents(1250),
        1,
        "Sarah",
        SALAD_IMAGE,
    ))
    .with_seed_item(LineItem::new(
        "3",
        "Chicken Alfredo",
        Money::from_cents(2299),
        1,
        "Mike",
        ALFREDO_IMAGE,
    ))
}

/// The restaurant menu the order can add from.
pub fn italian_corner_catalog() -> Catalog {
    Catalog::new(vec![
        MenuItem::new("1", "Margherita Pizza", Money::from_cents(1899), PIZZA_IMAGE),
        MenuItem::new("2", "Caesar Salad", Money::from_cents(1250), SALAD_IMAGE),
        MenuItem::new("3", "Chicken Alfredo", Money::from_cents(2299), ALFREDO_IMAGE),
        MenuItem::new("4", "Tiramisu", Money::from_cents(899), TIRAMISU_IMAGE),
        MenuItem::new("5", "Garlic Bread", Money::from_cents(650), GARLIC_BREAD_IMAGE),
    ])
}

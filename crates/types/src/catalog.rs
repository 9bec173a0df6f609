//! Built-in animal catalog.
//!
//! Order matters: decks take a prefix of the catalog, so the most familiar
//! animals come first and appear at every difficulty.

use crate::PairableItem;

const ANIMALS: [(&str, &str, &str, &str); 10] = [
    ("1", "Dog", "Kurī", "dog"),
    ("2", "Cat", "Ngeru", "cat"),
    ("3", "Bird", "Manu", "bird"),
    ("4", "Fish", "Ika", "fish"),
    ("5", "Horse", "Hōiho", "horse"),
    ("6", "Sheep", "Hipi", "sheep"),
    ("7", "Cow", "Kau", "cow"),
    ("8", "Pig", "Poaka", "pig"),
    ("9", "Chicken", "Heihei", "chicken"),
    ("10", "Whale", "Tohorā", "whale"),
];

pub fn animal_catalog() -> Vec<PairableItem> {
    ANIMALS
        .iter()
        .map(|&(id, english, maori, image)| PairableItem::new(id, english, maori, image))
        .collect()
}

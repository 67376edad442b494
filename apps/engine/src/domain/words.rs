//! Embedded word bank and the `draw_word` seam.
//!
//! The word/category dataset is a collaborator from the engine's point of
//! view: the only contract is `draw_word(categories, difficulty)` returning a
//! word+hint pair from a non-empty filtered pool. A small built-in bank keeps
//! the engine runnable on its own (spectator mode, tests, demo binary).

use once_cell::sync::Lazy;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::config::Difficulty;
use crate::errors::domain::{DomainError, NotFoundKind};

/// One secret word with the vague category hint handed to impostors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub word: String,
    pub hint: String,
}

struct WordEntry {
    word: &'static str,
    hint: &'static str,
    category: &'static str,
    difficulty: Difficulty,
}

const WORD_BANK: &[WordEntry] = &[
    // animals
    WordEntry { word: "ELEPHANT", hint: "Animal", category: "animals", difficulty: Difficulty::Easy },
    WordEntry { word: "PENGUIN", hint: "Animal", category: "animals", difficulty: Difficulty::Easy },
    WordEntry { word: "DOLPHIN", hint: "Animal", category: "animals", difficulty: Difficulty::Normal },
    WordEntry { word: "CHAMELEON", hint: "Animal", category: "animals", difficulty: Difficulty::Hard },
    WordEntry { word: "AXOLOTL", hint: "Animal", category: "animals", difficulty: Difficulty::Legend },
    // food
    WordEntry { word: "PIZZA", hint: "Food", category: "food", difficulty: Difficulty::Easy },
    WordEntry { word: "CHOCOLATE", hint: "Food", category: "food", difficulty: Difficulty::Easy },
    WordEntry { word: "LASAGNA", hint: "Food", category: "food", difficulty: Difficulty::Normal },
    WordEntry { word: "EMPANADA", hint: "Food", category: "food", difficulty: Difficulty::Normal },
    WordEntry { word: "SAFFRON", hint: "Ingredient", category: "food", difficulty: Difficulty::Legend },
    // objects
    WordEntry { word: "UMBRELLA", hint: "Object", category: "objects", difficulty: Difficulty::Easy },
    WordEntry { word: "TELESCOPE", hint: "Object", category: "objects", difficulty: Difficulty::Normal },
    WordEntry { word: "COMPASS", hint: "Object", category: "objects", difficulty: Difficulty::Hard },
    WordEntry { word: "ASTROLABE", hint: "Object", category: "objects", difficulty: Difficulty::Legend },
    // places
    WordEntry { word: "BEACH", hint: "Place", category: "places", difficulty: Difficulty::Easy },
    WordEntry { word: "LIGHTHOUSE", hint: "Place", category: "places", difficulty: Difficulty::Normal },
    WordEntry { word: "LABYRINTH", hint: "Place", category: "places", difficulty: Difficulty::Hard },
    WordEntry { word: "OBSERVATORY", hint: "Place", category: "places", difficulty: Difficulty::Hard },
    // music
    WordEntry { word: "GUITAR", hint: "Music", category: "music", difficulty: Difficulty::Easy },
    WordEntry { word: "TRUMPET", hint: "Music", category: "music", difficulty: Difficulty::Normal },
    WordEntry { word: "THEREMIN", hint: "Music", category: "music", difficulty: Difficulty::Legend },
    // sports
    WordEntry { word: "MARATHON", hint: "Sport", category: "sports", difficulty: Difficulty::Normal },
    WordEntry { word: "FENCING", hint: "Sport", category: "sports", difficulty: Difficulty::Hard },
    WordEntry { word: "BIATHLON", hint: "Sport", category: "sports", difficulty: Difficulty::Legend },
];

static CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut cats: Vec<&'static str> = WORD_BANK.iter().map(|e| e.category).collect();
    cats.sort_unstable();
    cats.dedup();
    cats
});

/// Categories available in the built-in bank.
pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

/// Draw a word+hint pair uniformly from the filtered pool.
///
/// An empty `categories` filter means "all categories". The non-empty-pool
/// precondition is owned by setup; an empty pool is still reported as a
/// proper error rather than a panic.
pub fn draw_word<R: Rng>(
    rng: &mut R,
    categories: &[String],
    difficulty: Difficulty,
) -> Result<WordPair, DomainError> {
    let pool: Vec<&WordEntry> = WORD_BANK
        .iter()
        .filter(|e| e.difficulty == difficulty)
        .filter(|e| categories.is_empty() || categories.iter().any(|c| c == e.category))
        .collect();

    let entry = pool.choose(rng).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Word,
            format!(
                "No words for difficulty {:?} in categories {:?}",
                difficulty, categories
            ),
        )
    })?;

    Ok(WordPair {
        word: entry.word.to_string(),
        hint: entry.hint.to_string(),
    })
}

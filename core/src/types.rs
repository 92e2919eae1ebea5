//! Domain DTOs for the words API.
//!
//! These mirror the mock-server's wire schema but are defined independently;
//! the integration tests catch drift between the two crates. Unknown fields
//! in responses are ignored.

use serde::{Deserialize, Serialize};

/// A named grouping of words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Envelope returned by `GET words`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

/// A single lexical entry inside a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    pub word: String,
}

/// Envelope returned by `GET words/{category_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<Word>,
}

/// Request payload for creating or renaming a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

/// Request payload for adding a word to a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
}

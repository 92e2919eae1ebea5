use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<Word>,
}

#[derive(Deserialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewWord {
    pub word: String,
}

struct CategoryRecord {
    name: String,
    words: BTreeMap<i64, String>,
}

/// In-memory backing store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct Store {
    categories: BTreeMap<i64, CategoryRecord>,
    last_category_id: i64,
    last_word_id: i64,
}

impl Store {
    /// Three categories and six words, enough to click around in.
    pub fn seeded() -> Self {
        let mut store = Store::default();
        let ids: Vec<i64> = ["орнитология", "медицина", "кулинария"]
            .into_iter()
            .map(|name| store.insert_category(name.to_string()).id)
            .collect();
        for (i, word) in ["снегирь", "спазм", "расстегай", "дефлегматор", "сипуха", "пентаграмма"]
            .into_iter()
            .enumerate()
        {
            store.insert_word(ids[i % ids.len()], word.to_string());
        }
        store
    }

    fn insert_category(&mut self, name: String) -> Category {
        self.last_category_id += 1;
        let id = self.last_category_id;
        self.categories.insert(
            id,
            CategoryRecord {
                name: name.clone(),
                words: BTreeMap::new(),
            },
        );
        Category { id, name }
    }

    fn insert_word(&mut self, category_id: i64, word: String) -> Option<Word> {
        let record = self.categories.get_mut(&category_id)?;
        self.last_word_id += 1;
        let id = self.last_word_id;
        record.words.insert(id, word.clone());
        Some(Word { id, word })
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Backend routes, mounted under `/api/v1`, over an empty store.
pub fn app() -> Router {
    app_with(Store::default())
}

pub fn seeded_app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/words", get(list_categories).post(create_category))
        .route(
            "/words/{category_id}",
            get(list_words)
                .post(add_word)
                .patch(rename_category)
                .delete(delete_category),
        )
        .route("/words/{category_id}/{word_id}", delete(delete_word));
    Router::new().nest("/api/v1", api).with_state(db)
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_categories(State(db): State<Db>) -> Json<CategoryList> {
    let store = db.read().await;
    let categories = store
        .categories
        .iter()
        .map(|(id, record)| Category {
            id: *id,
            name: record.name.clone(),
        })
        .collect();
    Json(CategoryList { categories })
}

async fn create_category(
    State(db): State<Db>,
    Json(input): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), StatusCode> {
    let name = non_blank(input.name)?;
    let category = db.write().await.insert_category(name);
    tracing::debug!(id = category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

async fn rename_category(
    State(db): State<Db>,
    Path(category_id): Path<i64>,
    Json(input): Json<NewCategory>,
) -> Result<Json<Category>, StatusCode> {
    let name = non_blank(input.name)?;
    let mut store = db.write().await;
    let record = store
        .categories
        .get_mut(&category_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    record.name = name.clone();
    tracing::debug!(id = category_id, "category renamed");
    Ok(Json(Category {
        id: category_id,
        name,
    }))
}

async fn delete_category(
    State(db): State<Db>,
    Path(category_id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .categories
        .remove(&category_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(id = category_id, "category deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_words(
    State(db): State<Db>,
    Path(category_id): Path<i64>,
) -> Result<Json<WordList>, StatusCode> {
    let store = db.read().await;
    let record = store
        .categories
        .get(&category_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let words = record
        .words
        .iter()
        .map(|(id, word)| Word {
            id: *id,
            word: word.clone(),
        })
        .collect();
    Ok(Json(WordList { words }))
}

async fn add_word(
    State(db): State<Db>,
    Path(category_id): Path<i64>,
    Json(input): Json<NewWord>,
) -> Result<(StatusCode, Json<Word>), StatusCode> {
    let word = non_blank(input.word)?;
    let word = db
        .write()
        .await
        .insert_word(category_id, word)
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(category_id, id = word.id, "word added");
    Ok((StatusCode::CREATED, Json(word)))
}

async fn delete_word(
    State(db): State<Db>,
    Path((category_id, word_id)): Path<(i64, i64)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let record = store
        .categories
        .get_mut(&category_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    record
        .words
        .remove(&word_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(category_id, id = word_id, "word deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn non_blank(value: String) -> Result<String, StatusCode> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(trimmed.to_string())
}

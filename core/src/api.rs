//! Stateless request builder and response parser for the words API.
//!
//! # Design
//! `WordsApi` holds only the joined API URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round trip is someone else's job
//! (`ApiClient`, or any host with an HTTP stack).

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Category, CategoryList, NewCategory, NewWord, Word, WordList};

#[derive(Debug, Clone)]
pub struct WordsApi {
    api_url: String,
}

impl WordsApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            api_url: config.api_url(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{route}", self.api_url)
    }

    pub fn build_list_categories(&self) -> HttpRequest {
        get(self.url("words"))
    }

    /// `category_id` is sent as is; the server decides what an unknown or
    /// negative id means.
    pub fn build_list_words(&self, category_id: i64) -> HttpRequest {
        get(self.url(&format!("words/{category_id}")))
    }

    pub fn build_create_category(&self, input: &NewCategory) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, self.url("words"), input)
    }

    pub fn build_rename_category(
        &self,
        category_id: i64,
        input: &NewCategory,
    ) -> Result<HttpRequest, ApiError> {
        with_json(
            HttpMethod::Patch,
            self.url(&format!("words/{category_id}")),
            input,
        )
    }

    pub fn build_delete_category(&self, category_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.url(&format!("words/{category_id}")),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_word(&self, category_id: i64, input: &NewWord) -> Result<HttpRequest, ApiError> {
        with_json(
            HttpMethod::Post,
            self.url(&format!("words/{category_id}")),
            input,
        )
    }

    pub fn build_delete_word(&self, category_id: i64, word_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.url(&format!("words/{category_id}/{word_id}")),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_categories(&self, response: HttpResponse) -> Result<CategoryList, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_words(&self, response: HttpResponse) -> Result<WordList, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_category(&self, response: HttpResponse) -> Result<Category, ApiError> {
        parse_json(response)
    }

    pub fn parse_rename_category(&self, response: HttpResponse) -> Result<Category, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_category(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_add_word(&self, response: HttpResponse) -> Result<Word, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_word(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, url: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

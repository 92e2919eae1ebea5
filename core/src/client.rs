//! Async client for the words API.
//!
//! # Design
//! `ApiClient` pairs a `WordsApi` (what to send, how to read the answer)
//! with a `reqwest::Client` (how to send it). The reqwest client is built
//! once with the configured timeout and shared by clones, so one `ApiClient`
//! can be handed to every consumer that needs it. Nothing is mutated after
//! construction.
//!
//! Every call runs through the registered interceptors. By default that is
//! just `LogFailures`.

use std::sync::Arc;

use crate::api::WordsApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::interceptor::{Interceptor, LogFailures};
use crate::types::{Category, CategoryList, NewCategory, NewWord, Word, WordList};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api: WordsApi,
    timeout_ms: u64,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api", &self.api)
            .field("timeout_ms", &self.timeout_ms)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            api: WordsApi::new(&config),
            timeout_ms: config.timeout_ms(),
            interceptors: vec![Arc::new(LogFailures)],
        })
    }

    /// Append an interceptor. It runs after the ones already registered.
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn api(&self) -> &WordsApi {
        &self.api
    }

    pub async fn list_categories(&self) -> Result<CategoryList, ApiError> {
        let request = Ok(self.api.build_list_categories());
        self.call(request, WordsApi::parse_list_categories).await
    }

    pub async fn list_words(&self, category_id: i64) -> Result<WordList, ApiError> {
        let request = Ok(self.api.build_list_words(category_id));
        self.call(request, WordsApi::parse_list_words).await
    }

    pub async fn create_category(&self, input: &NewCategory) -> Result<Category, ApiError> {
        let request = self.api.build_create_category(input);
        self.call(request, WordsApi::parse_create_category).await
    }

    pub async fn rename_category(
        &self,
        category_id: i64,
        input: &NewCategory,
    ) -> Result<Category, ApiError> {
        let request = self.api.build_rename_category(category_id, input);
        self.call(request, WordsApi::parse_rename_category).await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<(), ApiError> {
        let request = Ok(self.api.build_delete_category(category_id));
        self.call(request, WordsApi::parse_delete_category).await
    }

    pub async fn add_word(&self, category_id: i64, input: &NewWord) -> Result<Word, ApiError> {
        let request = self.api.build_add_word(category_id, input);
        self.call(request, WordsApi::parse_add_word).await
    }

    pub async fn delete_word(&self, category_id: i64, word_id: i64) -> Result<(), ApiError> {
        let request = Ok(self.api.build_delete_word(category_id, word_id));
        self.call(request, WordsApi::parse_delete_word).await
    }

    /// Run one call through the interceptors. A request that could not be
    /// built is reported to `on_failure` without a request.
    async fn call<T, F>(&self, request: Result<HttpRequest, ApiError>, parse: F) -> Result<T, ApiError>
    where
        F: FnOnce(&WordsApi, HttpResponse) -> Result<T, ApiError>,
    {
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                self.report_failure(None, &err);
                return Err(err);
            }
        };

        tracing::debug!(method = %request.method, url = %request.url, "sending words api request");

        let result = match self.execute(&request).await {
            Ok(response) => {
                for interceptor in &self.interceptors {
                    interceptor.on_response(&request, &response);
                }
                parse(&self.api, response)
            }
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            self.report_failure(Some(&request), err);
        }
        result
    }

    fn report_failure(&self, request: Option<&HttpRequest>, error: &ApiError) {
        for interceptor in &self.interceptors {
            interceptor.on_failure(request, error);
        }
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.http.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout_ms))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

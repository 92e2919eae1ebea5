//! Full category/word lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `WordsApi`
//! operation over real HTTP using ureq. This checks the build/parse halves
//! end to end without `ApiClient`, the way a non-Rust host would use them.

use words_core::{ApiError, ClientConfig, HttpMethod, HttpResponse, NewCategory, NewWord, WordsApi};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting `WordsApi`
/// handle status interpretation.
fn execute(req: words_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            agent.patch(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => agent.patch(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server(app: axum::Router) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, app).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn category_and_word_lifecycle() {
    // Step 1: start mock server on a random port.
    let addr = start_server(mock_server::app());
    let api = WordsApi::new(&ClientConfig::new(&format!("http://{addr}")));

    // Step 2: list categories: should be empty.
    let list = api.parse_list_categories(execute(api.build_list_categories())).unwrap();
    assert!(list.categories.is_empty(), "expected no categories");

    // Step 3: create a category.
    let input = NewCategory {
        name: "Animals".to_string(),
    };
    let req = api.build_create_category(&input).unwrap();
    let category = api.parse_create_category(execute(req)).unwrap();
    assert_eq!(category.name, "Animals");
    let id = category.id;

    // Step 4: it shows up in the list.
    let list = api.parse_list_categories(execute(api.build_list_categories())).unwrap();
    assert_eq!(list.categories, vec![category.clone()]);

    // Step 5: add two words.
    let mut added = Vec::new();
    for word in ["cat", "dog"] {
        let req = api
            .build_add_word(id, &NewWord { word: word.to_string() })
            .unwrap();
        added.push(api.parse_add_word(execute(req)).unwrap());
    }

    // Step 6: list words in order of insertion.
    let list = api.parse_list_words(execute(api.build_list_words(id))).unwrap();
    assert_eq!(list.words, added);

    // Step 7: rename.
    let input = NewCategory {
        name: "Pets".to_string(),
    };
    let req = api.build_rename_category(id, &input).unwrap();
    let renamed = api.parse_rename_category(execute(req)).unwrap();
    assert_eq!(renamed.id, id);
    assert_eq!(renamed.name, "Pets");

    // Step 8: delete one word.
    let req = api.build_delete_word(id, added[0].id);
    api.parse_delete_word(execute(req)).unwrap();
    let list = api.parse_list_words(execute(api.build_list_words(id))).unwrap();
    assert_eq!(list.words, vec![added[1].clone()]);

    // Step 9: delete the same word again: NotFound.
    let req = api.build_delete_word(id, added[0].id);
    let err = api.parse_delete_word(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 10: delete the category.
    api.parse_delete_category(execute(api.build_delete_category(id)))
        .unwrap();

    // Step 11: its words are gone with it.
    let err = api
        .parse_list_words(execute(api.build_list_words(id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn seeded_backend_lists_words_per_category() {
    let addr = start_server(mock_server::seeded_app());
    let api = WordsApi::new(&ClientConfig::new(&format!("http://{addr}")));

    let list = api.parse_list_categories(execute(api.build_list_categories())).unwrap();
    assert_eq!(list.categories.len(), 3);

    for category in &list.categories {
        let words = api
            .parse_list_words(execute(api.build_list_words(category.id)))
            .unwrap();
        assert_eq!(words.words.len(), 2, "category {}", category.name);
    }
}

use std::time::Duration;

use bookshelf_client::{CatalogSource, ClientError, ClientSettings, ReqwestCatalog};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog_for(server: &MockServer) -> ReqwestCatalog {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    ReqwestCatalog::new(settings).expect("client builds")
}

const FULL_BODY: &str = r#"{
    "totalItems": 50,
    "items": [
        {
            "id": "vol-1",
            "volumeInfo": {
                "title": "The Rust Programming Language",
                "authors": ["Steve Klabnik", "Carol Nichols"],
                "publisher": "No Starch Press",
                "publishedDate": "2019-08-06",
                "description": "The official book.",
                "pageCount": 560,
                "imageLinks": {"thumbnail": "http://books.example/rust.jpg"},
                "infoLink": "https://books.example/rust"
            }
        }
    ]
}"#;

#[tokio::test]
async fn fetch_page_decodes_a_full_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FULL_BODY, "application/json"))
        .mount(&server)
        .await;

    let page = catalog_for(&server)
        .fetch_page("rust", 0)
        .await
        .expect("fetch ok");

    assert_eq!(page.total_items, 50);
    let items = page.items.expect("items present");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "vol-1");
    let info = &items[0].volume_info;
    assert_eq!(info.title, "The Rust Programming Language");
    assert_eq!(
        info.authors.as_deref(),
        Some(&["Steve Klabnik".to_string(), "Carol Nichols".to_string()][..])
    );
    assert_eq!(info.page_count, Some(560));
    assert_eq!(
        info.secure_thumbnail().as_deref(),
        Some("https://books.example/rust.jpg")
    );
}

#[tokio::test]
async fn fetch_page_sends_fixed_page_size_and_computed_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "history"))
        .and(query_param("maxResults", "10"))
        .and(query_param("startIndex", "30"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"totalItems": 0}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = catalog_for(&server)
        .fetch_page("history", 3)
        .await
        .expect("fetch ok");
    assert_eq!(page.total_items, 0);
}

#[tokio::test]
async fn fetch_page_tolerates_absent_items_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"totalItems": 45}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let page = catalog_for(&server)
        .fetch_page("book", 5)
        .await
        .expect("fetch ok");
    assert_eq!(page.total_items, 45);
    assert_eq!(page.items, None);
}

#[tokio::test]
async fn fetch_page_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = catalog_for(&server).fetch_page("book", 0).await.unwrap_err();
    assert_eq!(err, ClientError::Status { status: 503 });
    assert!(!err.is_transport());
}

#[tokio::test]
async fn fetch_page_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"totalItems": "lots"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = catalog_for(&server).fetch_page("book", 0).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn fetch_page_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(r#"{"totalItems": 1}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let catalog = ReqwestCatalog::new(settings).expect("client builds");

    let err = catalog.fetch_page("book", 0).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

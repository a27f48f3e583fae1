//! CsvSheetReader tests against a stub HTTP server.

use sheet_bucket_core::contract::SheetReader;
use sheet_bucket_core::error::FetchError;
use sheet_bucket_core::fetch::CsvSheetReader;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with_csv(sheet_id: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{sheet_id}/export")))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetches_and_cleans_rows() {
    let csv = "標題,價格,內容,備註\n Condo , $500k , 12 Harbor Rd ,\n,,,\nFlat,$320k,9 Hill St,\n";
    let server = server_with_csv("sheet-1", csv).await;

    let reader = CsvSheetReader::with_base_url(server.uri()).expect("reader");
    let rows = reader.fetch_rows("sheet-1").await.expect("fetch");

    // The all-empty row and the all-empty 備註 column are gone; cells trimmed.
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["標題"], "Condo");
    assert_eq!(rows[0]["價格"], "$500k");
    assert!(!rows[0].contains_key("備註"));
    assert_eq!(rows[1]["內容"], "9 Hill St");
}

#[tokio::test]
async fn empty_sheet_is_ok_with_no_rows() {
    let server = server_with_csv("sheet-empty", "標題,價格\n").await;

    let reader = CsvSheetReader::with_base_url(server.uri()).expect("reader");
    let rows = reader.fetch_rows("sheet-empty").await.expect("fetch");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn server_error_is_a_typed_fetch_error_not_an_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let reader = CsvSheetReader::with_base_url(server.uri()).expect("reader");
    let err = reader
        .fetch_rows("sheet-1")
        .await
        .expect_err("HTTP 500 must not be swallowed");
    assert!(matches!(err, FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn unreachable_server_is_a_typed_fetch_error() {
    // Nothing listens on this port.
    let reader = CsvSheetReader::with_base_url("http://127.0.0.1:9").expect("reader");
    let err = reader
        .fetch_rows("sheet-1")
        .await
        .expect_err("connection failure must not be swallowed");
    assert!(matches!(err, FetchError::Http(_)));
}

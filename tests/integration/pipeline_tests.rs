use crate::support::{create_pdf, create_test_config};
use pdf_digest::pipeline::run_batch;
use pdf_digest::storage::SqliteStore;
use pdf_digest::{DigestError, FailureStage};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_pdf(server: &MockServer, route: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body)
                .insert_header("content-type", "application/pdf"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_batch_isolates_fetch_failure() {
    let server = MockServer::start().await;
    let base = server.uri();

    serve_pdf(
        &server,
        "/one.pdf",
        create_pdf(&["Rust makes systems programming safe. Rust is fast. Memory safety matters."]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/two.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    serve_pdf(
        &server,
        "/three.pdf",
        create_pdf(&["Tokio schedules tasks. Tokio tasks are cheap. Async Rust scales."]),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 5);

    let urls = vec![
        format!("{}/one.pdf", base),
        format!("{}/two.pdf", base),
        format!("{}/three.pdf", base),
    ];

    let report = run_batch(&config, "test-hash", urls.clone())
        .await
        .expect("Batch should run");

    assert_eq!(report.attempted, 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed_by_stage.get(&FailureStage::Fetch), Some(&1));
    assert_eq!(report.outcomes[1].stage(), Some(FailureStage::Fetch));

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.count_summaries().unwrap(), 2);
    assert!(store.get_summaries_by_url(&urls[1]).unwrap().is_empty());

    let first = store.get_summaries_by_url(&urls[0]).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].num_pages(), 1);
    assert!(!first[0].summary().is_empty());
    assert!(first[0].keywords().len() <= 3);
    assert!(first[0].keywords().iter().any(|k| k.as_str() == "rust"));

    let third = store.get_summaries_by_url(&urls[2]).unwrap();
    assert_eq!(third.len(), 1);
    assert!(third[0].keywords().iter().any(|k| k.as_str() == "tokio"));

    let batches = store.recent_batches(1).unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].attempted, 3);
    assert_eq!(batches[0].succeeded, 2);
    assert_eq!(batches[0].failed, 1);
    assert_eq!(batches[0].config_hash, "test-hash");
}

#[tokio::test]
async fn test_batch_attributes_parse_failures() {
    let server = MockServer::start().await;
    let base = server.uri();

    serve_pdf(&server, "/garbage.pdf", b"definitely not a pdf".to_vec()).await;
    serve_pdf(&server, "/good.pdf", create_pdf(&["Readable content here."])).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 2);

    let report = run_batch(
        &config,
        "hash",
        vec![format!("{}/garbage.pdf", base), format!("{}/good.pdf", base)],
    )
    .await
    .unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed_by_stage.get(&FailureStage::Parse), Some(&1));

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.count_summaries().unwrap(), 1);
}

#[tokio::test]
async fn test_document_without_text_is_still_recorded() {
    let server = MockServer::start().await;
    serve_pdf(&server, "/scanned.pdf", create_pdf(&["", "", ""])).await;
    let url = format!("{}/scanned.pdf", server.uri());

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 5);

    let report = run_batch(&config, "hash", vec![url.clone()]).await.unwrap();
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed(), 0);

    let store = SqliteStore::open(&db_path).unwrap();
    let records = store.get_summaries_by_url(&url).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].num_pages(), 3);
    assert!(records[0].keywords().is_empty());
    assert!(records[0].summary().trim().is_empty());
}

#[tokio::test]
async fn test_history_write_failure_keeps_report() {
    let server = MockServer::start().await;
    serve_pdf(&server, "/doc.pdf", create_pdf(&["History is optional. Records are not."])).await;
    let url = format!("{}/doc.pdf", server.uri());

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");

    // Create the schema, then make every batches insert fail
    drop(SqliteStore::open(&db_path).unwrap());
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_batches BEFORE INSERT ON batches
         BEGIN SELECT RAISE(ABORT, 'history unavailable'); END;",
    )
    .unwrap();
    drop(conn);

    let config = create_test_config(db_path.to_str().unwrap(), 5);
    let report = run_batch(&config, "hash", vec![url.clone()])
        .await
        .expect("Report should survive a failed history write");

    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 1);

    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.get_summaries_by_url(&url).unwrap().len(), 1);
    assert!(store.recent_batches(10).unwrap().is_empty());
}

#[tokio::test]
async fn test_medium_document_uses_medium_tier() {
    let server = MockServer::start().await;
    let base = server.uri();

    let pages: Vec<String> = (1..=12)
        .map(|i| format!("Section {} covers parsing. Parsing needs grammars. Grammars need tokens.", i))
        .collect();
    let page_refs: Vec<&str> = pages.iter().map(String::as_str).collect();
    serve_pdf(&server, "/manual.pdf", create_pdf(&page_refs)).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 5);
    let url = format!("{}/manual.pdf", base);

    let report = run_batch(&config, "hash", vec![url.clone()]).await.unwrap();
    assert_eq!(report.succeeded, 1);

    let store = SqliteStore::open(&db_path).unwrap();
    let records = store.get_summaries_by_url(&url).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.num_pages(), 12);
    assert_eq!(record.keywords().len(), 5);
    assert_eq!(record.keywords()[0], "parsing");
    assert!(record.summary().split('.').count() <= 5);
}

#[tokio::test]
async fn test_twenty_documents_all_reach_the_store() {
    let server = MockServer::start().await;
    let base = server.uri();

    let mut urls = Vec::new();
    for i in 0..20 {
        let route = format!("/doc{}.pdf", i);
        serve_pdf(
            &server,
            &route,
            create_pdf(&[&format!("Document number {} talks about storage engines.", i)]),
        )
        .await;
        urls.push(format!("{}{}", base, route));
    }

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 5);

    let report = run_batch(&config, "hash", urls).await.unwrap();

    assert_eq!(report.attempted, 20);
    assert_eq!(report.outcomes.len(), 20);
    assert_eq!(report.succeeded, 20);

    let store = SqliteStore::open(Path::new(&db_path)).unwrap();
    let stats = store.statistics().unwrap();
    assert_eq!(stats.total_records, 20);
    assert_eq!(stats.distinct_urls, 20);
}

#[tokio::test]
async fn test_reingesting_a_url_appends_a_duplicate() {
    let server = MockServer::start().await;
    serve_pdf(&server, "/same.pdf", create_pdf(&["Same document. Twice."])).await;
    let url = format!("{}/same.pdf", server.uri());

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("digest.db");
    let config = create_test_config(db_path.to_str().unwrap(), 5);

    run_batch(&config, "hash", vec![url.clone()]).await.unwrap();
    run_batch(&config, "hash", vec![url.clone()]).await.unwrap();

    let store = SqliteStore::open(&db_path).unwrap();
    let records = store.get_summaries_by_url(&url).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
    assert_eq!(store.recent_batches(10).unwrap().len(), 2);
}

#[tokio::test]
async fn test_unreachable_store_is_reported_before_dispatch() {
    let config = create_test_config("/nonexistent/dir/digest.db", 5);
    let result = run_batch(&config, "hash", vec!["https://example.com/a.pdf".to_string()]).await;
    assert!(matches!(result, Err(DigestError::Store(_))));
}

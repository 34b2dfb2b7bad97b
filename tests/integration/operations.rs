//! Per-operation method, path, body and query shaping.

use crate::mock_server::MockServerFixture;
use emaillistchecker::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_verify_default_body() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/verify")
        .match_body(Matcher::Json(json!({
            "email": "test@example.com",
            "smtp_check": true
        })))
        .with_status(200)
        .with_body(r#"{"data":{"email":"test@example.com","result":"deliverable"}}"#)
        .create_async()
        .await;

    let out = fixture
        .client()
        .verify("test@example.com", &VerifyOptions::default())
        .await
        .unwrap();
    assert_eq!(out["result"], "deliverable");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_with_timeout_and_no_smtp() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/verify")
        .match_body(Matcher::Json(json!({
            "email": "test@example.com",
            "smtp_check": false,
            "timeout": 20
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let options = VerifyOptions::default().timeout(20).smtp_check(false);
    fixture
        .client()
        .verify("test@example.com", &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_batch_omits_name_when_unset() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/verify/batch")
        .match_body(Matcher::Json(json!({
            "emails": ["a@example.com", "b@example.com"],
            "auto_start": true
        })))
        .with_status(200)
        .with_body(r#"{"data":{"id":42,"status":"pending","total_emails":2}}"#)
        .create_async()
        .await;

    let batch = fixture
        .client()
        .verify_batch(&["a@example.com", "b@example.com"], &BatchOptions::default())
        .await
        .unwrap();
    assert_eq!(batch["id"], 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_batch_includes_name_and_callback() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/verify/batch")
        .match_body(Matcher::Json(json!({
            "emails": ["a@example.com"],
            "auto_start": false,
            "name": "My Test Batch",
            "callback_url": "https://hooks.example.com/done"
        })))
        .with_status(200)
        .with_body(r#"{"data":{"id":43}}"#)
        .create_async()
        .await;

    let options = BatchOptions::default()
        .name("My Test Batch")
        .callback_url("https://hooks.example.com/done")
        .auto_start(false);
    fixture
        .client()
        .verify_batch(&["a@example.com"], &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_verify_batch_sends_oversize_batch() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/verify/batch")
        .match_body(Matcher::Regex(format!(
            "user{}@example.com",
            emaillistchecker::types::MAX_BATCH_SIZE
        )))
        .with_status(422)
        .with_body(r#"{"message":"Too many emails"}"#)
        .expect(1)
        .create_async()
        .await;

    let emails: Vec<String> = (0..=emaillistchecker::types::MAX_BATCH_SIZE)
        .map(|i| format!("user{i}@example.com"))
        .collect();
    let err = fixture
        .client()
        .verify_batch(&emails[..], &BatchOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.status_code(), Some(422));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_batch_status() {
    let mut fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json(
            "GET",
            "/verify/batch/42",
            200,
            r#"{"data":{"id":42,"status":"processing","progress":40,"processed_emails":2,"total_emails":5}}"#,
        )
        .await;

    let payload = fixture.client().get_batch_status(42).await.unwrap();
    let status: emaillistchecker::types::BatchStatus = decode(payload).unwrap();
    assert_eq!(status.status, "processing");
    assert_eq!(status.processed_emails, 2);
    assert!(!status.is_finished());
}

#[tokio::test]
async fn test_get_batch_results_json_is_unwrapped() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/verify/batch/42/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("filter".into(), "all".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[{"email":"a@example.com","result":"deliverable"}]}"#)
        .create_async()
        .await;

    let results = fixture
        .client()
        .get_batch_results(42, &ResultsOptions::default())
        .await
        .unwrap();
    assert_eq!(
        results,
        BatchResults::Json(json!([{"email": "a@example.com", "result": "deliverable"}]))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_batch_results_csv_is_raw() {
    let csv = "email,result\na@example.com,deliverable\n";
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/verify/batch/42/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("format".into(), "csv".into()),
            Matcher::UrlEncoded("filter".into(), "valid".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(csv)
        .create_async()
        .await;

    let options = ResultsOptions::default()
        .format(ResultsFormat::Csv)
        .filter(ResultsFilter::Valid);
    let results = fixture
        .client()
        .get_batch_results(42, &options)
        .await
        .unwrap();
    assert_eq!(results.as_raw(), Some(csv));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_batch_results_raw_json_envelope_not_unwrapped() {
    let body = r#"{"data":"a@example.com"}"#;
    let mut fixture = MockServerFixture::new().await;
    let _m = fixture
        .server
        .mock("GET", "/verify/batch/7/results")
        .match_query(Matcher::UrlEncoded("format".into(), "txt".into()))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let options = ResultsOptions::default().format(ResultsFormat::Txt);
    let results = fixture.client().get_batch_results(7, &options).await.unwrap();
    assert_eq!(results, BatchResults::Raw(body.to_string()));
}

#[tokio::test]
async fn test_get_batch_results_error_still_classified() {
    let mut fixture = MockServerFixture::new().await;
    let _m = fixture
        .server
        .mock("GET", "/verify/batch/7/results")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"Batch not found"}"#)
        .create_async()
        .await;

    let options = ResultsOptions::default().format(ResultsFormat::Csv);
    let err = fixture
        .client()
        .get_batch_results(7, &options)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.message(), "Batch not found");
}

#[tokio::test]
async fn test_find_email() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/finder/email")
        .match_body(Matcher::Json(json!({
            "first_name": "John",
            "last_name": "Doe",
            "domain": "example.com"
        })))
        .with_status(200)
        .with_body(r#"{"data":{"email":"john.doe@example.com","confidence":92}}"#)
        .create_async()
        .await;

    let found = fixture
        .client()
        .find_email("John", "Doe", "example.com")
        .await
        .unwrap();
    assert_eq!(found["email"], "john.doe@example.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_domain_defaults() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/finder/domain")
        .match_body(Matcher::Json(json!({
            "domain": "example.com",
            "limit": 10,
            "offset": 0
        })))
        .with_status(200)
        .with_body(r#"{"data":{"domain":"example.com","total_found":0,"emails":[]}}"#)
        .create_async()
        .await;

    fixture
        .client()
        .find_by_domain("example.com", &DomainSearchOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_domain_paging() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/finder/domain")
        .match_body(Matcher::Json(json!({
            "domain": "example.com",
            "limit": 50,
            "offset": 100
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let options = DomainSearchOptions::default().limit(50).offset(100);
    fixture
        .client()
        .find_by_domain("example.com", &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_company() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/finder/company")
        .match_body(Matcher::Json(json!({
            "company": "Acme Corporation",
            "limit": 10
        })))
        .with_status(200)
        .with_body(r#"{"data":{"company":"Acme Corporation","possible_domains":["acme.com"]}}"#)
        .create_async()
        .await;

    let out = fixture
        .client()
        .find_by_company("Acme Corporation", &CompanySearchOptions::default())
        .await
        .unwrap();
    assert_eq!(out["possible_domains"][0], "acme.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_account_endpoints() {
    let mut fixture = MockServerFixture::new().await;
    let credits = fixture
        .mock_json("GET", "/credits", 200, r#"{"data":{"balance":900,"plan":"pro"}}"#)
        .await;
    let usage = fixture
        .mock_json("GET", "/usage", 200, r#"{"total_requests":10,"successful_requests":9}"#)
        .await;
    let lists = fixture
        .mock_json("GET", "/lists", 200, r#"{"data":[{"id":1},{"id":2}]}"#)
        .await;

    let client = fixture.client();
    assert_eq!(client.get_credits().await.unwrap()["plan"], "pro");
    assert_eq!(client.get_usage().await.unwrap()["successful_requests"], 9);
    assert_eq!(
        client.get_lists().await.unwrap(),
        json!([{"id": 1}, {"id": 2}])
    );

    credits.assert_async().await;
    usage.assert_async().await;
    lists.assert_async().await;
}

#[tokio::test]
async fn test_delete_list() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "DELETE",
            "/lists/17",
            200,
            r#"{"success":true,"message":"List deleted"}"#,
        )
        .await;

    let out = fixture.client().delete_list(17).await.unwrap();
    assert_eq!(out["message"], "List deleted");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/credits")
        .with_status(200)
        .with_body(r#"{"data":{"balance":1}}"#)
        .expect(4)
        .create_async()
        .await;

    let client = fixture.client();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = client.clone();
            tokio::spawn(async move { c.get_credits().await })
        })
        .collect();
    for h in handles {
        assert_eq!(h.await.unwrap().unwrap()["balance"], 1);
    }
    mock.assert_async().await;
}

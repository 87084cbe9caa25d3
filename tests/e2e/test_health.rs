use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use localize_backend::controllers::languages::LanguagesResponse;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_when_credential_is_configured(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(body.get("credential").and_then(|v| v.as_str()), Some("configured"));
    assert!(body.get("translate").is_some());
    assert!(body.get("tts").is_some());
}

#[tokio::test]
async fn it_should_report_not_ready_without_credential() {
    let ctx = TestContext::without_api_key().await.unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(body.get("credential").and_then(|v| v.as_str()), Some("missing"));

    // Liveness does not depend on the credential
    ctx.client
        .get("/health")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_a_caller_supplied_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .options("/functions/v1/sarvam-tts", &[("x-request-id", "req-123")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "req-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_cors_preflight(ctx: &TestContext) {
    for path in ["/functions/v1/sarvam-translate", "/functions/v1/sarvam-tts"] {
        let response = ctx
            .client
            .options(
                path,
                &[
                    ("origin", "https://wizard.example.com"),
                    ("access-control-request-method", "POST"),
                    ("access-control-request-headers", "content-type, apikey"),
                ],
            )
            .await
            .unwrap();

        response
            .assert_status(StatusCode::OK)
            .assert_header("access-control-allow-origin", "*");
        assert!(response.body_bytes.is_empty());

        let allowed = response
            .header("access-control-allow-headers")
            .expect("missing allow-headers")
            .to_lowercase();
        assert!(allowed.contains("content-type"));
        assert!(allowed.contains("apikey"));
        assert!(allowed.contains("x-client-info"));
    }
    assert_eq!(ctx.upstream_calls().await, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_plain_options_with_empty_ok(ctx: &TestContext) {
    let response = ctx
        .client
        .options("/functions/v1/sarvam-translate", &[])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.body_bytes.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_supported_languages(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);
    let parsed: LanguagesResponse = response.json().unwrap();

    let codes: Vec<&str> = parsed.languages.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["hi", "mr", "te", "ta", "kn", "bn", "en"]);

    let hindi = &parsed.languages[0];
    assert_eq!(hindi.name, "Hindi");
    assert_eq!(hindi.locale, "hi-IN");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_routes(ctx: &TestContext) {
    let response = ctx.client.get("/api/videos").await.unwrap();
    response.assert_status(StatusCode::NOT_FOUND);
}

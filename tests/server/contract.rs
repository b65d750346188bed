use routemock::{
    http::{Method, StatusCode},
    model::api::ErrorDto,
    Error, ExpectEmptyBody, TestCredential, VerificationError,
};
use routemock_test_utils::{
    fixtures::{factory::basic_credential, ITEMS_JSON},
    prelude::*,
};

/// Close the server and return the failures it recorded.
///
/// # Panics
/// Panics if the server recorded no failures
async fn recorded_failures(test: TestContext) -> Vec<String> {
    match test.close().await {
        Err(TestError::MockError(Error::VerificationError(VerificationError::RequestFailures {
            failures,
            ..
        }))) => failures,
        other => panic!("expected recorded request failures, got {:?}", other),
    }
}

async fn items_server() -> Result<TestContext, TestError> {
    TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .build()
        .await
}

#[tokio::test]
// A request with the wrong method is refused and recorded
async fn rejects_wrong_method() -> Result<(), TestError> {
    let test = items_server().await?;

    let response = test
        .client
        .send(Method::PUT, "/api/items", Some(2), None)
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let error: ErrorDto = response.json()?;
    assert_eq!(
        error.error,
        "Expected HTTP method is GET while client sent PUT"
    );
    assert_eq!(recorded_failures(test).await, vec![error.error]);

    Ok(())
}

#[tokio::test]
// Neighbouring versions and an unversioned Accept header are all refused
async fn rejects_wrong_accept_version() -> Result<(), TestError> {
    for version in [Some(1), Some(3), None] {
        let test = items_server().await?;

        let response = test.client.get("/api/items", version).await?;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_ne!(response.text(), r#"{"items":[]}"#);

        let failures = recorded_failures(test).await;
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("application/vnd.go.cd.v2+json"));
    }

    Ok(())
}

#[tokio::test]
// A bearer token other than the expected one is refused
async fn rejects_wrong_token() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .with_client_credential(TestCredential::token("stolen_token"))
        .build()
        .await?;

    let response = test.client.get("/api/items", Some(2)).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let failures = recorded_failures(test).await;
    assert_eq!(
        failures,
        vec![r#"Invalid api token, expected "bearer api_token" but was Some("bearer stolen_token")"#]
    );

    Ok(())
}

#[tokio::test]
// Basic auth is refused when a bearer token is expected
async fn rejects_basic_auth_when_token_expected() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .with_client_credential(basic_credential())
        .build()
        .await?;

    let response = test.client.get("/api/items", Some(2)).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(recorded_failures(test).await.len(), 1);

    Ok(())
}

#[tokio::test]
// A correct username with the wrong password is refused
async fn rejects_wrong_basic_password() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_basic_auth()
        .with_json_fixture(ITEMS_JSON, 2)
        .with_client_credential(TestCredential::basic(TEST_USERNAME, "wrong"))
        .build()
        .await?;

    let response = test.client.get("/api/items", Some(2)).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let failures = recorded_failures(test).await;
    assert!(failures[0].starts_with("Invalid username / password combination"));

    Ok(())
}

#[tokio::test]
// A body rejected by the validator is refused with the validator's message
async fn rejects_body_failing_validator() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items/1")
        .with_method(Method::DELETE)
        .with_json_fixture(ITEMS_JSON, 2)
        .with_body_validator(ExpectEmptyBody)
        .build()
        .await?;

    let response = test
        .client
        .send(
            Method::DELETE,
            "/api/items/1",
            Some(2),
            Some("{}".to_string()),
        )
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        recorded_failures(test).await,
        vec![r#"Request body was rejected: expected an empty body but received "{}""#]
    );

    Ok(())
}

#[tokio::test]
// Requests outside the bound route are answered 404 and recorded
async fn rejects_unbound_route() -> Result<(), TestError> {
    let test = items_server().await?;

    let response = test.client.get("/api/other", Some(2)).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(test.server.hits(), 0);
    let failures = recorded_failures(test).await;
    assert!(failures[0].starts_with("No handler is bound for GET /api/other"));

    Ok(())
}

#[tokio::test]
// A missing fixture file is a recorded failure answered with 500
async fn reports_missing_fixture() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture("does_not_exist.json", 2)
        .build()
        .await?;

    let response = test.client.get("/api/items", Some(2)).await?;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let failures = recorded_failures(test).await;
    assert!(failures[0].contains("does_not_exist.json"));

    Ok(())
}

#[tokio::test]
// Fewer requests than expected fails verification
async fn reports_hit_count_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .expect_hits(2)
        .build()
        .await?;

    test.client.get("/api/items", Some(2)).await?;

    let result = test.close().await;

    assert!(matches!(
        result,
        Err(TestError::MockError(Error::VerificationError(
            VerificationError::HitCountMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        )))
    ));

    Ok(())
}

#[tokio::test]
#[should_panic(expected = "recorded 1 failed request(s)")]
// Dropping a server with failures nobody verified fails the test
async fn dropping_unverified_failures_panics() {
    let test = items_server().await.unwrap();

    let _ = test.client.get("/api/items", Some(5)).await.unwrap();
}

#[tokio::test]
#[should_panic(expected = "recorded 1 failed request(s)")]
// assert_mocks panics on recorded failures
async fn assert_mocks_panics_on_failures() {
    let test = items_server().await.unwrap();

    let _ = test.client.get("/api/items", None).await.unwrap();

    test.assert_mocks();
}

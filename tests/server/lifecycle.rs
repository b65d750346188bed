use routemock::{
    http::Method, serve_file_as_json, serve_file_as_xml, AcceptAnyBody, Error, FixtureSource,
    MockServer,
};
use routemock_test_utils::{
    fixtures::{
        factory::{test_config, token_credential},
        CRUISE_CONFIG_XML, ITEMS_JSON, ITEMS_JSON_BYTES,
    },
    prelude::*,
};

#[tokio::test]
// Closing a server releases its port
async fn close_releases_listener() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .build()
        .await?;
    let addr = test.server.addr();

    test.client.get("/api/items", Some(2)).await?;
    test.close().await?;

    assert!(tokio::net::TcpStream::connect(addr).await.is_err());

    Ok(())
}

#[tokio::test]
// Every server binds its own ephemeral port on localhost
async fn servers_bind_distinct_ports() -> Result<(), TestError> {
    let first = TestBuilder::new("/api/items").build().await?;
    let second = TestBuilder::new("/api/items").build().await?;

    assert!(first.server.addr().ip().is_loopback());
    assert_ne!(first.server.addr(), second.server.addr());
    assert_eq!(first.client.base_url(), first.server.url());
    assert_eq!(
        first.server.url_for("/api/items"),
        format!("http://{}/api/items", first.server.addr())
    );

    first.close().await?;
    second.close().await
}

#[tokio::test]
// Starting a server directly with a composed handler
async fn starts_with_composed_handler() -> Result<(), TestError> {
    let config = test_config()?;
    let handler = serve_file_as_json(
        token_credential(),
        Method::GET,
        FixtureSource::embedded(ITEMS_JSON, ITEMS_JSON_BYTES),
        2,
        AcceptAnyBody,
    )
    .expect_hits(1);

    let server = MockServer::start("/api/items", handler, &config).await?;
    let client = routemock::new_client(&server, token_credential(), &config)?;

    let response = client.get("/api/items", Some(2)).await?;

    assert_eq!(&response.body[..], ITEMS_JSON_BYTES);
    assert_eq!(server.route(), "/api/items");
    assert_eq!(server.hits(), 1);
    assert!(server.failures().is_empty());

    server.close().await?;

    Ok(())
}

#[tokio::test]
// The XML handler helper checks credentials but not Accept
async fn starts_with_xml_handler() -> Result<(), TestError> {
    let config = test_config()?;
    let handler = serve_file_as_xml(token_credential(), Method::GET, CRUISE_CONFIG_XML);

    let server = MockServer::start("/go/admin/config.xml", handler, &config).await?;
    let client = routemock::new_client(&server, token_credential(), &config)?;

    let response = client.get("/go/admin/config.xml", None).await?;

    assert_eq!(response.status, 200);
    server.close().await?;

    Ok(())
}

#[tokio::test]
// Routes axum cannot register are refused before anything is bound
async fn rejects_invalid_route() -> Result<(), TestError> {
    let config = test_config()?;
    let handler = serve_file_as_xml(token_credential(), Method::GET, CRUISE_CONFIG_XML);

    let result = MockServer::start("go/admin/config.xml", handler, &config).await;

    assert!(matches!(result, Err(Error::InvalidRoute { .. })));

    Ok(())
}

#[tokio::test]
// Verifying consumes recorded failures so the server can be dropped afterwards
async fn verified_failures_do_not_panic_on_drop() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .build()
        .await?;

    test.client.get("/api/items", None).await?;

    assert!(test.server.verify().is_err());
    assert_eq!(test.server.failures().len(), 1);

    Ok(())
}

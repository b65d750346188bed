use routemock::http::{Method, StatusCode};
use routemock_test_utils::{
    fixtures::{read_fixture, CRUISE_CONFIG_XML},
    prelude::*,
};

#[tokio::test]
// XML fixtures are served with the XML content type and need no Accept header
async fn serves_xml_fixture() -> Result<(), TestError> {
    let test = TestBuilder::new("/go/admin/restful/configuration/file/GET/xml")
        .with_xml_fixture(CRUISE_CONFIG_XML)
        .build()
        .await?;

    let response = test
        .client
        .get("/go/admin/restful/configuration/file/GET/xml", None)
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_type.as_deref(),
        Some("application/xml; charset=utf-8")
    );
    assert_eq!(&response.body[..], &read_fixture(CRUISE_CONFIG_XML)[..]);

    test.close().await
}

#[tokio::test]
// An Accept header sent to an XML route is not checked
async fn ignores_accept_header() -> Result<(), TestError> {
    let test = TestBuilder::new("/go/admin/configuration/file.xml")
        .with_basic_auth()
        .with_xml_fixture(CRUISE_CONFIG_XML)
        .build()
        .await?;

    let response = test
        .client
        .get("/go/admin/configuration/file.xml", Some(3))
        .await?;

    assert_eq!(response.status, StatusCode::OK);

    test.close().await
}

#[tokio::test]
// The method is still checked for XML routes
async fn rejects_wrong_method() -> Result<(), TestError> {
    let test = TestBuilder::new("/go/admin/configuration/file.xml")
        .with_method(Method::POST)
        .with_xml_fixture(CRUISE_CONFIG_XML)
        .build()
        .await?;

    let response = test
        .client
        .get("/go/admin/configuration/file.xml", None)
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(test.server.verify().is_err());

    Ok(())
}

use std::time::Duration;

use dioxus_logger::tracing::Level;
use routemock::{Error, VerificationError};
use routemock_test_utils::{
    fixtures::ITEMS_JSON,
    logging::{capture_logs, CapturedEvent, CapturedLogs},
    prelude::*,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
};

/// Wait for the server's connection tasks to log at error level.
async fn error_events(logs: &CapturedLogs) -> Vec<CapturedEvent> {
    for _ in 0..50 {
        let errors = logs.at_level(Level::ERROR);
        if !errors.is_empty() {
            return errors;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    Vec::new()
}

#[tokio::test]
// A connection that does not speak HTTP is logged at error level without counting as a hit
async fn malformed_connection_is_logged_as_error() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .build()
        .await?;
    let (logs, _guard) = capture_logs();

    let mut stream = TcpStream::connect(test.server.addr()).await?;
    stream.write_all(b"\x00\x01garbage not http\r\n\r\n").await?;
    let mut response = Vec::new();
    // The server may reset instead of closing cleanly
    let _ = stream.read_to_end(&mut response).await;
    drop(stream);

    let errors = error_events(&logs).await;
    assert!(
        errors
            .iter()
            .any(|event| event.target.starts_with("routemock")
                && event.message.contains("connection failed")),
        "expected a connection error, got {:?}",
        logs.events()
    );
    assert_eq!(test.server.hits(), 0);
    assert!(test.server.failures().is_empty());

    test.close().await
}

#[tokio::test]
// A request refused on its head is reported as such even if the client never sends the body
async fn head_violation_is_reported_before_body_arrives() -> Result<(), TestError> {
    let test = TestBuilder::new("/api/items")
        .with_json_fixture(ITEMS_JSON, 2)
        .build()
        .await?;

    let mut stream = TcpStream::connect(test.server.addr()).await?;
    stream
        .write_all(
            b"POST /api/items HTTP/1.1\r\nhost: localhost\r\ncontent-length: 100\r\n\r\n{\"par",
        )
        .await?;

    let mut status_line = [0u8; 12];
    tokio::time::timeout(Duration::from_secs(5), stream.read_exact(&mut status_line))
        .await
        .expect("server should answer before the body is complete")?;
    // Hang up with the body unfinished
    drop(stream);

    assert_eq!(&status_line, b"HTTP/1.1 400");
    assert_eq!(
        test.server.failures(),
        vec!["Expected HTTP method is GET while client sent POST".to_string()]
    );

    let closed = test.close().await;
    assert!(matches!(
        closed,
        Err(TestError::MockError(Error::VerificationError(
            VerificationError::RequestFailures { .. }
        )))
    ));

    Ok(())
}

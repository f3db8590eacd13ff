//! Transport failures surfaced through the resolver.

use std::net::TcpListener;
use std::time::Duration;

use macvendors::{
    categorize_transport_error, Config, ErrorKind, LookupError, TransportFailure, VendorResolver,
};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a base URL on a local port nothing is listening on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

#[tokio::test]
async fn test_connection_refused_propagates_from_both_operations() {
    let resolver = VendorResolver::with_config(Config {
        api_base_url: closed_port_url(),
        ..Default::default()
    })
    .unwrap();

    let lookup_err = resolver.lookup("28:18:78:6D:64:42").await.unwrap_err();
    let name_err = resolver.name("28:18:78:6D:64:42").await.unwrap_err();

    for err in [&lookup_err, &name_err] {
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.is_usage_error());
        match err {
            LookupError::Transport(inner) => {
                assert_eq!(categorize_transport_error(inner), TransportFailure::Connect);
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_configured_timeout_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Microsoft Corporation")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let resolver = VendorResolver::with_config(Config {
        api_base_url: format!("{}/api", server.uri()),
        timeout_seconds: Some(1),
        ..Default::default()
    })
    .unwrap();

    let err = resolver.name("28:18:78:6D:64:42").await.unwrap_err();
    match err {
        LookupError::Transport(inner) => {
            assert_eq!(categorize_transport_error(&inner), TransportFailure::Timeout);
        }
        other => panic!("expected timeout, got {:?}", other),
    }
}

use httpmock::{Method::GET, MockServer};
use sidra_rs::SidraError;
use sidra_rs::metadata::fetch_description;

#[tokio::test]
async fn description_returns_request_error_with_body_on_non_2xx() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/desctabapi.aspx")
            .query_param("c", "999999");
        then.status(500).body("Tabela 999999 inexistente");
    });

    let client = crate::common::client_for(&server);
    let err = fetch_description(&client, 999_999).await.unwrap_err();
    mock.assert();

    match err {
        SidraError::Request { status, url, body } => {
            assert_eq!(status, 500);
            assert!(url.contains("/desctabapi.aspx?c=999999"));
            assert_eq!(body, "Tabela 999999 inexistente");
        }
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn description_body_is_returned_verbatim() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/desctabapi.aspx")
            .query_param("c", "1612");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body><p>/T/ Tabela 1612</p></body></html>");
    });

    let client = crate::common::client_for(&server);
    let body = fetch_description(&client, 1612).await.unwrap();
    mock.assert();
    assert_eq!(body, "<html><body><p>/T/ Tabela 1612</p></body></html>");
}

use httpmock::{Method::GET, MockServer};
use sidra_rs::{ValuesBuilder, ValuesQuery, get_values};

#[tokio::test]
async fn offline_values_decode_records_in_order() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/values/t/1612/n1/1/p/2017,2018/v/109/c81/2713");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::read_fixture("values_1612_soja.json"));
    });

    let client = crate::common::client_for(&server);
    let rows = ValuesBuilder::new(&client, 1612, "1", "1")
        .categories("2713")
        .classification("81")
        .variable("109")
        .period("2017,2018")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(rows.len(), 3);
    // first row is the header row the API prepends when /h/ is not `n`
    assert_eq!(rows[0]["V"], "Valor");
    assert_eq!(rows[1]["D2C"], "2017");
    assert_eq!(rows[2]["V"], "34857289");
    assert_eq!(rows[2]["D4N"], "Soja (em grão)");
}

#[tokio::test]
async fn offline_values_header_segment_is_sent() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/values/t/1612/n1/1/h/n/p/2018");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"NC":"1","V":"34857289"}]"#);
    });

    let client = crate::common::client_for(&server);
    let query = ValuesQuery::new(1612, "1", "1").period("2018").header("n");
    let rows = get_values(&client, &query).await.unwrap();

    mock.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["V"], "34857289");
}

#[tokio::test]
async fn offline_values_rejects_non_json_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/values/t/1612/n1/1");
        then.status(200).body("<html>not json</html>");
    });

    let client = crate::common::client_for(&server);
    let err = ValuesBuilder::new(&client, 1612, "1", "1")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, sidra_rs::SidraError::Json(_)), "got {err:?}");
}

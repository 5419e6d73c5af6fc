#[tokio::test]
#[ignore]
async fn live_values_smoke() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = sidra_rs::SidraClient::builder().build().unwrap();
    let rows = sidra_rs::ValuesBuilder::new(&client, 1612, "1", "all")
        .variable("109")
        .period("last 1")
        .fetch()
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(rows.len() > 1);
        assert!(rows[1].contains_key("V"));
    }
}

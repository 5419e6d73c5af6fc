#[tokio::test]
#[ignore]
async fn live_metadata_1612_smoke() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = sidra_rs::SidraClient::builder().build().unwrap();
    let table = sidra_rs::Table::new(&client, 1612).unwrap();
    let md = table.metadata().parse().await.unwrap();

    if !crate::common::is_recording() {
        assert!(md.active);
        assert_eq!(md.research, "Producao Agricola Municipal");
        assert!(md.variable(109).is_some());
        assert!(md.classification("C81").is_some());
        assert!(md.territorial_level("N1").is_some());
    }
}

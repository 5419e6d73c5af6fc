use std::time::Duration;

use sidra_rs::{SidraClient, ValuesBuilder, ValuesQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    sidra_rs::init_tracing();

    // 1. A client with a request deadline.
    let client = SidraClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    // 2. Build a URL without sending anything.
    let query = ValuesQuery::new(1612, "1", "all")
        .variable("109")
        .classification("81")
        .categories("2713")
        .period("last 3");
    println!("--- Query URL ---");
    println!("{}", query.url(client.base_url())?);
    println!();

    // 3. Fetch the rows. The first row carries the column labels.
    let rows = ValuesBuilder::new(&client, 1612, "1", "all")
        .variable("109")
        .classification("81")
        .categories("2713")
        .period("last 3")
        .fetch()
        .await?;

    println!("--- Soybean planted area, Brazil ---");
    for row in rows.iter().skip(1) {
        println!(
            "  {}: {} {}",
            row.get("D2N").and_then(|v| v.as_str()).unwrap_or("?"),
            row.get("V").and_then(|v| v.as_str()).unwrap_or("?"),
            row.get("MN").and_then(|v| v.as_str()).unwrap_or(""),
        );
    }

    Ok(())
}

use sidra_rs::{SidraClient, Table};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    sidra_rs::init_tracing();

    let code: i64 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(1612);

    let client = SidraClient::default();
    let table = Table::new(&client, code)?;
    println!("{table} -> {}", table.metadata().url()?);

    let md = table.metadata().parse().await?;

    println!("--- {} ---", md.title);
    println!("Research: {}", md.research);
    println!("Subject: {}", md.subject);
    println!("Active: {}", md.active);
    println!(
        "Periods: {} ({} .. {})",
        md.dates.len(),
        md.dates.first().map(String::as_str).unwrap_or("-"),
        md.last_date().unwrap_or("-")
    );
    println!();

    println!("--- Variables ---");
    for v in &md.vars {
        println!("  {:>8}  {}  [{}]", v.code, v.desc, v.decimals);
    }
    println!();

    for o in &md.options {
        println!("--- {} {} ({} values) ---", o.code, o.name, o.count);
        for c in o.values.iter().take(5) {
            println!("  {:>8}  {}", c.code, c.name);
        }
        if o.values.len() > 5 {
            println!("  ...");
        }
    }
    println!();

    println!("--- Territorial levels ---");
    for (code, name) in &md.territory {
        println!("  {code:<4} {name}");
    }

    println!();
    println!("{}", serde_json::to_string_pretty(md)?);

    Ok(())
}

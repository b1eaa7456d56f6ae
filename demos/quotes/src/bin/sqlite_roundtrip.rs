use sql_dam::prelude::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // DATABASE_URL wins when set, otherwise a local SQLite file is used
    let mut config = DamConfig::from_env();
    if config.db.is_none() {
        config.db = Some("sqlite://dam_demo.db?mode=rwc".to_string());
    }

    let registry = Arc::new(ConnectionRegistry::new());
    let mut dam = SqlDam::new(registry.clone());
    dam.setup(&config).await?;

    let aapl = Symbol::new("AAPL")?;
    let quotes = vec![
        Quote::new(1_320_796_800, 395.0, 400.0, 390.0, 398.0, "15000", "398.0"),
        Quote::new(1_320_883_200, 398.0, 405.0, 396.0, 404.5, "17200", "404.5"),
    ];
    dam.write_quotes(&aapl, &quotes)?;

    let fundamentals: FundamentalMap = BTreeMap::from([(
        "EPS".to_string(),
        BTreeMap::from([("2011Q1".to_string(), 6.4), ("2011Q2".to_string(), 7.79)]),
    )]);
    dam.write_fundamental(&aapl, &fundamentals)?;

    let committed = dam.commit().await?;
    info!("Committed {} rows", committed);

    let range = TimeRange::parse("1320796800", None)?;
    for quote in dam.read_quotes(&aapl, range).await? {
        info!("{}", quote);
    }
    info!("Fundamentals: {:?}", dam.read_fundamental(&aapl).await?);
    info!("Stats: {:?}", dam.quote_stats(&aapl).await?);

    dam.teardown().await?;
    registry.close_all().await;
    Ok(())
}

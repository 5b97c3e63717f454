use anyhow::{bail, Context, Result};
use chrono::Utc;
use http::StatusCode;

use listing_api_qa::models::ItemRecord;
use listing_api_qa::{Harness, Settings};

/// End-to-end probe against the configured service: create an item, read it
/// back, delete it, verify it is gone. Exits non-zero on the first mismatch.
#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    let started_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut harness = Harness::with_settings(&settings)?;

    println!("Smoke probe started at: {}", started_at);
    println!("Target: {}", harness.api.base_url());

    let start = std::time::Instant::now();

    let item = harness.created_item().await.context("create step")?;
    println!("Created item {} for seller {}", item.id, item.seller_id);

    let response = harness.api.item_by_id(&item.id).await.context("read step")?;
    if response.status() != StatusCode::OK {
        bail!("read returned {}", response.status());
    }
    let records: Vec<ItemRecord> = serde_json::from_slice(&response.bytes().await?)
        .context("read step: body did not parse as an item list")?;
    let record = records
        .first()
        .context("read step: empty item list")?;
    if record.id != item.id || record.price != item.payload.price {
        bail!(
            "read returned id {} price {}, expected id {} price {}",
            record.id, record.price, item.id, item.payload.price
        );
    }
    println!("Read back item {} (price {})", record.id, record.price);

    let response = harness.api.delete_item_v2(&item.id).await.context("delete step")?;
    if response.status() != StatusCode::OK {
        bail!("delete returned {}", response.status());
    }
    println!("Deleted item {}", item.id);

    let response = harness.api.item_by_id(&item.id).await.context("verify step")?;
    if response.status() != StatusCode::NOT_FOUND {
        bail!("deleted item still answers with {}", response.status());
    }

    println!("\nSmoke probe passed in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

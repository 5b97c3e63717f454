use std::sync::Once;
use http::StatusCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::ItemPayload;
use crate::normalize::CreatedId;
use crate::services::ItemApi;
use crate::utils::retry_with_backoff;

const SETUP_RETRIES: u32 = 2;
const SETUP_BASE_DELAY_MS: u64 = 500;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    });
}

/// Per-case entry point: settings, API handle and the payload RNG.
/// Every case builds its own harness; nothing is shared across cases.
pub struct Harness {
    pub api: ItemApi,
    rng: StdRng,
}

impl Harness {
    pub fn new() -> Result<Self> {
        init_tracing();
        let settings = Settings::new()?;
        Self::with_settings(&settings)
    }

    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let api = ItemApi::new(settings)?;
        Ok(Self { api, rng })
    }

    pub fn payload(&mut self) -> ItemPayload {
        ItemPayload::random(&mut self.rng)
    }

    /// Creates a fresh item for this case. Never cached, never shared.
    pub async fn created_item(&mut self) -> Result<CreatedItem> {
        let payload = self.payload();
        CreatedItem::establish(&self.api, payload).await
    }
}

/// Handle to an item created for the duration of one case. The item is not
/// deleted afterwards; deletion is under test itself and the remote service
/// owns resource lifecycle.
#[derive(Debug, Clone)]
pub struct CreatedItem {
    pub id: String,
    pub seller_id: i64,
    pub payload: ItemPayload,
}

impl CreatedItem {
    /// POSTs the payload, requires 200 and an extractable id. Anything else
    /// becomes `Error::Setup`, failing only the dependent case.
    pub async fn establish(api: &ItemApi, payload: ItemPayload) -> Result<Self> {
        let body = payload.to_value()?;

        let response = retry_with_backoff(SETUP_RETRIES, SETUP_BASE_DELAY_MS, || async {
            api.create_item(&body).await
        })
        .await?;

        let status = response.status();
        let raw = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(Error::Setup(format!(
                "item creation returned {}: {}",
                status,
                String::from_utf8_lossy(&raw)
            )));
        }

        let id = CreatedId::from_slice(&raw).require()?;
        debug!(item_id = %id, seller_id = payload.seller_id, "Established item fixture");

        Ok(Self {
            id,
            seller_id: payload.seller_id,
            payload,
        })
    }
}

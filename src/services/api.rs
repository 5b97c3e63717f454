use http::Method;
use rquest::Response;
use serde_json::Value;
use tracing::debug;
use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::Result;

/// One method per endpoint of the remote item-listing service. Responses
/// come back raw: status codes and body shapes are what the suite asserts
/// on, so nothing here judges them.
pub struct ItemApi {
    client: HttpClient,
    base_url: String,
}

impl ItemApi {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(&settings.api)?;
        let base_url = settings.api.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/1/item`. Takes the body as a `Value` so cases can send
    /// deliberately malformed payloads through the same path.
    pub async fn create_item(&self, body: &Value) -> Result<Response> {
        let url = format!("{}/api/1/item", self.base_url);
        debug!(url = %url, "Creating item");
        let request = self.client.post_json(&url, body)?;
        self.client.send(request).await
    }

    // GET endpoints return the item (or statistics) wrapped in a list.
    pub async fn item_by_id(&self, id: &str) -> Result<Response> {
        let url = format!("{}/api/1/item/{}", self.base_url, id);
        debug!(url = %url, "Fetching item");
        self.client.send(self.client.get(&url)).await
    }

    pub async fn seller_items(&self, seller_id: i64) -> Result<Response> {
        let url = format!("{}/api/1/{}/item", self.base_url, seller_id);
        debug!(url = %url, "Fetching seller items");
        self.client.send(self.client.get(&url)).await
    }

    pub async fn statistic_v1(&self, id: &str) -> Result<Response> {
        let url = format!("{}/api/1/statistic/{}", self.base_url, id);
        debug!(url = %url, "Fetching statistic (v1)");
        self.client.send(self.client.get(&url)).await
    }

    pub async fn statistic_v2(&self, id: &str) -> Result<Response> {
        let url = format!("{}/api/2/statistic/{}", self.base_url, id);
        debug!(url = %url, "Fetching statistic (v2)");
        self.client.send(self.client.get(&url)).await
    }

    // Deletion only exists on the v2 surface.
    pub async fn delete_item_v2(&self, id: &str) -> Result<Response> {
        let url = format!("{}/api/2/item/{}", self.base_url, id);
        debug!(url = %url, "Deleting item");
        self.client.send(self.client.delete(&url)).await
    }

    pub async fn trace_item(&self, id: &str) -> Result<Response> {
        let url = format!("{}/api/1/item/{}", self.base_url, id);
        debug!(url = %url, "Sending TRACE");
        self.client.send(self.client.request(Method::TRACE, &url)).await
    }
}

use serde::Deserialize;
use super::payload::ItemStatistics;

/// One element of the lists returned by `GET /api/1/item/{id}` and
/// `GET /api/1/{sellerId}/item`. Read responses use `sellerId`, not the
/// `sellerID` casing the create endpoint expects.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    #[serde(rename = "sellerId")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub statistics: Option<ItemStatistics>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

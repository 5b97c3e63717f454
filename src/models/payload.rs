use rand::Rng;
use serde::{Deserialize, Serialize};

const NAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NAME_SUFFIX_LEN: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemStatistics {
    pub likes: i64,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
    pub contacts: i64,
}

/// Body of `POST /api/1/item`. Fields are public so a case can generate a
/// valid payload and then override the one field it is probing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemPayload {
    #[serde(rename = "sellerID")]
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: ItemStatistics,
}

impl ItemPayload {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            seller_id: rng.random_range(100_000..=999_999),
            name: format!("Item {}", random_letters(rng, NAME_SUFFIX_LEN)),
            price: rng.random_range(100..=10_000),
            statistics: ItemStatistics {
                likes: rng.random_range(1..=10),
                view_count: rng.random_range(1..=10),
                contacts: rng.random_range(1..=10),
            },
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn random_letters<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| NAME_ALPHABET[rng.random_range(0..NAME_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_payload_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let payload = ItemPayload::random(&mut rng);
            assert!((100_000..=999_999).contains(&payload.seller_id));
            assert!((100..=10_000).contains(&payload.price));
            assert!(payload.name.starts_with("Item "));
            assert_eq!(payload.name.len(), "Item ".len() + NAME_SUFFIX_LEN);
            assert!(payload.name["Item ".len()..].chars().all(|c| c.is_ascii_alphabetic()));
            for counter in [
                payload.statistics.likes,
                payload.statistics.view_count,
                payload.statistics.contacts,
            ] {
                assert!((1..=10).contains(&counter));
            }
        }
    }

    #[test]
    fn same_seed_generates_same_payload() {
        let a = ItemPayload::random(&mut StdRng::seed_from_u64(42));
        let b = ItemPayload::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn payload_serializes_with_wire_casing() {
        let payload = ItemPayload::random(&mut StdRng::seed_from_u64(1));
        let value = payload.to_value().unwrap();
        assert!(value.get("sellerID").is_some());
        assert!(value["statistics"].get("viewCount").is_some());
    }
}

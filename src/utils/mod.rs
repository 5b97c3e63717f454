pub mod retry;

pub use retry::{retry_with_backoff, sleep_with_jitter};

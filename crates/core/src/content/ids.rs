//! Item id generation.
//!
//! Ids look like `news_1718000000000_k3x9a0b`: a collection prefix, the
//! creation time in Unix milliseconds and a short random base-36 suffix.
//! Collisions are unlikely but not impossible.

use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a fresh id for the given prefix using the current time.
pub fn generate_id(prefix: &str) -> String {
    generate_id_at(prefix, Utc::now())
}

/// Generates an id for the given prefix and creation time.
pub fn generate_id_at(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}_{}", now.timestamp_millis(), random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

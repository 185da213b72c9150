//! Id Generation
//!
//! Ids are `<unix-millis>-<suffix>` strings. Uniqueness relies on there being
//! a single writer (the current page); a shared store would need a
//! collision-resistant scheme instead.

use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 10;

/// Fresh id for a newly created item
pub fn new_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), random_suffix())
}

/// Fresh id for the `index`-th item of a batch created in one go
pub fn new_indexed_id(index: usize) -> String {
    format!("{}-{}-{}", Utc::now().timestamp_millis(), index, random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

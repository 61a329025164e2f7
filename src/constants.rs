use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Prefix every content route is mounted under.
pub const API_PREFIX: &str = "/api";

/// Reading speed used to estimate a blog post's reading time.
pub const WORDS_PER_MINUTE: usize = 200;

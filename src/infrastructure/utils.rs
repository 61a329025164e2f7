pub mod media_url;
pub mod valid_uuid;

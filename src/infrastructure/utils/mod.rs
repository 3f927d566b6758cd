pub mod image_url;
pub mod tags;
pub mod valid_uuid;

pub mod db;
pub mod render;
pub mod utils;

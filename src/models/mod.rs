//! Diesel row types and conversions into domain entities.

pub mod category;
pub mod config;
pub mod video;
pub mod video_category;

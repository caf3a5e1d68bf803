pub mod error;
pub mod geocoder;

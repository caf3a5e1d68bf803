pub mod compass;
pub mod coordinate;
pub mod historical_range;
pub mod summary;
pub mod wind_series;

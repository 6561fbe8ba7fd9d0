//! Plan exports: a CSV download and a Google Maps directions link

pub mod csv;
pub mod maps_link;

pub use self::csv::{file_name, plan_to_csv};
pub use maps_link::directions_url;

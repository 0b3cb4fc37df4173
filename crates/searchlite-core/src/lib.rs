pub mod codec;
pub mod error;
pub mod geo;

pub use error::{Result, ValueError};
pub use geo::{GeoPoint, GeoRect};

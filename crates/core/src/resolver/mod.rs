//! Transport-independent operation handlers.
//!
//! Both dispatch surfaces (REST routes and GraphQL fields) call into these
//! resolvers, which is what keeps the two surfaces observably equivalent:
//! validation, gateway calls, and error kinds live here exactly once.

mod image;
mod item;
mod location;
mod weather;

pub use image::ImageResolver;
pub use item::ItemResolver;
pub use location::{LocationQuery, LocationResolver};
pub use weather::WeatherResolver;

//! Market data aggregate: the asset entity, its value objects, the source seam and the search projection.

pub mod entities;
pub mod filter;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use filter::project;
pub use repositories::MarketDataSource;
pub use value_objects::*;

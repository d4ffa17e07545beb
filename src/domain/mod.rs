pub mod bounds;
pub mod classify;
pub mod criteria;
pub mod filter;
pub mod hotel;
pub mod metrics;
pub mod sort;

pub use bounds::PriceBounds;

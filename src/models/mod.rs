//! Data models for the ticker commands and services
//!
//! Instruments, cadences and directions are closed enums with their constants attached.
//! The remaining structs are the outputs of service operations.

pub mod alert;
pub mod cadence;
pub mod chart;
pub mod direction;
pub mod instrument;
pub mod ping;
pub mod ticker;

// Re-export commonly used types for convenience
pub use alert::{AlertSettings, PriceAlert};
pub use cadence::Cadence;
pub use chart::{PricePoint, PriceSeries, SeriesPair};
pub use direction::Direction;
pub use instrument::Instrument;
pub use ping::PingMetrics;
pub use ticker::{MetalPrices, Quote, TickerRequest, TickerSnapshot};

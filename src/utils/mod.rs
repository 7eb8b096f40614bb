pub mod errors;
pub mod ratelimit;
pub mod table;

pub use errors::TickerError;
pub use ratelimit::check_cooldown;
pub use table::Table;

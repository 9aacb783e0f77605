pub mod movements;
pub mod stock_statistics;

pub use movements::*;
pub use stock_statistics::*;

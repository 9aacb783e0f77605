pub mod analysis;
pub mod api;
pub mod filters;
pub mod logging;
pub mod models;
pub mod report;
pub mod server;
pub mod store;
pub mod ui;
pub mod utils;

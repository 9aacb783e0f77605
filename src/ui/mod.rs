//! Terminal dashboard: a navigation shell over the inventory views.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod layout;
pub mod movements;
pub mod products;
pub mod quality;
pub mod state;
pub mod view;

pub use app::{run_app, InventoryApp};
pub use state::{NavigationShell, Tab};

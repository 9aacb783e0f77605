//! Data-access interfaces for products, movements and users.
//!
//! Views and the HTTP server only see these traits. `InMemoryStore` serves the
//! seeded warehouse constants; `crate::api::InventoryClient` implements the
//! same traits over HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Movement, Product, User};

pub mod seed;

#[cfg(test)]
use mockall::automock;

/// Failure of a fetch against a store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid endpoint address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovementStore: Send + Sync {
    async fn fetch_movements(&self) -> Result<Vec<Movement>, StoreError>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Read-only store over fixed collections
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    products: Arc<Vec<Product>>,
    movements: Arc<Vec<Movement>>,
    users: Arc<Vec<User>>,
}

impl InMemoryStore {
    pub fn new(products: Vec<Product>, movements: Vec<Movement>, users: Vec<User>) -> Self {
        Self {
            products: Arc::new(products),
            movements: Arc::new(movements),
            users: Arc::new(users),
        }
    }

    /// Store holding the warehouse's built-in dataset
    pub fn seeded() -> Self {
        Self::new(seed::products(), seed::movements(), seed::users())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.as_ref().clone())
    }
}

#[async_trait]
impl MovementStore for InMemoryStore {
    async fn fetch_movements(&self) -> Result<Vec<Movement>, StoreError> {
        Ok(self.movements.as_ref().clone())
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.as_ref().clone())
    }
}

/// The three stores a consumer talks to, possibly backed by different sources
#[derive(Clone)]
pub struct Stores {
    pub products: Arc<dyn ProductStore>,
    pub movements: Arc<dyn MovementStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    /// Bundle a single source that implements all three traits
    pub fn from_source<S>(source: S) -> Self
    where
        S: ProductStore + MovementStore + UserStore + 'static,
    {
        let source = Arc::new(source);
        Self {
            products: source.clone(),
            movements: source.clone(),
            users: source,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_source(InMemoryStore::seeded())
    }
}

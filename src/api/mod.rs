use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::models::{Config, Movement, Product, User};
use crate::store::{MovementStore, ProductStore, StoreError, UserStore};

pub const PRODUCTS_PATH: &str = "/api/produtos";
pub const MOVEMENTS_PATH: &str = "/api/movimentacoes";
pub const USERS_PATH: &str = "/api/usuarios";

/// HTTP client for the inventory API, usable wherever a store is expected
#[derive(Debug, Clone)]
pub struct InventoryClient {
    client: Client,
    base_url: Url,
}

impl InventoryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|source| StoreError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(&config.api_url, Duration::from_secs(config.http_timeout_secs))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let url = self.base_url.join(path)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| StoreError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| StoreError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ProductStore for InventoryClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        let products: Vec<Product> = self.get_json(PRODUCTS_PATH).await?;
        info!("Fetched {} products from {}", products.len(), self.base_url);
        Ok(products)
    }
}

#[async_trait]
impl MovementStore for InventoryClient {
    async fn fetch_movements(&self) -> Result<Vec<Movement>, StoreError> {
        let movements: Vec<Movement> = self.get_json(MOVEMENTS_PATH).await?;
        info!("Fetched {} movements from {}", movements.len(), self.base_url);
        Ok(movements)
    }
}

#[async_trait]
impl UserStore for InventoryClient {
    async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        let users: Vec<User> = self.get_json(USERS_PATH).await?;
        info!("Fetched {} users from {}", users.len(), self.base_url);
        Ok(users)
    }
}

//! Built-in warehouse dataset, embedded at compile time.

use serde::de::DeserializeOwned;
use tracing::error;

use crate::models::{Movement, Product, User};

const PRODUCTS_JSON: &str = include_str!("../../data/produtos.json");
const MOVEMENTS_JSON: &str = include_str!("../../data/movimentacoes.json");
const USERS_JSON: &str = include_str!("../../data/usuarios.json");

fn decode<T: DeserializeOwned>(name: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            // Only reachable if a data file is edited into an invalid shape
            error!("Built-in dataset {} is malformed: {}", name, e);
            Vec::new()
        }
    }
}

pub fn products() -> Vec<Product> {
    decode("produtos", PRODUCTS_JSON)
}

pub fn movements() -> Vec<Movement> {
    decode("movimentacoes", MOVEMENTS_JSON)
}

pub fn users() -> Vec<User> {
    decode("usuarios", USERS_JSON)
}

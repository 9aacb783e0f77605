use std::collections::HashMap;

use crate::models::{CompleteMovement, Movement, MovementSummary, MovementType, Product};

/// Unit shown when a movement's product cannot be found
pub const FALLBACK_UNIT: &str = "un";

/// Pair each movement with its product by id, keeping movement order
pub fn join_movements(movements: &[Movement], products: &[Product]) -> Vec<CompleteMovement> {
    // First product wins on duplicate ids, like a linear find
    let mut by_id: HashMap<i64, &Product> = HashMap::with_capacity(products.len());
    for product in products {
        by_id.entry(product.id).or_insert(product);
    }

    movements
        .iter()
        .map(|movement| CompleteMovement {
            movement: movement.clone(),
            product: by_id.get(&movement.product_id).map(|p| (*p).clone()),
        })
        .collect()
}

impl CompleteMovement {
    /// Product name, or "Produto ID {id}" for a dangling reference
    pub fn product_label(&self) -> String {
        match &self.product {
            Some(product) => product.name.clone(),
            None => format!("Produto ID {}", self.movement.product_id),
        }
    }

    pub fn unit_label(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.unit.as_str())
            .unwrap_or(FALLBACK_UNIT)
    }

    /// "+50" for inbound, "-8" for outbound
    pub fn signed_quantity(&self) -> String {
        let sign = match self.movement.kind {
            MovementType::Inbound => '+',
            MovementType::Outbound => '-',
        };
        format!("{}{}", sign, self.movement.quantity)
    }
}

pub fn summarize_movements<'a, I>(movements: I) -> MovementSummary
where
    I: IntoIterator<Item = &'a Movement>,
{
    let mut summary = MovementSummary::default();
    for movement in movements {
        summary.total += 1;
        match movement.kind {
            MovementType::Inbound => summary.inbound += 1,
            MovementType::Outbound => summary.outbound += 1,
        }
    }
    summary
}

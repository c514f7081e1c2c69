//! Common error types and fixtures for tests.
//!
//! This module contains:
//! - `TestError`: the general-purpose error raised by test operations
//! - `VendingError` / `VendingMachine`: a small fixture whose operations can
//!   fail in several distinct ways, for tests that branch on the raised error

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Errors raised by simple test operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestError {
    /// A failure with no payload.
    #[error("simple failure")]
    Simple,

    /// A failure carrying a message.
    #[error("{0}")]
    WithMessage(String),
}

/// Errors raised by the vending machine fixture.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum VendingError {
    /// The requested item does not exist.
    #[error("invalid selection")]
    InvalidSelection,

    /// The requested item is sold out.
    #[error("out of stock")]
    OutOfStock,

    /// Not enough coins deposited; carries the number still needed.
    #[error("insufficient funds, {0} more coins needed")]
    InsufficientFunds(u32),
}

/// A vending machine whose `vend` can fail for several reasons.
pub struct VendingMachine {
    /// Item name to (price, count) inventory.
    pub inventory: HashMap<&'static str, (u32, u32)>,
    /// Coins the customer has deposited so far.
    pub coins_deposited: u32,
}

impl VendingMachine {
    pub fn new() -> Self {
        let mut inventory = HashMap::new();
        inventory.insert("Chips", (10, 4));
        inventory.insert("Licorice", (7, 0));
        inventory.insert("Pretzels", (12, 2));
        Self {
            inventory,
            coins_deposited: 0,
        }
    }

    /// Dispense an item, raising on unknown items, empty slots, or short
    /// funds.
    pub fn vend(&mut self, item: &str) -> Result<&'static str, VendingError> {
        let (name, (price, count)) = self
            .inventory
            .get_key_value(item)
            .map(|(name, stock)| (*name, *stock))
            .ok_or(VendingError::InvalidSelection)?;

        if count == 0 {
            return Err(VendingError::OutOfStock);
        }
        if self.coins_deposited < price {
            return Err(VendingError::InsufficientFunds(
                price - self.coins_deposited,
            ));
        }

        self.coins_deposited -= price;
        self.inventory.insert(name, (price, count - 1));
        Ok(name)
    }
}

/// A short await so async tests actually suspend before resolving.
pub async fn yielding<T>(value: T) -> T {
    tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    value
}

// 🧾 Receipt Model - Purchase receipts as submitted by callers
// Values only: no identity here, the registry assigns ids

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// ITEM
// ============================================================================

/// A single line on a receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description, may carry surrounding whitespace
    #[serde(alias = "shortDescription")]
    pub description: String,

    /// Price as a decimal string ("2.25")
    #[serde(alias = "price")]
    pub unit_price: String,
}

impl Item {
    pub fn new(description: &str, unit_price: &str) -> Self {
        Item {
            description: description.to_string(),
            unit_price: unit_price.to_string(),
        }
    }

    /// Parsed unit price, `None` when the string is not a decimal
    pub fn price(&self) -> Option<Decimal> {
        parse_amount(&self.unit_price)
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// Receipt - one purchase
///
/// `total` is never cross-checked against the item prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,

    /// Literal `YYYY-MM-DD`
    pub purchase_date: String,

    /// Literal `HH:MM`, 24-hour clock
    pub purchase_time: String,

    pub total: String,

    pub items: Vec<Item>,
}

impl Receipt {
    /// Decode a receipt from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidReceipt)
    }

    /// Parsed total, `None` when the string is not a decimal
    pub fn total_amount(&self) -> Option<Decimal> {
        parse_amount(&self.total)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Parse a money amount into an exact decimal
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// decimal literal ("12", "12.50", "-3.1") yields `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

// ============================================================================
// TESTS
// ============================================================================

// 🏷️ Scoring Rules - one pure function per facet of a receipt
// Every rule returns non-negative points and degrades to 0 on bad input

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::receipt::{parse_amount, Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const HAPPY_HOUR_POINTS: u64 = 10;

/// Happy hour is [14:00, 16:00)
const HAPPY_HOUR_START: u32 = 14;
const HAPPY_HOUR_END: u32 = 16;

// ============================================================================
// RULE FUNCTIONS
// ============================================================================

/// One point for every ASCII letter or digit in the retailer name
pub fn alphanumeric_name(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .count() as u64
}

/// 50 points if the total is a whole dollar amount
pub fn round_dollar(total: &str) -> u64 {
    match parse_amount(total) {
        Some(amount) if amount.fract().is_zero() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// 25 points if the total is a multiple of 0.25
///
/// Amounts are exact decimals, so "0.30" can never be mistaken for a
/// quarter multiple through rounding.
pub fn quarter_multiple(total: &str) -> u64 {
    let quarter = Decimal::new(25, 2);

    match parse_amount(total) {
        Some(amount) if (amount % quarter).is_zero() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

/// 5 points for every two items
pub fn item_pairs(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// For each item whose trimmed description length is a multiple of 3,
/// `ceil(price * 0.2)` points
///
/// Items with an unparseable or negative price contribute nothing. Points
/// saturate at `u64::MAX` instead of wrapping.
pub fn description_length(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| {
            let len = item.description.trim().chars().count();
            len > 0 && len % 3 == 0
        })
        .filter_map(|item| item.price())
        .map(price_points)
        .fold(0u64, u64::saturating_add)
}

fn price_points(price: Decimal) -> u64 {
    let points = price
        .checked_mul(Decimal::new(2, 1))
        .unwrap_or(Decimal::MAX)
        .ceil();

    if points.is_sign_negative() {
        0
    } else {
        points.to_u64().unwrap_or(u64::MAX)
    }
}

/// 6 points if the day of the purchase date is odd
///
/// Dates that are not `YYYY-MM-DD` are treated as even.
pub fn odd_day(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date.trim(), "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            debug!(purchase_date, error = %e, "unparseable purchase date, treating as even");
            0
        }
    }
}

/// 10 points if the purchase hour falls in [14, 16)
///
/// Only the token before the first `:` is read.
pub fn happy_hour(purchase_time: &str) -> u64 {
    let hour = purchase_time
        .split(':')
        .next()
        .and_then(|token| token.trim().parse::<u32>().ok());

    match hour {
        Some(h) if (HAPPY_HOUR_START..HAPPY_HOUR_END).contains(&h) => HAPPY_HOUR_POINTS,
        _ => 0,
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The fixed rule set, in scoring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AlphanumericName,
    RoundDollar,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddDay,
    HappyHour,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::AlphanumericName,
        Rule::RoundDollar,
        Rule::QuarterMultiple,
        Rule::ItemPairs,
        Rule::DescriptionLength,
        Rule::OddDay,
        Rule::HappyHour,
    ];

    /// Stable identifier used in breakdowns and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Rule::AlphanumericName => "alphanumeric_name",
            Rule::RoundDollar => "round_dollar",
            Rule::QuarterMultiple => "quarter_multiple",
            Rule::ItemPairs => "item_pairs",
            Rule::DescriptionLength => "description_length",
            Rule::OddDay => "odd_day",
            Rule::HappyHour => "happy_hour",
        }
    }

    /// Points this rule awards for the receipt
    pub fn points(&self, receipt: &Receipt) -> u64 {
        match self {
            Rule::AlphanumericName => alphanumeric_name(&receipt.retailer),
            Rule::RoundDollar => round_dollar(&receipt.total),
            Rule::QuarterMultiple => quarter_multiple(&receipt.total),
            Rule::ItemPairs => item_pairs(&receipt.items),
            Rule::DescriptionLength => description_length(&receipt.items),
            Rule::OddDay => odd_day(&receipt.purchase_date),
            Rule::HappyHour => happy_hour(&receipt.purchase_time),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

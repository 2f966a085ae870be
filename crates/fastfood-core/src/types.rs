//! # Domain Types
//!
//! Core domain types for FastFood orders.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌──────────────────────────────────┐    │
//! │  │    LineItem     │            │          OrderStatus             │    │
//! │  │  ─────────────  │            │  ──────────────────────────────  │    │
//! │  │  price    (≥ 0) │            │  Pending ──► Confirmed           │    │
//! │  │  quantity (≥ 0) │            │     │            │               │    │
//! │  └─────────────────┘            │     │            ▼               │    │
//! │                                 │     │      InPreparation         │    │
//! │                                 │     │         │     │            │    │
//! │                                 │     │         │     ▼            │    │
//! │                                 │     │         │   Ready          │    │
//! │                                 │     ▼         ▼     │            │    │
//! │                                 │   Cancelled ◄─┘     ▼            │    │
//! │                                 │               Delivered          │    │
//! │                                 └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither type has an identity or a lifecycle beyond a single call. An
//! order record that *holds* a status lives with the caller.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Line Item
// =============================================================================

/// One priced line of an order.
///
/// Fields are private: [`LineItem::new`] and
/// [`LineItem::from_value`] are the only ways in, and both
/// reject negative values. A `LineItem` that exists is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Unit price.
    #[ts(as = "String")]
    price: Decimal,

    /// Number of units. Fractional quantities (weighed goods) are allowed.
    #[ts(as = "String")]
    quantity: Decimal,
}

impl LineItem {
    /// Creates a line item, rejecting negative price or quantity.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = LineItem::new(Decimal::new(1050, 2), Decimal::from(2)).unwrap();
    /// assert_eq!(item.line_total().unwrap(), Decimal::new(2100, 2));
    ///
    /// assert!(LineItem::new(Decimal::from(-1), Decimal::ONE).is_err());
    /// ```
    pub fn new(price: Decimal, quantity: Decimal) -> Result<Self, ValidationError> {
        ensure_non_negative("price", price)?;
        ensure_non_negative("quantity", quantity)?;
        Ok(LineItem { price, quantity })
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity.
    #[inline]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// `price × quantity`, unrounded. `None` on overflow.
    #[inline]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(self.quantity)
    }
}

fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    // `<` rather than `is_sign_negative` so that -0 passes.
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, not yet accepted by the kitchen.
    Pending,
    /// Accepted by the kitchen.
    Confirmed,
    /// Being prepared.
    InPreparation,
    /// Ready for pickup or delivery.
    Ready,
    /// Handed to the customer. Terminal.
    Delivered,
    /// Abandoned. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::InPreparation,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Canonical snake_case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InPreparation => "in_preparation",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses this status may move to directly.
    ///
    /// ```text
    /// pending        → confirmed, cancelled
    /// confirmed      → in_preparation, cancelled
    /// in_preparation → ready, cancelled
    /// ready          → delivered
    /// delivered      → (terminal)
    /// cancelled      → (terminal)
    /// ```
    pub const fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::InPreparation, OrderStatus::Cancelled],
            OrderStatus::InPreparation => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    /// Whether `next` is one of [`allowed_transitions`](Self::allowed_transitions).
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// A terminal status accepts no transition at all.
    pub const fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Trims, lower-cases, then looks the name up.
    ///
    /// ## Example
    /// ```rust
    /// use fastfood_core::OrderStatus;
    ///
    /// assert_eq!(OrderStatus::parse_normalized("  PENDING "), Some(OrderStatus::Pending));
    /// assert_eq!(OrderStatus::parse_normalized("shipped"), None);
    /// ```
    pub fn parse_normalized(raw: &str) -> Option<OrderStatus> {
        normalize(raw).parse().ok()
    }
}

/// Lower-cased, trimmed form used for every status comparison.
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the canonical name.
impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Returned by `OrderStatus::from_str` for an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Quantity Module
//!
//! Provides the `Quantity` type: a raw count in a product's base unit,
//! tagged with the unit symbol it was expressed in.
//!
//! ## Why Tag the Unit?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE BARE-NUMBER PROBLEM                                                │
//! │                                                                         │
//! │  In systems passing raw f64 quantities around:                          │
//! │    order_qty = 5          ← 5 pieces? 5 boxes? 5 pallets?               │
//! │                                                                         │
//! │  A box of 10 confused with 10 boxes is a 10x ordering error.            │
//! │                                                                         │
//! │  OUR SOLUTION: carry the unit symbol with the number                    │
//! │    Quantity::of(5.0, "box")                                             │
//! │    The conversion graph decides what "box" means for THIS product.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quanta_core::quantity::Quantity;
//!
//! let q = Quantity::of(5.0, "box");
//!
//! // Arithmetic keeps the LEFT operand's unit
//! let more = q.clone() + Quantity::of(2.0, "box");
//! assert_eq!(more.raw(), 7.0);
//!
//! // Division is checked: dividing by zero is an error, not a NaN
//! assert!(more.checked_div(0.0).is_err());
//! ```
//!
//! Parsing `"<value><unit>"` tokens is deliberately NOT provided here; it
//! belongs to the host's input layer. Construct quantities with
//! [`Quantity::of`].

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{EngineError, EngineResult};

// =============================================================================
// Quantity Type
// =============================================================================

/// A commercial quantity: a raw count plus the unit symbol it is
/// expressed in.
///
/// ## Design Decisions
/// - **f64 raw count**: quantities are fractional by nature (14.4 boxes,
///   0.5 pallets); rounding policies decide what is orderable
/// - **Immutable**: operators return new values, nothing mutates in place
/// - **Left-unit arithmetic**: `a + b` keeps `a`'s unit; callers normalize
///   through a conversion graph before mixing units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quantity {
    raw: f64,
    unit: String,
}

impl Quantity {
    /// Creates a quantity of `value` expressed in `unit`.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::quantity::Quantity;
    ///
    /// let q = Quantity::of(144.0, "piece");
    /// assert_eq!(q.raw(), 144.0);
    /// assert_eq!(q.unit(), "piece");
    /// ```
    pub fn of(value: f64, unit: impl Into<String>) -> Self {
        Quantity {
            raw: value,
            unit: unit.into(),
        }
    }

    /// Returns the raw count.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Returns the unit symbol.
    #[inline]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Checks if the count is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw == 0.0
    }

    /// Checks if the count is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.raw > 0.0
    }

    /// Divides the count by a scalar, keeping the unit.
    ///
    /// Division by zero is a hard error, never a silent `inf`/`NaN`.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::quantity::Quantity;
    ///
    /// let q = Quantity::of(144.0, "piece");
    /// let half = q.checked_div(2.0).unwrap();
    /// assert_eq!(half.raw(), 72.0);
    ///
    /// assert!(q.checked_div(0.0).is_err());
    /// ```
    pub fn checked_div(&self, divisor: f64) -> EngineResult<Quantity> {
        if divisor == 0.0 {
            return Err(EngineError::DivisionByZero {
                context: "quantity divided by zero",
            });
        }

        Ok(Quantity {
            raw: self.raw / divisor,
            unit: self.unit.clone(),
        })
    }

    /// Returns the same count re-tagged with another unit symbol.
    ///
    /// This is a relabel, not a conversion; use
    /// [`crate::conversion::UnitConversionGraph::convert`] for actual
    /// unit math.
    pub fn with_unit(&self, unit: impl Into<String>) -> Quantity {
        Quantity {
            raw: self.raw,
            unit: unit.into(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the count and unit in a human-readable
/// format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.raw, self.unit)
    }
}

/// Addition of two quantities. Keeps the left operand's unit.
impl Add for Quantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Quantity {
            raw: self.raw + other.raw,
            unit: self.unit,
        }
    }
}

/// Addition assignment (+=). Keeps the left operand's unit.
impl AddAssign for Quantity {
    fn add_assign(&mut self, other: Self) {
        self.raw += other.raw;
    }
}

/// Subtraction of two quantities. Keeps the left operand's unit.
impl Sub for Quantity {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Quantity {
            raw: self.raw - other.raw,
            unit: self.unit,
        }
    }
}

/// Subtraction assignment (-=). Keeps the left operand's unit.
impl SubAssign for Quantity {
    fn sub_assign(&mut self, other: Self) {
        self.raw -= other.raw;
    }
}

/// Scalar multiplication (for "N of these" calculations).
impl Mul<f64> for Quantity {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Quantity {
            raw: self.raw * factor,
            unit: self.unit,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

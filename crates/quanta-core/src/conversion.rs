//! # Unit Conversion Module
//!
//! Per-product conversion graphs: every sellable unit (box, case,
//! pallet...) is a ratio relative to one base unit.
//!
//! ## Star Topology
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 How a Product's Units Are Wired                         │
//! │                                                                         │
//! │                       box (1:10)                                        │
//! │                          │                                              │
//! │                          ▼                                              │
//! │   case (1:120) ───►  piece (BASE)  ◄─── inner-pack (1:5)                │
//! │                          ▲                                              │
//! │                          │                                              │
//! │                      pallet (1:2880)                                    │
//! │                                                                         │
//! │  Every unit converts to/from the base ONLY. Converting box → case       │
//! │  routes through the base: box → piece → case. No N×N ratio matrix       │
//! │  to keep consistent, no path search.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quanta_core::conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
//!
//! let graph = UnitConversionGraph::new(
//!     "SKU-001",
//!     "piece",
//!     vec![
//!         UnitEntry::new("box", ConversionRatio::new(1.0, 10.0).unwrap()),
//!         UnitEntry::new("case", ConversionRatio::new(1.0, 120.0).unwrap()),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.convert(5.0, "box", "piece").unwrap(), 50.0);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ConfigError, ConfigResult, EngineError, EngineResult};
use crate::rounding::RoundingPolicy;
use crate::validation::{validate_identifier, validate_positive};

// =============================================================================
// Conversion Ratio
// =============================================================================

/// A ratio between two units: `from_value` of one unit equals `to_value`
/// of the other.
///
/// ## Why a Pair Instead of a Factor?
/// Merchants state ratios as pairs ("3 inner-packs = 2 display trays"),
/// not as repeating decimals. Storing both sides keeps the configured
/// numbers exact and derives the factor on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionRatio {
    from_value: f64,
    to_value: f64,
}

impl ConversionRatio {
    /// Creates a ratio; both sides must be strictly positive.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::conversion::ConversionRatio;
    ///
    /// let ratio = ConversionRatio::new(1.0, 10.0).unwrap(); // 1 box = 10 pieces
    /// assert_eq!(ratio.factor(), 10.0);
    ///
    /// assert!(ConversionRatio::new(0.0, 10.0).is_err());
    /// assert!(ConversionRatio::new(1.0, -4.0).is_err());
    /// ```
    pub fn new(from_value: f64, to_value: f64) -> ConfigResult<Self> {
        if !(from_value > 0.0) {
            return Err(ConfigError::NonPositiveRatio {
                field: "from_value".to_string(),
                value: from_value,
            });
        }
        if !(to_value > 0.0) {
            return Err(ConfigError::NonPositiveRatio {
                field: "to_value".to_string(),
                value: to_value,
            });
        }

        Ok(ConversionRatio {
            from_value,
            to_value,
        })
    }

    /// The multiplicative factor: `to_value / from_value`.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.to_value / self.from_value
    }

    /// Composes two ratios into the transitive ratio.
    ///
    /// If `self` maps A→B and `other` maps B→C, the result maps A→C:
    /// its factor is the product of both factors.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::conversion::ConversionRatio;
    ///
    /// let box_to_piece = ConversionRatio::new(1.0, 10.0).unwrap();
    /// let case_to_box = ConversionRatio::new(1.0, 12.0).unwrap();
    /// let case_to_piece = case_to_box.compose(&box_to_piece);
    /// assert_eq!(case_to_piece.factor(), 120.0);
    /// ```
    pub fn compose(&self, other: &ConversionRatio) -> ConversionRatio {
        // Positivity is preserved under multiplication, so no re-validation
        ConversionRatio {
            from_value: self.from_value * other.from_value,
            to_value: self.to_value * other.to_value,
        }
    }
}

// =============================================================================
// Unit Entry
// =============================================================================

/// One unit registration handed to [`UnitConversionGraph::new`]: the unit
/// symbol, its ratio to the base unit, and an optional per-unit rounding
/// policy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitEntry {
    pub unit: String,
    pub ratio: ConversionRatio,
    pub rounding: Option<RoundingPolicy>,
}

impl UnitEntry {
    /// Creates an entry without a rounding policy.
    pub fn new(unit: impl Into<String>, ratio: ConversionRatio) -> Self {
        UnitEntry {
            unit: unit.into(),
            ratio,
            rounding: None,
        }
    }

    /// Attaches a rounding policy to this unit.
    pub fn with_rounding(mut self, policy: RoundingPolicy) -> Self {
        self.rounding = Some(policy);
        self
    }
}

// =============================================================================
// Unit Conversion Graph
// =============================================================================

/// A product's unit-conversion configuration: named units mapped to a
/// shared base unit via ratios (star topology).
///
/// Built once, immutable thereafter. Re-registering a product id in a
/// [`crate::registry::ProductRegistry`] replaces the whole graph
/// (last-write-wins, no merge).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitConversionGraph {
    product_id: String,
    base_unit: String,
    conversions: HashMap<String, ConversionRatio>,
    rounding_policies: HashMap<String, RoundingPolicy>,
}

impl UnitConversionGraph {
    /// Builds a conversion graph from a list of unit entries.
    ///
    /// ## Rules
    /// - `product_id` and `base_unit` must be non-blank
    /// - Every entry's unit symbol must be non-blank
    /// - A unit listed twice keeps the LAST entry (consistent with
    ///   last-write-wins registration semantics)
    ///
    /// The base unit itself needs no entry; it converts with factor 1 by
    /// definition.
    pub fn new(
        product_id: impl Into<String>,
        base_unit: impl Into<String>,
        entries: Vec<UnitEntry>,
    ) -> ConfigResult<Self> {
        let product_id = product_id.into();
        let base_unit = base_unit.into();

        validate_identifier("product_id", &product_id)?;
        validate_identifier("base_unit", &base_unit)?;

        let mut conversions = HashMap::new();
        let mut rounding_policies = HashMap::new();

        for entry in entries {
            validate_identifier("unit", &entry.unit)?;
            validate_positive("ratio factor", entry.ratio.factor())?;

            if let Some(policy) = entry.rounding {
                rounding_policies.insert(entry.unit.clone(), policy);
            }
            conversions.insert(entry.unit, entry.ratio);
        }

        debug!(
            product_id = %product_id,
            base_unit = %base_unit,
            units = conversions.len(),
            "Built unit conversion graph"
        );

        Ok(UnitConversionGraph {
            product_id,
            base_unit,
            conversions,
            rounding_policies,
        })
    }

    /// Returns the product id this graph belongs to.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the base unit symbol.
    #[inline]
    pub fn base_unit(&self) -> &str {
        &self.base_unit
    }

    /// Returns the rounding policy registered for `unit`, if any.
    pub fn policy_for(&self, unit: &str) -> Option<&RoundingPolicy> {
        self.rounding_policies.get(unit)
    }

    /// Returns true if `unit` is the base unit or has a registered ratio.
    pub fn knows_unit(&self, unit: &str) -> bool {
        unit == self.base_unit || self.conversions.contains_key(unit)
    }

    /// Converts `value` from one unit to another, routing through the
    /// base unit.
    ///
    /// ## How It Works
    /// 1. `from == to` → identity, no lookup at all
    /// 2. Normalize to base: multiply by the source unit's factor
    ///    (a unit's factor is how many base units one package holds)
    /// 3. Denormalize: divide by the target unit's factor
    ///
    /// ## Errors
    /// A non-base unit absent from the graph fails with
    /// [`EngineError::UnitNotFound`] naming the product searched.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
    ///
    /// let graph = UnitConversionGraph::new(
    ///     "SKU-001",
    ///     "piece",
    ///     vec![UnitEntry::new("box", ConversionRatio::new(1.0, 10.0).unwrap())],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.convert(5.0, "box", "piece").unwrap(), 50.0);
    /// assert_eq!(graph.convert(50.0, "piece", "box").unwrap(), 5.0);
    /// assert!(graph.convert(1.0, "crate", "piece").is_err());
    /// ```
    pub fn convert(&self, value: f64, from: &str, to: &str) -> EngineResult<f64> {
        if from == to {
            return Ok(value);
        }

        let to_base = if from == self.base_unit {
            value
        } else {
            value * self.ratio_for(from)?.factor()
        };

        let result = if to == self.base_unit {
            to_base
        } else {
            to_base / self.ratio_for(to)?.factor()
        };

        Ok(result)
    }

    /// Converts a value in `unit` to the base unit.
    pub fn to_base(&self, value: f64, unit: &str) -> EngineResult<f64> {
        self.convert(value, unit, &self.base_unit)
    }

    fn ratio_for(&self, unit: &str) -> EngineResult<&ConversionRatio> {
        self.conversions
            .get(unit)
            .ok_or_else(|| EngineError::UnitNotFound {
                unit: unit.to_string(),
                scope: format!("product '{}'", self.product_id),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

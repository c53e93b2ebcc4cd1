//! # Availability Module
//!
//! Compares a requested quantity against available stock, both
//! normalized to the product's base unit, and proposes ranked
//! fulfillable alternatives on shortfall.
//!
//! ## Check Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │          check_availability(req: 2 case, avail: 200 piece)              │
//! │                                                                         │
//! │  normalize through the product graph:                                   │
//! │    requested  = 2 case  → 240 piece                                     │
//! │    available  = 200 piece                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  can_fulfill = 200 >= 240 → false     (exact match DOES fulfill)        │
//! │  shortage    = 40 piece                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  alternatives from the packaging hierarchy:                             │
//! │    1 case  (120) covers 0.50 of the request                             │
//! │    8 box   (192) covers 0.80 of the request   ← ranked by coverage      │
//! │                                                                         │
//! │  Sorted descending; empty when no hierarchy is registered or no         │
//! │  level yields at least one full package.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::conversion::UnitConversionGraph;
use crate::error::{EngineError, EngineResult};
use crate::hierarchy::{PackagingHierarchy, PackagingLevel};
use crate::quantity::Quantity;

// =============================================================================
// Results
// =============================================================================

/// A fulfillable alternative: `count` full packages of `level`, with the
/// share of the original request it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FulfillableAlternative {
    pub level: PackagingLevel,
    pub count: f64,
    pub units: f64,
    /// `units / requested_base`; above 1.0 means the alternative
    /// over-covers the request.
    pub coverage: f64,
}

/// The outcome of an availability check, in the product's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AvailabilityReport {
    pub can_fulfill: bool,
    pub requested_base: f64,
    pub available_base: f64,
    /// Positive shortfall in base units; `None` when fulfillable.
    pub shortage: Option<f64>,
    /// Ranked descending by coverage. Empty without a hierarchy or when
    /// no level fits at least one full package into the stock.
    pub alternatives: Vec<FulfillableAlternative>,
}

// =============================================================================
// Check
// =============================================================================

/// Checks whether `available` stock covers a `requested` quantity.
///
/// Both quantities normalize through the product's conversion graph;
/// fulfillment is non-strict (exact match fulfills). On shortfall the
/// packaging hierarchy, when given, contributes alternatives the stock
/// CAN cover, ranked by how much of the request each one serves.
///
/// ## Errors
/// - [`EngineError::UnitNotFound`] when either quantity's unit is absent
///   from the graph
/// - [`EngineError::NonPositiveQuantity`] when the requested quantity is
///   zero or negative (the coverage ranking would divide by it)
///
/// ## Example
/// ```rust
/// use quanta_core::availability::check_availability;
/// use quanta_core::conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
/// use quanta_core::quantity::Quantity;
///
/// let graph = UnitConversionGraph::new(
///     "SKU-001",
///     "piece",
///     vec![UnitEntry::new("box", ConversionRatio::new(1.0, 10.0).unwrap())],
/// )
/// .unwrap();
///
/// let report = check_availability(
///     &Quantity::of(5.0, "box"),
///     &Quantity::of(80.0, "piece"),
///     &graph,
///     None,
/// )
/// .unwrap();
///
/// assert!(report.can_fulfill); // 80 >= 50
/// ```
pub fn check_availability(
    requested: &Quantity,
    available: &Quantity,
    graph: &UnitConversionGraph,
    hierarchy: Option<&PackagingHierarchy>,
) -> EngineResult<AvailabilityReport> {
    let requested_base = graph.to_base(requested.raw(), requested.unit())?;
    let available_base = graph.to_base(available.raw(), available.unit())?;

    if requested_base <= 0.0 {
        return Err(EngineError::NonPositiveQuantity {
            field: "requested quantity",
            value: requested_base,
        });
    }

    let can_fulfill = available_base >= requested_base;
    let shortage = if can_fulfill {
        None
    } else {
        Some(requested_base - available_base)
    };

    let mut alternatives = Vec::new();
    if let Some(hierarchy) = hierarchy {
        for level in hierarchy.levels() {
            let count = (available_base / level.units_per_package()).floor();
            if count < 1.0 {
                continue;
            }

            let units = count * level.units_per_package();
            alternatives.push(FulfillableAlternative {
                level: level.clone(),
                count,
                units,
                coverage: units / requested_base,
            });
        }

        alternatives.sort_by(|a, b| {
            b.coverage
                .partial_cmp(&a.coverage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    debug!(
        product_id = %graph.product_id(),
        requested_base,
        available_base,
        can_fulfill,
        alternatives = alternatives.len(),
        "Availability checked"
    );

    Ok(AvailabilityReport {
        can_fulfill,
        requested_base,
        available_base,
        shortage,
        alternatives,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionRatio, UnitEntry};

    fn graph() -> UnitConversionGraph {
        UnitConversionGraph::new(
            "SKU-001",
            "piece",
            vec![
                UnitEntry::new("box", ConversionRatio::new(1.0, 24.0).unwrap()),
                UnitEntry::new("case", ConversionRatio::new(1.0, 120.0).unwrap()),
            ],
        )
        .unwrap()
    }

    fn hierarchy() -> PackagingHierarchy {
        PackagingHierarchy::new(
            "SKU-001",
            vec![
                PackagingLevel::new("piece", "Piece", 1.0).unwrap(),
                PackagingLevel::new("box", "Box", 24.0).unwrap(),
                PackagingLevel::new("case", "Case", 120.0).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_match_fulfills() {
        let report = check_availability(
            &Quantity::of(1.0, "case"),
            &Quantity::of(120.0, "piece"),
            &graph(),
            None,
        )
        .unwrap();

        assert!(report.can_fulfill);
        assert!(report.shortage.is_none());
    }

    #[test]
    fn test_shortage_in_base_units() {
        let report = check_availability(
            &Quantity::of(2.0, "case"),
            &Quantity::of(200.0, "piece"),
            &graph(),
            None,
        )
        .unwrap();

        assert!(!report.can_fulfill);
        assert_eq!(report.requested_base, 240.0);
        assert_eq!(report.shortage, Some(40.0));
    }

    #[test]
    fn test_alternatives_ranked_by_coverage() {
        let hierarchy = hierarchy();
        let report = check_availability(
            &Quantity::of(2.0, "case"),
            &Quantity::of(200.0, "piece"),
            &graph(),
            Some(&hierarchy),
        )
        .unwrap();

        // 200 pieces: 200 pieces (coverage 0.833), 8 boxes = 192 (0.8),
        // 1 case = 120 (0.5)
        let symbols: Vec<&str> = report
            .alternatives
            .iter()
            .map(|a| a.level.symbol())
            .collect();
        assert_eq!(symbols, vec!["piece", "box", "case"]);

        assert_eq!(report.alternatives[1].count, 8.0);
        assert_eq!(report.alternatives[1].units, 192.0);
        assert!((report.alternatives[1].coverage - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_hierarchy_means_no_alternatives() {
        let report = check_availability(
            &Quantity::of(2.0, "case"),
            &Quantity::of(200.0, "piece"),
            &graph(),
            None,
        )
        .unwrap();
        assert!(report.alternatives.is_empty());
    }

    #[test]
    fn test_levels_without_a_full_package_are_skipped() {
        let hierarchy = hierarchy();
        let report = check_availability(
            &Quantity::of(1.0, "box"),
            &Quantity::of(30.0, "piece"),
            &graph(),
            Some(&hierarchy),
        )
        .unwrap();

        // 30 pieces: no full case fits
        assert!(report
            .alternatives
            .iter()
            .all(|a| a.level.symbol() != "case"));
    }

    #[test]
    fn test_unknown_unit_propagates() {
        let err = check_availability(
            &Quantity::of(1.0, "crate"),
            &Quantity::of(30.0, "piece"),
            &graph(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::UnitNotFound { .. }));
    }

    #[test]
    fn test_zero_request_is_rejected() {
        let err = check_availability(
            &Quantity::of(0.0, "piece"),
            &Quantity::of(30.0, "piece"),
            &graph(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::NonPositiveQuantity { .. }));
    }
}

//! # Packaging Hierarchy Module
//!
//! Greedy decomposition of a raw base-unit count into a human-meaningful
//! packaging breakdown ("10 cases + 2 boxes + 12 pieces").
//!
//! ## Greedy, Largest First
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              decompose(1500) over piece/box/case/pallet                 │
//! │                                                                         │
//! │  pallet (2880, viable ≥ 0.5)   floor(1500/2880) = 0   → skip            │
//! │  case   (144)                  floor(1500/144)  = 10  → take 1440       │
//! │  box    (24)                   floor(60/24)     = 2   → take 48         │
//! │  piece  (base)                 remaining        = 12  → take 12         │
//! │                                                                         │
//! │  Result: 10 case + 2 box + 12 piece   (sums to exactly 1500)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A level whose extracted count would fall below its minimum viable
//! count is skipped ENTIRELY, even though a nonzero count could be
//! taken ("don't break a pallet for fewer than N pallets").
//!
//! This is a fast, explainable heuristic. It does NOT guarantee a
//! globally minimal package count, and the `efficiency` score is a
//! display aid, not a correctness contract.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{validate_identifier, validate_non_negative, validate_positive};
use crate::REMAINDER_EPSILON;

// =============================================================================
// Packaging Level
// =============================================================================

/// One rung of a packaging hierarchy: a named package size in base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackagingLevel {
    symbol: String,
    display_name: String,
    units_per_package: f64,
    /// Smallest count worth extracting at this level. Defaults to 1;
    /// fractional values are legal (a merchant may ship half-pallets,
    /// expressed as viable count 0.5 on a full-pallet level).
    minimum_viable_count: f64,
}

impl PackagingLevel {
    /// Creates a level; `units_per_package` must be positive.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::hierarchy::PackagingLevel;
    ///
    /// let case = PackagingLevel::new("case", "Case", 144.0).unwrap();
    /// assert_eq!(case.units_per_package(), 144.0);
    /// assert_eq!(case.minimum_viable_count(), 1.0);
    /// ```
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        units_per_package: f64,
    ) -> ConfigResult<Self> {
        let symbol = symbol.into();
        validate_identifier("level symbol", &symbol)?;
        validate_positive("units_per_package", units_per_package)?;

        Ok(PackagingLevel {
            symbol,
            display_name: display_name.into(),
            units_per_package,
            minimum_viable_count: 1.0,
        })
    }

    /// Sets the minimum viable count (must be >= 0).
    pub fn with_minimum_viable(mut self, count: f64) -> ConfigResult<Self> {
        validate_non_negative("minimum_viable_count", count)?;
        self.minimum_viable_count = count;
        Ok(self)
    }

    /// Returns the level symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the package size in base units.
    #[inline]
    pub fn units_per_package(&self) -> f64 {
        self.units_per_package
    }

    /// Returns the minimum viable count.
    #[inline]
    pub fn minimum_viable_count(&self) -> f64 {
        self.minimum_viable_count
    }
}

// =============================================================================
// Packaging Hierarchy
// =============================================================================

/// A product's ordered packaging levels, strictly ascending by
/// units-per-package. The ordering is a construction-time invariant:
/// a hierarchy that builds successfully always decomposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackagingHierarchy {
    product_id: String,
    levels: Vec<PackagingLevel>,
}

impl PackagingHierarchy {
    /// Builds a hierarchy from ascending-sorted levels.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptyHierarchy`] when `levels` is empty
    /// - [`ConfigError::UnsortedHierarchy`] when units-per-package is not
    ///   strictly ascending
    pub fn new(
        product_id: impl Into<String>,
        levels: Vec<PackagingLevel>,
    ) -> ConfigResult<Self> {
        let product_id = product_id.into();
        validate_identifier("product_id", &product_id)?;

        if levels.is_empty() {
            return Err(ConfigError::EmptyHierarchy { product_id });
        }

        for pair in levels.windows(2) {
            if pair[1].units_per_package <= pair[0].units_per_package {
                return Err(ConfigError::UnsortedHierarchy {
                    product_id,
                    level: pair[1].symbol.clone(),
                    units_per_package: pair[1].units_per_package,
                    previous: pair[0].units_per_package,
                });
            }
        }

        Ok(PackagingHierarchy { product_id, levels })
    }

    /// Returns the product id this hierarchy belongs to.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the levels, ascending by units-per-package.
    #[inline]
    pub fn levels(&self) -> &[PackagingLevel] {
        &self.levels
    }

    /// Greedily decomposes a raw base-unit count into packaging
    /// components, largest level first.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::hierarchy::{PackagingHierarchy, PackagingLevel};
    ///
    /// let hierarchy = PackagingHierarchy::new(
    ///     "SKU-001",
    ///     vec![
    ///         PackagingLevel::new("piece", "Piece", 1.0).unwrap(),
    ///         PackagingLevel::new("box", "Box", 24.0).unwrap(),
    ///         PackagingLevel::new("case", "Case", 144.0).unwrap(),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// let result = hierarchy.decompose(300.0);
    /// assert_eq!(result.components[0].count, 2.0); // 2 cases = 288
    /// assert_eq!(result.components[1].count, 12.0); // 12 pieces
    /// ```
    pub fn decompose(&self, total_units: f64) -> Decomposition {
        greedy_decompose(total_units, &self.levels)
    }
}

// =============================================================================
// Decomposition Result
// =============================================================================

/// One slice of a decomposition: `count` packages of `level`, covering
/// `units` base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackagingComponent {
    pub level: PackagingLevel,
    pub count: f64,
    pub units: f64,
}

/// The result of a greedy decomposition. Components are ordered largest
/// level first, mirroring how the breakdown reads to a human.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decomposition {
    pub components: Vec<PackagingComponent>,
    pub total_units: f64,
    /// Heuristic in [0, 1) favoring larger levels:
    /// `Σ(component_units · level_index) / (total_units · level_count)`.
    /// Display aid only; nothing in the engine branches on it.
    pub efficiency: f64,
}

impl Decomposition {
    /// Number of non-zero components (used by the chain search to pick
    /// the most compact representation).
    pub fn component_count(&self) -> usize {
        self.components.iter().filter(|c| c.count > 0.0).count()
    }
}

/// The greedy core, shared with the chain search in [`crate::chain`].
///
/// `levels` must be ascending by units-per-package. Levels with
/// units-per-package above 1 are visited largest first; whatever remains
/// is emitted on the base level (the units-per-package == 1 level when
/// the hierarchy lists one, a synthetic "unit" level otherwise).
pub(crate) fn greedy_decompose(total_units: f64, levels: &[PackagingLevel]) -> Decomposition {
    let level_count = levels.len();
    let mut remaining = total_units;
    let mut components = Vec::new();
    let mut weighted_units = 0.0;

    for (index, level) in levels.iter().enumerate().rev() {
        if level.units_per_package <= 1.0 {
            continue;
        }

        let count = (remaining / level.units_per_package).floor();
        if count < level.minimum_viable_count || count < 1.0 {
            debug!(
                level = %level.symbol,
                count,
                minimum_viable = level.minimum_viable_count,
                "Skipping level below viable count"
            );
            continue;
        }

        let units = count * level.units_per_package;
        weighted_units += units * index as f64;
        remaining -= units;
        components.push(PackagingComponent {
            level: level.clone(),
            count,
            units,
        });
    }

    if remaining > REMAINDER_EPSILON {
        let base_level = match levels.first() {
            Some(level) if level.units_per_package == 1.0 => level.clone(),
            // Hierarchy lists no explicit base level; synthesize one so
            // the leftover is still accounted for
            _ => PackagingLevel {
                symbol: "unit".to_string(),
                display_name: "Base unit".to_string(),
                units_per_package: 1.0,
                minimum_viable_count: 0.0,
            },
        };
        // Base level sits at index 0, contributing nothing to the
        // weighted sum
        components.push(PackagingComponent {
            level: base_level,
            count: remaining,
            units: remaining,
        });
    }

    let efficiency = if total_units > 0.0 && level_count > 0 {
        weighted_units / (total_units * level_count as f64)
    } else {
        0.0
    };

    Decomposition {
        components,
        total_units,
        efficiency,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

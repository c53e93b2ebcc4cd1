//! # Unit Chain Module
//!
//! Named chains of packaging levels, independent of any single product's
//! configuration. Each level's factor is relative to the PREVIOUS level,
//! the way suppliers describe their packaging:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │           chain "retail": piece → box → carton → pallet                 │
//! │                                                                         │
//! │   piece          box ×12        carton ×4        pallet ×10             │
//! │     │              │               │                │                   │
//! │  cum = 1        cum = 12        cum = 48         cum = 480              │
//! │                                                                         │
//! │  Cumulative factor of level i = Π factor[1..=i]  (relative to the       │
//! │  chain's FIRST element, NOT to the base of some product graph)          │
//! │                                                                         │
//! │  convert(1, pallet, piece) = 1 × 480 / 1 = 480                          │
//! │  convert(96, piece, carton) = 96 × 1 / 48 = 2                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry also answers "which chain expresses this quantity most
//! compactly?" by running the same greedy decomposition as
//! [`crate::hierarchy`] over every registered chain.

use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ConfigError, ConfigResult, EngineError, EngineResult};
use crate::hierarchy::{greedy_decompose, Decomposition, PackagingLevel};
use crate::validation::{validate_identifier, validate_positive};

// =============================================================================
// Chain Unit
// =============================================================================

/// One link of a unit chain. `factor_to_previous` states how many of the
/// previous unit make up one of this unit; the first link's factor is 1
/// by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChainUnit {
    symbol: String,
    display_name: String,
    factor_to_previous: f64,
    /// Optional short form; lookups match it as well as the symbol.
    abbreviation: Option<String>,
}

impl ChainUnit {
    /// Creates a chain unit; the factor must be positive.
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        factor_to_previous: f64,
    ) -> ConfigResult<Self> {
        let symbol = symbol.into();
        validate_identifier("chain unit symbol", &symbol)?;
        validate_positive("factor_to_previous", factor_to_previous)?;

        Ok(ChainUnit {
            symbol,
            display_name: display_name.into(),
            factor_to_previous,
            abbreviation: None,
        })
    }

    /// Sets the abbreviation matched by unit lookups.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Returns the unit symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the factor relative to the previous chain link.
    #[inline]
    pub fn factor_to_previous(&self) -> f64 {
        self.factor_to_previous
    }

    fn matches(&self, needle: &str) -> bool {
        self.symbol == needle || self.abbreviation.as_deref() == Some(needle)
    }
}

// =============================================================================
// Unit Chain
// =============================================================================

/// A named, ordered sequence of chain units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitChain {
    name: String,
    units: Vec<ChainUnit>,
}

impl UnitChain {
    /// Builds a chain; the name must be non-blank and at least one unit
    /// is required.
    pub fn new(name: impl Into<String>, units: Vec<ChainUnit>) -> ConfigResult<Self> {
        let name = name.into();
        validate_identifier("chain name", &name)?;

        if units.is_empty() {
            return Err(ConfigError::EmptyChain { name });
        }

        Ok(UnitChain { name, units })
    }

    /// Returns the chain name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chain's units in order.
    #[inline]
    pub fn units(&self) -> &[ChainUnit] {
        &self.units
    }

    /// Cumulative factor of the unit at `index`, relative to the chain's
    /// first element: the product of factors from index 1 up to `index`.
    pub fn cumulative_factor(&self, index: usize) -> f64 {
        self.units[1..=index]
            .iter()
            .map(|u| u.factor_to_previous)
            .product()
    }

    /// Finds a unit by symbol or abbreviation.
    fn index_of(&self, unit: &str) -> EngineResult<usize> {
        self.units
            .iter()
            .position(|u| u.matches(unit))
            .ok_or_else(|| EngineError::UnitNotFound {
                unit: unit.to_string(),
                scope: format!("chain '{}'", self.name),
            })
    }

    /// Converts a value between two units of this chain.
    ///
    /// Converting TO the first element multiplies by the source's
    /// cumulative factor; converting FROM the first element divides by
    /// the target's. The general case composes both.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> EngineResult<f64> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;

        Ok(value * self.cumulative_factor(from_index) / self.cumulative_factor(to_index))
    }

    /// The chain's units expressed as packaging levels (package size =
    /// cumulative factor, viable count 1), ascending, for the greedy
    /// decomposition reused by the optimal-unit search.
    fn as_levels(&self) -> Vec<PackagingLevel> {
        let mut levels: Vec<PackagingLevel> = self
            .units
            .iter()
            .enumerate()
            .filter_map(|(index, unit)| {
                PackagingLevel::new(
                    unit.symbol.clone(),
                    unit.display_name.clone(),
                    self.cumulative_factor(index),
                )
                .ok()
            })
            .collect();

        levels.sort_by(|a, b| {
            a.units_per_package()
                .partial_cmp(&b.units_per_package())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        levels
    }
}

// =============================================================================
// Fractional Representation
// =============================================================================

/// Quarter buckets for display ("2¼ boxes"). A DISPLAY heuristic only;
/// order math always runs on the exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuarterFraction {
    None,
    Quarter,
    Half,
    ThreeQuarters,
}

/// A converted quantity split into whole units plus a quarter bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FractionalQuantity {
    pub whole: f64,
    pub fraction: QuarterFraction,
    pub unit: String,
}

/// Display implementation shows the quantity with fraction glyphs.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for FractionalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self.fraction {
            QuarterFraction::None => "",
            QuarterFraction::Quarter => "¼",
            QuarterFraction::Half => "½",
            QuarterFraction::ThreeQuarters => "¾",
        };
        write!(f, "{}{} {}", self.whole, glyph, self.unit)
    }
}

// =============================================================================
// Suggestion Results
// =============================================================================

/// One chain's greedy breakdown of a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChainBreakdown {
    pub chain_name: String,
    pub decomposition: Decomposition,
}

/// The optimal-unit search result: every chain's breakdown plus the name
/// of the most compact one (fewest non-zero components; ties keep the
/// first registered chain). `selected` is `None` when no chain is
/// registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitSuggestion {
    pub per_chain: Vec<ChainBreakdown>,
    pub selected: Option<String>,
}

// =============================================================================
// Chain Registry
// =============================================================================

/// Registry of named unit chains.
///
/// ## Thread Safety
/// Chains are registered during configuration and read-only afterwards.
/// The Vec is RwLock-guarded so concurrent registration and lookup stay
/// safe; registration order is preserved (it breaks search ties) and
/// re-registering a name replaces the chain in place (last-write-wins,
/// no merge).
#[derive(Debug, Default)]
pub struct ChainRegistry {
    chains: RwLock<Vec<UnitChain>>,
}

impl ChainRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ChainRegistry {
            chains: RwLock::new(Vec::new()),
        }
    }

    /// Registers a chain. A chain with the same name is replaced in
    /// place, keeping its original position in registration order.
    pub fn register(&self, chain: UnitChain) {
        let mut chains = self.chains.write().expect("chain registry lock poisoned");

        debug!(chain = %chain.name, units = chain.units.len(), "Registering unit chain");

        if let Some(existing) = chains.iter_mut().find(|c| c.name == chain.name) {
            *existing = chain;
        } else {
            chains.push(chain);
        }
    }

    /// Returns a clone of the named chain.
    pub fn get(&self, name: &str) -> EngineResult<UnitChain> {
        let chains = self.chains.read().expect("chain registry lock poisoned");

        chains
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| {
                EngineError::Config(ConfigError::UnknownChain {
                    name: name.to_string(),
                })
            })
    }

    /// Converts a value between two units of the named chain.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::chain::{ChainRegistry, ChainUnit, UnitChain};
    ///
    /// let registry = ChainRegistry::new();
    /// registry.register(
    ///     UnitChain::new(
    ///         "retail",
    ///         vec![
    ///             ChainUnit::new("piece", "Piece", 1.0).unwrap(),
    ///             ChainUnit::new("box", "Box", 12.0).unwrap(),
    ///             ChainUnit::new("carton", "Carton", 4.0).unwrap(),
    ///             ChainUnit::new("pallet", "Pallet", 10.0).unwrap(),
    ///         ],
    ///     )
    ///     .unwrap(),
    /// );
    ///
    /// assert_eq!(registry.convert(1.0, "pallet", "piece", "retail").unwrap(), 480.0);
    /// ```
    pub fn convert(&self, value: f64, from: &str, to: &str, chain_name: &str) -> EngineResult<f64> {
        self.get(chain_name)?.convert(value, from, to)
    }

    /// Searches every registered chain for the most compact
    /// representation of `quantity_in_base` (the chain's first element is
    /// taken as the base).
    pub fn suggest_optimal_unit(&self, quantity_in_base: f64) -> UnitSuggestion {
        let chains = self.chains.read().expect("chain registry lock poisoned");

        let mut per_chain = Vec::with_capacity(chains.len());
        let mut selected: Option<(String, usize)> = None;

        for chain in chains.iter() {
            let decomposition = greedy_decompose(quantity_in_base, &chain.as_levels());
            let count = decomposition.component_count();

            // Strict < keeps the FIRST registered chain on ties
            if selected.as_ref().map_or(true, |(_, best)| count < *best) {
                selected = Some((chain.name.clone(), count));
            }

            per_chain.push(ChainBreakdown {
                chain_name: chain.name.clone(),
                decomposition,
            });
        }

        if let Some((name, count)) = &selected {
            debug!(chain = %name, components = count, "Selected most compact chain");
        }

        UnitSuggestion {
            per_chain,
            selected: selected.map(|(name, _)| name),
        }
    }

    /// Converts `value` (in the chain's first element) to `target_unit`
    /// and buckets the fractional part into quarters for display.
    ///
    /// Buckets: `< 0.125` drops the fraction, `< 0.375` → ¼,
    /// `< 0.625` → ½, `< 0.875` → ¾, otherwise a whole unit is carried.
    pub fn to_fractional(
        &self,
        value: f64,
        target_unit: &str,
        chain_name: &str,
    ) -> EngineResult<FractionalQuantity> {
        let chain = self.get(chain_name)?;
        let base_symbol = chain.units[0].symbol.clone();
        let converted = chain.convert(value, &base_symbol, target_unit)?;

        let mut whole = converted.floor();
        let fractional = converted - whole;

        let fraction = if fractional < 0.125 {
            QuarterFraction::None
        } else if fractional < 0.375 {
            QuarterFraction::Quarter
        } else if fractional < 0.625 {
            QuarterFraction::Half
        } else if fractional < 0.875 {
            QuarterFraction::ThreeQuarters
        } else {
            whole += 1.0;
            QuarterFraction::None
        };

        // Resolve the caller's spelling (symbol or abbreviation) to the
        // canonical symbol for display
        let index = chain.index_of(target_unit)?;
        let unit = chain.units[index].symbol.clone();

        Ok(FractionalQuantity {
            whole,
            fraction,
            unit,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

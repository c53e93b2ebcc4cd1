//! # Product Registry
//!
//! The dependency-injected context object tying the engine together: a
//! lock-guarded map of per-product configurations (conversion graph plus
//! optional packaging hierarchy).
//!
//! ## Thread Safety
//! The registry is wrapped in `RwLock` because:
//! 1. Configuration happens once (imports, admin screens), reads happen
//!    on every order line
//! 2. Readers never block each other; a writer briefly excludes all
//! 3. Re-registering a product id OVERWRITES the prior configuration
//!    (last-write-wins, no merge)
//!
//! ## Why Not a Global Singleton?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry as Explicit Context                         │
//! │                                                                         │
//! │  Host (API / desktop app)                                               │
//! │       │ owns                                                            │
//! │       ▼                                                                 │
//! │  ProductRegistry ──► register(config)      (configuration phase)        │
//! │       │                                                                 │
//! │       ├──► convert(product, value, from, to)                            │
//! │       ├──► apply_policy(product, unit, value)                           │
//! │       ├──► decompose(product, total)                                    │
//! │       └──► check_availability(product, requested, available)            │
//! │                                                                         │
//! │  Tests construct their own registry; nothing hides in process globals.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::availability::{check_availability, AvailabilityReport};
use crate::conversion::UnitConversionGraph;
use crate::error::{ConfigError, ConfigResult, EngineError, EngineResult};
use crate::hierarchy::{Decomposition, PackagingHierarchy};
use crate::quantity::Quantity;
use crate::rounding::QuantityCheck;

// =============================================================================
// Product Configuration
// =============================================================================

/// Everything the engine knows about one product: its conversion graph
/// and, optionally, its packaging hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductConfig {
    graph: UnitConversionGraph,
    hierarchy: Option<PackagingHierarchy>,
}

impl ProductConfig {
    /// Pairs a graph with an optional hierarchy; both must describe the
    /// same product id.
    pub fn new(
        graph: UnitConversionGraph,
        hierarchy: Option<PackagingHierarchy>,
    ) -> ConfigResult<Self> {
        if let Some(hierarchy) = &hierarchy {
            if hierarchy.product_id() != graph.product_id() {
                return Err(ConfigError::ProductMismatch {
                    graph_product: graph.product_id().to_string(),
                    hierarchy_product: hierarchy.product_id().to_string(),
                });
            }
        }

        Ok(ProductConfig { graph, hierarchy })
    }

    /// Returns the conversion graph.
    #[inline]
    pub fn graph(&self) -> &UnitConversionGraph {
        &self.graph
    }

    /// Returns the packaging hierarchy, if registered.
    #[inline]
    pub fn hierarchy(&self) -> Option<&PackagingHierarchy> {
        self.hierarchy.as_ref()
    }
}

// =============================================================================
// Product Registry
// =============================================================================

/// Registry of product configurations, keyed by product id.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: RwLock<HashMap<String, ProductConfig>>,
}

impl ProductRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ProductRegistry {
            products: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a product configuration. An existing configuration for
    /// the same product id is REPLACED wholesale (last-write-wins, no
    /// merge).
    pub fn register(&self, config: ProductConfig) {
        let product_id = config.graph.product_id().to_string();

        debug!(
            product_id = %product_id,
            has_hierarchy = config.hierarchy.is_some(),
            "Registering product configuration"
        );

        self.products
            .write()
            .expect("product registry lock poisoned")
            .insert(product_id, config);
    }

    /// Returns a clone of a product's configuration.
    pub fn get(&self, product_id: &str) -> EngineResult<ProductConfig> {
        self.products
            .read()
            .expect("product registry lock poisoned")
            .get(product_id)
            .cloned()
            .ok_or_else(|| EngineError::ProductNotFound(product_id.to_string()))
    }

    /// Converts a value between two of the product's units.
    pub fn convert(
        &self,
        product_id: &str,
        value: f64,
        from: &str,
        to: &str,
    ) -> EngineResult<f64> {
        self.get(product_id)?.graph.convert(value, from, to)
    }

    /// Adjusts a value against the rounding policy registered for `unit`.
    /// A unit with no policy passes through unchanged: no rules
    /// configured means nothing to adjust.
    pub fn apply_policy(&self, product_id: &str, unit: &str, value: f64) -> EngineResult<f64> {
        let config = self.get(product_id)?;
        match config.graph.policy_for(unit) {
            Some(policy) => policy.apply(value),
            None => {
                debug!(product_id, unit, "No rounding policy for unit, passing through");
                Ok(value)
            }
        }
    }

    /// Validates a value against the rounding policy registered for
    /// `unit`. `None` when the unit carries no policy.
    pub fn check_quantity(
        &self,
        product_id: &str,
        unit: &str,
        value: f64,
    ) -> EngineResult<Option<QuantityCheck>> {
        let config = self.get(product_id)?;
        config
            .graph
            .policy_for(unit)
            .map(|policy| policy.check(value))
            .transpose()
    }

    /// Decomposes a base-unit total into the product's packaging
    /// breakdown.
    pub fn decompose(&self, product_id: &str, total_units: f64) -> EngineResult<Decomposition> {
        let config = self.get(product_id)?;
        let hierarchy = config
            .hierarchy
            .as_ref()
            .ok_or_else(|| EngineError::HierarchyNotRegistered(product_id.to_string()))?;

        Ok(hierarchy.decompose(total_units))
    }

    /// Checks stock availability for the product, with alternatives from
    /// its hierarchy when one is registered.
    pub fn check_availability(
        &self,
        product_id: &str,
        requested: &Quantity,
        available: &Quantity,
    ) -> EngineResult<AvailabilityReport> {
        let config = self.get(product_id)?;
        check_availability(requested, available, &config.graph, config.hierarchy())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionRatio, UnitEntry};
    use crate::hierarchy::PackagingLevel;
    use crate::rounding::{RoundingDiscipline, RoundingPolicy};

    fn sample_config(box_size: f64) -> ProductConfig {
        let graph = UnitConversionGraph::new(
            "SKU-001",
            "piece",
            vec![UnitEntry::new(
                "box",
                ConversionRatio::new(1.0, box_size).unwrap(),
            )
            .with_rounding(RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Up).unwrap())],
        )
        .unwrap();

        let hierarchy = PackagingHierarchy::new(
            "SKU-001",
            vec![
                PackagingLevel::new("piece", "Piece", 1.0).unwrap(),
                PackagingLevel::new("box", "Box", box_size).unwrap(),
            ],
        )
        .unwrap();

        ProductConfig::new(graph, Some(hierarchy)).unwrap()
    }

    #[test]
    fn test_register_and_convert() {
        let registry = ProductRegistry::new();
        registry.register(sample_config(10.0));

        assert_eq!(
            registry.convert("SKU-001", 5.0, "box", "piece").unwrap(),
            50.0
        );
    }

    #[test]
    fn test_unknown_product() {
        let registry = ProductRegistry::new();
        let err = registry.convert("SKU-999", 1.0, "box", "piece").unwrap_err();
        assert!(matches!(err, EngineError::ProductNotFound(_)));
    }

    #[test]
    fn test_reregistration_is_last_write_wins() {
        let registry = ProductRegistry::new();
        registry.register(sample_config(10.0));
        registry.register(sample_config(24.0));

        // No merge: the second registration fully replaced the first
        assert_eq!(
            registry.convert("SKU-001", 1.0, "box", "piece").unwrap(),
            24.0
        );
    }

    #[test]
    fn test_apply_policy_and_pass_through() {
        let registry = ProductRegistry::new();
        registry.register(sample_config(10.0));

        // "box" has an Up 12/12 policy
        assert_eq!(registry.apply_policy("SKU-001", "box", 7.0).unwrap(), 12.0);
        // "piece" has none: pass-through
        assert_eq!(registry.apply_policy("SKU-001", "piece", 7.0).unwrap(), 7.0);
    }

    #[test]
    fn test_check_quantity() {
        let registry = ProductRegistry::new();
        registry.register(sample_config(10.0));

        let check = registry
            .check_quantity("SKU-001", "box", 15.0)
            .unwrap()
            .unwrap();
        assert!(!check.is_valid);
        assert_eq!(check.suggested_quantity, 24.0);

        assert!(registry
            .check_quantity("SKU-001", "piece", 15.0)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_decompose_requires_hierarchy() {
        let registry = ProductRegistry::new();
        let graph = UnitConversionGraph::new("SKU-002", "piece", vec![]).unwrap();
        registry.register(ProductConfig::new(graph, None).unwrap());

        let err = registry.decompose("SKU-002", 100.0).unwrap_err();
        assert!(matches!(err, EngineError::HierarchyNotRegistered(_)));
    }

    #[test]
    fn test_check_availability_through_registry() {
        let registry = ProductRegistry::new();
        registry.register(sample_config(24.0));

        let report = registry
            .check_availability(
                "SKU-001",
                &Quantity::of(2.0, "box"),
                &Quantity::of(30.0, "piece"),
            )
            .unwrap();

        assert!(!report.can_fulfill);
        assert_eq!(report.shortage, Some(18.0));
        // 30 pieces support 1 full box
        assert!(report
            .alternatives
            .iter()
            .any(|a| a.level.symbol() == "box" && a.count == 1.0));
    }

    #[test]
    fn test_mismatched_hierarchy_rejected() {
        let graph = UnitConversionGraph::new("SKU-001", "piece", vec![]).unwrap();
        let hierarchy = PackagingHierarchy::new(
            "SKU-OTHER",
            vec![PackagingLevel::new("piece", "Piece", 1.0).unwrap()],
        )
        .unwrap();

        assert!(matches!(
            ProductConfig::new(graph, Some(hierarchy)).unwrap_err(),
            ConfigError::ProductMismatch { .. }
        ));
    }
}

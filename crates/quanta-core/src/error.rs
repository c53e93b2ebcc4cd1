//! # Error Types
//!
//! Domain-specific error types for quanta-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quanta-core errors (this file)                                        │
//! │  ├── ConfigError      - Malformed setup (caught at build/registration) │
//! │  └── EngineError      - Runtime failures (lookup, limits, arithmetic)  │
//! │                                                                         │
//! │  Host-layer errors (integrating applications)                          │
//! │  └── ApiError         - What frontends see (serialized)                │
//! │                                                                         │
//! │  Flow: ConfigError → EngineError → ApiError → Frontend                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (unit symbol, scope searched, limits)
//! 3. Errors are enum variants, never String
//! 4. Check-style calls return structured results instead of errors;
//!    only UP-over-maximum is a hard error (see [`crate::rounding`])

use thiserror::Error;

// =============================================================================
// Configuration Error
// =============================================================================

/// Malformed engine setup.
///
/// Raised at construction/registration time wherever possible, so a bad
/// product or chain configuration never reaches the conversion math.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required identifier (product id, base unit, symbol, chain name)
    /// is empty or whitespace.
    #[error("{field} must not be blank")]
    BlankIdentifier { field: String },

    /// A conversion ratio was built from a non-positive value.
    #[error("conversion ratio {field} must be positive, got {value}")]
    NonPositiveRatio { field: String, value: f64 },

    /// A numeric rule parameter is outside its legal range.
    #[error("{field} must be {requirement}, got {value}")]
    InvalidRuleParameter {
        field: String,
        requirement: &'static str,
        value: f64,
    },

    /// A packaging hierarchy was built with no levels.
    #[error("packaging hierarchy for {product_id} has no levels")]
    EmptyHierarchy { product_id: String },

    /// Hierarchy levels must be strictly ascending by units-per-package.
    ///
    /// ## When This Occurs
    /// - Two levels share the same units-per-package
    /// - Levels were listed out of order (e.g. case before box)
    #[error(
        "packaging hierarchy for {product_id} is not strictly ascending: \
         level '{level}' ({units_per_package}) does not exceed the previous \
         level ({previous})"
    )]
    UnsortedHierarchy {
        product_id: String,
        level: String,
        units_per_package: f64,
        previous: f64,
    },

    /// A unit chain was built with no units.
    #[error("unit chain {name} has no units")]
    EmptyChain { name: String },

    /// A chain name was looked up but never registered.
    #[error("unit chain not registered: {name}")]
    UnknownChain { name: String },

    /// A packaging hierarchy was registered against a graph built for a
    /// different product.
    #[error(
        "packaging hierarchy belongs to product {hierarchy_product}, \
         but the conversion graph is for {graph_product}"
    )]
    ProductMismatch {
        graph_product: String,
        hierarchy_product: String,
    },
}

// =============================================================================
// Engine Error
// =============================================================================

/// Runtime engine failures.
///
/// These surface synchronously to the immediate caller; nothing in the
/// engine is retried (there are no transient conditions in pure
/// computation).
#[derive(Debug, Error)]
pub enum EngineError {
    /// A unit symbol is absent from the scope that was searched.
    ///
    /// `scope` names where the lookup happened, e.g.
    /// `product 'SKU-001'` or `chain 'metric-retail'`, so the message is
    /// actionable without a debugger.
    #[error("unit '{unit}' not found in {scope}")]
    UnitNotFound { unit: String, scope: String },

    /// Quantity exceeds the policy maximum and the discipline is UP, which
    /// may only round upward. Other disciplines clamp to the maximum
    /// instead of failing.
    ///
    /// ## User Workflow
    /// ```text
    /// apply(1200) with maximum=1000, discipline=Up
    ///      │
    ///      ▼
    /// OrderExceedsMaximum { quantity: 1200.0, maximum: 1000.0 }
    ///      │
    ///      ▼
    /// UI shows: "Order of 1200 exceeds the maximum of 1000"
    /// ```
    #[error("quantity {quantity} exceeds maximum order quantity {maximum}")]
    OrderExceedsMaximum { quantity: f64, maximum: f64 },

    /// Division by zero in quantity arithmetic.
    #[error("division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// A quantity that must be strictly positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveQuantity { field: &'static str, value: f64 },

    /// Product id was never registered.
    ///
    /// ## When This Occurs
    /// - The configuration phase skipped this product
    /// - A caller used a stale id after a catalog change
    #[error("product not registered: {0}")]
    ProductNotFound(String),

    /// The product exists but carries no packaging hierarchy, and the
    /// requested operation needs one.
    #[error("no packaging hierarchy registered for product {0}")]
    HierarchyNotRegistered(String),

    /// Configuration error surfaced at first use (wraps ConfigError).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Unit Tests
// =============================================================================

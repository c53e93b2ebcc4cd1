//! # Validation Module
//!
//! Construction-time validation for engine configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host application (forms, imports)                            │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (constructors call these)                        │
//! │  ├── Blank identifiers                                                 │
//! │  ├── Non-positive ratios and rule parameters                           │
//! │  └── Hierarchy level ordering                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine operations                                            │
//! │  └── Lookup failures name the symbol and the scope searched            │
//! │                                                                         │
//! │  A graph/hierarchy/chain that constructs successfully never produces   │
//! │  a ConfigError at use time (except unknown-chain lookups).             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a caller-supplied identifier (product id, unit symbol,
/// chain name).
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use quanta_core::validation::validate_identifier;
///
/// assert!(validate_identifier("product_id", "SKU-001").is_ok());
/// assert!(validate_identifier("product_id", "   ").is_err());
/// ```
pub fn validate_identifier(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::BlankIdentifier {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a value that must be strictly positive (ratio components,
/// minimum order quantity, packaging unit, units-per-package).
pub fn validate_positive(field: &str, value: f64) -> ConfigResult<()> {
    if !(value > 0.0) {
        return Err(ConfigError::InvalidRuleParameter {
            field: field.to_string(),
            requirement: "> 0",
            value,
        });
    }

    Ok(())
}

/// Validates a value that must be at least one (increment unit).
pub fn validate_at_least_one(field: &str, value: f64) -> ConfigResult<()> {
    if !(value >= 1.0) {
        return Err(ConfigError::InvalidRuleParameter {
            field: field.to_string(),
            requirement: ">= 1",
            value,
        });
    }

    Ok(())
}

/// Validates a value that must be non-negative (minimum viable count).
pub fn validate_non_negative(field: &str, value: f64) -> ConfigResult<()> {
    if !(value >= 0.0) {
        return Err(ConfigError::InvalidRuleParameter {
            field: field.to_string(),
            requirement: ">= 0",
            value,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

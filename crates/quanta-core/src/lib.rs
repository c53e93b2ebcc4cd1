//! # quanta-core: Pure Quantity Rules for Quanta
//!
//! This crate is the **heart** of Quanta. It normalizes, rounds, and
//! decomposes commercial quantities (pieces, boxes, cases, pallets...)
//! so that order quantities respect per-product packaging rules — as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Quanta Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Host applications (API, desktop, imports)          │   │
//! │  │   order entry ──► stock screens ──► supplier catalogs           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quanta-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌──────────┐ ┌───────────┐ ┌──────────────┐  │   │
//! │  │   │ conversion │ │ rounding │ │ hierarchy │ │ chain        │  │   │
//! │  │   │ star graph │ │ 5 discs  │ │ greedy    │ │ cum. factors │  │   │
//! │  │   └────────────┘ └──────────┘ └───────────┘ └──────────────┘  │   │
//! │  │   ┌────────────┐ ┌──────────────┐                              │   │
//! │  │   │ registry   │ │ availability │                              │   │
//! │  │   └────────────┘ └──────────────┘                              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quantity`] - The `Quantity` value type (raw count + unit symbol)
//! - [`conversion`] - Per-product star-topology unit conversion graphs
//! - [`rounding`] - MOQ / packaging / increment rounding policies
//! - [`hierarchy`] - Greedy packaging decomposition
//! - [`chain`] - Named unit chains and the optimal-unit search
//! - [`availability`] - Stock checks with ranked alternatives
//! - [`registry`] - The dependency-injected product configuration store
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time validators
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Validate at Construction**: A graph/hierarchy/chain that builds
//!    successfully never produces a configuration error at use time
//! 4. **Explicit Errors**: All errors are typed, never strings or panics;
//!    check-style calls return structured results with a corrected
//!    quantity, not bare rejections
//!
//! ## Example Usage
//!
//! ```rust
//! use quanta_core::conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
//! use quanta_core::rounding::{RoundingDiscipline, RoundingPolicy};
//!
//! // 1 box = 12 pieces; orders come in dozens, at least one box
//! let graph = UnitConversionGraph::new(
//!     "SKU-001",
//!     "piece",
//!     vec![UnitEntry::new("box", ConversionRatio::new(1.0, 12.0).unwrap())
//!         .with_rounding(RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Up).unwrap())],
//! )
//! .unwrap();
//!
//! // Normalize a request of 5 boxes to pieces
//! assert_eq!(graph.convert(5.0, "box", "piece").unwrap(), 60.0);
//!
//! // Round a raw piece count up to the packaging rules
//! let policy = graph.policy_for("box").unwrap();
//! assert_eq!(policy.apply(15.0).unwrap(), 24.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod chain;
pub mod conversion;
pub mod error;
pub mod hierarchy;
pub mod quantity;
pub mod registry;
pub mod rounding;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quanta_core::Quantity` instead of
// `use quanta_core::quantity::Quantity`

pub use availability::{check_availability, AvailabilityReport, FulfillableAlternative};
pub use chain::{
    ChainBreakdown, ChainRegistry, ChainUnit, FractionalQuantity, QuarterFraction, UnitChain,
    UnitSuggestion,
};
pub use conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use hierarchy::{Decomposition, PackagingComponent, PackagingHierarchy, PackagingLevel};
pub use quantity::Quantity;
pub use registry::{ProductConfig, ProductRegistry};
pub use rounding::{
    QuantityCheck, QuantityRange, RoundingDiscipline, RoundingPolicy, SpecialRoundingRule,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tolerance for "is this a multiple?" remainder checks.
///
/// ## Why a Tolerance?
/// Quantities arrive as f64 after conversion math; a count of 23.9999999
/// pieces IS two dozen. 1e-3 is far below any commercial granularity
/// while absorbing accumulated float noise.
pub const MULTIPLE_TOLERANCE: f64 = 1e-3;

/// Leftovers below this threshold are dropped by the decomposer instead
/// of being emitted as a base-level component.
pub const REMAINDER_EPSILON: f64 = 1e-3;

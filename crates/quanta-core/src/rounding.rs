//! # Rounding Policy Module
//!
//! Evaluates order quantities against a merchant's packaging rules:
//! minimum order quantity (MOQ), packaging multiples, increment steps,
//! an optional maximum, and ordered special-range overrides.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    RoundingPolicy::apply(q)                             │
//! │                                                                         │
//! │  q below minimum? ────────► return minimum (ALL disciplines)           │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  q above maximum? ────────► Up: hard error                             │
//! │       │ no                  others: clamp to maximum                    │
//! │       ▼                                                                 │
//! │  special rule range hit? ─► round with THAT rule's discipline and      │
//! │       │ no                  override increment, then return            │
//! │       ▼                                                                 │
//! │  round to packaging multiple (policy discipline)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  increment > 1? ──────────► re-round result to increment multiple      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  return                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Disciplines
//! Five tie-breaking disciplines, matching how merchants state their
//! rules ("always round cases up", "banker's rounding on bulk"):
//! Up, Down, HalfUp, HalfDown, HalfEven. See [`RoundingDiscipline`].
//!
//! ## Below-Minimum Choice
//! Two observed variants disagree on below-minimum behavior under Down:
//! always-minimum vs. zero. This engine implements always-minimum for
//! EVERY discipline: a rounding policy models an MOQ, and collapsing an
//! order to zero because the discipline happens to be Down turns "round
//! my order" into "cancel my order". Documented in DESIGN.md.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;

use crate::error::{ConfigError, ConfigResult, EngineError, EngineResult};
use crate::validation::{validate_at_least_one, validate_positive};
use crate::MULTIPLE_TOLERANCE;

// =============================================================================
// Rounding Discipline
// =============================================================================

/// How to resolve a quantity that falls between two multiples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingDiscipline {
    /// Always round toward the next multiple above.
    Up,
    /// Always round toward the next multiple below.
    Down,
    /// Round to the nearest multiple; exact halves go up.
    HalfUp,
    /// Round to the nearest multiple; exact halves go down.
    HalfDown,
    /// Round to the nearest multiple; exact halves go to the even
    /// multiple (banker's rounding - no systematic bias over many
    /// orders).
    HalfEven,
}

impl RoundingDiscipline {
    /// Rounds `value` to a multiple of `unit` under this discipline.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::rounding::RoundingDiscipline;
    ///
    /// assert_eq!(RoundingDiscipline::Up.round_to_multiple(15.0, 12.0), 24.0);
    /// assert_eq!(RoundingDiscipline::Down.round_to_multiple(15.0, 12.0), 12.0);
    /// assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(2.5, 1.0), 2.0);
    /// assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(3.5, 1.0), 4.0);
    /// ```
    pub fn round_to_multiple(&self, value: f64, unit: f64) -> f64 {
        let f = value / unit;

        let rounded = match self {
            RoundingDiscipline::Up => f.ceil(),
            RoundingDiscipline::Down => f.floor(),
            // f64::round is half-away-from-zero, exactly HalfUp for the
            // non-negative quantities this engine deals in
            RoundingDiscipline::HalfUp => f.round(),
            RoundingDiscipline::HalfDown => {
                if f - f.floor() > 0.5 {
                    f.ceil()
                } else {
                    f.floor()
                }
            }
            RoundingDiscipline::HalfEven => {
                let nearest = f.round();
                if (f - nearest).abs() == 0.5 && nearest.abs() % 2.0 == 1.0 {
                    // Exact tie landing on an odd multiple: the even
                    // candidate is one below
                    f.floor()
                } else {
                    nearest
                }
            }
        };

        rounded * unit
    }
}

// =============================================================================
// Quantity Range
// =============================================================================

/// A closed interval `[min, max]` over raw quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantityRange {
    min: f64,
    max: f64,
}

impl QuantityRange {
    /// Creates a closed range; `min` must not exceed `max`.
    pub fn new(min: f64, max: f64) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::InvalidRuleParameter {
                field: "special rule range".to_string(),
                requirement: "min <= max",
                value: min,
            });
        }

        Ok(QuantityRange { min, max })
    }

    /// Both endpoints are inclusive.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// =============================================================================
// Special Rounding Rule
// =============================================================================

/// A range-scoped override: quantities inside `range` round with this
/// rule's discipline and increment instead of the policy's packaging
/// pipeline.
///
/// Rules are evaluated in declaration order; the FIRST matching range
/// wins, even if a later range also contains the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpecialRoundingRule {
    range: QuantityRange,
    discipline: RoundingDiscipline,
    /// Increment to round to inside this range. Falls back to the
    /// policy's `increment_unit` when absent.
    override_increment: Option<f64>,
}

impl SpecialRoundingRule {
    /// Creates a rule that rounds with `discipline` inside `range`.
    pub fn new(range: QuantityRange, discipline: RoundingDiscipline) -> Self {
        SpecialRoundingRule {
            range,
            discipline,
            override_increment: None,
        }
    }

    /// Sets the increment used inside this range (must be positive).
    pub fn with_override_increment(mut self, increment: f64) -> ConfigResult<Self> {
        validate_positive("override_increment", increment)?;
        self.override_increment = Some(increment);
        Ok(self)
    }
}

// =============================================================================
// Violation
// =============================================================================

/// Why a quantity failed validation. Carried inside [`QuantityCheck`] so
/// callers get an actionable reason, not a bare boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    BelowMinimum { minimum: f64 },
    AboveMaximum { maximum: f64 },
    OffIncrement { increment: f64 },
    OffPackagingUnit { packaging_unit: f64 },
}

/// Human-readable form for logs and debugging. Frontends should format
/// from the structured variant, not from this string.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BelowMinimum { minimum } => {
                write!(f, "below minimum order quantity {minimum}")
            }
            Violation::AboveMaximum { maximum } => {
                write!(f, "above maximum order quantity {maximum}")
            }
            Violation::OffIncrement { increment } => {
                write!(f, "not a multiple of increment {increment}")
            }
            Violation::OffPackagingUnit { packaging_unit } => {
                write!(f, "not a multiple of packaging unit {packaging_unit}")
            }
        }
    }
}

// =============================================================================
// Quantity Check Result
// =============================================================================

/// The structured result of a check-style validation: valid or not, the
/// first violated rule, and the corrected quantity the caller could
/// order instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantityCheck {
    pub is_valid: bool,
    /// First violation found; checks short-circuit, so a quantity that is
    /// both below minimum and off-increment reports only the minimum.
    pub reason: Option<Violation>,
    /// What [`RoundingPolicy::apply`] would turn this quantity into.
    pub suggested_quantity: f64,
}

// =============================================================================
// Rounding Policy
// =============================================================================

/// A product/unit's ordering rules: MOQ, packaging multiple, increment
/// step, optional maximum, and range-scoped special rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundingPolicy {
    minimum_order_quantity: f64,
    packaging_unit: f64,
    discipline: RoundingDiscipline,
    /// Advisory flag for host input controls (whether an order form
    /// should accept fractional entry). The evaluator itself never
    /// branches on it; packaging/increment multiples are what make a
    /// quantity orderable.
    allow_fractional: bool,
    increment_unit: f64,
    maximum_order_quantity: Option<f64>,
    special_rules: Vec<SpecialRoundingRule>,
}

impl RoundingPolicy {
    /// Creates a policy with the mandatory parameters; increment defaults
    /// to 1, no maximum, no special rules, fractional entry disallowed.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::rounding::{RoundingDiscipline, RoundingPolicy};
    ///
    /// let policy = RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Up).unwrap();
    /// assert_eq!(policy.apply(7.0).unwrap(), 12.0);
    /// ```
    pub fn new(
        minimum_order_quantity: f64,
        packaging_unit: f64,
        discipline: RoundingDiscipline,
    ) -> ConfigResult<Self> {
        validate_positive("minimum_order_quantity", minimum_order_quantity)?;
        validate_positive("packaging_unit", packaging_unit)?;

        Ok(RoundingPolicy {
            minimum_order_quantity,
            packaging_unit,
            discipline,
            allow_fractional: false,
            increment_unit: 1.0,
            maximum_order_quantity: None,
            special_rules: Vec::new(),
        })
    }

    /// Sets the increment step applied after packaging rounding
    /// (must be >= 1).
    pub fn with_increment(mut self, increment_unit: f64) -> ConfigResult<Self> {
        validate_at_least_one("increment_unit", increment_unit)?;
        self.increment_unit = increment_unit;
        Ok(self)
    }

    /// Sets the maximum order quantity (must be positive).
    pub fn with_maximum(mut self, maximum: f64) -> ConfigResult<Self> {
        validate_positive("maximum_order_quantity", maximum)?;
        self.maximum_order_quantity = Some(maximum);
        Ok(self)
    }

    /// Permits fractional entry in host input controls.
    pub fn with_allow_fractional(mut self, allow: bool) -> Self {
        self.allow_fractional = allow;
        self
    }

    /// Appends a special rule. Declaration order is match order.
    pub fn with_special_rule(mut self, rule: SpecialRoundingRule) -> Self {
        self.special_rules.push(rule);
        self
    }

    /// Returns the minimum order quantity.
    #[inline]
    pub fn minimum_order_quantity(&self) -> f64 {
        self.minimum_order_quantity
    }

    /// Returns the packaging unit.
    #[inline]
    pub fn packaging_unit(&self) -> f64 {
        self.packaging_unit
    }

    /// Returns the discipline.
    #[inline]
    pub fn discipline(&self) -> RoundingDiscipline {
        self.discipline
    }

    /// Returns whether fractional entry is advisory-allowed.
    #[inline]
    pub fn allow_fractional(&self) -> bool {
        self.allow_fractional
    }

    /// Returns the increment unit.
    #[inline]
    pub fn increment_unit(&self) -> f64 {
        self.increment_unit
    }

    /// Returns the maximum order quantity, if set.
    #[inline]
    pub fn maximum_order_quantity(&self) -> Option<f64> {
        self.maximum_order_quantity
    }

    /// Adjusts a raw quantity to the nearest orderable one.
    ///
    /// Pipeline (first hit returns):
    /// 1. Below minimum → the minimum, under every discipline
    /// 2. Above maximum → hard error under Up, clamp otherwise
    /// 3. First matching special rule → that rule's discipline and
    ///    increment
    /// 4. Packaging-multiple rounding
    /// 5. Increment re-rounding when `increment_unit > 1`
    ///
    /// ## Errors
    /// [`EngineError::OrderExceedsMaximum`] when the quantity exceeds the
    /// maximum and the discipline is Up (which may only round upward).
    pub fn apply(&self, quantity: f64) -> EngineResult<f64> {
        // Step 1: MOQ floor. Always-minimum variant, Down included.
        if quantity < self.minimum_order_quantity {
            debug!(
                quantity,
                minimum = self.minimum_order_quantity,
                "Quantity below minimum, raising to MOQ"
            );
            return Ok(self.minimum_order_quantity);
        }

        // Step 2: maximum ceiling.
        if let Some(maximum) = self.maximum_order_quantity {
            if quantity > maximum {
                if self.discipline == RoundingDiscipline::Up {
                    return Err(EngineError::OrderExceedsMaximum { quantity, maximum });
                }
                debug!(quantity, maximum, "Quantity above maximum, clamping");
                return Ok(maximum);
            }
        }

        // Step 3: range-scoped overrides, declaration order, first match
        // wins.
        for rule in &self.special_rules {
            if rule.range.contains(quantity) {
                let increment = rule.override_increment.unwrap_or(self.increment_unit);
                let result = rule.discipline.round_to_multiple(quantity, increment);
                debug!(quantity, result, "Special rule matched");
                return Ok(result);
            }
        }

        // Step 4: packaging multiple.
        let mut result = self
            .discipline
            .round_to_multiple(quantity, self.packaging_unit);

        // Step 5: secondary increment step.
        if self.increment_unit > 1.0 {
            result = self.discipline.round_to_multiple(result, self.increment_unit);
        }

        Ok(result)
    }

    /// Validates a quantity without adjusting it, short-circuiting on the
    /// first violated rule.
    ///
    /// The result always carries `suggested_quantity = apply(quantity)`,
    /// so a rejection is actionable. The only hard error is
    /// Up-over-maximum, where no valid suggestion exists.
    ///
    /// ## Example
    /// ```rust
    /// use quanta_core::rounding::{RoundingDiscipline, RoundingPolicy};
    ///
    /// let policy = RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Up).unwrap();
    ///
    /// let check = policy.check(15.0).unwrap();
    /// assert!(!check.is_valid);
    /// assert_eq!(check.suggested_quantity, 24.0);
    /// ```
    pub fn check(&self, quantity: f64) -> EngineResult<QuantityCheck> {
        let suggested_quantity = self.apply(quantity)?;

        let reason = if quantity < self.minimum_order_quantity {
            Some(Violation::BelowMinimum {
                minimum: self.minimum_order_quantity,
            })
        } else if self
            .maximum_order_quantity
            .is_some_and(|maximum| quantity > maximum)
        {
            self.maximum_order_quantity
                .map(|maximum| Violation::AboveMaximum { maximum })
        } else if self.increment_unit > 1.0
            && !is_near_multiple(quantity, self.increment_unit)
        {
            Some(Violation::OffIncrement {
                increment: self.increment_unit,
            })
        } else if !is_near_multiple(quantity, self.packaging_unit) {
            Some(Violation::OffPackagingUnit {
                packaging_unit: self.packaging_unit,
            })
        } else {
            None
        };

        Ok(QuantityCheck {
            is_valid: reason.is_none(),
            reason,
            suggested_quantity,
        })
    }
}

/// Remainder check with the engine-wide tolerance: a quantity within
/// `MULTIPLE_TOLERANCE` of a multiple (from either side) counts as on it.
fn is_near_multiple(value: f64, multiple: f64) -> bool {
    let remainder = value.rem_euclid(multiple);
    remainder <= MULTIPLE_TOLERANCE || (multiple - remainder) <= MULTIPLE_TOLERANCE
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn up_policy() -> RoundingPolicy {
        RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Up).unwrap()
    }

    // -------------------------------------------------------------------------
    // Discipline semantics
    // -------------------------------------------------------------------------

    #[test]
    fn test_up_and_down() {
        assert_eq!(RoundingDiscipline::Up.round_to_multiple(13.0, 12.0), 24.0);
        assert_eq!(RoundingDiscipline::Up.round_to_multiple(24.0, 12.0), 24.0);
        assert_eq!(RoundingDiscipline::Down.round_to_multiple(23.0, 12.0), 12.0);
        assert_eq!(RoundingDiscipline::Down.round_to_multiple(24.0, 12.0), 24.0);
    }

    #[test]
    fn test_half_up_and_half_down() {
        // Exact half: HalfUp goes up, HalfDown goes down
        assert_eq!(RoundingDiscipline::HalfUp.round_to_multiple(18.0, 12.0), 24.0);
        assert_eq!(RoundingDiscipline::HalfDown.round_to_multiple(18.0, 12.0), 12.0);

        // Strictly past the half: both go up
        assert_eq!(RoundingDiscipline::HalfUp.round_to_multiple(18.1, 12.0), 24.0);
        assert_eq!(RoundingDiscipline::HalfDown.round_to_multiple(18.1, 12.0), 24.0);

        // Below the half: both go down
        assert_eq!(RoundingDiscipline::HalfUp.round_to_multiple(17.9, 12.0), 12.0);
        assert_eq!(RoundingDiscipline::HalfDown.round_to_multiple(17.9, 12.0), 12.0);
    }

    #[test]
    fn test_half_even_scenario_e() {
        // Exact ties pick the even candidate
        assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(2.5, 1.0), 2.0);
        assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(3.5, 1.0), 4.0);
        // Non-ties round to nearest as usual
        assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(2.6, 1.0), 3.0);
        assert_eq!(RoundingDiscipline::HalfEven.round_to_multiple(2.4, 1.0), 2.0);
    }

    // -------------------------------------------------------------------------
    // apply() pipeline
    // -------------------------------------------------------------------------

    #[test]
    fn test_apply_scenario_a() {
        let policy = up_policy();
        assert_eq!(policy.apply(7.0).unwrap(), 12.0);
        assert_eq!(policy.apply(15.0).unwrap(), 24.0);
        assert_eq!(policy.apply(24.0).unwrap(), 24.0);
    }

    #[test]
    fn test_apply_below_minimum_returns_minimum_under_down() {
        // The always-minimum variant: Down does NOT collapse to zero
        let policy = RoundingPolicy::new(10.0, 5.0, RoundingDiscipline::Down).unwrap();
        assert_eq!(policy.apply(3.0).unwrap(), 10.0);
    }

    #[test]
    fn test_apply_maximum_clamps_except_up() {
        let down = RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Down)
            .unwrap()
            .with_maximum(100.0)
            .unwrap();
        assert_eq!(down.apply(150.0).unwrap(), 100.0);

        let up = up_policy().with_maximum(100.0).unwrap();
        let err = up.apply(150.0).unwrap_err();
        assert!(matches!(err, EngineError::OrderExceedsMaximum { .. }));
    }

    #[test]
    fn test_apply_special_rule_first_match_wins() {
        // Two overlapping ranges: the first declared one applies
        let policy = up_policy()
            .with_special_rule(
                SpecialRoundingRule::new(
                    QuantityRange::new(20.0, 50.0).unwrap(),
                    RoundingDiscipline::Down,
                )
                .with_override_increment(10.0)
                .unwrap(),
            )
            .with_special_rule(SpecialRoundingRule::new(
                QuantityRange::new(30.0, 60.0).unwrap(),
                RoundingDiscipline::Up,
            ));

        // 35 is in both ranges; first rule rounds DOWN to multiple of 10
        assert_eq!(policy.apply(35.0).unwrap(), 30.0);
        // 55 only hits the second rule: Up to increment_unit (1) multiple
        assert_eq!(policy.apply(55.0).unwrap(), 55.0);
        // Outside both ranges, the packaging pipeline runs
        assert_eq!(policy.apply(61.0).unwrap(), 72.0);
    }

    #[test]
    fn test_apply_special_rule_falls_back_to_policy_increment() {
        let policy = up_policy()
            .with_increment(6.0)
            .unwrap()
            .with_special_rule(SpecialRoundingRule::new(
                QuantityRange::new(20.0, 50.0).unwrap(),
                RoundingDiscipline::Up,
            ));

        // No override: the rule rounds to the policy increment (6)
        assert_eq!(policy.apply(21.0).unwrap(), 24.0);
    }

    #[test]
    fn test_apply_increment_re_rounds() {
        // Packaging 12, increment 24: 15 → 24 (packaging) → 24 (increment)
        let policy = up_policy().with_increment(24.0).unwrap();
        assert_eq!(policy.apply(15.0).unwrap(), 24.0);

        // 25 → 36 (packaging) → 48 (increment)
        assert_eq!(policy.apply(25.0).unwrap(), 48.0);
    }

    // -------------------------------------------------------------------------
    // check()
    // -------------------------------------------------------------------------

    #[test]
    fn test_check_valid_quantity() {
        let check = up_policy().check(24.0).unwrap();
        assert!(check.is_valid);
        assert!(check.reason.is_none());
        assert_eq!(check.suggested_quantity, 24.0);
    }

    #[test]
    fn test_check_below_minimum() {
        let check = up_policy().check(7.0).unwrap();
        assert!(!check.is_valid);
        assert_eq!(
            check.reason,
            Some(Violation::BelowMinimum { minimum: 12.0 })
        );
        assert_eq!(check.suggested_quantity, 12.0);
    }

    #[test]
    fn test_check_short_circuits_on_first_violation() {
        // 15 is off the packaging multiple AND off the increment; the
        // increment check comes first
        let policy = up_policy().with_increment(24.0).unwrap();
        let check = policy.check(15.0).unwrap();
        assert_eq!(
            check.reason,
            Some(Violation::OffIncrement { increment: 24.0 })
        );
    }

    #[test]
    fn test_check_off_packaging_unit() {
        let check = up_policy().check(15.0).unwrap();
        assert_eq!(
            check.reason,
            Some(Violation::OffPackagingUnit {
                packaging_unit: 12.0
            })
        );
        assert_eq!(check.suggested_quantity, 24.0);
    }

    #[test]
    fn test_check_tolerates_float_noise() {
        // 1e-3 tolerance on remainder checks
        let check = up_policy().check(24.0005).unwrap();
        assert!(check.is_valid);
    }

    #[test]
    fn test_check_up_over_maximum_is_hard_error() {
        let policy = up_policy().with_maximum(100.0).unwrap();
        assert!(policy.check(150.0).is_err());
    }

    #[test]
    fn test_check_above_maximum_clamping_discipline() {
        let policy = RoundingPolicy::new(12.0, 12.0, RoundingDiscipline::Down)
            .unwrap()
            .with_maximum(100.0)
            .unwrap();
        let check = policy.check(150.0).unwrap();
        assert_eq!(
            check.reason,
            Some(Violation::AboveMaximum { maximum: 100.0 })
        );
        assert_eq!(check.suggested_quantity, 100.0);
    }

    // -------------------------------------------------------------------------
    // Construction & serialization
    // -------------------------------------------------------------------------

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(RoundingPolicy::new(0.0, 12.0, RoundingDiscipline::Up).is_err());
        assert!(RoundingPolicy::new(12.0, -1.0, RoundingDiscipline::Up).is_err());
        assert!(up_policy().with_increment(0.5).is_err());
        assert!(up_policy().with_maximum(0.0).is_err());
        assert!(QuantityRange::new(10.0, 5.0).is_err());
    }

    #[test]
    fn test_policy_json_round_trip() {
        // Policies arrive as JSON from the host's configuration layer
        let policy = up_policy()
            .with_increment(24.0)
            .unwrap()
            .with_maximum(480.0)
            .unwrap()
            .with_special_rule(SpecialRoundingRule::new(
                QuantityRange::new(100.0, 200.0).unwrap(),
                RoundingDiscipline::HalfEven,
            ));

        let json = serde_json::to_string(&policy).unwrap();
        let back: RoundingPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
        assert_eq!(back.apply(15.0).unwrap(), 24.0);
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::BelowMinimum { minimum: 12.0 };
        assert_eq!(v.to_string(), "below minimum order quantity 12");
    }
}

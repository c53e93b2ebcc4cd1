//! Generative tests for the engine's numeric invariants.
//!
//! These pin the three contracts host applications lean on:
//! conversion round-trips, rounding idempotence, and decomposition
//! conservation.

use proptest::prelude::*;

use quanta_core::conversion::{ConversionRatio, UnitConversionGraph, UnitEntry};
use quanta_core::hierarchy::{PackagingHierarchy, PackagingLevel};
use quanta_core::rounding::{RoundingDiscipline, RoundingPolicy};

fn any_discipline() -> impl Strategy<Value = RoundingDiscipline> {
    prop_oneof![
        Just(RoundingDiscipline::Up),
        Just(RoundingDiscipline::Down),
        Just(RoundingDiscipline::HalfUp),
        Just(RoundingDiscipline::HalfDown),
        Just(RoundingDiscipline::HalfEven),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Property: converting A→B→A restores the original value within
    /// relative tolerance 1e-9, for any positive ratios and value.
    #[test]
    fn conversion_round_trips(
        value in 0.001f64..1_000_000.0,
        box_factor in 0.01f64..10_000.0,
        case_factor in 0.01f64..10_000.0,
    ) {
        let graph = UnitConversionGraph::new(
            "SKU-PROP",
            "piece",
            vec![
                UnitEntry::new("box", ConversionRatio::new(1.0, box_factor).unwrap()),
                UnitEntry::new("case", ConversionRatio::new(1.0, case_factor).unwrap()),
            ],
        )
        .unwrap();

        let there = graph.convert(value, "box", "case").unwrap();
        let back = graph.convert(there, "case", "box").unwrap();

        prop_assert!((back - value).abs() <= value.abs() * 1e-9);
    }

    /// Property: applying a coherent policy twice equals applying it
    /// once. Coherent means the minimum sits on a packaging multiple and
    /// the increment divides the packaging unit (or is 1), which is how
    /// real catalogs configure MOQs.
    #[test]
    fn apply_is_idempotent_for_coherent_policies(
        discipline in any_discipline(),
        packaging_multiplier in 1u32..20,
        min_packages in 1u32..5,
        use_increment in any::<bool>(),
        quantity in 0.0f64..10_000.0,
    ) {
        // increment divides packaging: packaging = increment * multiplier
        let increment = if use_increment { 6.0 } else { 1.0 };
        let packaging_unit = increment * f64::from(packaging_multiplier);
        let minimum = packaging_unit * f64::from(min_packages);

        let policy = RoundingPolicy::new(minimum, packaging_unit, discipline)
            .unwrap()
            .with_increment(increment)
            .unwrap();

        let once = policy.apply(quantity).unwrap();
        let twice = policy.apply(once).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// Property: decomposition conserves units - components (including
    /// the leftover) sum back to the input within 1e-6.
    #[test]
    fn decomposition_conserves_units(
        total in 0.0f64..1_000_000.0,
        box_size in 2u32..50,
        case_multiplier in 2u32..50,
        pallet_multiplier in 2u32..50,
    ) {
        let box_units = f64::from(box_size);
        let case_units = box_units * f64::from(case_multiplier);
        let pallet_units = case_units * f64::from(pallet_multiplier);

        let hierarchy = PackagingHierarchy::new(
            "SKU-PROP",
            vec![
                PackagingLevel::new("piece", "Piece", 1.0).unwrap(),
                PackagingLevel::new("box", "Box", box_units).unwrap(),
                PackagingLevel::new("case", "Case", case_units).unwrap(),
                PackagingLevel::new("pallet", "Pallet", pallet_units).unwrap(),
            ],
        )
        .unwrap();

        let result = hierarchy.decompose(total);
        let sum: f64 = result.components.iter().map(|c| c.units).sum();

        // The decomposer drops leftovers below its 1e-3 threshold, so
        // conservation holds to that bound at worst
        prop_assert!((sum - total).abs() <= 2e-3);

        prop_assert!(result.efficiency >= 0.0);
        prop_assert!(result.efficiency < 1.0);
    }

    /// Property: every component the decomposer emits respects its
    /// level's minimum viable count.
    #[test]
    fn components_respect_viable_counts(
        total in 0.0f64..100_000.0,
        viable in 0.0f64..4.0,
    ) {
        let hierarchy = PackagingHierarchy::new(
            "SKU-PROP",
            vec![
                PackagingLevel::new("piece", "Piece", 1.0).unwrap(),
                PackagingLevel::new("box", "Box", 24.0).unwrap(),
                PackagingLevel::new("pallet", "Pallet", 2880.0)
                    .unwrap()
                    .with_minimum_viable(viable)
                    .unwrap(),
            ],
        )
        .unwrap();

        let result = hierarchy.decompose(total);
        for component in &result.components {
            if component.level.symbol() == "pallet" {
                prop_assert!(component.count >= component.level.minimum_viable_count());
            }
        }
    }
}

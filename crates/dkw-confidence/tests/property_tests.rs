//! Property-based tests for DKW interval estimation
//!
//! These tests pin the ordering and monotonicity guarantees of the
//! CDF band construction across a wide range of histograms.

#[cfg(test)]
mod property_tests {
    use dkw_confidence::{dkw_confidence_interval, ConfidenceLevel, DkwCi};
    use dkw_ecdf::{Ecdf, Histogram};
    use proptest::prelude::*;

    fn histogram_entries() -> impl Strategy<Value = Vec<(f64, i64)>> {
        prop::collection::vec(((-1000.0..1000.0f64), 0i64..200), 1..16)
    }

    proptest! {
        // Property: the empirical CDF is monotone and ends at full mass
        #[test]
        fn prop_ecdf_monotone_and_capped(entries in histogram_entries()) {
            prop_assume!(entries.iter().map(|e| e.1).sum::<i64>() > 0);

            let hist = Histogram::from_pairs(entries).unwrap();
            let cdf = Ecdf::from_histogram(&hist);

            for pair in cdf.ys().windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            prop_assert!((0.0..=1.0).contains(&cdf.ys()[0]));
            prop_assert_eq!(*cdf.ys().last().unwrap(), 1.0);
        }

        // Property: shifting the curve up never raises the expectation,
        // shifting it down never lowers it
        #[test]
        fn prop_shift_monotone_in_offset(
            entries in histogram_entries(),
            offset in 0.0..2.0f64,
        ) {
            prop_assume!(entries.iter().map(|e| e.1).sum::<i64>() > 0);

            let cdf = Ecdf::from_histogram(&Histogram::from_pairs(entries).unwrap());
            let expected = cdf.expected_value().unwrap();
            let raised = cdf.shift(offset).expected_value().unwrap();
            let lowered = cdf.shift(-offset).expected_value().unwrap();

            prop_assert!(raised <= expected + 1e-9);
            prop_assert!(lowered >= expected - 1e-9);
        }

        // Property: the interval brackets the point estimate
        #[test]
        fn prop_interval_brackets_estimate(
            entries in histogram_entries(),
            level in 0.5..1.0f64,
        ) {
            prop_assume!(entries.iter().map(|e| e.1).sum::<i64>() > 0);

            let hist = Histogram::from_pairs(entries).unwrap();
            let ci = DkwCi::at_level(level).unwrap().interval(&hist).unwrap();

            prop_assert!(ci.lower <= ci.upper + 1e-9);
            prop_assert!(ci.lower <= ci.estimate + 1e-9);
            prop_assert!(ci.upper >= ci.estimate - 1e-9);
        }

        // Property: raising the confidence level never shrinks the interval
        #[test]
        fn prop_width_monotone_in_level(
            entries in histogram_entries(),
            level_a in 0.5..0.999f64,
            level_b in 0.5..0.999f64,
        ) {
            prop_assume!(entries.iter().map(|e| e.1).sum::<i64>() > 0);

            let (low, high) = if level_a <= level_b {
                (level_a, level_b)
            } else {
                (level_b, level_a)
            };
            let hist = Histogram::from_pairs(entries).unwrap();
            let narrow = DkwCi::at_level(low).unwrap().interval(&hist).unwrap();
            let wide = DkwCi::at_level(high).unwrap().interval(&hist).unwrap();

            prop_assert!(wide.width() >= narrow.width() - 1e-9);
        }

        // Property: more observations with the same proportions never widen
        // the interval
        #[test]
        fn prop_width_shrinks_with_sample_size(
            entries in histogram_entries(),
            scale in 2i64..20,
        ) {
            prop_assume!(entries.iter().map(|e| e.1).sum::<i64>() > 0);

            let scaled: Vec<(f64, i64)> = entries
                .iter()
                .map(|&(value, frequency)| (value, frequency * scale))
                .collect();

            let ci = DkwCi::new(ConfidenceLevel::NINETY_FIVE);
            let base = ci.interval(&Histogram::from_pairs(entries).unwrap()).unwrap();
            let refined = ci.interval(&Histogram::from_pairs(scaled).unwrap()).unwrap();

            prop_assert!(refined.width() <= base.width() + 1e-9);
        }

        // Property: a histogram with one observed value collapses to a point
        #[test]
        fn prop_point_mass_collapses(
            value in -1000.0..1000.0f64,
            frequency in 1i64..10_000,
            level in 0.5..1.0f64,
        ) {
            let ci = dkw_confidence_interval([(value, frequency)], level)
                .unwrap()
                .unwrap();
            prop_assert_eq!(ci.lower, value);
            prop_assert_eq!(ci.upper, value);
        }
    }
}

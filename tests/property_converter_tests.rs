use graph_rs::core::{Axis, Limits, Range, convert};
use proptest::prelude::*;

proptest! {
    #[test]
    fn boundaries_map_exactly(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        limit_min in -2_000.0f64..2_000.0,
        limit_span in -2_000.0f64..2_000.0
    ) {
        let max = min + span;
        let range = Range::new(min, max, min, max);
        let limits = Limits::new(limit_min, limit_min + limit_span, limit_min, limit_min + limit_span);

        for axis in [Axis::X, Axis::Y] {
            let (lo, hi) = limits.bounds(axis);
            prop_assert_eq!(convert(min, range, limits, axis).expect("min"), lo);
            prop_assert_eq!(convert(max, range, limits, axis).expect("max"), hi);
        }
    }

    #[test]
    fn conversion_is_monotonic(
        a in -1_000.0f64..1_000.0,
        b in -1_000.0f64..1_000.0,
        flip in any::<bool>()
    ) {
        let range = Range::new(-1_000.0, 1_000.0, -1_000.0, 1_000.0);
        let limits = Limits::new(50.0, 950.0, 650.0, 60.0);
        let axis = if flip { Axis::Y } else { Axis::X };
        let (lo, hi) = (a.min(b), a.max(b));

        let px_lo = convert(lo, range, limits, axis).expect("lo");
        let px_hi = convert(hi, range, limits, axis).expect("hi");
        match axis {
            Axis::X => prop_assert!(px_lo <= px_hi + 1e-9),
            Axis::Y => prop_assert!(px_lo + 1e-9 >= px_hi),
        }
    }
}

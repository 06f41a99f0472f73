//! Upgrade cost arithmetic.
//!
//! Each upgrade level costs `base_cost * growth^level`, so buying `quantity`
//! consecutive levels starting from `owned` is a geometric series with the
//! closed form below. Bulk/"max" purchasing finds the affordability boundary
//! with a bounded binary search instead of summing level by level.

/// Upper bound on a single bulk purchase. Cost growth makes quantities
/// anywhere near this unreachable in practice; the cap keeps the search
/// bounded on pathological inputs.
pub const MAX_BULK_PURCHASE: u32 = 1000;

/// Total cost of buying `quantity` additional levels starting from `owned`.
///
/// `growth` must be > 1. Returns 0 for `quantity == 0`.
pub fn bulk_cost(base_cost: f64, growth: f64, owned: u32, quantity: u32) -> f64 {
    if quantity == 0 {
        return 0.0;
    }
    let first_level = base_cost * growth.powi(owned as i32);
    if quantity == 1 {
        return first_level;
    }
    first_level * (1.0 - growth.powi(quantity as i32)) / (1.0 - growth)
}

/// Largest quantity `q` (capped at [`MAX_BULK_PURCHASE`]) whose total cost
/// fits within `budget`: `bulk_cost(q) <= budget < bulk_cost(q + 1)`.
pub fn max_affordable(base_cost: f64, growth: f64, owned: u32, budget: f64) -> u32 {
    let mut low = 0u32;
    let mut high = MAX_BULK_PURCHASE;
    let mut best = 0u32;

    while low <= high {
        let mid = low + (high - low) / 2;
        if bulk_cost(base_cost, growth, owned, mid) <= budget {
            best = mid;
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_free() {
        assert_eq!(bulk_cost(10.0, 1.15, 0, 0), 0.0);
    }

    #[test]
    fn single_level_cost() {
        assert!((bulk_cost(10.0, 1.15, 0, 1) - 10.0).abs() < 1e-9);
        let expected = 10.0 * 1.15_f64.powi(4);
        assert!((bulk_cost(10.0, 1.15, 4, 1) - expected).abs() < 1e-9);
    }

    #[test]
    fn closed_form_matches_iterative_sum() {
        for &owned in &[0u32, 5, 50] {
            for &quantity in &[0u32, 1, 10, 100] {
                let closed = bulk_cost(10.0, 1.15, owned, quantity);
                let mut iterative = 0.0;
                for i in 0..quantity {
                    iterative += 10.0 * 1.15_f64.powi((owned + i) as i32);
                }
                let tolerance = iterative.abs().max(1.0) * 1e-6;
                assert!(
                    (closed - iterative).abs() < tolerance,
                    "owned={owned} quantity={quantity}: closed={closed} iterative={iterative}"
                );
            }
        }
    }

    #[test]
    fn max_affordable_with_100_budget() {
        // Levels cost 10, 11.5, 13.2, 15.2, 17.5, 20.1, 23.1, ... so 100
        // hair buys exactly 6 (total ~87.54); the 7th would push past 110.
        let q = max_affordable(10.0, 1.15, 0, 100.0);
        assert_eq!(q, 6);
        assert!((bulk_cost(10.0, 1.15, 0, 6) - 87.537).abs() < 0.01);
        assert!(bulk_cost(10.0, 1.15, 0, 7) > 100.0);
    }

    #[test]
    fn max_affordable_zero_budget() {
        assert_eq!(max_affordable(10.0, 1.15, 0, 0.0), 0);
        assert_eq!(max_affordable(10.0, 1.15, 0, 9.99), 0);
    }

    #[test]
    fn max_affordable_exact_boundary() {
        let budget = bulk_cost(10.0, 1.15, 3, 5);
        assert_eq!(max_affordable(10.0, 1.15, 3, budget), 5);
    }

    #[test]
    fn max_affordable_caps_at_limit() {
        assert_eq!(max_affordable(0.01, 1.0001, 0, 1e300), MAX_BULK_PURCHASE);
    }
}

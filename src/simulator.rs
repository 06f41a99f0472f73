//! Balance simulator for the clicker progression curve.
//! Run with: cargo test -p arturo-clicker simulate_optimal -- --nocapture

#[cfg(test)]
mod tests {
    use crate::catalog::UpgradeId;
    use crate::engine::ProgressionEngine;
    use crate::format::format_number;
    use crate::state::PurchaseBatch;

    const CLICKS_PER_SECOND: u32 = 5;

    /// Find the upgrade with the best ROI (lowest payback time) among the
    /// ones we can afford right now.
    fn find_best_purchase(engine: &ProgressionEngine) -> Option<UpgradeId> {
        let mut best: Option<(f64, UpgradeId)> = None; // (payback_seconds, id)

        for &id in UpgradeId::all() {
            let cost = engine.cost_of(id, PurchaseBatch::One);
            if engine.resource() < cost {
                continue;
            }
            let gain = estimate_rate_gain(engine, id);
            if gain <= 0.0 {
                continue;
            }
            let payback = cost / gain;
            let dominated = best.as_ref().map_or(false, |(bp, _)| *bp <= payback);
            if !dominated {
                best = Some((payback, id));
            }
        }

        best.map(|(_, id)| id)
    }

    /// Estimate income gain per second from one level of an upgrade.
    fn estimate_rate_gain(engine: &ProgressionEngine, id: UpgradeId) -> f64 {
        use crate::catalog::EffectSpec::*;
        match id.effect() {
            ClickPowerAdd(amount) => amount * CLICKS_PER_SECOND as f64,
            PassiveRateAdd(amount) => amount,
            GlobalProductionMultiplierAdd(bonus) => {
                let click_income = engine.click_power() * CLICKS_PER_SECOND as f64;
                (engine.passive_rate() + click_income) * bonus
            }
            // Combo upgrades raise the effective click income; approximate a
            // sustained-clicking session as sitting at the combo cap.
            MaxComboAdd(amount) => {
                engine.click_power() * CLICKS_PER_SECOND as f64 * amount
            }
            ComboRampRateScale(_) | ComboDecayRateScale(_) => {
                // Quality-of-life, no steady-state income change; buy late.
                engine.click_power() * 0.1
            }
            // Only pays off across sessions, not within one.
            OfflineMultiplierAdd(_) => 0.0,
        }
    }

    fn report_stats(engine: &ProgressionEngine, seconds: u32, purchases_made: u32) {
        let minutes = seconds / 60;
        let secs = seconds % 60;

        eprintln!("┌─── {minutes}m{secs:02}s ─────────────────────────");
        eprintln!(
            "│ Hair: {}  Passive: {}/s  Click: {}  Clicks: {}",
            format_number(engine.resource()),
            format_number(engine.passive_rate()),
            format_number(engine.click_power()),
            engine.total_clicks()
        );
        eprintln!("│ Purchases: {purchases_made}");

        let counts: Vec<String> = UpgradeId::all()
            .iter()
            .filter(|id| engine.owned(**id) > 0)
            .map(|id| format!("{}:{}", id.name(), engine.owned(*id)))
            .collect();
        eprintln!("│ Owned: {}", counts.join("  "));

        if let Some(id) = find_best_purchase(engine) {
            eprintln!(
                "│ Next buy: {} ({})",
                id.name(),
                format_number(engine.cost_of(id, PurchaseBatch::One))
            );
        }
        eprintln!("└────────────────────────────────────");
    }

    /// Simulate attentive play for `total_seconds`: 5 clicks and one tick per
    /// second, buying the best-payback upgrade greedily.
    fn simulate(total_seconds: u32) {
        let mut engine = ProgressionEngine::new(0);

        let mut total_purchases: u32 = 0;
        let mut last_purchase_time: u32 = 0;
        let mut max_idle_gap: u32 = 0;
        let mut idle_gaps: Vec<u32> = Vec::new();

        // Report at these times (seconds)
        let report_times: Vec<u32> = vec![30, 60, 120, 300, 600, 900, 1200, 1800, 2700, 3600];
        let mut next_report_idx = 0;

        eprintln!("\n========================================");
        eprintln!("  Clicker balance simulator");
        eprintln!("  Play time: {}min", total_seconds / 60);
        eprintln!("  Click rate: {CLICKS_PER_SECOND}/s");
        eprintln!("========================================\n");

        for second in 1..=total_seconds {
            let base_ms = second as u64 * 1000;

            // Clicks spread evenly across the second keep the combo window
            for i in 0..CLICKS_PER_SECOND {
                let now_ms = base_ms + i as u64 * (1000 / CLICKS_PER_SECOND as u64);
                engine.click(now_ms);
            }

            engine.tick(base_ms + 999);

            // Greedy: buy best ROI until nothing affordable is left
            let mut bought_this_second = false;
            for _ in 0..20 {
                // Safety limit
                match find_best_purchase(&engine) {
                    Some(id) => {
                        if engine.buy(id, PurchaseBatch::One) > 0 {
                            bought_this_second = true;
                            total_purchases += 1;
                        } else {
                            break;
                        }
                    }
                    None => break,
                }
            }

            if bought_this_second {
                let gap = second - last_purchase_time;
                if gap > 1 {
                    idle_gaps.push(gap);
                    if gap > max_idle_gap {
                        max_idle_gap = gap;
                    }
                }
                last_purchase_time = second;
            }

            if next_report_idx < report_times.len() && second >= report_times[next_report_idx] {
                report_stats(&engine, second, total_purchases);
                next_report_idx += 1;
            }
        }

        eprintln!("\n======== Final summary ========");
        report_stats(&engine, total_seconds, total_purchases);

        eprintln!("\n--- Purchase gap analysis ---");
        eprintln!("Total purchases: {total_purchases}");
        eprintln!("Longest wait: {max_idle_gap}s");
        let long_gaps = idle_gaps.iter().filter(|g| **g >= 10).count();
        eprintln!("Waits >= 10s: {long_gaps}");
        let very_long_gaps = idle_gaps.iter().filter(|g| **g >= 30).count();
        eprintln!("Waits >= 30s: {very_long_gaps}");
        if !idle_gaps.is_empty() {
            let avg_gap: f64 =
                idle_gaps.iter().map(|g| *g as f64).sum::<f64>() / idle_gaps.len() as f64;
            eprintln!("Average wait: {avg_gap:.1}s");
        }

        let unowned: Vec<&str> = UpgradeId::all()
            .iter()
            .filter(|id| engine.owned(**id) == 0)
            .map(|id| id.name())
            .collect();
        eprintln!("Never bought: {unowned:?}");
        eprintln!("==============================\n");
    }

    #[test]
    fn simulate_optimal_1hour() {
        simulate(3600);
    }

    #[test]
    fn simulate_optimal_30min() {
        simulate(1800);
    }
}

//! Leaderboard formatting for suite reports.

use crate::engine::CaseStats;

/// Scale an ops/sec figure for display: `12.34M`, `56.78K`, `901`.
pub fn format_ops(ops: f64) -> String {
    if ops >= 1e6 {
        format!("{:.2}M", ops / 1e6)
    } else if ops >= 1e3 {
        format!("{:.2}K", ops / 1e3)
    } else {
        format!("{:.0}", ops)
    }
}

/// Render a fastest-first leaderboard, one line per case.
///
/// The leader is tagged `fastest`; every other line reports how far behind
/// it runs. Returned as a string so the caller decides where it goes.
pub fn leaderboard(stats: &[CaseStats]) -> String {
    let mut ranked: Vec<&CaseStats> = stats.iter().collect();
    ranked.sort_by(|a, b| b.ops_per_sec.total_cmp(&a.ops_per_sec));

    let fastest = ranked.first().map_or(0.0, |s| s.ops_per_sec);

    let mut out = String::new();
    for (rank, s) in ranked.iter().enumerate() {
        let relative = if rank == 0 {
            "fastest".to_string()
        } else if fastest > 0.0 {
            format!("{:.1}% slower", (1.0 - s.ops_per_sec / fastest) * 100.0)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {:<32} x {:>9} ops/sec  ±{:.2}%  ({} samples)  {}\n",
            s.name,
            format_ops(s.ops_per_sec),
            s.rme_percent,
            s.samples,
            relative
        ));
    }
    out
}

//! Text rendering of processes and results.
//!
//! Pure string builders for the tables a host application prints or
//! writes to disk: the input process listing, per-run Gantt chart, a
//! cross-algorithm comparison table, and CSV rows. No I/O happens here;
//! callers own where the text goes.

use std::fmt::Write;

use crate::models::{Process, SimulationResult};

/// Renders the input batch as a bordered table.
pub fn process_table(processes: &[Process]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(50);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "| ID | Arrival Time | Burst Time | Priority |");
    let _ = writeln!(out, "{rule}");
    for p in processes {
        let _ = writeln!(
            out,
            "| {:2} | {:12} | {:10} | {:8} |",
            p.id, p.arrival_time, p.burst_time, p.priority
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Renders one run's timeline as Gantt-style lines, `Idle` for the
/// sentinel actor.
pub fn gantt_chart(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gantt Chart for {}:", result.algorithm);
    let _ = writeln!(out, "{}", "-".repeat(34));
    for slice in result.timeline.slices() {
        let actor = if slice.is_idle() {
            "Idle".to_string()
        } else {
            format!("P{}", slice.actor_id)
        };
        let _ = writeln!(out, "{actor}: {} -> {}", slice.start, slice.end);
    }
    out
}

/// Renders summary metrics for several runs side by side.
pub fn comparison_table(results: &[SimulationResult]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(114);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "| {:<30} | {:>13} | {:>14} | {:>12} | {:>12} | {:>14} |",
        "Algorithm", "Avg Wait Time", "Avg Turnaround", "Avg Response", "CPU Util (%)", "Throughput"
    );
    let _ = writeln!(out, "{rule}");
    for r in results {
        let m = &r.metrics;
        let _ = writeln!(
            out,
            "| {:<30} | {:>13.2} | {:>14.2} | {:>12.2} | {:>12.2} | {:>14.4} |",
            r.algorithm,
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.avg_response_time,
            m.cpu_utilization,
            m.throughput
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// Renders summary metrics as CSV with a header row.
///
/// Columns: `Algorithm, AvgWaitingTime, AvgTurnaroundTime,
/// AvgResponseTime, CpuUtilization, Throughput`. Algorithm labels
/// containing commas or quotes are quoted per RFC 4180.
pub fn csv(results: &[SimulationResult]) -> String {
    let mut out = String::from(
        "Algorithm,AvgWaitingTime,AvgTurnaroundTime,AvgResponseTime,CpuUtilization,Throughput\n",
    );
    for r in results {
        let m = &r.metrics;
        let _ = writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.2},{:.4}",
            csv_field(&r.algorithm),
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.avg_response_time,
            m.cpu_utilization,
            m.throughput
        );
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

//! Plain-text rendering of simulation results.

use std::fmt::Write;

use crate::SimulationResult;

const RULE: &str =
    "=============================================================================";

/// Renders the job table, the execution order and the average turnaround.
pub fn format_report(title: &str, result: &SimulationResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "============================= {} ==========================", title);
    let _ = writeln!(out, "Name\t\tStart Time\tCompletion Time\tTurn Around Time");
    for job in result.by_id() {
        let _ = writeln!(
            out,
            "{}\t\t{}\t\t{}\t\t{}",
            job.name(),
            display(job.start_time()),
            display(job.completion_time()),
            display(job.turnaround_time())
        );
    }
    out.push('\n');

    let order: Vec<String> = result.execution_order().iter().map(|job| job.name()).collect();
    let _ = writeln!(out, "Job Execution Order: {}", order.join(" -> "));

    match result.average_turnaround() {
        Some(average) => {
            let _ = writeln!(out, "Average Turnaround Time: {}", average);
        }
        None => out.push_str("Average Turnaround Time: N/A\n"),
    }

    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

fn display(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

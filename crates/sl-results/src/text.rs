//! Plain-text report rendering.

use std::fmt::Write;

use crate::types::Report;

const RULE: &str = "+--------------------------+";

/// Render a report as the human-readable text file.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "family: {}", report.family)?;
    writeln!(out, "n: {}", report.n)?;
    writeln!(out, "m: {}", report.m)?;
    writeln!(out, "k: {}", report.k)?;
    writeln!(out, "order: {}", report.order)?;
    writeln!(out, "size: {}", report.size)?;
    if let Some(step) = report.step {
        writeln!(out, "d: {step}")?;
    }
    writeln!(out, "scheme: {} ({} rule)", report.scheme, report.rule)?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    writeln!(out, "Vertex Labels:")?;
    for entry in &report.labels {
        writeln!(out, "  {:>6}  {:<12} {}", entry.vertex, entry.role, entry.label)?;
    }
    writeln!(out)?;

    writeln!(out, "Edge Weights:")?;
    for entry in &report.edges {
        writeln!(out, "  ({}, {}) = {}", entry.u, entry.v, entry.weight)?;
    }
    writeln!(out)?;

    if let Some(pool) = &report.remaining_pool {
        writeln!(out, "Available edge weights: {pool:?}")?;
    }
    let c = &report.complexity;
    writeln!(
        out,
        "Theoretical Time Complexity: T({}), V+E = {}",
        c.bound, c.linear
    )?;
    if let Some(elapsed) = report.elapsed_s {
        writeln!(out, "Elapsed: {elapsed:.6} s")?;
    }

    let v = &report.verification;
    writeln!(out)?;
    writeln!(out, "Verification:")?;
    writeln!(out, "  distinct weights: {} of {}", v.distinct_weights, report.size)?;
    writeln!(out, "  edge-irregular:   {}", v.weights_unique)?;
    writeln!(out, "  labels positive:  {}", v.labels_positive)?;
    writeln!(out, "  labels <= k:      {}", v.labels_within_k)?;
    writeln!(out, "  weights match:    {}", v.weights_consistent)?;
    writeln!(out, "  max label:        {}", v.max_label)?;
    writeln!(out, "  max weight:       {}", v.max_weight)?;
    for collision in &report.collisions {
        writeln!(
            out,
            "  collision: weight {} on ({}, {}) and ({}, {})",
            collision.weight,
            collision.first[0],
            collision.first[1],
            collision.second[0],
            collision.second[1]
        )?;
    }
    writeln!(out, "digest: {}", report.digest)?;
    Ok(())
}

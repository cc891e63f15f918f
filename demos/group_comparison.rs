#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Automatic Two-Group Comparison Example
//!
//! Runs the normality-gated comparison on two scenarios: a clean A/B
//! measurement where Student's t-test applies, and an outlier-contaminated
//! one that falls back to Mann-Whitney U.
//!
//! Run with: `cargo run --example group_comparison`

use sello_viz::prelude::*;

fn report(label: &str, result: &Comparison) {
    println!("   normality: p_a = {:.4}, p_b = {:.4}", result.normality_a.p_value, result.normality_b.p_value);
    println!("   selected:  {} (statistic = {:.4})", result.choice, result.statistic);
    println!("   {}", result.summary());
    println!("   -> {label}\n");
}

fn main() {
    println!("Group Comparison Example");
    println!("========================\n");

    // Scenario 1: response times from two builds, both well-behaved.
    println!("1. Comparing response times (control vs treatment)...");
    let control = [
        251.2, 248.7, 253.1, 250.4, 249.8, 252.6, 247.9, 251.8, 250.1, 249.3, 252.2, 250.9,
    ];
    let treatment = [
        244.1, 241.8, 246.2, 243.5, 242.7, 245.4, 240.9, 244.8, 243.2, 242.3, 245.1, 243.9,
    ];
    let result = compare(&control, &treatment, DEFAULT_ALPHA).expect("comparison failed");
    report("both groups look normal, so the parametric branch ran", &result);

    BarChart::new()
        .data(&["control", "treatment"], &[result.mean_a, result.mean_b])
        .title(format!("Mean response time (p = {:.4})", result.p_value))
        .y_label("milliseconds")
        .dimensions(520, 380)
        .build()
        .expect("bar chart build failed")
        .save_svg("group_comparison_means.svg")
        .expect("failed to write SVG");
    println!("   Saved: group_comparison_means.svg\n");

    // Scenario 2: one endpoint has a stray timeout in its sample.
    println!("2. Comparing API latencies (legacy vs new, with an outlier)...");
    let legacy = [12.1, 11.8, 12.4, 12.0, 11.9, 12.2, 12.3, 11.75, 12.6, 95.4];
    let new = [11.2, 10.9, 11.5, 11.1, 11.0, 11.3, 11.4, 10.8, 11.7, 11.6];
    let result = compare(&legacy, &new, DEFAULT_ALPHA).expect("comparison failed");
    report("the timeout broke normality, so ranks were compared instead", &result);

    Histogram::new()
        .data(&legacy)
        .bins(BinStrategy::Fixed(20))
        .title("Legacy latency sample")
        .x_label("milliseconds")
        .dimensions(520, 380)
        .build()
        .expect("histogram build failed")
        .save_svg("group_comparison_legacy.svg")
        .expect("failed to write SVG");
    println!("   Saved: group_comparison_legacy.svg\n");

    // Scenario 3: direct access to the individual tests.
    println!("3. Running the underlying tests directly...");
    let t = student_t_test(&control, &treatment).expect("t-test failed");
    println!("   Student's t: t = {:.4}, df = {}, p = {:.6}", t.statistic, t.df, t.p_value);
    let w = welch_t_test(&control, &treatment).expect("Welch failed");
    println!("   Welch's t:   t = {:.4}, df = {:.2}, p = {:.6}", w.statistic, w.df, w.p_value);
    let u = mann_whitney_u(&legacy, &new).expect("Mann-Whitney failed");
    println!("   Mann-Whitney: U = {}, z = {:.4}, p = {:.6}", u.statistic, u.z, u.p_value);
    let sw = shapiro_wilk(&legacy, DEFAULT_ALPHA).expect("Shapiro-Wilk failed");
    println!("   Shapiro-Wilk (legacy): W = {:.4}, p = {:.6}, normal = {}", sw.statistic, sw.p_value, sw.normal);
}

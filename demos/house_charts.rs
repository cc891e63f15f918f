#![allow(clippy::expect_used, clippy::unwrap_used)]
//! House Chart Gallery
//!
//! Renders every chart type with the default house theme and writes the
//! results as SVG files into the working directory.
//!
//! Run with: `cargo run --example house_charts`

use sello_viz::prelude::*;

fn main() {
    println!("House Chart Gallery");
    println!("===================\n");

    // 1. Multi-series line chart
    println!("1. Line chart...");
    let quarters = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let retail = [102.0, 108.5, 115.2, 121.0, 126.4, 133.8, 141.5, 150.2];
    let corporate = [98.0, 99.5, 103.2, 104.8, 109.1, 110.6, 114.9, 117.3];
    LineChart::new()
        .add_series(Series::new("retail").data(&quarters, &retail))
        .add_series(Series::new("corporate").data(&quarters, &corporate))
        .title("Revenue by segment")
        .x_label("quarter")
        .y_label("revenue, M")
        .markers(true)
        .build()
        .expect("line chart build failed")
        .save_svg("gallery_line.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_line.svg\n");

    // 2. Grouped bar chart
    println!("2. Bar chart...");
    BarChart::new()
        .categories(&["north", "south", "east", "west"])
        .add_group(BarGroup::new("2024").values(&[41.2, 33.7, 28.9, 36.4]))
        .add_group(BarGroup::new("2025").values(&[45.8, 31.2, 34.5, 39.1]))
        .title("Branch openings by region")
        .y_label("count")
        .build()
        .expect("bar chart build failed")
        .save_svg("gallery_bar.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_bar.svg\n");

    // 3. Scatter plot with two clusters
    println!("3. Scatter plot...");
    let (mut x1, mut y1) = (Vec::new(), Vec::new());
    let (mut x2, mut y2) = (Vec::new(), Vec::new());
    for i in 0..40 {
        let t = f64::from(i) * 0.37;
        x1.push(2.0 + t.sin() * 0.8);
        y1.push(3.0 + t.cos() * 0.6);
        x2.push(5.0 + (t * 1.3).sin() * 0.7);
        y2.push(6.0 + (t * 0.9).cos() * 0.9);
    }
    ScatterPlot::new()
        .add_series(Series::new("cluster a").data(&x1, &y1))
        .add_series(Series::new("cluster b").data(&x2, &y2))
        .title("Customer segments")
        .build()
        .expect("scatter build failed")
        .save_svg("gallery_scatter.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_scatter.svg\n");

    // 4. Histogram with density overlay
    println!("4. Histogram...");
    let sample: Vec<f64> = (0..240)
        .map(|i| {
            let t = f64::from(i) / 240.0;
            50.0 + 12.0 * (t * std::f64::consts::TAU).sin() + f64::from(i % 23) * 0.8
        })
        .collect();
    Histogram::new()
        .data(&sample)
        .bins(BinStrategy::Sturges)
        .kde(true)
        .title("Transaction amounts")
        .x_label("amount")
        .y_label("count")
        .build()
        .expect("histogram build failed")
        .save_svg("gallery_histogram.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_histogram.svg\n");

    // 5. Annotated heatmap
    println!("5. Heatmap...");
    #[rustfmt::skip]
    let correlation = [
        1.00, 0.82, 0.24, 0.10,
        0.82, 1.00, 0.31, 0.18,
        0.24, 0.31, 1.00, 0.67,
        0.10, 0.18, 0.67, 1.00,
    ];
    let features = ["income", "spend", "visits", "clicks"];
    Heatmap::new()
        .data(&correlation, 4, 4)
        .row_labels(&features)
        .col_labels(&features)
        .title("Feature correlation")
        .dimensions(620, 560)
        .build()
        .expect("heatmap build failed")
        .save_svg("gallery_heatmap.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_heatmap.svg\n");

    // 6. Pie chart
    println!("6. Pie chart...");
    PieChart::new()
        .data(&["mobile", "web", "branch", "call center"], &[46.0, 31.0, 14.0, 9.0])
        .title("Orders by channel")
        .dimensions(560, 560)
        .build()
        .expect("pie chart build failed")
        .save_svg("gallery_pie.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_pie.svg\n");

    // 7. Same chart, dark theme
    println!("7. Dark theme...");
    LineChart::new()
        .add_series(Series::new("retail").data(&quarters, &retail))
        .title("Revenue by segment")
        .theme(Theme::dark())
        .build()
        .expect("line chart build failed")
        .save_svg("gallery_line_dark.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_line_dark.svg\n");

    // 8. Horizontal bars straight from a data frame
    println!("8. Horizontal bar chart...");
    let mut products = DataFrame::new();
    products.add_column_str(
        "product",
        &["deposits", "cards", "loans", "insurance", "leasing"],
    );
    products.add_column_f64("volume", &[612.0, 448.0, 391.0, 177.0, 93.0]);
    BarChart::from_frame(&products, "product", "volume")
        .expect("columns missing")
        .horizontal(true)
        .title("Volume by product line")
        .build()
        .expect("bar chart build failed")
        .save_svg("gallery_bar_horizontal.svg")
        .expect("failed to write SVG");
    println!("   Saved: gallery_bar_horizontal.svg");
}

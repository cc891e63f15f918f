//! Rendering smoke tests.
//!
//! Every chart type writes a structurally complete SVG document both to an
//! in-memory string and through the file path, with the house theme applied
//! by default.

#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::tempdir;

use sello_viz::prelude::*;

fn assert_valid_svg(svg: &str) {
    assert!(svg.contains("<svg"), "missing <svg> root element");
    assert!(
        svg.trim_end().ends_with("</svg>"),
        "document is not terminated"
    );
}

// ============================================================================
// PER-CHART RENDERING
// ============================================================================

#[test]
fn line_chart_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.svg");

    LineChart::new()
        .add_series(Series::new("train").data(&[0.0, 1.0, 2.0, 3.0], &[0.9, 0.7, 0.5, 0.4]))
        .add_series(Series::new("validation").data(&[0.0, 1.0, 2.0, 3.0], &[1.0, 0.8, 0.7, 0.65]))
        .title("Loss")
        .x_label("epoch")
        .y_label("loss")
        .dimensions(640, 480)
        .build()
        .unwrap()
        .save_svg(&path)
        .unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("width=\"640\""));
    assert!(svg.contains("Loss"));
    assert!(svg.contains("train"));
    assert!(svg.contains("validation"));
}

#[test]
fn scatter_plot_renders_points() {
    let svg = ScatterPlot::new()
        .data(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 1.0, 5.0])
        .dimensions(400, 300)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("<circle"));
}

#[test]
fn bar_chart_renders_category_labels() {
    let svg = BarChart::new()
        .data(&["north", "south", "east"], &[12.0, 7.5, 9.25])
        .y_label("revenue")
        .dimensions(500, 360)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("<rect"));
    assert!(svg.contains("north"));
    assert!(svg.contains("east"));
}

#[test]
fn histogram_renders_bars_and_kde_overlay() {
    let data: Vec<f64> = (0..80).map(|i| ((i % 17) as f64) * 0.3 + (i / 17) as f64).collect();
    let svg = Histogram::new()
        .data(&data)
        .bins(BinStrategy::Fixed(12))
        .kde(true)
        .dimensions(500, 360)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("<rect"));
    assert!(svg.contains("<polyline"));
}

#[test]
fn heatmap_renders_cells_and_labels() {
    let svg = Heatmap::new()
        .data(&[0.1, 0.9, 0.4, 0.6, 0.2, 0.8], 2, 3)
        .row_labels(&["mon", "tue"])
        .col_labels(&["a", "b", "c"])
        .dimensions(420, 320)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("mon"));
    assert!(svg.contains("0.90"));
}

#[test]
fn pie_chart_renders_slices() {
    let svg = PieChart::new()
        .data(&["rust", "python", "other"], &[50.0, 30.0, 20.0])
        .dimensions(420, 420)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("50.0%"));
    assert!(svg.contains("python"));
}

// ============================================================================
// THEMES AND OUTPUT SWEEP
// ============================================================================

#[test]
fn every_builtin_theme_renders() {
    for theme in [Theme::house(), Theme::minimal(), Theme::dark()] {
        let svg = LineChart::new()
            .data(&[0.0, 1.0, 2.0], &[1.0, 4.0, 2.0])
            .theme(theme)
            .dimensions(320, 240)
            .build()
            .unwrap()
            .to_svg_string()
            .unwrap();
        assert_valid_svg(&svg);
    }
}

#[test]
fn all_chart_types_save_to_files() {
    let dir = tempdir().unwrap();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 3.5, 3.0, 5.0, 4.5];

    LineChart::new()
        .data(&x, &y)
        .build()
        .unwrap()
        .save_svg(dir.path().join("line.svg"))
        .unwrap();
    ScatterPlot::new()
        .data(&x, &y)
        .build()
        .unwrap()
        .save_svg(dir.path().join("scatter.svg"))
        .unwrap();
    BarChart::new()
        .data(&["a", "b", "c"], &[1.0, 2.0, 3.0])
        .build()
        .unwrap()
        .save_svg(dir.path().join("bar.svg"))
        .unwrap();
    Histogram::new()
        .data(&y)
        .build()
        .unwrap()
        .save_svg(dir.path().join("histogram.svg"))
        .unwrap();
    Heatmap::new()
        .data(&[1.0, 2.0, 3.0, 4.0], 2, 2)
        .build()
        .unwrap()
        .save_svg(dir.path().join("heatmap.svg"))
        .unwrap();
    PieChart::new()
        .data(&["a", "b"], &[3.0, 1.0])
        .build()
        .unwrap()
        .save_svg(dir.path().join("pie.svg"))
        .unwrap();

    for name in [
        "line.svg",
        "scatter.svg",
        "bar.svg",
        "histogram.svg",
        "heatmap.svg",
        "pie.svg",
    ] {
        let meta = fs::metadata(dir.path().join(name)).unwrap();
        assert!(meta.len() > 0, "{name} is empty");
    }
}

#[test]
fn custom_brand_color_appears_in_output() {
    let accent = Rgba::from_hex("#FF6B00").unwrap();
    let svg = LineChart::new()
        .add_series(Series::new("accent").data(&[0.0, 1.0], &[0.0, 1.0]).color(accent))
        .dimensions(320, 240)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&svg);
    assert!(
        svg.to_ascii_lowercase().contains("#ff6b00"),
        "accent stroke missing"
    );
}

#[test]
fn charts_build_from_data_frame_columns() {
    let mut frame = DataFrame::new();
    frame.add_column_str("region", &["north", "south", "west"]);
    frame.add_column_f64("orders", &[412.0, 388.0, 501.0]);
    frame.add_column_f64("revenue", &[61.2, 55.9, 74.3]);

    let bar = BarChart::from_frame(&frame, "region", "orders")
        .unwrap()
        .dimensions(400, 300)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&bar);
    assert!(bar.contains("north"), "category label missing");
    assert!(bar.contains("orders"), "y axis label missing");

    let scatter = ScatterPlot::from_frame(&frame, "orders", "revenue")
        .unwrap()
        .dimensions(400, 300)
        .build()
        .unwrap()
        .to_svg_string()
        .unwrap();
    assert_valid_svg(&scatter);
    assert!(scatter.contains("revenue"), "axis label missing");
}

//! Streaming points into datasets.

use gp_plot::{MemorySink, Plot, PlotConfig, PlotError};
use proptest::prelude::*;

fn plot_with_batch(batch_size: usize) -> (Plot, MemorySink) {
    let sink = MemorySink::new();
    let config = PlotConfig {
        batch_size,
        ..PlotConfig::default()
    };
    let plot = Plot::with_sink("ingest", sink.clone(), &config);
    (plot, sink)
}

#[test]
fn bulk_append_is_split_into_batches() {
    let (plot, sink) = plot_with_batch(4);
    let series = plot.create_series("S");

    let sent = series.append_all((0..10).map(|i| (i, i * 2))).unwrap();

    assert_eq!(sent, 10);
    // 4 + 4 + 2 points, redirect only in the first write.
    assert_eq!(sink.send_count(), 3);
    let lines = sink.lines();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "set print $_0 append");
    assert_eq!(lines[10], "print \"9 18\"");
}

#[test]
fn empty_inputs_send_nothing() {
    let (plot, sink) = plot_with_batch(8);
    let series = plot.create_series("S");

    assert_eq!(series.append_all(Vec::<(f64, f64)>::new()).unwrap(), 0);
    series.append_row(Vec::<f64>::new()).unwrap();

    assert_eq!(sink.send_count(), 0);
    assert!(series.is_empty());
}

#[test]
fn rows_of_runtime_length() {
    let (plot, sink) = plot_with_batch(8);
    let series = plot.create_series("S");

    let row: Vec<f64> = "1.5 2 3.25"
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    series.append_row(row).unwrap();
    series.append(&[4u8, 5, 6][..]).unwrap();
    series.append([7.0f32, 8.0]).unwrap();

    assert_eq!(
        sink.lines(),
        [
            "set print $_0 append",
            "print \"1.5 2 3.25\"",
            "print \"4 5 6\"",
            "print \"7 8\"",
        ]
    );
    assert!(!series.is_empty());
}

#[test]
fn failure_mid_stream_keeps_earlier_batches() {
    let (plot, sink) = plot_with_batch(2);
    let series = plot.create_series("S");
    series.append((0, 0)).unwrap();

    // The first bulk batch goes through; arm the failure for the second.
    let mut points = (1..6).map(|i| (i, i));
    let first: Vec<_> = points.by_ref().take(2).collect();
    series.append_all(first).unwrap();
    sink.fail_next(32);
    let err = series.append_all(points).unwrap_err();

    assert!(matches!(err, PlotError::Write { during: "append", .. }));
    assert!(!series.is_empty());
    assert_eq!(sink.lines().len(), 4);
}

#[test]
fn batch_size_can_change_at_runtime() {
    let (plot, sink) = plot_with_batch(64);
    plot.set_batch_size(1);
    let series = plot.create_series("S");

    series.append_all([(0, 1), (1, 2), (2, 3)]).unwrap();
    assert_eq!(sink.send_count(), 3);
}

#[test]
fn point_source_may_query_the_plot() {
    let (plot, sink) = plot_with_batch(2);
    let series = plot.create_series("S");

    let sent = series
        .append_all((0..3).map(|i| (i, plot.num_series() + series.title().len())))
        .unwrap();

    assert_eq!(sent, 3);
    assert_eq!(
        sink.lines(),
        [
            "set print $_0 append",
            "print \"0 2\"",
            "print \"1 2\"",
            "print \"2 2\"",
        ]
    );
}

#[test]
fn row_source_may_query_the_series() {
    let (plot, sink) = plot_with_batch(8);
    let series = plot.create_series("S");
    series.append((1, 1)).unwrap();

    series
        .append_row([0usize, 1].into_iter().map(|i| i + usize::from(series.is_empty())))
        .unwrap();
    assert_eq!(sink.lines().last().map(String::as_str), Some("print \"0 1\""));
}

mod proptests {
    use super::*;
    use gp_plot::{Color, PlotStyle};

    proptest! {
        #[test]
        fn style_changes_coalesce(
            colors in prop::collection::vec(any::<u32>(), 1..20),
            widths in prop::collection::vec(0.5f64..10.0, 1..20),
        ) {
            let (plot, sink) = plot_with_batch(64);
            let series = plot.create_series("S");
            series.append((0, 0)).unwrap();
            plot.update().unwrap();
            sink.take();

            for &packed in &colors {
                series.set_color(Color::from_packed(packed));
            }
            for &width in &widths {
                series.set_line_width(width);
            }
            series.set_style(PlotStyle::Lines);
            plot.update().unwrap();

            let text = sink.take();
            prop_assert_eq!(text.matches("plot ").count(), 1);
            let final_color = format!("linecolor rgb {}", colors[colors.len() - 1]);
            let final_width = format!("linewidth {}", widths[widths.len() - 1]);
            prop_assert!(text.contains(&final_color));
            prop_assert!(text.contains(&final_width));

            plot.update().unwrap();
            prop_assert!(sink.contents().is_empty());
        }
    }
}

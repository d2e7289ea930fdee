//! Plots backed by a real child process.

#![cfg(unix)]

use gp_plot::{Plot, PlotConfig, PlotError, ProcessConfig};

fn config(program: &str) -> PlotConfig {
    PlotConfig {
        process: ProcessConfig::program(program),
        ..PlotConfig::default()
    }
}

#[test]
fn missing_program_fails_construction() {
    let err = Plot::with_config("P", &config("gp-plot-test-no-such-gnuplot")).unwrap_err();

    assert!(matches!(err, PlotError::Spawn(_)));
    assert_eq!(err.code(), Some(2)); // ENOENT
}

#[test]
fn invalid_config_is_rejected_before_spawning() {
    let mut bad = config("cat");
    bad.terminal.clear();
    let err = Plot::with_config("P", &bad).unwrap_err();
    assert!(matches!(err, PlotError::Config { .. }));
}

#[test]
fn full_session_against_a_stand_in_program() {
    let plot = Plot::with_config("P", &config("cat")).unwrap();
    let series = plot.create_series("S");
    series.append_all((0..1000).map(|x| (x, x * x))).unwrap();
    plot.update().unwrap();

    plot.remove_series(&series).unwrap();
    plot.update().unwrap();
    // Dropping the last handles closes stdin and reaps `cat`.
    drop(series);
    drop(plot);
}

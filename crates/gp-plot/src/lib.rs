//! gp-plot: live gnuplot windows driven through a pipe.
//!
//! A [`Plot`] owns a gnuplot process and a list of [`Series`]. Points are
//! streamed into named datasets inside gnuplot as they are appended;
//! styling, ranges and membership changes are only recorded, and
//! [`Plot::update`] sends the smallest script that brings the window up to
//! date.
//!
//! ```no_run
//! use gp_plot::{Color, Plot, PlotStyle};
//!
//! # fn main() -> gp_plot::PlotResult<()> {
//! let plot = Plot::new("parabola")?;
//! let series = plot.create_series("x^2");
//! series.set_style(PlotStyle::LinesPoints).set_color(Color::RED);
//! series.append_all((0..100).map(|x| (x, f64::from(x * x))))?;
//! plot.update()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod plot;
mod render;
pub mod series;
mod state;
pub mod window;

pub use config::PlotConfig;
pub use data::{DataPoint, Number};
pub use error::{PlotError, PlotResult};
pub use plot::Plot;
pub use series::Series;
pub use window::{Position, WindowSize};

pub use gp_core::{
    Abscissa, AxesPair, Axis, Color, DataId, LimitValue, Ordinate, PlotStyle, PointType, Range,
    RangeValue, Smooth,
};
pub use gp_process::{CommandSink, MemorySink, ProcessConfig, ProcessError, ProcessResult};

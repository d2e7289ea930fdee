//! gp-core: value types shared by the gnuplot pipe crates.
//!
//! Contains:
//! - color (packed RGBA + named color constants)
//! - style (plot style, point type and smoothing keywords)
//! - axis (axes, axes pairs and the four axis slots)
//! - range (automatic / numeric / one-side clamped range bounds)
//! - ids (data buffer ids)
//! - error (shared error type)

pub mod axis;
pub mod color;
mod colors;
pub mod error;
pub mod ids;
pub mod range;
pub mod style;

// Re-exports: nice ergonomics for downstream crates
pub use axis::{AXIS_COUNT, Abscissa, AxesPair, Axis, Ordinate};
pub use color::Color;
pub use colors::NAMED_COLORS;
pub use error::{CoreError, CoreResult};
pub use ids::DataId;
pub use range::{LimitValue, Range, RangeValue};
pub use style::{PlotStyle, PointType, Smooth};

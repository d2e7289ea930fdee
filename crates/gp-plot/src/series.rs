//! Series handle.

use std::cell::RefCell;
use std::rc::Rc;

use gp_core::{AxesPair, Color, DataId, PlotStyle, PointType, Smooth};

use crate::data::{DataPoint, Number, write_print_line};
use crate::error::PlotResult;
use crate::state::{PlotState, SeriesState, assign};

/// One curve of a plot.
///
/// Cloning gives another handle to the same series. Setters only record the
/// change; nothing is drawn until [`Plot::update`](crate::Plot::update).
/// Setting a value equal to the current one leaves the series clean.
#[derive(Clone)]
pub struct Series {
    pub(crate) plot: Rc<RefCell<PlotState>>,
    pub(crate) state: Rc<RefCell<SeriesState>>,
}

impl std::fmt::Debug for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Series")
            .field("title", &state.title)
            .field("data", &state.data.id())
            .field("removed", &state.removed)
            .finish()
    }
}

impl Series {
    fn modify(&self, change: impl FnOnce(&mut SeriesState) -> bool) -> &Self {
        let mut state = self.state.borrow_mut();
        if change(&mut *state) {
            state.dirty = true;
        }
        self
    }

    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        let title = title.into();
        self.modify(|s| assign(&mut s.title, title))
    }

    pub fn set_style(&self, style: PlotStyle) -> &Self {
        self.modify(|s| assign(&mut s.style, style))
    }

    /// `None` lets gnuplot pick the next color of its palette.
    pub fn set_color(&self, color: impl Into<Option<Color>>) -> &Self {
        let color = color.into();
        self.modify(|s| assign(&mut s.color, color))
    }

    pub fn set_line_width(&self, width: f64) -> &Self {
        self.modify(|s| assign(&mut s.line_width, width))
    }

    /// `None` keeps gnuplot's default marker and ignores the point size.
    pub fn set_point_type(&self, point_type: impl Into<Option<PointType>>) -> &Self {
        let point_type = point_type.into();
        self.modify(|s| assign(&mut s.point_type, point_type))
    }

    pub fn set_point_size(&self, size: f64) -> &Self {
        self.modify(|s| assign(&mut s.point_size, size))
    }

    pub fn set_smooth(&self, smooth: impl Into<Option<Smooth>>) -> &Self {
        let smooth = smooth.into();
        self.modify(|s| assign(&mut s.smooth, smooth))
    }

    /// Plot against another axes pair. Also re-evaluates which axes show tics.
    pub fn set_axes(&self, axes: AxesPair) -> &Self {
        self.modify(|s| {
            let changed = assign(&mut s.axes, axes);
            s.axes_dirty |= changed;
            changed
        })
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn style(&self) -> PlotStyle {
        self.state.borrow().style
    }

    pub fn color(&self) -> Option<Color> {
        self.state.borrow().color
    }

    pub fn line_width(&self) -> f64 {
        self.state.borrow().line_width
    }

    pub fn point_type(&self) -> Option<PointType> {
        self.state.borrow().point_type
    }

    pub fn point_size(&self) -> f64 {
        self.state.borrow().point_size
    }

    pub fn smooth(&self) -> Option<Smooth> {
        self.state.borrow().smooth
    }

    pub fn axes(&self) -> AxesPair {
        self.state.borrow().axes
    }

    /// Dataset this series draws from.
    pub fn data_id(&self) -> DataId {
        self.state.borrow().data.id()
    }

    /// Whether the dataset has received no points since creation or the
    /// last clear.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().data.is_empty()
    }

    /// Whether [`Plot::remove_series`](crate::Plot::remove_series) was called.
    pub fn is_removed(&self) -> bool {
        self.state.borrow().removed
    }

    /// Both handles refer to the same series.
    pub fn ptr_eq(&self, other: &Series) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Both series draw from the same dataset.
    pub fn shares_data_with(&self, other: &Series) -> bool {
        Rc::ptr_eq(&self.state.borrow().data, &other.state.borrow().data)
    }

    /// Send one point to the dataset.
    ///
    /// ```no_run
    /// # use gp_plot::Plot;
    /// # fn main() -> gp_plot::PlotResult<()> {
    /// let plot = Plot::new("demo")?;
    /// let series = plot.create_series("parabola");
    /// series.append((0, 0.0))?.append((1, 1.0))?;
    /// plot.update()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn append<P: DataPoint>(&self, point: P) -> PlotResult<&Self> {
        let mut lines = String::new();
        write_print_line(&mut lines, &point)?;
        self.send_points(&lines)?;
        Ok(self)
    }

    /// Send one row of values, e.g. from a parsed text line. An empty row
    /// sends nothing.
    pub fn append_row<N: Number>(&self, values: impl IntoIterator<Item = N>) -> PlotResult<&Self> {
        let row: Vec<N> = values.into_iter().collect();
        if row.is_empty() {
            return Ok(self);
        }
        let mut lines = String::new();
        write_print_line(&mut lines, row.as_slice())?;
        self.send_points(&lines)?;
        Ok(self)
    }

    /// Send many points, batched into writes of at most the plot's batch
    /// size. Returns how many points were sent.
    ///
    /// Each batch is formatted before the plot is touched, so `points` may
    /// itself query this plot or its series.
    pub fn append_all<P: DataPoint>(&self, points: impl IntoIterator<Item = P>) -> PlotResult<usize> {
        let batch_size = self.plot.borrow().batch_size;
        let mut points = points.into_iter();
        let mut lines = String::new();
        let mut delivered = 0;
        loop {
            lines.clear();
            let mut batch = 0;
            for point in points.by_ref().take(batch_size) {
                write_print_line(&mut lines, &point)?;
                batch += 1;
            }
            if batch == 0 {
                return Ok(delivered);
            }
            self.send_points(&lines)?;
            delivered += batch;
        }
    }

    fn send_points(&self, lines: &str) -> PlotResult<()> {
        let data = self.state.borrow().data.clone();
        self.plot.borrow_mut().send_points(&data, lines)
    }

    /// Drop every point of the dataset. Series sharing it are emptied too.
    pub fn clear(&self) -> PlotResult<&Self> {
        let data = self.state.borrow().data.clone();
        self.plot.borrow_mut().clear(&data)?;
        Ok(self)
    }
}

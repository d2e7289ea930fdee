//! Plot handle.

use std::cell::RefCell;
use std::rc::Rc;

use gp_core::{Axis, Range};
use gp_process::{ChildProcess, CommandSink};

use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::series::Series;
use crate::state::{PlotState, SeriesState, assign};
use crate::window::{Position, WindowSize};

/// A gnuplot window and the series drawn in it.
///
/// Cloning gives another handle to the same plot. The plotting process lives
/// as long as any handle (including [`Series`] handles) does; when the last
/// one is dropped its input is closed and it is waited for.
#[derive(Debug, Clone)]
pub struct Plot {
    inner: Rc<RefCell<PlotState>>,
}

impl Plot {
    /// Start gnuplot with the default configuration.
    pub fn new(title: impl Into<String>) -> PlotResult<Self> {
        Self::with_config(title, &PlotConfig::default())
    }

    pub fn with_config(title: impl Into<String>, config: &PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let process = ChildProcess::spawn(&config.process).map_err(PlotError::Spawn)?;
        Ok(Self::with_sink(title, process, config))
    }

    /// A plot writing to an arbitrary sink instead of a spawned process.
    pub fn with_sink(
        title: impl Into<String>,
        sink: impl CommandSink + 'static,
        config: &PlotConfig,
    ) -> Self {
        let state = PlotState::new(title.into(), Box::new(sink), config);
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    fn modify(&self, change: impl FnOnce(&mut PlotState) -> bool) -> &Self {
        let mut state = self.inner.borrow_mut();
        if change(&mut *state) {
            state.dirty = true;
        }
        self
    }

    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        let title = title.into();
        self.modify(|p| assign(&mut p.title, title))
    }

    pub fn set_font(&self, font: impl Into<String>) -> &Self {
        let font = font.into();
        self.modify(|p| assign(&mut p.font, font))
    }

    pub fn set_font_size(&self, size: u32) -> &Self {
        self.modify(|p| assign(&mut p.font_size, size))
    }

    pub fn set_font_with_size(&self, font: impl Into<String>, size: u32) -> &Self {
        self.set_font(font).set_font_size(size)
    }

    pub fn set_position(&self, position: impl Into<Option<Position>>) -> &Self {
        let position = position.into();
        self.modify(|p| assign(&mut p.position, position))
    }

    pub fn set_size(&self, size: impl Into<Option<WindowSize>>) -> &Self {
        let size = size.into();
        self.modify(|p| assign(&mut p.size, size))
    }

    /// Set the range of one axis.
    ///
    /// ```no_run
    /// # use gp_plot::{Axis, Plot, Range, RangeValue};
    /// # fn main() -> gp_plot::PlotResult<()> {
    /// let plot = Plot::new("ranges")?;
    /// plot.set_range(Axis::X1, Range::new(0.0, 10.0))
    ///     .set_range(Axis::Y1, (RangeValue::AUTO, 1))
    ///     .set_range(Axis::Y2, (RangeValue::at_least(0), RangeValue::AUTO));
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_range(&self, axis: impl Into<Axis>, range: impl Into<Range>) -> &Self {
        let slot = axis.into().slot();
        let range = range.into();
        self.modify(|p| {
            let changed = assign(&mut p.ranges[slot], range);
            p.ranges_dirty |= changed;
            changed
        })
    }

    pub fn title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    pub fn font(&self) -> String {
        self.inner.borrow().font.clone()
    }

    pub fn font_size(&self) -> u32 {
        self.inner.borrow().font_size
    }

    pub fn position(&self) -> Option<Position> {
        self.inner.borrow().position
    }

    pub fn size(&self) -> Option<WindowSize> {
        self.inner.borrow().size
    }

    pub fn range(&self, axis: impl Into<Axis>) -> Range {
        self.inner.borrow().ranges[axis.into().slot()]
    }

    pub fn batch_size(&self) -> usize {
        self.inner.borrow().batch_size
    }

    /// Maximum number of points per write in [`Series::append_all`].
    /// Zero is treated as one.
    pub fn set_batch_size(&self, size: usize) -> &Self {
        self.inner.borrow_mut().batch_size = size.max(1);
        self
    }

    /// Add a series with its own, empty dataset.
    pub fn create_series(&self, title: impl Into<String>) -> Series {
        let data = self.inner.borrow_mut().new_buffer();
        self.attach(SeriesState::new(title.into(), data))
    }

    /// Add a series drawing from the same dataset as `source`, e.g. a
    /// smoothed overlay of raw points.
    ///
    /// # Panics
    ///
    /// If `source` belongs to another plot.
    pub fn create_series_sharing(&self, title: impl Into<String>, source: &Series) -> Series {
        assert!(
            Rc::ptr_eq(&self.inner, &source.plot),
            "cannot share data with a series of another plot"
        );
        let data = source.state.borrow().data.clone();
        self.attach(SeriesState::new(title.into(), data))
    }

    fn attach(&self, state: SeriesState) -> Series {
        let state = Rc::new(RefCell::new(state));
        self.inner.borrow_mut().series.push(state.clone());
        Series {
            plot: self.inner.clone(),
            state,
        }
    }

    /// Number of series, including removed ones not yet dropped by `update`.
    pub fn num_series(&self) -> usize {
        self.inner.borrow().series.len()
    }

    /// Series by insertion index.
    pub fn get_series(&self, index: usize) -> Option<Series> {
        let state = self.inner.borrow().series.get(index)?.clone();
        Some(Series {
            plot: self.inner.clone(),
            state,
        })
    }

    /// First series with the given title.
    pub fn find_series(&self, title: &str) -> Option<Series> {
        let state = self
            .inner
            .borrow()
            .series
            .iter()
            .find(|s| s.borrow().title == title)?
            .clone();
        Some(Series {
            plot: self.inner.clone(),
            state,
        })
    }

    /// Clear the series' dataset and drop it from the plot at the next
    /// [`update`](Self::update).
    ///
    /// # Panics
    ///
    /// If `series` belongs to another plot.
    pub fn remove_series(&self, series: &Series) -> PlotResult<()> {
        assert!(
            Rc::ptr_eq(&self.inner, &series.plot),
            "series belongs to another plot"
        );
        series.clear()?;
        series.state.borrow_mut().removed = true;
        self.inner.borrow_mut().dirty = true;
        Ok(())
    }

    /// Send everything that changed since the last successful update, as a
    /// single write. Sends nothing if nothing changed.
    pub fn update(&self) -> PlotResult<()> {
        self.inner.borrow_mut().update()
    }

    /// Both handles refer to the same plot.
    pub fn ptr_eq(&self, other: &Plot) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

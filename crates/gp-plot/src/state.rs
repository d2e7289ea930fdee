//! Shared state behind the `Plot` and `Series` handles.
//!
//! The plot owns the command sink and every series; series own (or share) a
//! data buffer. Nothing here talks to gnuplot except through `PlotState`,
//! which is the only holder of the sink.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use gp_core::{AXIS_COUNT, AxesPair, Color, DataId, PlotStyle, PointType, Range, Smooth};
use gp_process::CommandSink;
use tracing::trace;

use crate::config::PlotConfig;
use crate::error::{PlotError, PlotResult};
use crate::window::{Position, WindowSize};

/// Store `value` in `slot`, reporting whether it differed.
pub(crate) fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// A named dataset in the gnuplot session (`$_<id>`).
///
/// Only its flags live here; the values live in the other process.
#[derive(Debug)]
pub(crate) struct DataBuffer {
    id: DataId,
    empty: Cell<bool>,
    dirty: Cell<bool>,
}

impl DataBuffer {
    pub(crate) fn new(id: DataId) -> Self {
        Self {
            id,
            empty: Cell::new(true),
            dirty: Cell::new(false),
        }
    }

    pub(crate) fn id(&self) -> DataId {
        self.id
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.empty.get()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn mark_appended(&self) {
        self.empty.set(false);
        self.dirty.set(true);
    }

    fn mark_cleared(&self) {
        self.empty.set(true);
        self.dirty.set(true);
    }

    pub(crate) fn mark_flushed(&self) {
        self.dirty.set(false);
    }
}

#[derive(Debug)]
pub(crate) struct SeriesState {
    pub(crate) data: Rc<DataBuffer>,
    pub(crate) title: String,
    pub(crate) style: PlotStyle,
    pub(crate) color: Option<Color>,
    pub(crate) line_width: f64,
    pub(crate) point_type: Option<PointType>,
    pub(crate) point_size: f64,
    pub(crate) smooth: Option<Smooth>,
    pub(crate) axes: AxesPair,
    /// Styling changed since the last flush.
    pub(crate) dirty: bool,
    /// Axes assignment changed since the last flush.
    pub(crate) axes_dirty: bool,
    /// Removed by the user; dropped from the plot at the next update.
    pub(crate) removed: bool,
}

impl SeriesState {
    pub(crate) fn new(title: String, data: Rc<DataBuffer>) -> Self {
        Self {
            data,
            title,
            style: PlotStyle::default(),
            color: None,
            line_width: 1.0,
            point_type: None,
            point_size: 1.0,
            smooth: None,
            axes: AxesPair::default(),
            dirty: true,
            axes_dirty: true,
            removed: false,
        }
    }
}

pub(crate) struct PlotState {
    pub(crate) sink: Box<dyn CommandSink>,
    pub(crate) terminal: String,
    pub(crate) title: String,
    pub(crate) font: String,
    pub(crate) font_size: u32,
    pub(crate) position: Option<Position>,
    pub(crate) size: Option<WindowSize>,
    pub(crate) ranges: [Range; AXIS_COUNT],
    pub(crate) series: Vec<Rc<RefCell<SeriesState>>>,
    next_data_id: DataId,
    /// Dataset `set print` currently appends to.
    pub(crate) active_data_id: Option<DataId>,
    pub(crate) batch_size: usize,
    /// Scratch buffer for outgoing command text.
    pub(crate) buf: String,
    pub(crate) dirty: bool,
    pub(crate) ranges_dirty: bool,
    /// Axis usage as of the last flush, indexed by axis slot.
    pub(crate) axes_used: [bool; AXIS_COUNT],
}

impl fmt::Debug for PlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotState")
            .field("title", &self.title)
            .field("terminal", &self.terminal)
            .field("series", &self.series.len())
            .field("active_data_id", &self.active_data_id)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl PlotState {
    pub(crate) fn new(title: String, sink: Box<dyn CommandSink>, config: &PlotConfig) -> Self {
        Self {
            sink,
            terminal: config.terminal.clone(),
            title,
            font: config.font.clone(),
            font_size: config.font_size,
            position: config.position,
            size: config.size,
            ranges: [Range::AUTO; AXIS_COUNT],
            series: Vec::new(),
            next_data_id: DataId::new(0),
            active_data_id: None,
            batch_size: config.batch_size.max(1),
            buf: String::new(),
            dirty: true,
            ranges_dirty: false,
            axes_used: [false; AXIS_COUNT],
        }
    }

    pub(crate) fn new_buffer(&mut self) -> Rc<DataBuffer> {
        let id = self.next_data_id;
        self.next_data_id = id.next();
        Rc::new(DataBuffer::new(id))
    }

    /// Send `print` lines to a dataset, redirecting `set print` first when
    /// another dataset was the last target. The dataset becomes non-empty
    /// only if the write succeeded.
    pub(crate) fn send_points(&mut self, data: &DataBuffer, lines: &str) -> PlotResult<()> {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.write_retarget(&mut buf, data.id());
        buf.push_str(lines);
        let result = self
            .sink
            .send(buf.as_bytes())
            .map_err(|source| PlotError::Write {
                during: "append",
                source,
            });
        self.buf = buf;
        result?;

        self.active_data_id = Some(data.id());
        data.mark_appended();
        Ok(())
    }

    /// Empty the dataset in the gnuplot session.
    pub(crate) fn clear(&mut self, data: &DataBuffer) -> PlotResult<()> {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        buf.push_str("undefine ");
        buf.push_str(&data.id().to_string());
        buf.push('\n');
        let result = self
            .sink
            .send(buf.as_bytes())
            .map_err(|source| PlotError::Write {
                during: "clear",
                source,
            });
        self.buf = buf;
        result?;

        data.mark_cleared();
        // `undefine` does not reset `set print`, but the next append must
        // redirect again so the dataset is recreated from scratch.
        if self.active_data_id == Some(data.id()) {
            self.active_data_id = None;
        }
        Ok(())
    }

    fn write_retarget(&self, buf: &mut String, id: DataId) {
        if self.active_data_id != Some(id) {
            trace!(%id, "redirecting print output");
            buf.push_str("set print ");
            buf.push_str(&id.to_string());
            buf.push_str(" append\n");
        }
    }
}

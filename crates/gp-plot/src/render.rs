//! Turning accumulated changes into one gnuplot script.
//!
//! Mutations only flip dirty flags. `update` looks at the flags, emits the
//! minimal script (terminal line, then axis setup if it changed, then the
//! plot line) and sends it in a single write. Flags are cleared only after
//! the write succeeded, so a failed update is retried in full next time.

use std::fmt::{self, Write};

use gp_core::{AXIS_COUNT, Axis};
use tracing::{debug, trace};

use crate::error::{PlotError, PlotResult};
use crate::state::{PlotState, SeriesState};

/// A string inside double quotes that stays on one command line.
///
/// `\` and `"` are backslash-escaped; line breaks become the `\n` and `\r`
/// escapes, which gnuplot expands inside double quotes.
pub(crate) struct Quoted<'a>(pub(crate) &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for ch in self.0.chars() {
            match ch {
                '"' | '\\' => {
                    f.write_char('\\')?;
                    f.write_char(ch)?;
                }
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => f.write_char(ch)?,
            }
        }
        f.write_char('"')
    }
}

/// What the series list looks like right now.
struct Scan {
    dirty: bool,
    axes_dirty: bool,
    axes_used: [bool; AXIS_COUNT],
    visible: usize,
}

impl PlotState {
    pub(crate) fn update(&mut self) -> PlotResult<()> {
        if self.series.is_empty() {
            trace!("update skipped: no series");
            return Ok(());
        }

        let before = self.series.len();
        self.series.retain(|series| !series.borrow().removed);
        if self.series.len() != before {
            self.dirty = true;
        }

        let scan = self.scan();
        let axes_changed = scan.axes_dirty || scan.axes_used != self.axes_used;
        if !(self.dirty || self.ranges_dirty || scan.dirty || axes_changed) {
            trace!("update skipped: nothing changed");
            return Ok(());
        }

        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.render(&mut buf, self.ranges_dirty || axes_changed, &scan.axes_used)?;
        let bytes = buf.len();
        let result = self.sink.send(buf.as_bytes());
        self.buf = buf;
        result.map_err(|source| PlotError::Write {
            during: "update",
            source,
        })?;

        self.dirty = false;
        self.ranges_dirty = false;
        self.axes_used = scan.axes_used;
        for series in &self.series {
            let mut series = series.borrow_mut();
            series.dirty = false;
            series.axes_dirty = false;
            series.data.mark_flushed();
        }
        debug!(bytes, series = scan.visible, "flushed plot update");
        Ok(())
    }

    fn scan(&self) -> Scan {
        let mut scan = Scan {
            dirty: false,
            axes_dirty: false,
            axes_used: [false; AXIS_COUNT],
            visible: 0,
        };
        for series in &self.series {
            let series = series.borrow();
            // A cleared buffer must still trigger a replot without it.
            scan.dirty |= series.data.is_dirty();
            if series.data.is_empty() {
                continue;
            }
            scan.visible += 1;
            scan.dirty |= series.dirty;
            scan.axes_dirty |= series.axes_dirty;
            for slot in series.axes.slots() {
                scan.axes_used[slot] = true;
            }
        }
        scan
    }

    fn render(&self, buf: &mut String, axes: bool, axes_used: &[bool; AXIS_COUNT]) -> fmt::Result {
        write!(
            buf,
            "set terminal {} enhanced title {} font {}",
            self.terminal,
            Quoted(&self.title),
            Quoted(&format!("{},{}", self.font, self.font_size)),
        )?;
        if let Some(position) = self.position {
            write!(buf, " position {},{}", position.x, position.y)?;
        }
        if let Some(size) = self.size {
            write!(buf, " size {},{}", size.width, size.height)?;
        }
        buf.push('\n');

        if axes {
            for axis in Axis::ALL {
                let slot = axis.slot();
                writeln!(buf, "set {}range {}", axis.token(), self.ranges[slot])?;
                if axes_used[slot] {
                    writeln!(buf, "set {}tics scale default", axis.token())?;
                } else {
                    writeln!(buf, "unset {}tics", axis.token())?;
                }
            }
        }

        let mut first = true;
        for series in &self.series {
            let series = series.borrow();
            if series.data.is_empty() {
                continue;
            }
            buf.push_str(if first { "plot " } else { ", " });
            first = false;
            write_clause(buf, &series)?;
        }
        if !first {
            buf.push('\n');
        }
        Ok(())
    }
}

fn write_clause(buf: &mut String, series: &SeriesState) -> fmt::Result {
    write!(
        buf,
        "{} title {} with {}",
        series.data.id(),
        Quoted(&series.title),
        series.style
    )?;
    if let Some(color) = series.color {
        write!(buf, " linecolor rgb {}", color.packed())?;
    }
    write!(buf, " linewidth {}", series.line_width)?;
    if let Some(point_type) = series.point_type {
        write!(
            buf,
            " pointtype {} pointsize {}",
            point_type.number(),
            series.point_size
        )?;
    }
    if let Some(smooth) = series.smooth {
        write!(buf, " smooth {smooth}")?;
    }
    write!(buf, " axes {}", series.axes)
}

//! Colored terminal output.

use super::{caption, ChartSink, TableSink};
use crate::chart::{Chart, ChartKind, Metric};
use crate::error::Result;
use crate::utils::{header, paint_hex, MessageType};
use std::io::Write;

const BAR_GLYPH: char = '█';
const SWATCH: &str = "██";

/// Writes charts as horizontal bars and the table as aligned key/value lines.
pub struct TerminalView<W: Write> {
    out: W,
    bar_width: usize,
    table_started: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, bar_width: usize) -> Self {
        Self {
            out,
            bar_width: bar_width.max(1),
            table_started: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar(&self, fraction: f64) -> String {
        let len = (fraction.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize;
        BAR_GLYPH.to_string().repeat(len.min(self.bar_width))
    }
}

impl<W: Write> ChartSink for TerminalView<W> {
    fn draw(&mut self, chart: &Chart) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", header(&chart.title))?;

        if chart.series.is_empty() {
            writeln!(self.out, "  (no data)")?;
            return Ok(());
        }

        // Pie and doughnut slices are shares of the whole; bars are
        // relative to the tallest bucket.
        let max = chart.series.iter().map(|s| s.value).max().unwrap_or(0);
        let label_width = chart
            .series
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for series in &chart.series {
            let share = chart.share(series.value);
            let bar = match chart.kind {
                ChartKind::Pie | ChartKind::Doughnut => self.bar(share),
                ChartKind::Bar if max > 0 => self.bar(series.value as f64 / max as f64),
                ChartKind::Bar => String::new(),
            };
            let padded_bar = format!("{:<width$}", bar, width = self.bar_width);
            writeln!(
                self.out,
                "  {} {:<label_width$}  {} {:>5.1}%",
                paint_hex(SWATCH, &series.color),
                series.label,
                paint_hex(&padded_bar, &series.color),
                share * 100.0,
                label_width = label_width,
            )?;
        }

        if chart.kind != ChartKind::Bar {
            let by = match chart.metric {
                Metric::Count => "file count",
                Metric::Size => "size",
            };
            writeln!(self.out, "  {}", MessageType::Hint.colorize(&format!("by {}", by)))?;
        }
        Ok(())
    }
}

impl<W: Write> TableSink for TerminalView<W> {
    fn write_field(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.table_started {
            writeln!(self.out)?;
            writeln!(self.out, "{}", header("Report"))?;
            self.table_started = true;
        }
        writeln!(self.out, "  {:<31} {}", format!("{}:", caption(key)), value)?;
        Ok(())
    }

    fn unavailable(&mut self, reason: &str) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            MessageType::Error.format(&format!("Report unavailable: {}", reason))
        )?;
        Ok(())
    }
}

//! Aligned console table and terminal control sequences.

use crate::domain::TradeHalt;
use chrono::{DateTime, Local, Utc};
use std::io::{self, Write};

/// ANSI clear-screen plus cursor-home, written before each watch re-render.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Terminal bell, emitted once per alerting cycle.
pub const BELL: &str = "\x07";

const COLUMNS: usize = 6;

const HEADERS: [&str; COLUMNS] = [
    "SYMBOL",
    "NAME",
    "EXCHANGE",
    "REASON",
    "HALT TIME (LOCAL)",
    "RESUME TIME (LOCAL)",
];

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Absent timestamps render as empty cells, not placeholders.
fn local_cell(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Write the halt table: header row, dash separator, one row per halt.
///
/// Column widths are computed from the widest cell so the table stays
/// aligned regardless of content.
pub fn render_table(halts: &[TradeHalt], out: &mut impl Write) -> io::Result<()> {
    let rows: Vec<[String; COLUMNS]> = halts
        .iter()
        .map(|halt| {
            [
                halt.symbol.clone(),
                halt.name.clone(),
                halt.exchange.clone(),
                halt.reason.clone(),
                local_cell(halt.halt_time),
                local_cell(halt.resume_time),
            ]
        })
        .collect();

    let mut widths = [0usize; COLUMNS];
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = header.len();
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    write_row(out, &widths.map(|w| "-".repeat(w)), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    cells: &[String; COLUMNS],
    widths: &[usize; COLUMNS],
) -> io::Result<()> {
    // Last column unpadded so lines carry no trailing spaces.
    for (cell, width) in cells.iter().zip(widths.iter().copied()).take(COLUMNS - 1) {
        write!(out, "{cell:<width$}  ")?;
    }
    writeln!(out, "{}", cells[COLUMNS - 1])
}

/// Watch-mode footer: poll wall-clock time and the feed's own modification
/// time. A missing or unparsable `Last-Modified` degrades the display,
/// nothing more.
pub fn render_status(
    last_fetch: DateTime<Local>,
    last_modified: Option<DateTime<Utc>>,
    out: &mut impl Write,
) -> io::Result<()> {
    let updated = match last_modified {
        Some(ts) => ts.with_timezone(&Local).to_rfc2822(),
        None => "(unknown)".to_string(),
    };
    writeln!(out)?;
    writeln!(out, "Last fetch    @ {}", last_fetch.to_rfc2822())?;
    writeln!(out, "Last updated  @ {updated}")
}

//! Grouped property table widget.
//!
//! Renders flattened property entries as a fixed-height scrollable table.
//! Rows are ordered by the key column's sort rendering, and a styled
//! divider row is injected whenever the grouping key changes, so each
//! namespace clusters under its own header.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEventKind},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use log::debug;
use slidemeta_lib::model::PropertyEntry;
use slidemeta_lib::table::{RenderKind, TableConfig};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::term::Term;

/// One visual row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    /// Group divider row.
    Group(String),
    /// Data row, one display-rendered cell per column.
    Entry(Vec<String>),
}

/// A grouped, sorted, scrollable property table.
///
/// Pagination and selection are not implemented here; the corresponding
/// [`TableOptions`](slidemeta_lib::table::TableOptions) flags are off in
/// the standard binding and this widget scrolls instead.
pub struct GroupedTable {
    headers: Vec<String>,
    rows: Vec<Row>,
    key_width: usize,
    viewport: usize,
    status: Option<String>,
}

impl GroupedTable {
    /// Builds the widget from flattened entries and a table binding.
    ///
    /// All callbacks are invoked here, once; the event loop only moves a
    /// scroll offset over prebuilt rows.
    pub fn new(entries: Vec<PropertyEntry>, config: &TableConfig) -> Self {
        let rows = build_rows(entries, config);
        let headers: Vec<String> = config.columns.iter().map(|c| c.header.clone()).collect();
        let key_width = key_column_width(&headers, &rows);

        Self {
            headers,
            rows,
            key_width,
            viewport: config.options.scroll_rows as usize,
            status: None,
        }
    }

    /// Adds a status line shown under the table.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Takes over the terminal until the user quits.
    pub fn run(self) -> io::Result<()> {
        let mut term = Term::new()?;
        let content = self.rows.len();
        let viewport = self.viewport;
        let mut offset = 0usize;

        debug!("Showing {} rows in a {}-row viewport", content, viewport);

        loop {
            self.draw(&mut term, offset)?;

            let Some(event) = term.poll(Duration::from_millis(250))? else {
                continue;
            };
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => offset = scroll_by(offset, -1, content, viewport),
                    KeyCode::Down => offset = scroll_by(offset, 1, content, viewport),
                    KeyCode::PageUp => {
                        offset = scroll_by(offset, -(viewport as isize), content, viewport);
                    }
                    KeyCode::PageDown => {
                        offset = scroll_by(offset, viewport as isize, content, viewport);
                    }
                    KeyCode::Home => offset = 0,
                    KeyCode::End => offset = clamp_offset(usize::MAX, content, viewport),
                    _ => {}
                },
                // Redrawn on the next loop pass with the new size
                Event::Resize(..) => {}
                _ => {}
            }
        }

        Ok(())
    }

    fn draw(&self, term: &mut Term, offset: usize) -> io::Result<()> {
        let (cols, _) = term.size()?;
        let max_width = cols as usize;
        let viewport = self.viewport;

        let header_line = self.entry_line(&self.headers);
        let footer_line = self.footer_line();

        let out = term.stdout();
        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print(truncate_to_width(&header_line, max_width)),
            SetAttribute(Attribute::Reset)
        )?;

        for (i, row) in self.rows.iter().skip(offset).take(viewport).enumerate() {
            queue!(out, cursor::MoveTo(0, (i + 1) as u16))?;
            match row {
                Row::Group(group) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Bold),
                        Print(truncate_to_width(group, max_width)),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
                Row::Entry(cells) => {
                    queue!(out, Print(truncate_to_width(&self.entry_line(cells), max_width)))?;
                }
            }
        }

        queue!(
            out,
            cursor::MoveTo(0, (viewport + 2) as u16),
            SetAttribute(Attribute::Dim),
            Print(truncate_to_width(&footer_line, max_width)),
            SetAttribute(Attribute::Reset)
        )?;
        out.flush()
    }

    /// Formats one data row: the key cell padded to the key column width,
    /// entries indented under their group headers.
    fn entry_line(&self, cells: &[String]) -> String {
        match cells {
            [] => String::new(),
            [key] => format!("  {}", key),
            [key, rest @ ..] => format!(
                "  {}  {}",
                pad_to_width(key, self.key_width),
                rest.join("  ")
            ),
        }
    }

    fn footer_line(&self) -> String {
        let keys = "up/down pgup/pgdn home/end scroll, q quit";
        match &self.status {
            Some(status) => format!("{}  |  {}", status, keys),
            None => keys.to_string(),
        }
    }
}

/// Sorts the entries by the key column's sort rendering and interleaves
/// group divider rows wherever the grouping key changes.
fn build_rows(mut entries: Vec<PropertyEntry>, config: &TableConfig) -> Vec<Row> {
    let Some(key_column) = config.columns.first() else {
        return Vec::new();
    };

    entries.sort_by_cached_key(|e| (key_column.render)(e, RenderKind::Sort));

    let mut rows = Vec::new();
    let mut current_group: Option<String> = None;

    for entry in &entries {
        if config.options.row_group {
            if let Some(group_by) = &config.group_by {
                let group = group_by(entry);
                if current_group.as_deref() != Some(group.as_str()) {
                    rows.push(Row::Group(group.clone()));
                    current_group = Some(group);
                }
            }
        }
        rows.push(Row::Entry(
            config
                .columns
                .iter()
                .map(|c| (c.render)(entry, RenderKind::Display))
                .collect(),
        ));
    }

    rows
}

/// Widest display width over the key column, header included.
fn key_column_width(headers: &[String], rows: &[Row]) -> usize {
    let mut width = headers.first().map(|h| h.width()).unwrap_or(0);
    for row in rows {
        if let Row::Entry(cells) = row {
            if let Some(key) = cells.first() {
                width = width.max(key.width());
            }
        }
    }
    width
}

/// Clamps a scroll offset so the viewport never runs past the content.
fn clamp_offset(offset: usize, content: usize, viewport: usize) -> usize {
    offset.min(content.saturating_sub(viewport))
}

/// Moves a scroll offset by `delta` rows, clamped to the content.
fn scroll_by(offset: usize, delta: isize, content: usize, viewport: usize) -> usize {
    clamp_offset(offset.saturating_add_signed(delta), content, viewport)
}

/// Pads with spaces up to `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    let mut current = s.width();
    while current < width {
        out.push(' ');
        current += 1;
    }
    out
}

/// Truncates to `max_width` display columns, ending in an ellipsis when
/// anything was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

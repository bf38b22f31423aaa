//! # Terminal User Interface (TUI)
//!
//! Interactive tree browser using `ratatui`.
//!
//! ## View Modes
//!
//! - **Browse** - navigate the color-coded profile tree (default)
//! - **Search** - text input for the name filter
//! - **Help** - overlay explaining the color system and keys
//!
//! ## Keys
//!
//! - `Up`/`Down` select, `Enter`/`Space` fold/unfold the selected branch
//! - `1`-`6` sort by column (same column toggles direction)
//! - `/` search, `c` clear filter, `e` expand all, `w` collapse all
//! - `?` help, `q` quit
//!
//! The tree itself is owned by the core ([`ProfileTree`]); this layer only
//! recomputes the projection and draws it. Collapse state is keyed by node
//! path, so it survives re-sorts, and every filter change starts from a
//! fully expanded projection.

// TUI rendering intentionally uses precision-losing casts and long functions
#![allow(
    clippy::cast_possible_truncation,
    clippy::too_many_lines,
    clippy::items_after_statements
)]

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame, Terminal,
};

pub mod theme;

use theme::{tag_color, ACCENT, BORDER, TEXT, TEXT_DIM};

use crate::analysis::{next_sort_state, project, sort_tree};
use crate::domain::{ColorTag, Column, SortState};
use crate::format::{format_count, format_ms};
use crate::record::Metrics;
use crate::tree::ProfileTree;

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(BORDER).add_modifier(Modifier::BOLD);
const STYLE_LABEL: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(TEXT_DIM);
const STYLE_KEY: Style = Style::new().fg(ACCENT);
const STYLE_TEXT: Style = Style::new().fg(TEXT);

/// Width reserved for the five metric columns plus separators.
const METRICS_WIDTH: usize = 10 + 4 * 21 + 5;

// =============================================================================
// VIEW MODES
// =============================================================================

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    /// Main view: the profile tree
    Browse,
    /// Text input for the name filter
    Search,
    /// Help overlay with the color-system explanation
    Help,
}

// =============================================================================
// DISPLAY ROWS
// =============================================================================

/// Owned per-frame snapshot of one visible row.
struct DisplayRow {
    path: Vec<String>,
    depth: usize,
    name: String,
    metrics: Option<Metrics>,
    tag: ColorTag,
    has_children: bool,
    collapsed: bool,
}

// =============================================================================
// APPLICATION
// =============================================================================

/// TUI application state for browsing one loaded profile.
pub struct App {
    tree: ProfileTree,
    sort_state: SortState,
    /// Applied name filter; the projection is recomputed from it each frame.
    filter: String,

    // UI state
    view_mode: ViewMode,
    search_query: String,
    selected: usize,
    scroll_offset: usize,
    /// Paths of branches the user folded. Keyed by path so identity is
    /// stable across re-sorts.
    collapsed: HashSet<Vec<String>>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(tree: ProfileTree, sort_state: SortState, filter: String) -> Self {
        App {
            tree,
            sort_state,
            filter,
            view_mode: ViewMode::Browse,
            search_query: String::new(),
            selected: 0,
            scroll_offset: 0,
            collapsed: HashSet::new(),
            should_quit: false,
        }
    }

    /// Compute the rows currently on screen: project through the filter,
    /// then drop descendants of folded branches.
    fn display_rows(&self) -> Vec<DisplayRow> {
        let rows = project(&self.tree, &self.filter);

        // A row only shows a fold marker when some projected child survived
        // the filter, which is not the same as having children in the tree.
        let mut has_projected_children = vec![false; rows.len()];
        for row in &rows {
            if let Some(parent) = row.parent {
                has_projected_children[parent] = true;
            }
        }

        let mut paths: Vec<Vec<String>> = Vec::with_capacity(rows.len());
        let mut shown: Vec<bool> = Vec::with_capacity(rows.len());
        let mut out = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            let mut path = row.parent.map_or_else(Vec::new, |p| paths[p].clone());
            path.push(row.node.name.clone());

            let visible = match row.parent {
                None => true,
                Some(p) => shown[p] && !self.collapsed.contains(&paths[p]),
            };
            shown.push(visible);
            if visible {
                out.push(DisplayRow {
                    path: path.clone(),
                    depth: row.depth,
                    name: row.node.name.clone(),
                    metrics: row.node.metrics,
                    tag: row.node.color_tag,
                    has_children: has_projected_children[idx],
                    collapsed: self.collapsed.contains(&path),
                });
            }
            paths.push(path);
        }
        out
    }

    /// Fold every projected branch that has projected children.
    fn collapse_all(&mut self) {
        let rows = project(&self.tree, &self.filter);
        let mut paths: Vec<Vec<String>> = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut path = row.parent.map_or_else(Vec::new, |p| paths[p].clone());
            path.push(row.node.name.clone());
            paths.push(path);
        }
        for row in &rows {
            if let Some(parent) = row.parent {
                self.collapsed.insert(paths[parent].clone());
            }
        }
        self.selected = 0;
        self.scroll_offset = 0;
    }

    fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Apply a header-click-equivalent sort on the column at `index` in
    /// display order.
    fn sort_by_index(&mut self, index: usize) {
        if let Some(&column) = Column::ALL.get(index) {
            self.sort_state = next_sort_state(self.sort_state, column);
            sort_tree(&mut self.tree, self.sort_state);
        }
    }

    fn apply_filter(&mut self) {
        self.filter = self.search_query.clone();
        // A fresh projection always starts fully expanded.
        self.collapsed.clear();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    fn clear_filter(&mut self) {
        self.filter.clear();
        self.search_query.clear();
        self.collapsed.clear();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Handle keyboard input based on current view mode
    fn handle_key(&mut self, key: KeyCode, row_count: usize, selected_row: Option<&DisplayRow>) {
        match self.view_mode {
            ViewMode::Browse => match key {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Up => {
                    self.selected = self.selected.saturating_sub(1);
                    self.scroll_offset = self.scroll_offset.min(self.selected);
                }
                KeyCode::Down => {
                    self.selected = (self.selected + 1).min(row_count.saturating_sub(1));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(row) = selected_row {
                        if row.has_children {
                            if !self.collapsed.remove(&row.path) {
                                self.collapsed.insert(row.path.clone());
                            }
                        }
                    }
                }
                KeyCode::Char('/') => {
                    self.search_query.clear();
                    self.view_mode = ViewMode::Search;
                }
                KeyCode::Char('c' | 'C') => self.clear_filter(),
                KeyCode::Char('e' | 'E') => self.expand_all(),
                KeyCode::Char('w' | 'W') => self.collapse_all(),
                KeyCode::Char('?') => self.view_mode = ViewMode::Help,
                KeyCode::Char(c @ '1'..='6') => {
                    let index = c as usize - '1' as usize;
                    self.sort_by_index(index);
                }
                _ => {}
            },
            ViewMode::Search => match key {
                KeyCode::Esc => {
                    self.search_query.clear();
                    self.view_mode = ViewMode::Browse;
                }
                KeyCode::Enter => {
                    self.apply_filter();
                    self.view_mode = ViewMode::Browse;
                }
                KeyCode::Backspace => {
                    self.search_query.pop();
                }
                KeyCode::Char(c) => self.search_query.push(c),
                _ => {}
            },
            // Any key closes help
            ViewMode::Help => self.view_mode = ViewMode::Browse,
        }
    }

    /// Run the TUI event loop
    ///
    /// # Errors
    /// Returns an error if terminal setup or rendering fails
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        loop {
            let rows = self.display_rows();
            self.selected = self.selected.min(rows.len().saturating_sub(1));

            terminal.draw(|f| self.draw(f, &rows))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let selected_row = rows.get(self.selected);
                        self.handle_key(key.code, rows.len(), selected_row);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn draw(&mut self, f: &mut Frame, rows: &[DisplayRow]) {
        let outer_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Tree
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

        self.render_header(f, outer_layout[0], rows.len());
        self.render_tree(f, outer_layout[1], rows);
        self.render_status_bar(f, outer_layout[2]);

        match self.view_mode {
            ViewMode::Search => render_search_overlay(f, f.area(), &self.search_query),
            ViewMode::Help => render_help_overlay(f, f.area()),
            ViewMode::Browse => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, shown: usize) {
        let direction = if self.sort_state.reverse { "↓" } else { "↑" };
        let mut spans = vec![
            Span::styled("PROFTREE", STYLE_HEADING),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("{} nodes", self.tree.len()), Style::new().fg(BORDER)),
            Span::styled(" | ", STYLE_DIM),
            Span::styled(format!("sort: {} {direction}", self.sort_state.column), STYLE_KEY),
        ];
        if !self.filter.is_empty() {
            spans.push(Span::styled(" | ", STYLE_DIM));
            spans.push(Span::styled(
                format!("filter: \"{}\" ({shown} shown)", self.filter),
                STYLE_KEY,
            ));
        }
        let header = Paragraph::new(vec![Line::from(spans)]).block(
            Block::default().borders(Borders::ALL).border_style(Style::new().fg(BORDER)),
        );
        f.render_widget(header, area);
    }

    fn render_tree(&mut self, f: &mut Frame, area: Rect, rows: &[DisplayRow]) {
        let name_width = (area.width as usize).saturating_sub(METRICS_WIDTH + 2).max(12);

        // Column header line with the sort keys.
        let mut lines = vec![column_header_line(self.sort_state, name_width)];

        // Borders plus the column header eat three lines.
        let visible_count = (area.height as usize).saturating_sub(3).max(1);
        self.scroll_offset = visible_scroll_offset(self.selected, self.scroll_offset, visible_count);

        for (idx, row) in rows.iter().enumerate().skip(self.scroll_offset).take(visible_count) {
            lines.push(render_row(row, idx == self.selected, name_width));
        }

        let title = if self.filter.is_empty() {
            format!("[ PROFILE {} rows ]", rows.len())
        } else {
            format!("[ PROFILE {} rows (filtered) ]", rows.len())
        };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .title(title)
                .border_style(Style::new().fg(BORDER)),
        );
        f.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let mode = match self.view_mode {
            ViewMode::Search => Span::styled("[Search]", STYLE_KEY),
            ViewMode::Help => Span::styled("[Help]", STYLE_KEY),
            ViewMode::Browse if !self.filter.is_empty() => {
                Span::styled("[Filtered]", STYLE_KEY)
            }
            ViewMode::Browse => Span::styled("[Ready]", Style::new().fg(BORDER)),
        };
        let status_line = Line::from(vec![
            Span::styled("Q", STYLE_KEY),
            Span::styled(":Quit ", STYLE_DIM),
            Span::styled("/", STYLE_KEY),
            Span::styled(":Search ", STYLE_DIM),
            Span::styled("1-6", STYLE_KEY),
            Span::styled(":Sort ", STYLE_DIM),
            Span::styled("E/W", STYLE_KEY),
            Span::styled(":Expand/Collapse ", STYLE_DIM),
            Span::styled("?", STYLE_KEY),
            Span::styled(":Help ", STYLE_DIM),
            mode,
        ]);
        let status = Paragraph::new(vec![status_line]).block(
            Block::default().borders(Borders::ALL).border_style(Style::new().fg(BORDER)),
        );
        f.render_widget(status, area);
    }
}

// =============================================================================
// ROW RENDERING
// =============================================================================

/// Column titles with their sort keys, active column marked with an arrow.
fn column_header_line(state: SortState, name_width: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, column) in Column::ALL.into_iter().enumerate() {
        let marker = if column == state.column {
            if state.reverse {
                "↓"
            } else {
                "↑"
            }
        } else {
            " "
        };
        let text = format!("[{}]{}{marker}", i + 1, column.title());
        let style = if column == state.column { STYLE_LABEL } else { STYLE_DIM };
        if i == 0 {
            spans.push(Span::styled(format!("{text:<width$}", width = name_width), style));
        } else if i == 1 {
            spans.push(Span::styled(format!(" {text:>10}"), style));
        } else {
            spans.push(Span::styled(format!(" {text:>21}"), style));
        }
    }
    Line::from(spans)
}

fn render_row(row: &DisplayRow, is_selected: bool, name_width: usize) -> Line<'static> {
    let marker = if row.has_children {
        if row.collapsed {
            "▸ "
        } else {
            "▾ "
        }
    } else {
        "  "
    };
    let label = format!("{}{marker}{}", "  ".repeat(row.depth), row.name);
    let label = truncate_for_display(&label, name_width);

    let base_style = tag_color(row.tag).map_or(STYLE_TEXT, |color| Style::new().fg(color));
    let name_style = if is_selected {
        base_style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        base_style
    };

    let mut spans =
        vec![Span::styled(format!("{label:<width$}", width = name_width), name_style)];
    match row.metrics {
        Some(m) => {
            spans.push(Span::styled(format!(" {:>10}", format_count(m.count)), base_style));
            for value in [m.total_time, m.min, m.max, m.avg] {
                spans.push(Span::styled(format!(" {:>21}", format_ms(value)), base_style));
            }
        }
        None => {
            // Connective ancestors without their own row data render blank
            // metric cells.
            spans.push(Span::styled(format!(" {:>10}", ""), STYLE_DIM));
            for _ in 0..4 {
                spans.push(Span::styled(format!(" {:>21}", ""), STYLE_DIM));
            }
        }
    }
    Line::from(spans)
}

/// Truncate a string for display, adding "..." if too long
fn truncate_for_display(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

/// Calculate scroll offset to keep the selected item visible
fn visible_scroll_offset(selected: usize, current_offset: usize, visible_count: usize) -> usize {
    if selected < current_offset {
        selected
    } else if selected >= current_offset + visible_count {
        selected + 1 - visible_count
    } else {
        current_offset
    }
}

// =============================================================================
// OVERLAY RENDERERS
// =============================================================================

/// Render the help overlay explaining the color system and keys
fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 20);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Color System", STYLE_HEADING)),
        Line::from(Span::styled(
            "  For each parent node, direct children are ranked by their Avg",
            STYLE_DIM,
        )),
        Line::from(Span::styled("  values, worst first.", STYLE_DIM)),
        Line::from(vec![
            Span::styled("  light coral   ", Style::new().fg(theme::TOP_TIER)),
            Span::styled("top 3 highest Avg among the siblings", STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("  light salmon  ", Style::new().fg(theme::SECOND_TIER)),
            Span::styled("next 3 highest Avg", STYLE_DIM),
        ]),
        Line::from(Span::styled(
            "  The ranking is per hierarchy level, so bottlenecks stand out",
            STYLE_DIM,
        )),
        Line::from(Span::styled("  at every depth.", STYLE_DIM)),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        Line::from(vec![
            Span::styled("  ↑↓", STYLE_KEY),
            Span::styled(" Select   ", STYLE_TEXT),
            Span::styled("Enter", STYLE_KEY),
            Span::styled(" Fold/unfold   ", STYLE_TEXT),
            Span::styled("1-6", STYLE_KEY),
            Span::styled(" Sort   ", STYLE_TEXT),
            Span::styled("/", STYLE_KEY),
            Span::styled(" Search", STYLE_TEXT),
        ]),
        Line::from(vec![
            Span::styled("  E", STYLE_KEY),
            Span::styled(" Expand all   ", STYLE_TEXT),
            Span::styled("W", STYLE_KEY),
            Span::styled(" Collapse all   ", STYLE_TEXT),
            Span::styled("C", STYLE_KEY),
            Span::styled(" Clear filter   ", STYLE_TEXT),
            Span::styled("Q", STYLE_KEY),
            Span::styled(" Quit", STYLE_TEXT),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(ratatui::style::Color::Black).fg(BORDER)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Render the search input overlay
fn render_search_overlay(f: &mut Frame, area: Rect, query: &str) {
    let popup_area = {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(3),
                Constraint::Percentage(60),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(vertical[1])[1]
    };

    let search_text = format!("Search: {query}_");
    let search_widget = Paragraph::new(search_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter Nodes (Enter to apply, Esc to cancel)")
                .style(Style::default().bg(ratatui::style::Color::Black).fg(BORDER)),
        )
        .style(Style::default().fg(ACCENT));

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(search_widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the interactive tree browser for an already-built tree.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails
pub fn run(tree: ProfileTree, sort_state: SortState, filter: String) -> Result<()> {
    App::new(tree, sort_state, filter).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Metrics, Record};

    fn record(path: &[&str], avg: f64) -> Record {
        Record {
            hierarchy: path.iter().map(|s| (*s).to_string()).collect(),
            metrics: Metrics { count: 1.0, total_time: avg, min: avg, max: avg, avg },
        }
    }

    fn sample_app(filter: &str) -> App {
        let tree = ProfileTree::build(&[
            record(&["Frame"], 16.0),
            record(&["Frame", "Render"], 10.0),
            record(&["Frame", "Render", "Shadows"], 3.0),
            record(&["Frame", "Physics"], 5.0),
            record(&["Audio", "Mix"], 1.0),
        ]);
        App::new(tree, SortState::default(), filter.to_string())
    }

    #[test]
    fn test_display_rows_start_fully_expanded() {
        let app = sample_app("");
        let rows = app.display_rows();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Frame", "Render", "Shadows", "Physics", "Audio", "Mix"]);
    }

    #[test]
    fn test_collapsing_a_branch_hides_descendants() {
        let mut app = sample_app("");
        app.collapsed.insert(vec!["Frame".to_string()]);
        let rows = app.display_rows();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Frame", "Audio", "Mix"]);
        assert!(rows[0].collapsed);
    }

    #[test]
    fn test_collapse_all_then_expand_all() {
        let mut app = sample_app("");
        app.collapse_all();
        let names: Vec<_> = app.display_rows().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Frame", "Audio"]);

        app.expand_all();
        assert_eq!(app.display_rows().len(), 6);
    }

    #[test]
    fn test_applying_filter_clears_collapse_state() {
        let mut app = sample_app("");
        app.collapse_all();
        app.search_query = "shadow".to_string();
        app.apply_filter();

        let names: Vec<_> = app.display_rows().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Frame", "Render", "Shadows"]);
        assert!(app.collapsed.is_empty());
    }

    #[test]
    fn test_fold_marker_reflects_projection_not_tree() {
        // Under the "render" filter, "Render" keeps no projected children,
        // so it must not present a fold marker even though the tree has one.
        let app = sample_app("render");
        let rows = app.display_rows();

        let render = rows.iter().find(|r| r.name == "Render").unwrap();
        assert!(!render.has_children);
        let frame = rows.iter().find(|r| r.name == "Frame").unwrap();
        assert!(frame.has_children);
    }

    #[test]
    fn test_sort_key_toggles_direction_on_same_column() {
        let mut app = sample_app("");
        // Column 6 is Avg; the default state is already Avg ascending, so a
        // click toggles to descending.
        app.sort_by_index(5);
        assert!(app.sort_state.reverse);
        app.sort_by_index(5);
        assert!(!app.sort_state.reverse);
        // A different column resets to ascending.
        app.sort_by_index(1);
        assert_eq!(app.sort_state.column, Column::Count);
        assert!(!app.sort_state.reverse);
    }

    #[test]
    fn test_collapse_state_survives_resort() {
        let mut app = sample_app("");
        app.collapsed.insert(vec!["Frame".to_string()]);
        app.sort_by_index(0); // sort by Profile name

        let names: Vec<_> = app.display_rows().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Audio", "Mix", "Frame"]);
    }

    #[test]
    fn test_truncate_for_display() {
        assert_eq!(truncate_for_display("short", 10), "short");
        assert_eq!(truncate_for_display("a-very-long-name", 10), "a-very-...");
    }

    #[test]
    fn test_visible_scroll_offset_follows_selection() {
        // Selection below the window scrolls down.
        assert_eq!(visible_scroll_offset(10, 0, 5), 6);
        // Selection above the window scrolls up.
        assert_eq!(visible_scroll_offset(2, 4, 5), 2);
        // Selection inside the window leaves the offset alone.
        assert_eq!(visible_scroll_offset(3, 2, 5), 2);
    }
}

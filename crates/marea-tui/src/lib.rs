// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use marea_app::{
    Align, AppCommand, AppState, CellValue, Message, Role, SortDirection, SortState, TableSpec,
    Theme, Tone, ViewKind, activate, classify_status, derive_message_key, format_cell, format_time,
    is_status_column, sort_rows,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const SORT_MARK_ASC: &str = " ↑";
const SORT_MARK_DESC: &str = " ↓";
const LOADING_PLACEHOLDER: &str = "Running query…";
const EMPTY_ROWS_PLACEHOLDER: &str = "No rows.";
const EMPTY_TABLE_PLACEHOLDER: &str = "No data available.";
// Pagination is a fixed affordance; there is no paging state behind it.
const PAGINATION_FOOTER: &str = "‹ 1 / 5 ›";

/// Data provider seam for the shell. `sort_changed` is the optional external
/// sort-notification hook, invoked synchronously at the point of the toggle.
pub trait AppRuntime {
    fn load_table(&mut self) -> Result<TableSpec>;
    fn load_conversation(&mut self) -> Result<Vec<Message>>;
    fn sort_changed(&mut self, _key: &str, _direction: SortDirection) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct TableUiState {
    selected_row: usize,
    selected_col: usize,
    sort: SortState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableCommand {
    MoveRow(isize),
    MoveColumn(isize),
    JumpFirstRow,
    JumpLastRow,
    JumpFirstColumn,
    JumpLastColumn,
    CycleSort,
    ClearSort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TableStatus {
    SortUnavailable,
    Sorted(String),
    SortCleared,
}

impl TableStatus {
    fn message(self) -> String {
        match self {
            Self::SortUnavailable => "sort unavailable".to_owned(),
            Self::Sorted(announcement) => announcement,
            Self::SortCleared => "sort cleared".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TableEvent {
    CursorUpdated,
    SortChanged {
        key: String,
        direction: SortDirection,
    },
    Status(TableStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    table: Option<TableSpec>,
    conversation: Vec<Message>,
    table_state: TableUiState,
    conversation_scroll: usize,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    view_data.table = Some(runtime.load_table()?);

    let anchor = conversation_anchor(view_data);
    view_data.conversation = runtime.load_conversation()?;
    view_data.conversation_scroll = restore_conversation_anchor(view_data, anchor);

    clamp_table_cursor(view_data);
    Ok(())
}

/// Identity key of the message the scroll position currently points at, so a
/// reload can land on the same entry even if earlier messages were inserted.
fn conversation_anchor(view_data: &ViewData) -> Option<String> {
    view_data
        .conversation
        .get(view_data.conversation_scroll)
        .map(derive_message_key)
}

fn restore_conversation_anchor(view_data: &ViewData, anchor: Option<String>) -> usize {
    let Some(anchor) = anchor else {
        return 0;
    };
    view_data
        .conversation
        .iter()
        .position(|message| derive_message_key(message) == anchor)
        .unwrap_or(0)
}

fn clamp_table_cursor(view_data: &mut ViewData) {
    let (row_count, column_count) = match &view_data.table {
        Some(table) => (table.rows.len(), table.columns.len()),
        None => (0, 0),
    };
    let table_state = &mut view_data.table_state;
    table_state.selected_row = table_state.selected_row.min(row_count.saturating_sub(1));
    table_state.selected_col = table_state.selected_col.min(column_count.saturating_sub(1));
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
            return false;
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::ToggleTheme);
            return false;
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::NextView);
            return false;
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::PrevView);
            return false;
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            match refresh_view_data(runtime, view_data) {
                Ok(()) => emit_status(state, view_data, internal_tx, "data reloaded"),
                Err(error) => {
                    emit_status(state, view_data, internal_tx, format!("reload failed: {error}"));
                }
            }
            return false;
        }
        _ => {}
    }

    match state.active_view {
        ViewKind::Orders => {
            if let Some(command) = table_command_for_key(key) {
                let events = apply_table_command(view_data, command);
                for event in events {
                    match event {
                        TableEvent::CursorUpdated => {}
                        TableEvent::SortChanged { key, direction } => {
                            runtime.sort_changed(&key, direction);
                        }
                        TableEvent::Status(status) => {
                            emit_status(state, view_data, internal_tx, status.message());
                        }
                    }
                }
            }
        }
        ViewKind::Conversation => handle_conversation_key(view_data, key),
    }

    false
}

fn table_command_for_key(key: KeyEvent) -> Option<TableCommand> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(TableCommand::MoveRow(1)),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(TableCommand::MoveRow(-1)),
        (KeyCode::Char('h') | KeyCode::Left, KeyModifiers::NONE) => {
            Some(TableCommand::MoveColumn(-1))
        }
        (KeyCode::Char('l') | KeyCode::Right, KeyModifiers::NONE) => {
            Some(TableCommand::MoveColumn(1))
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => Some(TableCommand::JumpFirstRow),
        (KeyCode::Char('G'), _) => Some(TableCommand::JumpLastRow),
        (KeyCode::Char('^'), _) => Some(TableCommand::JumpFirstColumn),
        (KeyCode::Char('$'), _) => Some(TableCommand::JumpLastColumn),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(TableCommand::CycleSort),
        (KeyCode::Char('S'), _) => Some(TableCommand::ClearSort),
        _ => None,
    }
}

fn apply_table_command(view_data: &mut ViewData, command: TableCommand) -> Vec<TableEvent> {
    let Some(table) = &view_data.table else {
        return match command {
            TableCommand::CycleSort | TableCommand::ClearSort => {
                vec![TableEvent::Status(TableStatus::SortUnavailable)]
            }
            _ => Vec::new(),
        };
    };

    let row_count = table.rows.len();
    let column_count = table.columns.len();
    let table_state = &mut view_data.table_state;

    match command {
        TableCommand::MoveRow(delta) => {
            table_state.selected_row = step_index(table_state.selected_row, delta, row_count);
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::MoveColumn(delta) => {
            table_state.selected_col = step_index(table_state.selected_col, delta, column_count);
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::JumpFirstRow => {
            table_state.selected_row = 0;
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::JumpLastRow => {
            table_state.selected_row = row_count.saturating_sub(1);
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::JumpFirstColumn => {
            table_state.selected_col = 0;
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::JumpLastColumn => {
            table_state.selected_col = column_count.saturating_sub(1);
            vec![TableEvent::CursorUpdated]
        }
        TableCommand::CycleSort => {
            let Some(column) = table.columns.get(table_state.selected_col) else {
                return vec![TableEvent::Status(TableStatus::SortUnavailable)];
            };
            let activation = activate(&table_state.sort, &column.key);
            let key = column.key.clone();
            let direction = activation.state.direction;
            table_state.sort = activation.state;
            vec![
                TableEvent::SortChanged { key, direction },
                TableEvent::Status(TableStatus::Sorted(activation.announcement)),
            ]
        }
        TableCommand::ClearSort => {
            table_state.sort = SortState::default();
            vec![TableEvent::Status(TableStatus::SortCleared)]
        }
    }
}

fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

fn handle_conversation_key(view_data: &mut ViewData, key: KeyEvent) {
    let last = view_data.conversation.len().saturating_sub(1);
    match (key.code, key.modifiers) {
        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
            view_data.conversation_scroll = (view_data.conversation_scroll + 1).min(last);
        }
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
            view_data.conversation_scroll = view_data.conversation_scroll.saturating_sub(1);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.conversation_scroll = 0;
        }
        (KeyCode::Char('G'), _) => {
            view_data.conversation_scroll = last;
        }
        _ => {}
    }
}

struct ThemePalette {
    fg: Color,
    bg: Color,
    dim: Color,
    accent: Color,
    band_fg: Color,
    selection_bg: Color,
}

const fn palette(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Light => ThemePalette {
            fg: Color::Black,
            bg: Color::White,
            dim: Color::DarkGray,
            accent: Color::Blue,
            band_fg: Color::White,
            selection_bg: Color::Gray,
        },
        Theme::Dark => ThemePalette {
            fg: Color::Gray,
            bg: Color::Black,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            band_fg: Color::Black,
            selection_bg: Color::DarkGray,
        },
    }
}

const fn tone_color(tone: Tone, theme: Theme) -> Color {
    match (tone, theme) {
        (Tone::Success, _) => Color::Green,
        (Tone::Info, Theme::Light) => Color::Blue,
        (Tone::Info, Theme::Dark) => Color::Cyan,
        (Tone::Danger, _) => Color::Red,
        (Tone::Neutral, _) => Color::DarkGray,
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let colors = palette(state.theme);
    let background = Block::default().style(Style::default().fg(colors.fg).bg(colors.bg));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_view_bar(frame, chunks[0], state, &colors);

    if view_data.help_visible {
        let help = Paragraph::new(help_overlay_text())
            .style(Style::default().fg(colors.fg).bg(colors.bg))
            .block(Block::default().borders(Borders::ALL).title("help"));
        frame.render_widget(help, chunks[1]);
    } else {
        match state.active_view {
            ViewKind::Orders => render_table_view(frame, chunks[1], state, view_data, &colors),
            ViewKind::Conversation => {
                render_conversation_view(frame, chunks[1], view_data, &colors);
            }
        }
    }

    render_status_line(frame, chunks[2], state, &colors);
}

fn render_view_bar(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    colors: &ThemePalette,
) {
    let mut parts = Vec::new();
    for view in ViewKind::ALL {
        if view == state.active_view {
            parts.push(format!("[{}]", view.label()));
        } else {
            parts.push(format!(" {} ", view.label()));
        }
    }
    parts.push(format!("theme: {}", state.theme.as_str()));

    let bar = Paragraph::new(parts.join(" | "))
        .style(Style::default().fg(colors.accent).bg(colors.bg));
    frame.render_widget(bar, area);
}

fn render_status_line(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    colors: &ThemePalette,
) {
    let text = state
        .status_line
        .clone()
        .unwrap_or_else(|| "b/f views | j/k/h/l move | s sort | S clear | t theme | r reload | ? help | ctrl+q quit".to_owned());
    let line = Paragraph::new(text).style(Style::default().fg(colors.dim).bg(colors.bg));
    frame.render_widget(line, area);
}

fn render_table_view(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
    colors: &ThemePalette,
) {
    let Some(table) = &view_data.table else {
        let empty = Paragraph::new(EMPTY_TABLE_PLACEHOLDER)
            .block(Block::default().borders(Borders::ALL).title("orders"));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(table_title(table, &view_data.table_state));

    if table.rows.is_empty() {
        frame.render_widget(Paragraph::new(EMPTY_TABLE_PLACEHOLDER).block(block), chunks[0]);
    } else {
        let widths = table
            .columns
            .iter()
            .map(|column| match column.width {
                Some(width) => Constraint::Length(width),
                None => Constraint::Min(8),
            })
            .collect::<Vec<_>>();

        let mut header_style = Style::default().add_modifier(Modifier::BOLD);
        if table.sticky_header {
            header_style = header_style.fg(colors.band_fg).bg(colors.accent);
        }
        let header_cells = table.columns.iter().enumerate().map(|(index, _)| {
            let label = header_label(table, &view_data.table_state, index);
            Cell::from(label).style(header_style)
        });
        let header = TableRow::new(header_cells);

        let ordered = sort_rows(&table.rows, &view_data.table_state.sort);
        let rows = ordered.iter().enumerate().map(|(row_index, row)| {
            let selected_row = row_index == view_data.table_state.selected_row;
            let cells = table
                .columns
                .iter()
                .enumerate()
                .map(|(column_index, column)| {
                    let value = row.get(&column.key);
                    let (text, tone) = cell_presentation(&column.key, value);

                    let mut style = Style::default();
                    if let Some(tone) = tone {
                        style = style
                            .fg(tone_color(tone, state.theme))
                            .add_modifier(Modifier::BOLD);
                    }
                    if selected_row {
                        style = style.bg(colors.selection_bg);
                    }
                    if selected_row && column_index == view_data.table_state.selected_col {
                        style = Style::default()
                            .fg(colors.bg)
                            .bg(colors.accent)
                            .add_modifier(Modifier::BOLD);
                    }

                    let line = Line::from(text).alignment(cell_alignment(column.align));
                    Cell::from(line).style(style)
                })
                .collect::<Vec<_>>();
            TableRow::new(cells)
        });

        let widget = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(block);
        frame.render_widget(widget, chunks[0]);
    }

    let footer = Paragraph::new(PAGINATION_FOOTER)
        .alignment(Alignment::Right)
        .style(Style::default().fg(colors.dim).bg(colors.bg));
    frame.render_widget(footer, chunks[1]);
}

const fn cell_alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

/// Display text plus optional badge tone. Status-like columns render a tone
/// badge; everything else renders the formatted scalar.
fn cell_presentation(column_key: &str, value: Option<&CellValue>) -> (String, Option<Tone>) {
    let Some(value) = value else {
        return (String::new(), None);
    };

    if is_status_column(column_key) && !value.is_null() {
        let label = value.coerce_string();
        let tone = classify_status(&label);
        return (label, Some(tone));
    }

    (format_cell(value), None)
}

fn header_label(table: &TableSpec, table_state: &TableUiState, column_index: usize) -> String {
    let Some(column) = table.columns.get(column_index) else {
        return String::new();
    };
    let mut label = column.header.to_uppercase();

    if table.show_sort_icons
        && table_state.sort.key.as_deref() == Some(column.key.as_str())
    {
        label.push_str(match table_state.sort.direction {
            SortDirection::Asc => SORT_MARK_ASC,
            SortDirection::Desc => SORT_MARK_DESC,
        });
    }

    label
}

fn table_title(table: &TableSpec, table_state: &TableUiState) -> String {
    let caption = table.caption.as_deref().unwrap_or("data");
    let mut parts = vec![format!(
        "{caption} r:{} c:{}",
        table.rows.len(),
        table.columns.len(),
    )];

    if let Some(key) = &table_state.sort.key {
        parts.push(format!(
            "sort {key}:{}",
            table_state.sort.direction.as_str()
        ));
    }

    parts.join(" | ")
}

fn render_conversation_view(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view_data: &ViewData,
    colors: &ThemePalette,
) {
    let entries = conversation_entries(&view_data.conversation);
    let skip_lines: usize = entries
        .iter()
        .take(view_data.conversation_scroll)
        .map(|entry| entry.lines.len())
        .sum();

    let text = render_conversation_text(&view_data.conversation);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(colors.fg).bg(colors.bg))
        .wrap(Wrap { trim: false })
        .scroll((skip_lines.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(conversation_label(&view_data.conversation)),
        );
    frame.render_widget(widget, area);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ConversationEntry {
    key: String,
    lines: Vec<String>,
}

fn conversation_label(messages: &[Message]) -> String {
    if messages.is_empty() {
        "Conversation (empty)".to_owned()
    } else {
        format!("Conversation ({} messages)", messages.len())
    }
}

/// One entry per message: a stable identity key plus the rendered lines.
/// Every message gets exactly one primary block and at most one trailing
/// timestamp line.
fn conversation_entries(messages: &[Message]) -> Vec<ConversationEntry> {
    messages
        .iter()
        .map(|message| {
            let mut lines = match message.role {
                Role::Result => result_block_lines(message),
                role => vec![format!(
                    "[{}] {}",
                    role.as_str(),
                    message.content
                )],
            };

            if let Some(raw) = &message.timestamp {
                let formatted = format_time(raw);
                if !formatted.is_empty() {
                    lines.push(format!("  {formatted}"));
                }
            }
            lines.push(String::new());

            ConversationEntry {
                key: derive_message_key(message),
                lines,
            }
        })
        .collect()
}

fn result_block_lines(message: &Message) -> Vec<String> {
    if message.is_loading {
        return vec![format!("[result] {LOADING_PLACEHOLDER}")];
    }

    let mut lines = Vec::new();
    match &message.sql {
        Some(sql) => lines.push(format!("[result] SQL: {sql}")),
        None => lines.push("[result]".to_owned()),
    }

    let rows = message.rows.as_deref().unwrap_or_default();
    let Some(first) = rows.first() else {
        lines.push(format!("  {EMPTY_ROWS_PLACEHOLDER}"));
        return lines;
    };

    let keys = first.keys().map(str::to_owned).collect::<Vec<_>>();
    lines.push(format!("  {}", keys.join(" | ")));
    for row in rows {
        let cells = keys
            .iter()
            .map(|key| {
                row.get(key)
                    .map(format_cell)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        lines.push(format!("  {}", cells.join(" | ")));
    }

    lines
}

fn render_conversation_text(messages: &[Message]) -> String {
    let entries = conversation_entries(messages);
    let mut lines = Vec::new();
    for entry in &entries {
        lines.extend(entry.lines.iter().cloned());
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

fn help_overlay_text() -> &'static str {
    "views: b/f cycle | t theme toggle | r reload | ctrl+q quit\n\
orders: j/k rows | h/l columns | g/G first/last row | ^/$ first/last column\n\
orders: s sort selected column (repeat to flip) | S clear sort\n\
conversation: j/k scroll | g/G first/last message\n\
help: esc or ? close"
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::app::{Match, Picker};
use crate::ui::style::{
    COLOR_HINT, COLOR_INFO, COLOR_MARK, COLOR_PROMPT, ICON_CURSOR, ICON_MARKED, PROMPT,
    match_style, selected_style,
};

pub fn draw(frame: &mut Frame, picker: &Picker) {
    let size = frame.area();

    // Prompt, match counter, list, key hints.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let prompt = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(COLOR_PROMPT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(picker.query().to_string()),
    ]);
    frame.render_widget(Paragraph::new(prompt), rows[0]);

    let typed = (PROMPT.chars().count() + picker.query().chars().count()) as u16;
    let cursor_x = (rows[0].x + typed).min(rows[0].right().saturating_sub(1));
    frame.set_cursor_position((cursor_x, rows[0].y));

    frame.render_widget(Paragraph::new(info_line(picker)), rows[1]);

    let items: Vec<ListItem> = picker
        .matches()
        .iter()
        .enumerate()
        .map(|(row, m)| list_item(picker, row, m))
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(picker.cursor()));
    }

    let list = List::new(items).highlight_style(selected_style());
    frame.render_stateful_widget(list, rows[2], &mut state);

    frame.render_widget(Paragraph::new(hint_line()), rows[3]);
}

fn list_item(picker: &Picker, row: usize, m: &Match) -> ListItem<'static> {
    let gutter = if row == picker.cursor() {
        Span::styled(
            format!("{ICON_CURSOR} "),
            Style::default().fg(COLOR_PROMPT),
        )
    } else {
        Span::raw("  ")
    };
    let mark = if picker.is_marked(m.index) {
        Span::styled(format!("{ICON_MARKED} "), Style::default().fg(COLOR_MARK))
    } else {
        Span::raw("  ")
    };

    let mut spans = vec![gutter, mark];
    spans.extend(highlight_spans(&picker.labels()[m.index], &m.positions));
    ListItem::new(Line::from(spans))
}

/// `"  <visible>/<total>"`, plus the mark count once anything is marked.
pub fn info_line(picker: &Picker) -> Line<'static> {
    let mut text = format!("  {}/{}", picker.matches().len(), picker.labels().len());
    if !picker.marked().is_empty() {
        text.push_str(&format!(" ({} marked)", picker.marked().len()));
    }
    Line::from(Span::styled(text, Style::default().fg(COLOR_INFO)))
}

/// Split `label` into runs, styling the chars at `positions` (char indices).
pub fn highlight_spans(label: &str, positions: &[usize]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;

    for (i, c) in label.chars().enumerate() {
        let hit = positions.contains(&i);
        if hit != run_hit && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_hit));
        }
        run_hit = hit;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_hit));
    }
    spans
}

fn styled_run(text: String, hit: bool) -> Span<'static> {
    if hit {
        Span::styled(text, match_style())
    } else {
        Span::raw(text)
    }
}

fn hint_line() -> Line<'static> {
    let keys = [
        ("Tab", "mark"),
        ("Enter", "confirm"),
        ("↑/↓", "move"),
        ("Ctrl+U", "clear"),
        ("Esc", "cancel"),
    ];
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default()
                .fg(COLOR_PROMPT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action} "),
            Style::default().fg(COLOR_HINT),
        ));
    }
    Line::from(spans)
}

use crate::app::{App, summary};
use pagesmith_engine::{Block, BlockContent, ToggleField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .store
        .blocks()
        .iter()
        .map(|block| ListItem::new(Line::from(Span::raw(summary(block)))))
        .collect();

    let title = format!("Blocks ({})", app.store.len());
    let list = List::new(items)
        .block(Panel::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let details = match app.selected_block() {
        Some(block) => block_details(block),
        None if app.store.is_empty() => vec![
            Line::from("No blocks yet."),
            Line::from(""),
            Line::from("a: text | i: image | v: video | l: link"),
        ],
        None => vec![Line::from("Select a block with ↑/↓")],
    };

    let content = Paragraph::new(details)
        .block(Panel::default().borders(Borders::ALL).title("Block"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);
    f.render_widget(bottom_line(app), rows[1]);
}

fn bottom_line(app: &App) -> Paragraph<'static> {
    if let Some(input) = &app.input {
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", input.prompt.title()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(input.buffer.clone()),
            Span::raw("▏"),
        ]);
        return Paragraph::new(vec![line, Line::from("Enter: confirm | Esc: cancel")]);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | a/i/v/l: Add | e: Edit | x: Delete | "),
        Span::raw("B/I/U: Toggle | +/-: Size | ]/[: Height | 1/2/3: Align | c: Color | "),
        Span::raw("s: Export"),
    ]);

    match &app.status {
        Some(status) => Paragraph::new(vec![
            Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green))),
            help,
        ]),
        None => Paragraph::new(vec![
            Line::from(format!("Output: {}", app.output_dir().display())),
            help,
        ]),
    }
}

fn block_details(block: &Block) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            block.kind().label(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];

    match block.body() {
        BlockContent::Text(text) => {
            lines.extend(text.html.lines().map(|line| Line::from(line.to_string())));
            lines.push(Line::from(""));

            let style = &text.style;
            let flags: Vec<&str> = [
                (ToggleField::Bold, "bold"),
                (ToggleField::Italic, "italic"),
                (ToggleField::Underline, "underline"),
            ]
            .into_iter()
            .filter(|(field, _)| style.is_active(*field))
            .map(|(_, name)| name)
            .collect();

            lines.push(Line::from(format!(
                "align {} | {}px | min-height {}px | {}",
                style.align.as_css(),
                style.font_size_px,
                style.min_height_px,
                style.color
            )));
            if !flags.is_empty() {
                lines.push(Line::from(flags.join(" ")));
            }
        }
        BlockContent::Image(_) | BlockContent::Video(_) => {
            lines.push(Line::from(summary(block)));
        }
        BlockContent::Link(link) => {
            lines.push(Line::from(format!("URL:  {}", link.url)));
            lines.push(Line::from(format!("Text: {}", link.label())));
        }
    }

    lines
}

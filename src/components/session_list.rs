// ABOUTME: Session list component rendering the saved order with cursor and retired markers

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{EditorMode, EditorState};
use crate::models::SessionRecord;

#[derive(Default)]
pub struct SessionListComponent {
    list_state: ListState,
}

impl SessionListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &EditorState) {
        let (border_color, highlight_symbol) = match state.mode() {
            EditorMode::Browsing => (Color::Cyan, "› "),
            EditorMode::Repositioning => (Color::LightRed, "▶ "),
        };
        let block = Block::default()
            .title(format!(
                "Sessions ({} active / {})",
                state.sessions().active_count(),
                state.sessions().len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        if state.sessions().is_empty() {
            frame.render_widget(Self::empty_state(block), area);
            return;
        }

        let items: Vec<ListItem> = state.sessions().iter().map(Self::build_item).collect();
        let highlight_style = match state.mode() {
            EditorMode::Browsing => Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            EditorMode::Repositioning => Style::default()
                .fg(Color::LightRed)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        };

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol(highlight_symbol);

        self.list_state.select(state.cursor());
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn build_item(record: &SessionRecord) -> ListItem<'_> {
        let style = if record.retired {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(format!("{} {}", record.indicator(), record.name)).style(style)
    }

    fn empty_state(block: Block<'_>) -> Paragraph<'_> {
        let lines = vec![
            Line::from(Span::styled(
                "No sessions found",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press p to load the live tmux sessions,"),
            Line::from("or run `rolo populate` from inside tmux."),
        ];
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
    }
}

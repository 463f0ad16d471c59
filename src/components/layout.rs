// ABOUTME: Main layout component: title bar, mode line, session list and footer

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Modifier, Style},
};

use crate::app::notification::NotificationKind;
use crate::app::{EditorMode, EditorState, ViewState};
use super::{HelpComponent, SessionListComponent};

const BROWSING_KEYS: &[(&str, &str)] = &[
    ("j/k", "navigate"),
    ("d", "retire"),
    ("u", "update"),
    ("p", "repopulate"),
    ("m", "move"),
    ("enter", "save"),
];

const MOVING_KEYS: &[(&str, &str)] = &[
    ("j/k", "move item"),
    ("m", "exit move mode"),
    ("enter", "save"),
];

pub struct LayoutComponent {
    session_list: SessionListComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            session_list: SessionListComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &EditorState, view: &ViewState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Title
                Constraint::Length(2),  // Mode line
                Constraint::Min(3),     // Session list
                Constraint::Length(3),  // Footer
            ])
            .split(frame.size());

        Self::render_title(frame, chunks[0]);
        Self::render_mode_line(frame, chunks[1], state);
        self.session_list.render(frame, chunks[2], state);
        Self::render_footer(frame, chunks[3], view);

        if view.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_title(frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(" Rolo - Tmux Session Manager ")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_mode_line(frame: &mut Frame, area: Rect, state: &EditorState) {
        let key = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC);

        let (mode_color, bindings) = match state.mode() {
            EditorMode::Browsing => (Color::Green, BROWSING_KEYS),
            EditorMode::Repositioning => (Color::LightRed, MOVING_KEYS),
        };

        let mut spans = vec![
            Span::styled(
                state.mode().label(),
                Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" - ", hint),
        ];
        for (binding, action) in bindings {
            spans.push(Span::styled(*binding, key));
            spans.push(Span::styled(format!(" {action}  "), hint));
        }
        if state.wrap_around() {
            spans.push(Span::styled("[wrap]", Style::default().fg(Color::Cyan)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, view: &ViewState) {
        let (text, color) = match &view.notification {
            Some(n) => (
                n.message.clone(),
                match n.kind {
                    NotificationKind::Success => Color::Green,
                    NotificationKind::Error => Color::Red,
                },
            ),
            None => (
                "[enter] save  [q/ctrl+c] quit without saving  [?] help".to_string(),
                Color::Yellow,
            ),
        };

        let footer = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);

        frame.render_widget(footer, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

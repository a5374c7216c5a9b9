//! Start screen with one card per game

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;
use shared::GameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    Open(GameKind),
    Back,
    Quit,
}

#[derive(Debug, Default)]
pub struct Picker {
    selected: usize,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> GameKind {
        GameKind::ALL[self.selected]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerAction> {
        let count = GameKind::ALL.len();
        match key.code {
            KeyCode::Char('1') => Some(PickerAction::Open(GameKind::CoinToss)),
            KeyCode::Char('2') => Some(PickerAction::Open(GameKind::BottleSpin)),
            KeyCode::Left | KeyCode::Up => {
                self.selected = (self.selected + count - 1) % count;
                None
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % count;
                None
            }
            KeyCode::Enter => Some(PickerAction::Open(self.selected())),
            KeyCode::Esc => Some(PickerAction::Back),
            KeyCode::Char('q') => Some(PickerAction::Quit),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [title, cards, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("Pick a game")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::bordered()),
            title,
        );

        let slots = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(cards);
        for (position, (kind, slot)) in GameKind::ALL.iter().zip(slots.iter()).enumerate() {
            let focused = position == self.selected;
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(kind.blurb()),
                Line::from(""),
                Line::from(format!("[{}]", position + 1)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Rounded
                    })
                    .border_style(border)
                    .title(kind.title()),
            );
            frame.render_widget(card, *slot);
        }

        frame.render_widget(
            Paragraph::new("1/2 or arrows + Enter: open   Esc/q: quit")
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }
}

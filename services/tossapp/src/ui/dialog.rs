//! Modal text prompt for adding player names

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use shared::{ADD_NAMES_PROMPT, ADD_NAMES_TITLE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
pub struct AddNamesDialog {
    input: String,
}

impl AddNamesDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogOutcome> {
        match key.code {
            KeyCode::Enter => Some(DialogOutcome::Submit(std::mem::take(&mut self.input))),
            KeyCode::Esc => Some(DialogOutcome::Cancel),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered(area, 50, 5);
        let body = Paragraph::new(vec![
            Line::from(ADD_NAMES_PROMPT).style(Style::default().fg(Color::DarkGray)),
            Line::from(format!("> {}_", self.input)),
            Line::from("Enter: add   Esc: cancel").style(Style::default().fg(Color::DarkGray)),
        ])
        .block(Block::bordered().title(ADD_NAMES_TITLE));

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submit() {
        let mut dialog = AddNamesDialog::new();
        for c in "Ann,Bo".chars() {
            assert_eq!(dialog.handle_key(key(KeyCode::Char(c))), None);
        }
        dialog.handle_key(key(KeyCode::Backspace));
        assert_eq!(dialog.input(), "Ann,B");
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            Some(DialogOutcome::Submit("Ann,B".to_string()))
        );
        assert_eq!(dialog.input(), "");
    }

    #[test]
    fn test_escape_cancels() {
        let mut dialog = AddNamesDialog::new();
        dialog.handle_key(key(KeyCode::Char('x')));
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), Some(DialogOutcome::Cancel));
    }
}

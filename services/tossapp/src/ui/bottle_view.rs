use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use shared::GameKind;
use std::time::Duration;
use tokio::sync::watch;

use crate::animator::{Animation, AnimationPhase};
use crate::config::BottleConfig;
use crate::games::BottleSpin;
use crate::layout::{CircleLayout, LayoutState, Size};
use crate::lifecycle::ViewHandle;
use crate::navigation::MountedView;
use crate::roster::{NamesSnapshot, PlayerRoster};
use crate::ui::dialog::{AddNamesDialog, DialogOutcome};
use crate::ui::{Screen, ScreenAction, ScreenContext};

/// Terminal cells are about twice as tall as wide
const ROW_HEIGHT: f32 = 2.0;

pub struct BottleView {
    handle: ViewHandle,
    bottle: BottleSpin,
    roster: PlayerRoster,
    names_rx: watch::Receiver<NamesSnapshot>,
    layout: CircleLayout,
    list: ListState,
    dialog: Option<AddNamesDialog>,
    notice: Option<String>,
}

impl BottleView {
    pub fn new(handle: ViewHandle, config: &BottleConfig) -> Self {
        let roster = PlayerRoster::new();
        let names_rx = roster.subscribe();
        Self {
            handle,
            bottle: BottleSpin::new(config),
            roster,
            names_rx,
            layout: CircleLayout::new(),
            list: ListState::default(),
            dialog: None,
            notice: None,
        }
    }

    pub fn game(&self) -> &BottleSpin {
        &self.bottle
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn sync_names(&mut self) {
        if self.names_rx.has_changed().unwrap_or(false) {
            let names = self.names_rx.borrow_and_update().clone();
            let count = names.len();
            self.layout.on_names_changed(names);
            self.list.select(match self.list.selected() {
                _ if count == 0 => None,
                Some(index) => Some(index.min(count - 1)),
                None => Some(0),
            });
        }
    }

    fn spin(&mut self, ctx: &mut ScreenContext<'_>) {
        match self.bottle.spin(self.roster.names(), &mut *ctx.rng) {
            Ok(rotation) => {
                let duration = rotation.duration();
                ctx.frames.animate(self.handle.liveness(), duration);
            }
            Err(e) => {
                tracing::debug!(code = %e.code(), "Spin refused: {}", e);
                self.notice = e.notice();
            }
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match dialog.handle_key(key) {
            Some(DialogOutcome::Submit(text)) => {
                self.roster.add_names(&text);
                self.dialog = None;
            }
            Some(DialogOutcome::Cancel) => self.dialog = None,
            None => {}
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let count = self.roster.count();
        if count == 0 {
            return;
        }
        let current = self.list.selected().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.list.select(Some(next));
    }

    fn render_names(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .roster
            .names()
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::bordered().title(format!("Players: {}", self.roster.count())))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.list);
    }

    fn render_stage(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(GameKind::BottleSpin.title());
        let inner = block.inner(area);
        let size = Size::new(inner.width as f32, inner.height as f32 * ROW_HEIGHT);
        self.layout.on_measured(size);

        let winner = self.bottle.result().cloned();
        let labels: Vec<(f64, f64, Line<'static>)> = match self.layout.state() {
            LayoutState::Pending => Vec::new(),
            LayoutState::Ready(_) => self
                .layout
                .labeled()
                .map(|(name, placement)| {
                    let chosen = winner
                        .as_ref()
                        .is_some_and(|r| r.index == placement.index && &r.name == name);
                    let style = if chosen {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    let x = placement.x - name.display_width() as f32 / 2.0;
                    let y = size.height - placement.y;
                    (x as f64, y as f64, Line::styled(name.to_string(), style))
                })
                .collect(),
        };

        let (cx, cy) = size.center();
        let reach = size.circle_radius() * 0.7;
        let radians = self.bottle.angle().to_radians();
        let (dx, dy) = (radians.sin() * reach, radians.cos() * reach);
        let (cx, cy) = (cx as f64, (size.height - cy) as f64);
        let (dx, dy) = (dx as f64, dy as f64);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width as f64])
            .y_bounds([0.0, size.height as f64])
            .paint(move |ctx| {
                ctx.draw(&CanvasLine::new(cx, cy, cx + dx, cy + dy, Color::Green));
                ctx.draw(&CanvasLine::new(
                    cx,
                    cy,
                    cx - dx * 0.5,
                    cy - dy * 0.5,
                    Color::Cyan,
                ));
                for (x, y, label) in &labels {
                    ctx.print(*x, *y, label.clone());
                }
            });
        frame.render_widget(canvas, area);
    }
}

impl MountedView for BottleView {
    fn handle(&self) -> &ViewHandle {
        &self.handle
    }

    fn on_frame(&mut self, elapsed: Duration) {
        self.bottle.advance_to(elapsed);
    }
}

impl Screen for BottleView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.sync_names();

        let [body, status, help] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);
        let [names, stage] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
                .areas(body);

        self.render_names(frame, names);
        self.render_stage(frame, stage);

        let (text, style) = match (&self.notice, self.bottle.phase()) {
            (Some(notice), _) => (notice.clone(), Style::default().fg(Color::Red)),
            (None, AnimationPhase::Animating) => ("Spinning...".to_string(), Style::default()),
            (None, _) => (
                self.bottle.result_label().unwrap_or_default(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::bordered()),
            status,
        );

        frame.render_widget(
            Paragraph::new(
                "a: add   Up/Down: select   d: remove   c: clear   Space/s: spin   Esc/b: back",
            )
            .style(Style::default().fg(Color::DarkGray)),
            help,
        );

        if let Some(dialog) = &self.dialog {
            dialog.render(frame, area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Option<ScreenAction> {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            self.sync_names();
            return None;
        }

        self.notice = None;
        match key.code {
            KeyCode::Char('a') => self.dialog = Some(AddNamesDialog::new()),
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.list.selected() {
                    self.roster.remove_at(index);
                }
            }
            KeyCode::Char('c') => self.roster.clear(),
            KeyCode::Char(' ') | KeyCode::Char('s') => self.spin(ctx),
            KeyCode::Esc | KeyCode::Char('b') => return Some(ScreenAction::Back),
            KeyCode::Char('q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        self.sync_names();
        None
    }
}

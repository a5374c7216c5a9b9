use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Rectangle};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use shared::{CoinFace, GameKind, COIN_RISE_HEIGHT};
use std::time::Duration;

use crate::animator::{Animation, AnimationPhase};
use crate::config::CoinConfig;
use crate::games::{CoinFrame, CoinToss};
use crate::lifecycle::ViewHandle;
use crate::navigation::MountedView;
use crate::ui::{Screen, ScreenAction, ScreenContext};

const COIN_SIZE: f64 = 24.0;
const GROUND: f64 = 18.0;
const MAX_ALTITUDE: f64 = 60.0;

pub struct CoinView {
    handle: ViewHandle,
    coin: CoinToss,
}

impl CoinView {
    pub fn new(handle: ViewHandle, config: &CoinConfig) -> Self {
        Self {
            handle,
            coin: CoinToss::new(config),
        }
    }

    pub fn game(&self) -> &CoinToss {
        &self.coin
    }

    fn toss(&mut self, ctx: &mut ScreenContext<'_>) {
        match self.coin.toss(&mut *ctx.rng) {
            Ok(flight) => {
                let duration = flight.duration();
                ctx.frames.animate(self.handle.liveness(), duration);
            }
            Err(e) => tracing::debug!(code = %e.code(), "Toss ignored: {}", e),
        }
    }
}

impl MountedView for CoinView {
    fn handle(&self) -> &ViewHandle {
        &self.handle
    }

    fn on_frame(&mut self, elapsed: Duration) {
        self.coin.advance_to(elapsed);
    }
}

/// Canvas-space rectangle for the coin at `frame`
fn coin_rect(frame: &CoinFrame) -> Rectangle {
    let altitude = (frame.translation_y / COIN_RISE_HEIGHT) as f64 * MAX_ALTITUDE;
    let width = COIN_SIZE * (frame.rotation_y.to_radians().cos().abs() as f64).max(0.04);
    let height = COIN_SIZE * frame.rotation_x.to_radians().cos() as f64;
    Rectangle {
        x: -width / 2.0,
        y: GROUND + altitude - height / 2.0,
        width,
        height,
        color: match frame.face {
            CoinFace::Heads => Color::Yellow,
            CoinFace::Tails => Color::LightYellow,
        },
    }
}

impl Screen for CoinView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [stage, result, help] = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let coin = *self.coin.frame();
        let rect = coin_rect(&coin);
        let show_glyph = rect.width > COIN_SIZE * 0.3;
        let canvas = Canvas::default()
            .block(Block::bordered().title(GameKind::CoinToss.title()))
            .marker(Marker::Braille)
            .x_bounds([-50.0, 50.0])
            .y_bounds([0.0, 100.0])
            .paint(move |ctx| {
                ctx.draw(&rect);
                if show_glyph {
                    ctx.print(
                        -0.5,
                        rect.y + rect.height / 2.0,
                        coin.face.glyph().to_string(),
                    );
                }
            });
        frame.render_widget(canvas, stage);

        let text = match self.coin.phase() {
            AnimationPhase::Animating => "Tossing...".to_string(),
            _ => self
                .coin
                .result_label()
                .map(str::to_string)
                .unwrap_or_default(),
        };
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(Block::bordered()),
            result,
        );

        let toss_hint = if self.coin.trigger_enabled() {
            "Space/t: toss"
        } else {
            "(tossing)"
        };
        frame.render_widget(
            Paragraph::new(format!("{}   Esc/b: back", toss_hint))
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('t') => {
                self.toss(ctx);
                None
            }
            KeyCode::Esc | KeyCode::Char('b') => Some(ScreenAction::Back),
            KeyCode::Char('q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}

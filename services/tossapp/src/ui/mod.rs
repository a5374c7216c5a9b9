//! Terminal front end

pub mod app;
pub mod bottle_view;
pub mod coin_view;
pub mod dialog;
pub mod picker;
pub mod terminal;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use ratatui::Frame;
use shared::GameKind;

use crate::config::Config;
use crate::frame_driver::FrameDriver;
use crate::lifecycle::ViewHandle;
use crate::navigation::MountedView;

pub use app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Back,
    Quit,
}

/// What a screen may touch while handling a key
pub struct ScreenContext<'a> {
    pub rng: &'a mut StdRng,
    pub frames: &'a FrameDriver,
}

/// A mounted game screen
pub trait Screen: MountedView {
    fn render(&mut self, frame: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Option<ScreenAction>;
}

/// Build the screen for `kind` around a freshly mounted handle
pub fn mount_screen(kind: GameKind, handle: ViewHandle, config: &Config) -> Box<dyn Screen> {
    match kind {
        GameKind::CoinToss => Box::new(coin_view::CoinView::new(handle, &config.coin)),
        GameKind::BottleSpin => Box::new(bottle_view::BottleView::new(handle, &config.bottle)),
    }
}

//! Event loop tying key presses and frame ticks to the shell

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::frame_driver::{FrameDriver, FrameEvent};
use crate::navigation::{BackAction, Shell};
use crate::random::game_rng;
use crate::ui::picker::{Picker, PickerAction};
use crate::ui::terminal::Tui;
use crate::ui::{mount_screen, Screen, ScreenAction, ScreenContext};

const FRAME_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    shell: Shell<Box<dyn Screen>>,
    picker: Picker,
    rng: StdRng,
    frames: FrameDriver,
}

impl App {
    pub fn new(config: &Config, root: CancellationToken) -> (Self, mpsc::Receiver<FrameEvent>) {
        let (frames, frame_rx) =
            FrameDriver::new(config.animation.frame_interval(), FRAME_BUFFER);
        let screens = config.clone();
        let shell = Shell::new(root, move |kind, handle| mount_screen(kind, handle, &screens));

        let app = Self {
            shell,
            picker: Picker::new(),
            rng: game_rng(config.rng_seed),
            frames,
        };
        (app, frame_rx)
    }

    pub async fn run(
        mut self,
        terminal: &mut Tui,
        mut frame_rx: mpsc::Receiver<FrameEvent>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if self.on_key(key) == Flow::Quit {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        self.shell.shutdown();
                        return Err(e.into());
                    }
                    None => break,
                },
                Some(event) = frame_rx.recv() => {
                    self.shell.deliver_frame(event);
                }
            }
        }

        tracing::info!("Shutting down");
        self.shell.shutdown();
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match self.shell.view_mut() {
            Some(view) => view.render(frame, area),
            None => self.picker.render(frame, area),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        if let Some(view) = self.shell.view_mut() {
            let mut ctx = ScreenContext {
                rng: &mut self.rng,
                frames: &self.frames,
            };
            return match view.handle_key(key, &mut ctx) {
                Some(ScreenAction::Back) => self.back(),
                Some(ScreenAction::Quit) => Flow::Quit,
                None => Flow::Continue,
            };
        }

        match self.picker.handle_key(key) {
            Some(PickerAction::Open(kind)) => {
                self.shell.select_game(kind);
                Flow::Continue
            }
            Some(PickerAction::Back) => self.back(),
            Some(PickerAction::Quit) => Flow::Quit,
            None => Flow::Continue,
        }
    }

    fn back(&mut self) -> Flow {
        match self.shell.go_back() {
            BackAction::Popped { .. } => Flow::Continue,
            BackAction::Exit => Flow::Quit,
        }
    }
}

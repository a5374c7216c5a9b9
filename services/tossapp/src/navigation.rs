//! Game picker navigation and the view container

use shared::GameKind;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::frame_driver::FrameEvent;
use crate::lifecycle::ViewHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// An entry was popped; `None` means the picker is showing again
    Popped { now_showing: Option<GameKind> },
    /// Nothing left to pop; fall through to the default (exit)
    Exit,
}

/// Navigation stack of selected games; empty means the picker is visible
#[derive(Debug, Default)]
pub struct Navigator {
    stack: Vec<GameKind>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_game(&mut self, kind: GameKind) {
        self.stack.push(kind);
        tracing::info!(game = %kind, depth = self.stack.len(), "Game selected");
    }

    pub fn go_back(&mut self) -> BackAction {
        match self.stack.pop() {
            Some(left) => {
                let now_showing = self.current();
                tracing::info!(left = %left, depth = self.stack.len(), "Navigated back");
                BackAction::Popped { now_showing }
            }
            None => BackAction::Exit,
        }
    }

    pub fn current(&self) -> Option<GameKind> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A view the shell can mount, feed frames to and tear down
pub trait MountedView {
    fn handle(&self) -> &ViewHandle;
    fn on_frame(&mut self, elapsed: Duration);
}

impl<T: MountedView + ?Sized> MountedView for Box<T> {
    fn handle(&self) -> &ViewHandle {
        (**self).handle()
    }

    fn on_frame(&mut self, elapsed: Duration) {
        (**self).on_frame(elapsed)
    }
}

type MountFn<V> = Box<dyn FnMut(GameKind, ViewHandle) -> V>;

/// Single container that swaps the visible game view
pub struct Shell<V: MountedView> {
    navigator: Navigator,
    root: CancellationToken,
    view: Option<V>,
    mount: MountFn<V>,
}

impl<V: MountedView> Shell<V> {
    pub fn new<F>(root: CancellationToken, mount: F) -> Self
    where
        F: FnMut(GameKind, ViewHandle) -> V + 'static,
    {
        Self {
            navigator: Navigator::new(),
            root,
            view: None,
            mount: Box::new(mount),
        }
    }

    /// Swap in a fresh view for `kind` and push a navigation entry
    pub fn select_game(&mut self, kind: GameKind) {
        self.navigator.select_game(kind);
        self.show(Some(kind));
    }

    /// Pop back toward the picker; `Exit` when already there
    pub fn go_back(&mut self) -> BackAction {
        let action = self.navigator.go_back();
        if let BackAction::Popped { now_showing } = action {
            self.show(now_showing);
        }
        action
    }

    fn show(&mut self, kind: Option<GameKind>) {
        if let Some(old) = self.view.take() {
            old.handle().tear_down();
        }
        self.view = kind.map(|kind| {
            let handle = ViewHandle::mount(kind, &self.root);
            (self.mount)(kind, handle)
        });
    }

    /// Route a frame to the view it was scheduled for, if that view is alive
    pub fn deliver_frame(&mut self, event: FrameEvent) -> bool {
        match self.view.as_mut() {
            Some(view) if view.handle().id() == event.view && view.handle().is_alive() => {
                view.on_frame(event.elapsed);
                true
            }
            _ => {
                tracing::debug!(view = %event.view, "Dropping frame for detached view");
                false
            }
        }
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Tear down the visible view and everything under the root token
    pub fn shutdown(&mut self) {
        self.view = None;
        self.root.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_back() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), None);
        nav.select_game(GameKind::CoinToss);
        nav.select_game(GameKind::BottleSpin);
        assert_eq!(nav.depth(), 2);
        assert_eq!(
            nav.go_back(),
            BackAction::Popped { now_showing: Some(GameKind::CoinToss) }
        );
        assert_eq!(nav.go_back(), BackAction::Popped { now_showing: None });
        assert_eq!(nav.go_back(), BackAction::Exit);
        assert_eq!(nav.depth(), 0);
    }
}

//! Mounted view identity and liveness
//!
//! A view owns a `ViewHandle`. Anything that outlives a single call (frame
//! driver tasks, queued frame events) holds a `Liveness` instead and must
//! check it before touching the view.

use shared::GameKind;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub type ViewId = Uuid;

#[derive(Debug)]
pub struct ViewHandle {
    id: ViewId,
    kind: GameKind,
    token: CancellationToken,
}

impl ViewHandle {
    /// Mount a new view under `parent`; cancelling the parent tears it down
    pub fn mount(kind: GameKind, parent: &CancellationToken) -> Self {
        let handle = Self {
            id: Uuid::new_v4(),
            kind,
            token: parent.child_token(),
        };
        tracing::debug!(view = %handle.id, game = %kind, "View mounted");
        handle
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn is_alive(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn liveness(&self) -> Liveness {
        Liveness {
            view: self.id,
            token: self.token.clone(),
        }
    }

    pub fn tear_down(&self) {
        if self.is_alive() {
            tracing::debug!(view = %self.id, game = %self.kind, "View torn down");
            self.token.cancel();
        }
    }
}

impl Drop for ViewHandle {
    fn drop(&mut self) {
        self.tear_down();
    }
}

/// Weak view reference handed to deferred work
#[derive(Debug, Clone)]
pub struct Liveness {
    view: ViewId,
    token: CancellationToken,
}

impl Liveness {
    pub fn view(&self) -> ViewId {
        self.view
    }

    pub fn is_alive(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Resolves once the view is torn down
    pub async fn detached(&self) {
        self.token.cancelled().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_tears_down() {
        let root = CancellationToken::new();
        let handle = ViewHandle::mount(GameKind::CoinToss, &root);
        let liveness = handle.liveness();
        assert!(liveness.is_alive());
        drop(handle);
        assert!(!liveness.is_alive());
        assert!(!root.is_cancelled());
    }

    #[test]
    fn test_root_cancel_reaches_views() {
        let root = CancellationToken::new();
        let handle = ViewHandle::mount(GameKind::BottleSpin, &root);
        root.cancel();
        assert!(!handle.is_alive());
    }

    #[test]
    fn test_each_mount_gets_new_id() {
        let root = CancellationToken::new();
        let a = ViewHandle::mount(GameKind::CoinToss, &root);
        let b = ViewHandle::mount(GameKind::CoinToss, &root);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.liveness().view(), a.id());
    }
}

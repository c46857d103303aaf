//! Action bus carrying client actions to the store.
//!
//! The sending half is handed to application services as a [`DispatchPort`];
//! the receiving half is drained by whatever owns the store (the runner logs
//! and forwards actions, tests inspect them directly).

use futures_channel::mpsc;
use futures_util::StreamExt;

use parlor_shared::ClientAction;

use crate::ports::outbound::{DispatchError, DispatchPort};

/// Sending half of the action channel. Cheap to clone.
#[derive(Clone)]
pub struct ActionBus {
    tx: mpsc::UnboundedSender<ClientAction>,
}

/// Receiving half of the action channel.
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<ClientAction>,
}

impl ActionBus {
    pub fn channel() -> (Self, ActionReceiver) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, ActionReceiver { rx })
    }
}

impl DispatchPort for ActionBus {
    fn dispatch(&self, action: ClientAction) -> Result<(), DispatchError> {
        let kind = action.kind();
        self.tx.unbounded_send(action).map_err(|e| {
            if e.is_disconnected() {
                DispatchError::Closed
            } else {
                DispatchError::Failed(e.to_string())
            }
        })?;
        tracing::debug!(action = kind, "Action queued");
        Ok(())
    }
}

impl ActionReceiver {
    /// Next queued action, or `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<ClientAction> {
        self.rx.next().await
    }

    /// Feed every action to `handler` until all senders are dropped.
    pub async fn for_each(mut self, mut handler: impl FnMut(ClientAction)) -> usize {
        let mut handled = 0;
        while let Some(action) = self.rx.next().await {
            handler(action);
            handled += 1;
        }
        tracing::debug!(handled, "Action bus closed");
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::{GameId, UserId};
    use parlor_shared::{GameData, GameOptions};

    fn create_chess() -> ClientAction {
        ClientAction::CreateGame(GameData {
            game: GameId::from("chess"),
            title: "Ann's Game".to_string(),
            players: vec![UserId::new(1), UserId::new(2)],
            options: GameOptions::new(),
        })
    }

    #[tokio::test]
    async fn dispatched_actions_reach_the_receiver_in_order() {
        let (bus, mut receiver) = ActionBus::channel();
        bus.dispatch(create_chess()).expect("queued");
        bus.clone().dispatch(create_chess()).expect("queued");
        drop(bus);

        assert_eq!(receiver.next().await, Some(create_chess()));
        assert_eq!(receiver.next().await, Some(create_chess()));
        assert_eq!(receiver.next().await, None);
    }

    #[test]
    fn dispatch_after_receiver_dropped_is_closed() {
        let (bus, receiver) = ActionBus::channel();
        drop(receiver);
        assert_eq!(bus.dispatch(create_chess()), Err(DispatchError::Closed));
    }

    #[tokio::test]
    async fn for_each_drains_until_senders_are_gone() {
        let (bus, receiver) = ActionBus::channel();
        bus.dispatch(create_chess()).expect("queued");
        bus.dispatch(create_chess()).expect("queued");
        drop(bus);

        let mut kinds = Vec::new();
        let handled = receiver.for_each(|action| kinds.push(action.kind())).await;
        assert_eq!(handled, 2);
        assert_eq!(kinds, vec!["CREATE_GAME", "CREATE_GAME"]);
    }
}

//! Store runtime: serialized action processing and state publication.

use tokio::sync::{mpsc, watch};

use super::effect::Effect;
use super::reducer::Reducer;
use super::teardown::Teardown;

/// Runtime container for one screen's state machine.
///
/// All actions funnel through an unbounded queue drained by a single driver
/// task, so reducer invocations are strictly sequential even when actions
/// originate from concurrent effect completions. No action is dropped.
/// Observers receive a consistent snapshot after each processed action.
///
/// Dropping the store tears it down: the driver stops and in-flight effects
/// are cancelled before they can deliver a completion action.
pub struct Store<R: Reducer> {
    actions: mpsc::UnboundedSender<R::Action>,
    state: watch::Receiver<R::State>,
    teardown: Teardown,
}

impl<R> Store<R>
where
    R: Reducer + Send + 'static,
{
    /// Spawn the driver task for `reducer` starting from `initial`.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(reducer: R, initial: R::State) -> Self {
        let (actions, mut queue) = mpsc::unbounded_channel::<R::Action>();
        let (publish, state) = watch::channel(initial.clone());
        let teardown = Teardown::new();

        let effect_sender = actions.clone();
        let driver_teardown = teardown.clone();
        tokio::spawn(async move {
            let mut state = initial;
            loop {
                let action = tokio::select! {
                    _ = driver_teardown.wait() => break,
                    action = queue.recv() => match action {
                        Some(action) => action,
                        None => break,
                    },
                };

                let effects = reducer.reduce(&mut state, action);
                // Publish before running effects so observers never see a
                // completion's state without the triggering transition.
                let _ = publish.send(state.clone());

                for effect in effects {
                    run_effect(effect, effect_sender.clone(), driver_teardown.clone());
                }
            }
        });

        Self {
            actions,
            state,
            teardown,
        }
    }

    /// Enqueue an action. Silently ignored after teardown.
    pub fn send(&self, action: R::Action) {
        if self.teardown.is_torn_down() {
            return;
        }
        let _ = self.actions.send(action);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Observe state snapshots. Each processed action publishes one.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Stop the driver and cancel in-flight effects.
    pub fn teardown(&self) {
        self.teardown.signal();
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        self.teardown.signal();
    }
}

/// Run one effect off the driver timeline, rejoining it via the queue.
///
/// Cancellation races the effect against the teardown signal; once the store
/// is torn down the completion action is never delivered.
fn run_effect<A: Send + 'static>(
    effect: Effect<A>,
    queue: mpsc::UnboundedSender<A>,
    teardown: Teardown,
) {
    match effect {
        Effect::Send(action) => {
            let _ = queue.send(action);
        }
        Effect::Delay { delay, action } => {
            tokio::spawn(async move {
                tokio::select! {
                    _ = teardown.wait() => {}
                    _ = tokio::time::sleep(delay) => {
                        let _ = queue.send(action);
                    }
                }
            });
        }
        Effect::Task(future) => {
            tokio::spawn(async move {
                tokio::select! {
                    _ = teardown.wait() => {}
                    action = future => {
                        let _ = queue.send(action);
                    }
                }
            });
        }
    }
}

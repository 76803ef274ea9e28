//! Deferred side effects scheduled by reducers.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// The set of effects one reducer invocation may schedule.
pub type Effects<A> = Vec<Effect<A>>;

/// An empty effect list, for the common "state change only" branch.
pub fn none<A>() -> Effects<A> {
    Vec::new()
}

/// A deferred unit of work that rejoins the store's timeline by producing
/// exactly one follow-up action.
pub enum Effect<A> {
    /// Feed an action straight back into the queue.
    Send(A),
    /// Deliver an action after a fixed delay.
    Delay { delay: Duration, action: A },
    /// Run asynchronous work (a network call) to completion.
    Task(Pin<Box<dyn Future<Output = A> + Send + 'static>>),
}

impl<A: Send + 'static> Effect<A> {
    /// Immediate follow-up action.
    pub fn send(action: A) -> Self {
        Effect::Send(action)
    }

    /// Deliver `action` after `millis` milliseconds.
    pub fn delay_millis(millis: u64, action: A) -> Self {
        Effect::Delay {
            delay: Duration::from_millis(millis),
            action,
        }
    }

    /// Box a future resolving to the follow-up action.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Effect::Task(Box::pin(future))
    }

    /// Lift this effect into a parent action space.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        match self {
            Effect::Send(action) => Effect::Send(f(action)),
            Effect::Delay { delay, action } => Effect::Delay {
                delay,
                action: f(action),
            },
            Effect::Task(future) => Effect::task(async move { f(future.await) }),
        }
    }
}

/// Lift every effect of a child reducer into the parent action space.
pub fn map_effects<A, B, F>(effects: Effects<A>, embed: F) -> Effects<B>
where
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> B + Clone + Send + 'static,
{
    effects
        .into_iter()
        .map(|effect| {
            let embed = embed.clone();
            effect.map(embed)
        })
        .collect()
}

//! # Handler Chain
//!
//! A [`Chain`] is an ordered list of [`Handler`]s. [`Chain::dispatch`] offers a request to each
//! handler in construction order; the first one that reports [`Step::Handled`] ends the walk and
//! the rest are never consulted. If every handler forwards, the request is reported as
//! [`Disposition::Unhandled`]: nothing is escalated, retried or raised.
//!
//! # Architecture Note
//! The chain is an explicit `Vec` rather than a linked list of handlers that each own a `next`
//! pointer. The order is visible, cycles can't be expressed, and the driver can record an
//! [`AuditTrail`] of every hop without the handlers cooperating.

use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// What a handler decided to do with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<O> {
    /// The handler consumed the request and produced a result.
    Handled(O),
    /// The handler declined; the next handler gets the request unchanged.
    Forward,
}

/// A link in a [`Chain`].
pub trait Handler<R>: Send + Sync {
    type Output;

    fn name(&self) -> &str;

    fn handle(&self, request: &R) -> Step<Self::Output>;
}

/// A handler backed by a closure; `None` means "forward".
pub struct FnHandler<F, R, O> {
    name: String,
    f: F,
    _marker: PhantomData<fn(&R) -> O>,
}

/// Builds a handler from a closure returning `Some(output)` when it handles the request.
pub fn handler_fn<R, O, F>(name: impl Into<String>, f: F) -> FnHandler<F, R, O>
where
    F: Fn(&R) -> Option<O> + Send + Sync,
{
    FnHandler {
        name: name.into(),
        f,
        _marker: PhantomData,
    }
}

impl<R, O, F> Handler<R> for FnHandler<F, R, O>
where
    F: Fn(&R) -> Option<O> + Send + Sync,
{
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, request: &R) -> Step<O> {
        match (self.f)(request) {
            Some(output) => Step::Handled(output),
            None => Step::Forward,
        }
    }
}

type BoxedHandler<R, O> = Box<dyn Handler<R, Output = O>>;

/// An ordered sequence of handlers sharing a request and output type.
pub struct Chain<R, O> {
    name: String,
    handlers: Vec<BoxedHandler<R, O>>,
}

impl<R, O> Chain<R, O> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    /// Appends `handler` as the new last link.
    pub fn then<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, Output = O> + 'static,
    {
        self.push(handler);
        self
    }

    pub fn push<H>(&mut self, handler: H)
    where
        H: Handler<R, Output = O> + 'static,
    {
        debug!(chain = %self.name, handler = handler.name(), position = self.handlers.len(), "Link handler");
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Offers `request` to each handler in order until one handles it.
    pub fn dispatch(&self, request: &R) -> Dispatch<O> {
        let mut trail = AuditTrail::default();

        for (position, handler) in self.handlers.iter().enumerate() {
            match handler.handle(request) {
                Step::Handled(output) => {
                    info!(chain = %self.name, handler = handler.name(), position, "Handled");
                    trail.record(handler.name(), TrailAction::Handled);
                    return Dispatch {
                        disposition: Disposition::HandledBy {
                            handler: handler.name().to_string(),
                            position,
                            output,
                        },
                        trail,
                    };
                }
                Step::Forward => {
                    debug!(chain = %self.name, handler = handler.name(), position, "Forward");
                    trail.record(handler.name(), TrailAction::Forwarded);
                }
            }
        }

        warn!(chain = %self.name, hops = trail.len(), "Unhandled");
        Dispatch {
            disposition: Disposition::Unhandled,
            trail,
        }
    }
}

/// Terminal state of one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition<O> {
    HandledBy {
        handler: String,
        position: usize,
        output: O,
    },
    Unhandled,
}

/// Result of [`Chain::dispatch`]: the outcome plus every hop that led to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch<O> {
    pub disposition: Disposition<O>,
    pub trail: AuditTrail,
}

impl<O> Dispatch<O> {
    pub fn is_handled(&self) -> bool {
        matches!(self.disposition, Disposition::HandledBy { .. })
    }

    /// Name of the handler that consumed the request, if any.
    pub fn handler(&self) -> Option<&str> {
        match &self.disposition {
            Disposition::HandledBy { handler, .. } => Some(handler.as_str()),
            Disposition::Unhandled => None,
        }
    }

    pub fn output(&self) -> Option<&O> {
        match &self.disposition {
            Disposition::HandledBy { output, .. } => Some(output),
            Disposition::Unhandled => None,
        }
    }

    pub fn into_output(self) -> Option<O> {
        match self.disposition {
            Disposition::HandledBy { output, .. } => Some(output),
            Disposition::Unhandled => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailAction {
    Forwarded,
    Handled,
}

impl fmt::Display for TrailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailAction::Forwarded => write!(f, "forwarded"),
            TrailAction::Handled => write!(f, "handled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntry {
    pub handler: String,
    pub action: TrailAction,
}

/// Who touched a request, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditTrail {
    entries: Vec<TrailEntry>,
}

impl AuditTrail {
    fn record(&mut self, handler: &str, action: TrailAction) {
        self.entries.push(TrailEntry {
            handler: handler.to_string(),
            action,
        });
    }

    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handler names in the order they saw the request.
    pub fn handlers(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.handler.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn limit(name: &str, max: u32) -> impl Handler<u32, Output = String> {
        let label = name.to_string();
        handler_fn(name, move |amount: &u32| (*amount <= max).then(|| label.clone()))
    }

    fn approvers() -> Chain<u32, String> {
        Chain::new("approvals")
            .then(limit("lead", 500))
            .then(limit("manager", 5000))
            .then(handler_fn("director", |_: &u32| Some("director".to_string())))
    }

    #[test]
    fn first_capable_handler_wins() {
        let chain = approvers();
        assert_eq!(chain.dispatch(&300).handler(), Some("lead"));
        assert_eq!(chain.dispatch(&3000).handler(), Some("manager"));
        assert_eq!(chain.dispatch(&10_000).handler(), Some("director"));
        assert_eq!(chain.dispatch(&0).handler(), Some("lead"));
    }

    #[test]
    fn trail_records_every_hop() {
        let dispatch = approvers().dispatch(&10_000);
        assert_eq!(dispatch.trail.handlers(), vec!["lead", "manager", "director"]);
        let actions: Vec<TrailAction> = dispatch.trail.entries().iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![TrailAction::Forwarded, TrailAction::Forwarded, TrailAction::Handled]
        );
        assert!(matches!(
            dispatch.disposition,
            Disposition::HandledBy { position: 2, .. }
        ));
    }

    #[test]
    fn empty_chain_reports_unhandled() {
        let chain: Chain<u32, String> = Chain::new("empty");
        let dispatch = chain.dispatch(&1);
        assert_eq!(dispatch.disposition, Disposition::Unhandled);
        assert!(dispatch.trail.is_empty());
    }

    #[test]
    fn exhausted_chain_reports_unhandled() {
        let chain = Chain::new("capped")
            .then(limit("lead", 500))
            .then(limit("manager", 5000));
        let dispatch = chain.dispatch(&5001);
        assert!(!dispatch.is_handled());
        assert_eq!(dispatch.trail.len(), 2);
        assert_eq!(dispatch.into_output(), None);
    }

    #[test]
    fn later_handlers_are_not_consulted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let chain = Chain::new("counting")
            .then(handler_fn("first", |_: &u32| Some(1)))
            .then(handler_fn("second", move |_: &u32| {
                seen.fetch_add(1, Ordering::SeqCst);
                Some(2)
            }));
        assert_eq!(chain.dispatch(&7).output(), Some(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(chain.names(), vec!["first", "second"]);
    }
}

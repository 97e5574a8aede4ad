//! Backend state-service contract, push channel, and in-memory adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use futures::channel::mpsc;
use futures::stream::{self, LocalBoxStream, StreamExt};
use shell_contract::{FieldEvent, InitialState};

/// Object-safe boxed future used by backend service traits.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Ordered push stream of backend field updates.
///
/// Delivery order on this stream is the only ordering contract the backend
/// provides; consumers must apply events in arrival order.
pub type FieldEventStream = LocalBoxStream<'static, FieldEvent>;

/// Backend service owning the authoritative shell state for one window process.
pub trait StateService {
    /// Fetches the full current configuration once, for boot hydration.
    fn fetch_initial_state<'a>(&'a self) -> BackendFuture<'a, Result<InitialState, String>>;

    /// Subscribes to the ordered push channel of single-field updates.
    ///
    /// Called once per window; the subscription lives for the life of the
    /// window and ends when the backend closes the channel.
    fn subscribe_field_updates<'a>(&'a self) -> BackendFuture<'a, Result<FieldEventStream, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op state service returning defaults and an already-closed channel.
pub struct NoopStateService;

impl StateService for NoopStateService {
    fn fetch_initial_state<'a>(&'a self) -> BackendFuture<'a, Result<InitialState, String>> {
        Box::pin(async { Ok(InitialState::default()) })
    }

    fn subscribe_field_updates<'a>(&'a self) -> BackendFuture<'a, Result<FieldEventStream, String>> {
        Box::pin(async { Ok(stream::empty().boxed_local()) })
    }
}

struct MemoryStateInner {
    initial: InitialState,
    sender: Option<mpsc::UnboundedSender<FieldEvent>>,
    receiver: Option<mpsc::UnboundedReceiver<FieldEvent>>,
}

#[derive(Clone)]
/// In-memory state service with a caller-fed event channel.
///
/// Clones share state: keep one clone as the test-side producer and hand
/// another to the consumer under test. Events pushed before the subscription
/// is taken are buffered and delivered in push order.
pub struct MemoryStateService {
    inner: Rc<RefCell<MemoryStateInner>>,
}

impl Default for MemoryStateService {
    fn default() -> Self {
        let (sender, receiver) = mpsc::unbounded();
        Self {
            inner: Rc::new(RefCell::new(MemoryStateInner {
                initial: InitialState::default(),
                sender: Some(sender),
                receiver: Some(receiver),
            })),
        }
    }
}

impl MemoryStateService {
    /// Creates a service answering the initial fetch with `initial`.
    pub fn with_initial(initial: InitialState) -> Self {
        let service = Self::default();
        service.set_initial(initial);
        service
    }

    /// Replaces the configuration returned by the initial fetch.
    pub fn set_initial(&self, initial: InitialState) {
        self.inner.borrow_mut().initial = initial;
    }

    /// Pushes one field event onto the channel.
    pub fn push_event(&self, event: FieldEvent) {
        if let Some(sender) = self.inner.borrow().sender.as_ref() {
            let _ = sender.unbounded_send(event);
        }
    }

    /// Closes the producer side; the subscribed stream ends after draining.
    pub fn close(&self) {
        self.inner.borrow_mut().sender = None;
    }
}

impl StateService for MemoryStateService {
    fn fetch_initial_state<'a>(&'a self) -> BackendFuture<'a, Result<InitialState, String>> {
        Box::pin(async move { Ok(self.inner.borrow().initial.clone()) })
    }

    fn subscribe_field_updates<'a>(&'a self) -> BackendFuture<'a, Result<FieldEventStream, String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .receiver
                .take()
                .map(|receiver| receiver.boxed_local())
                .ok_or_else(|| "field update channel already subscribed".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;
    use shell_contract::WindowHandle;

    use super::*;

    #[test]
    fn memory_service_returns_configured_initial_state() {
        let service = MemoryStateService::default();
        let mut initial = InitialState::default();
        initial.active_window = WindowHandle(4);
        service.set_initial(initial.clone());

        let service_obj: &dyn StateService = &service;
        let fetched = block_on(service_obj.fetch_initial_state()).expect("fetch");
        assert_eq!(fetched, initial);
    }

    #[test]
    fn pushed_events_arrive_in_push_order() {
        let service = MemoryStateService::default();
        service.push_event(FieldEvent::new("activeWindow", json!(1)));
        service.push_event(FieldEvent::new("activeWindow", json!(2)));
        service.push_event(FieldEvent::new("overlayVisible", json!(false)));
        service.close();

        let service_obj: &dyn StateService = &service;
        let events = block_on(async {
            let stream = service_obj
                .subscribe_field_updates()
                .await
                .expect("subscribe");
            stream.collect::<Vec<_>>().await
        });
        assert_eq!(
            events,
            vec![
                FieldEvent::new("activeWindow", json!(1)),
                FieldEvent::new("activeWindow", json!(2)),
                FieldEvent::new("overlayVisible", json!(false)),
            ]
        );
    }

    #[test]
    fn second_subscription_is_rejected() {
        let service = MemoryStateService::default();
        let service_obj: &dyn StateService = &service;
        block_on(service_obj.subscribe_field_updates()).expect("first subscribe");
        let err = block_on(service_obj.subscribe_field_updates())
            .err()
            .expect("expected rejection");
        assert!(err.contains("already subscribed"));
    }

    #[test]
    fn noop_service_yields_defaults_and_a_closed_channel() {
        let service_obj: &dyn StateService = &NoopStateService;
        let initial = block_on(service_obj.fetch_initial_state()).expect("fetch");
        assert_eq!(initial, InitialState::default());

        let events = block_on(async {
            let stream = service_obj
                .subscribe_field_updates()
                .await
                .expect("subscribe");
            stream.collect::<Vec<_>>().await
        });
        assert!(events.is_empty());
    }
}

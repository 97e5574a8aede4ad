//! Backend widget-registry contract and in-memory adapters.

use std::{cell::RefCell, rc::Rc};

use shell_contract::WidgetDescriptor;

use crate::state::BackendFuture;

/// Backend service exposing the registry of available widget definitions.
pub trait WidgetService {
    /// Fetches the ordered widget registry once per window at startup.
    ///
    /// The returned descriptors are read-only for the remainder of the
    /// window's life.
    fn fetch_widget_registry<'a>(
        &'a self,
    ) -> BackendFuture<'a, Result<Vec<WidgetDescriptor>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op widget service returning an empty registry.
pub struct NoopWidgetService;

impl WidgetService for NoopWidgetService {
    fn fetch_widget_registry<'a>(
        &'a self,
    ) -> BackendFuture<'a, Result<Vec<WidgetDescriptor>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Clone, Default)]
/// In-memory widget service backed by a caller-supplied registry.
pub struct MemoryWidgetService {
    registry: Rc<RefCell<Vec<WidgetDescriptor>>>,
}

impl MemoryWidgetService {
    /// Creates a service answering registry fetches with `widgets`.
    pub fn with_widgets(widgets: Vec<WidgetDescriptor>) -> Self {
        Self {
            registry: Rc::new(RefCell::new(widgets)),
        }
    }

    /// Appends one descriptor to the registry.
    pub fn insert(&self, widget: WidgetDescriptor) {
        self.registry.borrow_mut().push(widget);
    }
}

impl WidgetService for MemoryWidgetService {
    fn fetch_widget_registry<'a>(
        &'a self,
    ) -> BackendFuture<'a, Result<Vec<WidgetDescriptor>, String>> {
        Box::pin(async move { Ok(self.registry.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use shell_contract::WidgetId;

    use super::*;

    #[test]
    fn memory_service_preserves_registry_order() {
        let service = MemoryWidgetService::default();
        service.insert(WidgetDescriptor::new(WidgetId::trusted("@shell/toolbar")));
        service.insert(WidgetDescriptor::new(WidgetId::trusted("@shell/dock")));

        let service_obj: &dyn WidgetService = &service;
        let registry = block_on(service_obj.fetch_widget_registry()).expect("fetch");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry[0].id.as_str(), "@shell/toolbar");
        assert_eq!(registry[1].id.as_str(), "@shell/dock");
    }

    #[test]
    fn noop_service_returns_an_empty_registry() {
        let service_obj: &dyn WidgetService = &NoopWidgetService;
        let registry = block_on(service_obj.fetch_widget_registry()).expect("fetch");
        assert!(registry.is_empty());
    }
}

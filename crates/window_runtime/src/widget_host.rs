//! Resolves one window's designated widget and injects its content at startup.

use std::rc::Rc;

use platform_backend::WidgetService;
use shell_contract::{WidgetDescriptor, WidgetId, WindowIdentity};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while resolving or injecting widget content.
pub enum WidgetError {
    /// No registry entry matches the window's widget identity. Fatal: the
    /// window cannot proceed without its designated content.
    #[error("widget `{0}` is not present in the registry")]
    NotFound(WidgetId),
    /// The registry fetch failed.
    #[error("widget registry unavailable: {0}")]
    Registry(String),
    /// The execution environment rejected the widget's script payload.
    #[error("widget script failed: {0}")]
    Script(String),
}

/// Window content tree the widget host injects into.
///
/// Implementors own markup attachment, style application, and the execution
/// environment for script payloads — including whatever sandboxing that
/// environment enforces. The host only fixes when and in what order content
/// is handed off.
pub trait ContentTree {
    /// Replaces the content body with `markup`.
    fn replace_markup(&mut self, markup: &str);

    /// Appends `style` as a new presentation rule set.
    fn append_style(&mut self, style: &str);

    /// Appends and executes `script` as one module-scoped unit.
    ///
    /// Called only after the same widget's markup and style have taken
    /// effect, so the script may assume the markup it was authored against
    /// is present.
    ///
    /// # Errors
    ///
    /// Returns a message when the execution environment rejects the payload.
    fn run_script(&mut self, script: &str) -> Result<(), String>;
}

/// Returns the registry entry matching `widget_id`.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no entry matches.
pub fn resolve<'a>(
    widget_id: &WidgetId,
    registry: &'a [WidgetDescriptor],
) -> Result<&'a WidgetDescriptor, WidgetError> {
    registry
        .iter()
        .find(|widget| &widget.id == widget_id)
        .ok_or_else(|| WidgetError::NotFound(widget_id.clone()))
}

/// Injects `descriptor`'s payloads into `target`: markup, then style, then
/// script.
///
/// An absent payload skips that layer. The ordering is a hard contract —
/// script is handed off last so executable content observes the final
/// markup/style state.
///
/// # Errors
///
/// Returns [`WidgetError::Script`] when script execution is rejected.
pub fn inject(descriptor: &WidgetDescriptor, target: &mut dyn ContentTree) -> Result<(), WidgetError> {
    if let Some(markup) = &descriptor.markup {
        target.replace_markup(markup);
    }
    if let Some(style) = &descriptor.style {
        target.append_style(style);
    }
    if let Some(script) = &descriptor.script {
        target.run_script(script).map_err(WidgetError::Script)?;
    }
    Ok(())
}

/// Fetches the widget registry once and mounts one window's designated widget.
pub struct WidgetHost {
    widgets: Rc<dyn WidgetService>,
}

impl WidgetHost {
    /// Creates a host resolving widgets from `widgets`.
    pub fn new(widgets: Rc<dyn WidgetService>) -> Self {
        Self { widgets }
    }

    /// Fetches the registry, resolves the widget named by `identity`, and
    /// injects its content into `target`.
    ///
    /// Nothing is injected unless resolution succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Registry`] when the fetch fails,
    /// [`WidgetError::NotFound`] when the registry has no matching entry,
    /// and [`WidgetError::Script`] when script execution is rejected.
    pub async fn mount(
        &self,
        identity: &WindowIdentity,
        target: &mut dyn ContentTree,
    ) -> Result<WidgetDescriptor, WidgetError> {
        let registry = self
            .widgets
            .fetch_widget_registry()
            .await
            .map_err(WidgetError::Registry)?;
        let descriptor = resolve(&identity.widget_id, &registry)?.clone();
        inject(&descriptor, target)?;
        Ok(descriptor)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Content tree that drops all payloads, for stub compositions.
pub struct NoopContentTree;

impl ContentTree for NoopContentTree {
    fn replace_markup(&mut self, _markup: &str) {}

    fn append_style(&mut self, _style: &str) {}

    fn run_script(&mut self, _script: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One operation applied to a [`MemoryContentTree`], in application order.
pub enum ContentOp {
    /// Content body replaced.
    Markup(String),
    /// Presentation rule set appended.
    Style(String),
    /// Script executed; records the markup visible at execution time.
    Script {
        /// The script source handed off.
        source: String,
        /// Markup attached to the tree when the script ran, if any.
        markup_present: Option<String>,
    },
}

#[derive(Debug, Default)]
/// In-memory content tree recording applied operations in order.
pub struct MemoryContentTree {
    markup: Option<String>,
    ops: Vec<ContentOp>,
}

impl MemoryContentTree {
    /// Returns the operations applied so far, in order.
    pub fn ops(&self) -> &[ContentOp] {
        &self.ops
    }

    /// Returns the currently attached content body, if any.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }
}

impl ContentTree for MemoryContentTree {
    fn replace_markup(&mut self, markup: &str) {
        self.markup = Some(markup.to_string());
        self.ops.push(ContentOp::Markup(markup.to_string()));
    }

    fn append_style(&mut self, style: &str) {
        self.ops.push(ContentOp::Style(style.to_string()));
    }

    fn run_script(&mut self, script: &str) -> Result<(), String> {
        self.ops.push(ContentOp::Script {
            source: script.to_string(),
            markup_present: self.markup.clone(),
        });
        Ok(())
    }
}

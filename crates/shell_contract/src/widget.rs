//! Widget identity and content descriptors resolved by window processes at startup.

use serde::{Deserialize, Serialize};

/// Stable identifier for a widget resource, in the `@scope/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(String);

impl WidgetId {
    /// Returns a widget identifier when `raw` conforms to the `@scope/name` policy.
    ///
    /// # Errors
    ///
    /// Returns a message when `raw` is not a scoped widget identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_widget_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!("invalid widget id `{raw}`; expected `@scope/name`"))
        }
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_widget_id(raw: &str) -> bool {
    if raw.len() > 120 {
        return false;
    }

    let Some(rest) = raw.strip_prefix('@') else {
        return false;
    };
    let Some((scope, name)) = rest.split_once('/') else {
        return false;
    };

    [scope, name].iter().all(|part| {
        let bytes = part.as_bytes();
        !bytes.is_empty()
            && bytes.len() <= 48
            && bytes[0].is_ascii_lowercase()
            && bytes
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
            && !part.ends_with('-')
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One dynamically loaded piece of UI content, fetched from the registry.
///
/// A missing payload means there is nothing to inject for that layer, not an
/// error.
pub struct WidgetDescriptor {
    /// Registry-unique widget identifier.
    pub id: WidgetId,
    /// Structured content inserted as the window's content body.
    #[serde(default)]
    pub markup: Option<String>,
    /// Presentation rule set appended after the markup.
    #[serde(default)]
    pub style: Option<String>,
    /// Module-scoped executable logic, handed off after markup and style.
    #[serde(default)]
    pub script: Option<String>,
}

impl WidgetDescriptor {
    /// Creates a descriptor with no content payloads.
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            markup: None,
            style: None,
            script: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Identity supplied to one window process at launch.
pub struct WindowIdentity {
    /// The widget this window is designated to render.
    pub widget_id: WidgetId,
}

impl WindowIdentity {
    /// Parses the launch label supplied to a window process.
    ///
    /// Labels carry the widget identifier with an optional `?query` suffix
    /// used by the window manager for per-instance parameters.
    ///
    /// # Errors
    ///
    /// Returns a message when the label does not start with a valid widget
    /// identifier.
    pub fn from_label(label: &str) -> Result<Self, String> {
        let raw = match label.split_once('?') {
            Some((head, _)) => head,
            None => label,
        };
        WidgetId::new(raw).map(|widget_id| Self { widget_id })
    }
}

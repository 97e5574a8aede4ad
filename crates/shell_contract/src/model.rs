//! Versioned per-window state record and its defaulted field types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable handle identifying one managed native window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct WindowHandle(pub u64);

impl WindowHandle {
    /// Sentinel meaning "no window is focused".
    pub const NONE: WindowHandle = WindowHandle(0);

    /// Returns whether this handle is the [`WindowHandle::NONE`] sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Border drawn around the managed window that currently has focus.
pub struct BorderSettings {
    /// Whether the focus border is drawn at all.
    pub enabled: bool,
    /// Border stroke width in device-independent pixels.
    pub width: f64,
    /// Offset between the window frame and the border stroke.
    pub offset: f64,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 3.0,
            offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Size applied to windows forced out of the tiling layout.
pub struct FloatingWindowSettings {
    /// Floating window width in device-independent pixels.
    pub width: f64,
    /// Floating window height in device-independent pixels.
    pub height: f64,
}

impl Default for FloatingWindowSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Window-manager configuration synchronized from the backend.
pub struct WindowManagerSettings {
    /// Whether tiling window management is active.
    pub enabled: bool,
    /// Resize step applied by keyboard resize commands, in percent.
    pub resize_delta: f32,
    /// Gap between tiled windows in pixels.
    pub workspace_gap: u32,
    /// Padding between the workspace edge and tiled windows, in pixels.
    pub workspace_padding: u32,
    /// Focused-window border configuration.
    pub border: BorderSettings,
    /// Size for windows floated out of the layout.
    pub floating: FloatingWindowSettings,
    /// Identifier of the layout definition applied to new workspaces.
    pub default_layout: String,
}

impl Default for WindowManagerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            resize_delta: 10.0,
            workspace_gap: 10,
            workspace_padding: 10,
            border: BorderSettings::default(),
            floating: FloatingWindowSettings::default(),
            default_layout: "BSP".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Theme-derived color set pushed by the backend when the system theme changes.
pub struct UiColors {
    /// Window background color, hex.
    pub background: String,
    /// Primary text color, hex.
    pub foreground: String,
    /// Darker accent shade, hex.
    pub accent_dark: String,
    /// System accent color, hex.
    pub accent: String,
    /// Lighter accent shade, hex.
    pub accent_light: String,
    /// Whether the current system theme is a dark theme.
    pub is_dark_mode: bool,
}

impl Default for UiColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
            accent_dark: "#005a9e".to_string(),
            accent: "#0078d4".to_string(),
            accent_light: "#83beec".to_string(),
            is_dark_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pending placement reservation for the next window added to a workspace.
pub enum Reservation {
    /// Reserve the left half of the focused node.
    Left,
    /// Reserve the right half of the focused node.
    Right,
    /// Reserve the top half of the focused node.
    Top,
    /// Reserve the bottom half of the focused node.
    Bottom,
    /// Stack the next window onto the focused node.
    Stack,
    /// Float the next window instead of tiling it.
    Float,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Full state record held by one window's store at a point in time.
///
/// Replaced wholesale by field-level mutation; readers never observe a
/// partially-applied update.
pub struct StateSnapshot {
    /// Monotonically increasing local counter. Never decreases or resets for
    /// the lifetime of a store instance.
    pub version: u64,
    /// Opaque layout descriptor, absent until the backend publishes one.
    pub layout: Option<Value>,
    /// Window-manager configuration.
    pub settings: WindowManagerSettings,
    /// Theme-derived color set.
    pub colors: UiColors,
    /// Handle of the currently focused window.
    pub active_window: WindowHandle,
    /// Pending window placement reservation, if any.
    pub reservation: Option<Reservation>,
    /// Whether the workspace overlay is visible.
    pub overlay_visible: bool,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            version: 0,
            layout: None,
            settings: WindowManagerSettings::default(),
            colors: UiColors::default(),
            active_window: WindowHandle::NONE,
            reservation: None,
            overlay_visible: true,
        }
    }
}

//! Core component trait
//!
//! Every UI element that can be rendered implements `Component`.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking (which component receives input) and
/// event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// The quiz question widget (variants + action button)
    Quiz,
    /// Deck title and question position (non-focusable)
    #[allow(dead_code)]
    TitleBar,
    /// Keybind hints and score summary (non-focusable)
    #[allow(dead_code)]
    StatusBar,
}

impl ComponentId {
    /// Whether this component can receive focus
    #[allow(dead_code)]
    pub fn is_focusable(&self) -> bool {
        matches!(self, ComponentId::Quiz)
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need during render: no access to
/// mutable app state, so rendering stays pure.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Interactive components also implement [`super::Interactive`].
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

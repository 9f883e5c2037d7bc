//! Component trait system for the TUI
//!
//! Defines the contracts UI components implement. The App routes key
//! events to the focused component instead of knowing how every view
//! handles input.
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that handle keyboard input

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};

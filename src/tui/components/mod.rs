// UI components for the quiz TUI

pub mod button;
pub mod quiz_container;
pub mod status_bar;
pub mod title_bar;
pub mod variant_row;

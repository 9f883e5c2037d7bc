// Action button component
//
// A single button under the variant list: "Проверить ответ" while the
// question is in progress, "Пройти заново" once completed. Disabled
// whenever nothing is selected - the label and disabled flag arrive
// derived from the quiz model snapshot.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Derived props for the action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonProps {
    pub label: &'static str,
    pub disabled: bool,
}

/// Render the action button centered in its area
pub fn render(f: &mut Frame, area: Rect, props: &ButtonProps, focused: bool, theme: &Theme) {
    let (fg, border) = if props.disabled {
        (theme.button_disabled, theme.button_disabled)
    } else if focused {
        (theme.button, theme.border_focused)
    } else {
        (theme.button, theme.border)
    };

    let mut style = Style::default().fg(fg);
    if !props.disabled {
        style = style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(format!("[ {} ]", props.label))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );

    f.render_widget(button, area);
}

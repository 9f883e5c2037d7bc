// Title bar component
//
// Deck title, question position, and the active theme name.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let text = format!(
        " {} │ Вопрос {}/{} │ {}",
        app.deck.title,
        app.current_question() + 1,
        app.question_count(),
        app.theme.name(),
    );

    let title = Paragraph::new(text).style(
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, area);
}

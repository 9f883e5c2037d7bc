// Status bar component
//
// Keybind hints on the left, progress and score on the right. When the
// log buffer holds a recent warning it takes over the hint slot so deck
// problems are visible without leaving the quiz.

use crate::tui::app::App;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let progress = if app.completed_count() > 0 {
        format!(
            " отвечено {}/{} │ верно {}/{} ",
            app.answered_count(),
            app.question_count(),
            app.solved_count(),
            app.completed_count(),
        )
    } else {
        format!(" отвечено {}/{} ", app.answered_count(), app.question_count())
    };

    let line = match app.log_buffer.last_warning() {
        Some(entry) => Line::from(vec![
            Span::styled(format!(" ⚠ {} │", entry.message), Style::default().fg(theme.wrong)),
            Span::styled(progress, Style::default().fg(theme.status_bar)),
        ]),
        None => {
            let focus_hint = app.quiz.focus_hint().unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!(" {}  ←→:вопрос  t:тема  ?:справка  q:выход │", focus_hint),
                    Style::default().fg(theme.hint),
                ),
                Span::styled(progress, Style::default().fg(theme.status_bar)),
            ])
        }
    };

    f.render_widget(ratatui::widgets::Paragraph::new(line), area);
}

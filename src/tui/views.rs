// View rendering - top-level draw dispatch
//
// Splits the frame into title bar, content, and status bar, then renders
// the view the App currently shows.

use crate::tui::app::{App, View};
use crate::tui::components::{quiz_container, status_bar, title_bar};
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole UI for one frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(5),    // content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    match app.view {
        View::Quiz => {
            let theme = app.theme.theme();
            let ctx = RenderContext::new(&theme, ComponentId::Quiz);
            app.quiz.render(f, chunks[1], &ctx);
        }
        View::Help => draw_help(f, chunks[1], app),
    }

    status_bar::render(f, chunks[2], app);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let lines = vec![
        Line::from(""),
        Line::from("  ↑/↓, k/j     переместить курсор по вариантам"),
        Line::from("  Space        отметить / снять вариант"),
        Line::from(format!(
            "  Enter        кнопка: «{}» / «{}»",
            quiz_container::LABEL_CHECK,
            quiz_container::LABEL_RETAKE
        )),
        Line::from("  ←/→, p/n     предыдущий / следующий вопрос"),
        Line::from("  t            сменить тему"),
        Line::from("  ?            справка"),
        Line::from("  q            выход"),
    ];

    let help = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Справка "),
        );
    f.render_widget(help, area);
}

// Quiz container component
//
// The question widget: renders the question heading, the variant list,
// and the action button, delegating all quiz state to an externally
// owned model. The widget holds a non-owning handle; it forwards user
// intent (toggle a variant, toggle completion) and renders derived
// booleans, nothing more. Rendering never mutates the model.

use crate::deck::Variant;
use crate::model::{Listener, QuizModelHandle, QuizSnapshot, Subscription};
use crate::tui::components::{button, button::ButtonProps, variant_row, variant_row::VariantProps};
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Button label while the question is in progress
pub const LABEL_CHECK: &str = "Проверить ответ";

/// Button label once the question is completed (retake)
pub const LABEL_RETAKE: &str = "Пройти заново";

/// Widget configuration with explicit defaults.
///
/// `variants` defaults to empty (an absent list renders zero items and a
/// disabled button, not an error).
#[derive(Debug, Clone, Default)]
pub struct QuizContainerProps {
    /// Group identifier shared by the question's variants
    pub name: String,

    /// Question content rendered in the heading
    pub question: String,

    /// Ordered answer variants, indexed 0..n-1
    pub variants: Vec<Variant>,

    /// Declared by the original widget contract but never read during
    /// rendering; preserved as a no-op configuration field
    #[allow(dead_code)]
    pub completed: bool,
}

/// Fully derived render state: one row per variant plus the button.
///
/// Pure function of props and a model snapshot - this is what the tests
/// exercise without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView<'a> {
    pub rows: Vec<VariantProps<'a>>,
    pub button: ButtonProps,
}

/// Derive the rendered view from the widget props and a model snapshot
pub fn derive_view<'a>(props: &'a QuizContainerProps, snap: &QuizSnapshot) -> QuizView<'a> {
    let rows = props
        .variants
        .iter()
        .enumerate()
        .map(|(index, variant)| VariantProps {
            name: &props.name,
            variant,
            index,
            selected: snap.answers.contains(&index),
            completed: snap.is_complete,
            // Correctness is never shown before completion
            correct: snap.is_complete && snap.is_correct(index),
        })
        .collect();

    QuizView {
        rows,
        button: ButtonProps {
            disabled: snap.answers.is_empty(),
            label: if snap.is_complete {
                LABEL_RETAKE
            } else {
                LABEL_CHECK
            },
        },
    }
}

/// The quiz question widget.
///
/// Created per question instance; the model's lifetime is managed by the
/// application and may outlive any number of these widgets. The widget
/// subscribes to model changes on construction and unsubscribes on drop.
pub struct QuizContainer {
    props: QuizContainerProps,

    /// Non-owning handle to the externally owned quiz model
    model: QuizModelHandle,

    /// Keyboard cursor over the variant list (presentation state only,
    /// never part of the quiz state)
    cursor: usize,

    /// Dropped with the widget, removing the change listener
    _subscription: Subscription,
}

impl QuizContainer {
    /// Create a widget over `model`, registering `on_change` as the
    /// model's change listener (the host uses it to schedule a redraw).
    pub fn new(props: QuizContainerProps, model: QuizModelHandle, on_change: Listener) -> Self {
        let subscription = model.subscribe(on_change);
        Self {
            props,
            model,
            cursor: 0,
            _subscription: subscription,
        }
    }

    /// Forward a variant toggle to the model.
    ///
    /// No range validation happens here - out-of-range indices are the
    /// model's business.
    pub fn toggle_answer(&self, index: usize) {
        self.model.toggle_answer(index);
    }

    /// Activate the action button: flips completion unless the button is
    /// disabled (no answers selected).
    pub fn activate_button(&self) {
        if self.model.answers().is_empty() {
            return;
        }
        self.model.toggle_complete();
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_down(&mut self) {
        let max = self.props.variants.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }
}

impl Component for QuizContainer {
    fn id(&self) -> ComponentId {
        ComponentId::Quiz
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let snap = self.model.snapshot();
        let view = derive_view(&self.props, &snap);

        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.props.name));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // question heading
                Constraint::Min(1),    // variant list
                Constraint::Length(3), // action button
            ])
            .split(inner);

        let heading = Paragraph::new(self.props.question.as_str())
            .style(
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(heading, chunks[0]);

        let width = chunks[1].width;
        let items: Vec<ListItem> = view
            .rows
            .iter()
            .map(|row| {
                let under_cursor = focused && row.index == self.cursor;
                ListItem::new(variant_row::line(row, under_cursor, theme, width))
            })
            .collect();
        f.render_widget(List::new(items), chunks[1]);

        button::render(f, chunks[2], &view.button, focused, theme);
    }
}

impl Interactive for QuizContainer {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_up();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor_down();
                Handled::Yes
            }
            KeyCode::Char(' ') => {
                if !self.props.variants.is_empty() {
                    self.toggle_answer(self.cursor);
                }
                Handled::Yes
            }
            KeyCode::Enter => {
                self.activate_button();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:выбор  Space:отметить  Enter:кнопка")
    }
}

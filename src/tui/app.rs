// TUI application state
//
// The App owns what the widgets never do: the deck, one quiz model per
// question, and the widget for the question currently on screen. Moving
// between questions drops the old widget (unsubscribing its listener)
// and builds a new one over the same long-lived model.

use crate::config::Config;
use crate::deck::Deck;
use crate::logging::LogBuffer;
use crate::model::QuizModelHandle;
use crate::tui::components::quiz_container::{QuizContainer, QuizContainerProps};
use crate::tui::theme::ThemeKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Quiz,
    Help,
}

/// Main application state for the TUI
pub struct App {
    /// The loaded question deck
    pub deck: Deck,

    /// One quiz model per question; models outlive the widgets
    models: Vec<QuizModelHandle>,

    /// Widget for the question currently on screen
    pub quiz: QuizContainer,

    /// Index of the current question
    current: usize,

    /// Current view being displayed
    pub view: View,

    /// Current color theme
    pub theme: ThemeKind,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Captured logs (status bar shows the most recent warning)
    pub log_buffer: LogBuffer,

    /// Set by model change listeners and input handlers; the event loop
    /// draws only when this is set
    redraw: Arc<AtomicBool>,
}

impl App {
    pub fn new(deck: Deck, config: &Config, log_buffer: LogBuffer) -> Self {
        let models: Vec<QuizModelHandle> = deck
            .questions
            .iter()
            .map(|q| QuizModelHandle::new(q.correct.clone()))
            .collect();

        let redraw = Arc::new(AtomicBool::new(true));
        let quiz = Self::build_widget(&deck, &models, 0, &redraw);

        Self {
            deck,
            models,
            quiz,
            current: 0,
            view: View::default(),
            theme: ThemeKind::from_name(&config.theme),
            should_quit: false,
            log_buffer,
            redraw,
        }
    }

    /// Build the widget for question `index`, subscribed to its model
    fn build_widget(
        deck: &Deck,
        models: &[QuizModelHandle],
        index: usize,
        redraw: &Arc<AtomicBool>,
    ) -> QuizContainer {
        let question = &deck.questions[index];
        let props = QuizContainerProps {
            name: format!("Вопрос {}", index + 1),
            question: question.text.clone(),
            variants: question.variants.clone(),
            completed: false,
        };
        let flag = redraw.clone();
        QuizContainer::new(
            props,
            models[index].clone(),
            Arc::new(move || flag.store(true, Ordering::SeqCst)),
        )
    }

    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.deck.questions.len()
    }

    /// Move to the next question (wraps around)
    pub fn next_question(&mut self) {
        if self.question_count() > 1 {
            self.switch_to((self.current + 1) % self.question_count());
        }
    }

    /// Move to the previous question (wraps around)
    pub fn prev_question(&mut self) {
        let n = self.question_count();
        if n > 1 {
            self.switch_to((self.current + n - 1) % n);
        }
    }

    fn switch_to(&mut self, index: usize) {
        self.current = index;
        // Replacing the widget drops the old subscription with it
        self.quiz = Self::build_widget(&self.deck, &self.models, index, &self.redraw);
        self.request_redraw();
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
        self.request_redraw();
    }

    /// Toggle between the quiz and the help view
    pub fn toggle_help(&mut self) {
        self.view = match self.view {
            View::Quiz => View::Help,
            View::Help => View::Quiz,
        };
        self.request_redraw();
    }

    pub fn request_redraw(&self) {
        self.redraw.store(true, Ordering::SeqCst);
    }

    /// Consume the redraw flag; true means a frame should be drawn
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::SeqCst)
    }

    /// Questions with at least one selected answer
    pub fn answered_count(&self) -> usize {
        self.models.iter().filter(|m| !m.answers().is_empty()).count()
    }

    /// Questions the user has checked
    pub fn completed_count(&self) -> usize {
        self.models.iter().filter(|m| m.is_complete()).count()
    }

    /// Checked questions whose selection matches the correct set
    pub fn solved_count(&self) -> usize {
        self.models
            .iter()
            .filter(|m| m.is_complete() && m.is_solved())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Question, Variant};

    fn deck() -> Deck {
        let question = |text: &str, correct: Vec<usize>| Question {
            text: text.to_string(),
            variants: vec![
                Variant { text: "a".to_string() },
                Variant { text: "b".to_string() },
            ],
            correct,
        };
        Deck {
            title: "Тест".to_string(),
            questions: vec![question("q1", vec![0]), question("q2", vec![1])],
        }
    }

    fn app() -> App {
        App::new(deck(), &Config::default(), LogBuffer::new())
    }

    #[test]
    fn question_switching_wraps_both_directions() {
        let mut app = app();
        assert_eq!(app.current_question(), 0);
        app.next_question();
        assert_eq!(app.current_question(), 1);
        app.next_question();
        assert_eq!(app.current_question(), 0);
        app.prev_question();
        assert_eq!(app.current_question(), 1);
    }

    #[test]
    fn model_state_survives_question_switching() {
        let mut app = app();
        app.quiz.toggle_answer(0);
        app.next_question();
        app.prev_question();

        // Back on question 1, the selection is still there
        assert_eq!(app.answered_count(), 1);
        let snap = app.models[0].snapshot();
        assert_eq!(snap.answers, vec![0]);
    }

    #[test]
    fn model_mutation_requests_a_redraw() {
        let app = app();
        assert!(app.take_redraw()); // initial frame
        assert!(!app.take_redraw());

        app.quiz.toggle_answer(1);
        assert!(app.take_redraw());
    }

    #[test]
    fn score_counts_only_completed_questions() {
        let mut app = app();
        app.quiz.toggle_answer(0); // correct for q1
        assert_eq!(app.solved_count(), 0);

        app.quiz.activate_button();
        assert_eq!(app.completed_count(), 1);
        assert_eq!(app.solved_count(), 1);

        app.next_question();
        app.quiz.toggle_answer(0); // wrong for q2
        app.quiz.activate_button();
        assert_eq!(app.completed_count(), 2);
        assert_eq!(app.solved_count(), 1);
    }

    #[test]
    fn help_view_toggles() {
        let mut app = app();
        assert_eq!(app.view, View::Quiz);
        app.toggle_help();
        assert_eq!(app.view, View::Help);
        app.toggle_help();
        assert_eq!(app.view, View::Quiz);
    }
}

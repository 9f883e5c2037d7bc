// Quiz model - observable state for one question
//
// The model owns the mutable quiz state (selected answers, completion)
// and notifies subscribers after every mutation. Widgets hold a cloneable
// handle and re-derive their rendered output from a fresh read; they never
// own the model or mutate it outside toggle_answer/toggle_complete.

use std::sync::{Arc, Mutex, Weak};

/// Change listener invoked after any mutation of `answers` or `is_complete`.
///
/// Listeners are called outside the model lock, so they may read the model
/// again, but they should stay cheap (the TUI uses one to flag a redraw).
pub type Listener = Arc<dyn Fn() + Send + Sync + 'static>;

/// Quiz state for a single question.
///
/// `answers` keeps selection order: toggling an unselected index appends it,
/// toggling a selected index removes it. Completion is a plain flag that
/// cycles freely (check answer → retake → check again).
#[derive(Debug)]
pub struct QuizModel {
    /// Selected variant indices, in selection order
    answers: Vec<usize>,

    /// Whether the user has submitted/checked the answer
    complete: bool,

    /// Correct variant indices for this question (order irrelevant)
    correct: Vec<usize>,
}

impl QuizModel {
    pub fn new(correct: Vec<usize>) -> Self {
        Self {
            answers: Vec::new(),
            complete: false,
            correct,
        }
    }

    /// Selected indices in selection order
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the variant at `index` is a correct answer.
    ///
    /// Indices outside the question's variant range are simply not correct;
    /// the model does not reject them.
    pub fn is_correct(&self, index: usize) -> bool {
        self.correct.contains(&index)
    }

    /// Add `index` to the selection, or remove it if already selected
    pub fn toggle_answer(&mut self, index: usize) {
        if let Some(pos) = self.answers.iter().position(|&a| a == index) {
            self.answers.remove(pos);
        } else {
            self.answers.push(index);
        }
    }

    /// Flip completion (check answer ⇄ retake)
    pub fn toggle_complete(&mut self) {
        self.complete = !self.complete;
    }

    /// Whether the selection matches the correct set exactly.
    ///
    /// Used for the deck-wide score summary, not by the widget itself.
    pub fn is_solved(&self) -> bool {
        self.answers.len() == self.correct.len()
            && self.correct.iter().all(|c| self.answers.contains(c))
    }
}

/// Immutable snapshot of the observable fields, taken under the lock once
/// per render so derivation never sees a half-applied mutation.
#[derive(Debug, Clone)]
pub struct QuizSnapshot {
    pub answers: Vec<usize>,
    pub is_complete: bool,
    correct: Vec<usize>,
}

impl QuizSnapshot {
    pub fn is_correct(&self, index: usize) -> bool {
        self.correct.contains(&index)
    }
}

/// Inner shared state: the model plus its subscriber registry.
struct Shared {
    model: QuizModel,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Cloneable, non-owning handle to a quiz model.
///
/// The application owns the handles (one per question); widgets clone them.
/// All mutation goes through [`toggle_answer`](Self::toggle_answer) and
/// [`toggle_complete`](Self::toggle_complete), which notify subscribers
/// after releasing the lock.
#[derive(Clone)]
pub struct QuizModelHandle {
    inner: Arc<Mutex<Shared>>,
}

impl QuizModelHandle {
    pub fn new(correct: Vec<usize>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Shared {
                model: QuizModel::new(correct),
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    fn with_model<T>(&self, f: impl FnOnce(&QuizModel) -> T) -> T {
        let shared = self.inner.lock().unwrap();
        f(&shared.model)
    }

    /// Mutate the model, then notify every subscriber outside the lock
    fn mutate(&self, f: impl FnOnce(&mut QuizModel)) {
        let listeners: Vec<Listener> = {
            let mut shared = self.inner.lock().unwrap();
            f(&mut shared.model);
            shared.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener();
        }
    }

    pub fn answers(&self) -> Vec<usize> {
        self.with_model(|m| m.answers().to_vec())
    }

    pub fn is_complete(&self) -> bool {
        self.with_model(|m| m.is_complete())
    }

    pub fn is_correct(&self, index: usize) -> bool {
        self.with_model(|m| m.is_correct(index))
    }

    pub fn is_solved(&self) -> bool {
        self.with_model(|m| m.is_solved())
    }

    /// One consistent read of all observable fields
    pub fn snapshot(&self) -> QuizSnapshot {
        self.with_model(|m| QuizSnapshot {
            answers: m.answers.clone(),
            is_complete: m.complete,
            correct: m.correct.clone(),
        })
    }

    pub fn toggle_answer(&self, index: usize) {
        self.mutate(|m| m.toggle_answer(index));
    }

    pub fn toggle_complete(&self) {
        self.mutate(|m| m.toggle_complete());
    }

    /// Register a change listener.
    ///
    /// The returned [`Subscription`] unsubscribes when dropped, so a widget
    /// that holds it tears its listener down with itself.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let mut shared = self.inner.lock().unwrap();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.listeners.push((id, listener));
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }
}

/// Live registration of one change listener.
///
/// Dropping the subscription removes the listener. Holds only a weak
/// reference, so an outlived model is not kept alive by its observers.
pub struct Subscription {
    inner: Weak<Mutex<Shared>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut shared = inner.lock().unwrap();
            shared.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn toggle_answer_appends_in_selection_order() {
        let mut model = QuizModel::new(vec![0]);
        model.toggle_answer(2);
        model.toggle_answer(0);
        assert_eq!(model.answers(), &[2, 0]);
    }

    #[test]
    fn toggle_answer_removes_existing_selection() {
        let mut model = QuizModel::new(vec![0]);
        model.toggle_answer(1);
        model.toggle_answer(1);
        assert!(model.answers().is_empty());
    }

    #[test]
    fn toggle_complete_cycles_indefinitely() {
        let mut model = QuizModel::new(vec![]);
        assert!(!model.is_complete());
        model.toggle_complete();
        assert!(model.is_complete());
        model.toggle_complete();
        assert!(!model.is_complete());
    }

    #[test]
    fn is_correct_ignores_out_of_range_indices() {
        let model = QuizModel::new(vec![1]);
        assert!(model.is_correct(1));
        assert!(!model.is_correct(0));
        assert!(!model.is_correct(99));
    }

    #[test]
    fn is_solved_requires_exact_selection() {
        let mut model = QuizModel::new(vec![0, 2]);
        model.toggle_answer(0);
        assert!(!model.is_solved());
        model.toggle_answer(2);
        assert!(model.is_solved());
        model.toggle_answer(1);
        assert!(!model.is_solved());
    }

    #[test]
    fn subscribers_notified_once_per_mutation() {
        let handle = QuizModelHandle::new(vec![0]);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let _sub = handle.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        handle.toggle_answer(0);
        handle.toggle_complete();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let handle = QuizModelHandle::new(vec![]);
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let sub = handle.subscribe(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        handle.toggle_complete();
        drop(sub);
        handle.toggle_complete();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn snapshot_is_a_consistent_read() {
        let handle = QuizModelHandle::new(vec![1]);
        handle.toggle_answer(1);
        handle.toggle_complete();

        let snap = handle.snapshot();
        assert_eq!(snap.answers, vec![1]);
        assert!(snap.is_complete);
        assert!(snap.is_correct(1));
        assert!(!snap.is_correct(0));
    }

    #[test]
    fn listener_may_read_model_without_deadlock() {
        let handle = QuizModelHandle::new(vec![]);
        let reader = handle.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in = seen.clone();
        let _sub = handle.subscribe(Arc::new(move || {
            // Listeners run outside the lock, so a fresh read is fine
            seen_in.store(reader.answers().len(), Ordering::SeqCst);
        }));

        handle.toggle_answer(3);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}

use prep_core::filter::belongs_to;
use prep_core::model::{CourseCode, Question};

use super::progress::SessionProgress;
use super::view::{CardView, SessionView};

//
// ─── REVIEW SESSION ────────────────────────────────────────────────────────────
//

/// In-memory review session over the loaded library.
///
/// Holds the selected course, a cursor into the filtered sequence and the
/// solution-visibility flag. Every transition is a synchronous, total state
/// change: navigation saturates at the sequence boundaries instead of
/// wrapping, and an empty filtered sequence turns every operation into a
/// no-op. The front-end calls one operation per user action and redraws
/// from [`ReviewSession::view`].
pub struct ReviewSession {
    library: Vec<Question>,
    default_course: CourseCode,
    selected_course: CourseCode,
    /// Positions into `library` matching `selected_course`, in library order.
    filtered: Vec<usize>,
    current: usize,
    show_solution: bool,
}

impl ReviewSession {
    /// Start a session over `library` with `selected_course` active.
    ///
    /// `default_course` is the course that records without a `lesson` field
    /// belong to (the catalog's first entry).
    #[must_use]
    pub fn new(
        library: Vec<Question>,
        selected_course: CourseCode,
        default_course: CourseCode,
    ) -> Self {
        let mut session = Self {
            library,
            default_course,
            selected_course,
            filtered: Vec::new(),
            current: 0,
            show_solution: false,
        };
        session.refilter();
        session
    }

    fn refilter(&mut self) {
        self.filtered = self
            .library
            .iter()
            .enumerate()
            .filter(|(_, question)| {
                belongs_to(question, &self.selected_course, &self.default_course)
            })
            .map(|(position, _)| position)
            .collect();
    }

    #[must_use]
    pub fn selected_course(&self) -> &CourseCode {
        &self.selected_course
    }

    /// Length of the filtered sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[must_use]
    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.filtered
            .get(self.current)
            .map(|&position| &self.library[position])
    }

    /// Advance to the next record. Saturates at the last index; a move hides
    /// the solution again.
    pub fn next(&mut self) {
        if self.current + 1 < self.filtered.len() {
            self.current += 1;
            self.show_solution = false;
        }
    }

    /// Step back to the previous record. Saturates at the first index; a
    /// move hides the solution again.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.show_solution = false;
        }
    }

    /// Reveal or hide the current record's solution. Never moves the cursor;
    /// disabled while the filtered sequence is empty.
    pub fn toggle_solution(&mut self) {
        if !self.filtered.is_empty() {
            self.show_solution = !self.show_solution;
        }
    }

    /// Switch the selected course: re-filters and resets cursor and
    /// solution flag.
    pub fn select_course(&mut self, course: CourseCode) {
        self.selected_course = course;
        self.refilter();
        self.current = 0;
        self.show_solution = false;
    }

    /// Replace the library, e.g. after an explicit reload.
    ///
    /// The cursor survives when it still points inside the new filtered
    /// sequence and resets to the start otherwise; the solution is hidden
    /// either way since "current record" may now mean something else.
    pub fn reload(&mut self, library: Vec<Question>) {
        self.library = library;
        self.refilter();
        if self.current >= self.filtered.len() {
            self.current = 0;
        }
        self.show_solution = false;
    }

    /// Returns a summary of the cursor position within the filtered
    /// sequence.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: if self.filtered.is_empty() {
                0
            } else {
                self.current + 1
            },
            total: self.filtered.len(),
        }
    }

    /// Snapshot for the front-end to redraw from.
    #[must_use]
    pub fn view(&self) -> SessionView {
        match self.current_question() {
            None => SessionView::Empty {
                course: self.selected_course.clone(),
            },
            Some(question) => SessionView::Card(CardView {
                topic: question.topic_or_default().to_owned(),
                prompt: question.prompt().to_owned(),
                solution: self
                    .show_solution
                    .then(|| question.solution().to_owned()),
                position: self.current + 1,
                total: self.filtered.len(),
            }),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

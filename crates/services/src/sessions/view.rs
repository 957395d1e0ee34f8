use prep_core::model::CourseCode;

/// Presentation-agnostic snapshot of the current session state.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings beyond the record's own text
/// - no styling or markup assumptions
///
/// The front-end decides how to render topics, prompts and the revealed
/// solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// A record is selected.
    Card(CardView),
    /// The filtered sequence has no records for the selected course; the
    /// front-end should show guidance to add matching records.
    Empty { course: CourseCode },
}

impl SessionView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, SessionView::Empty { .. })
    }
}

/// The current record with its position in the filtered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Topic label, already defaulted for records that carry none.
    pub topic: String,
    pub prompt: String,
    /// Present only while the solution is revealed.
    pub solution: Option<String>,
    /// 1-based position within the filtered sequence.
    pub position: usize,
    pub total: usize,
}

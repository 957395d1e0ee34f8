//! Course filtering over the loaded library.

use crate::model::{CourseCode, Question};

/// Whether a record belongs to `course`.
///
/// Records that name no course belong to `default_course`.
#[must_use]
pub fn belongs_to(question: &Question, course: &CourseCode, default_course: &CourseCode) -> bool {
    match question.course() {
        Some(own) => own == course,
        None => course == default_course,
    }
}

/// Returns, in original relative order, every record belonging to `course`.
///
/// The input is never mutated; the output is a fresh view over it.
#[must_use]
pub fn filter_by_course<'a>(
    questions: &'a [Question],
    course: &CourseCode,
    default_course: &CourseCode,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|question| belongs_to(question, course, default_course))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionDraft, QuestionId};

    fn question(id: u64, course: Option<&str>) -> Question {
        let mut draft = QuestionDraft::new(format!("Q{id}"), format!("A{id}"));
        if let Some(course) = course {
            draft = draft.with_course(CourseCode::new(course).unwrap());
        }
        draft.validate().unwrap().assign_id(QuestionId::new(id))
    }

    fn code(s: &str) -> CourseCode {
        CourseCode::new(s).unwrap()
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let library = vec![
            question(1, Some("IE553")),
            question(2, Some("IE455")),
            question(3, Some("IE553")),
        ];

        let filtered = filter_by_course(&library, &code("IE553"), &code("IE553"));
        let ids: Vec<u64> = filtered.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn records_without_course_belong_to_the_default() {
        let library = vec![question(1, None), question(2, Some("IE455"))];

        let under_default = filter_by_course(&library, &code("IE553"), &code("IE553"));
        assert_eq!(under_default.len(), 1);
        assert_eq!(under_default[0].id(), QuestionId::new(1));

        // Selecting a non-default course must exclude courseless records.
        let under_other = filter_by_course(&library, &code("IE455"), &code("IE553"));
        assert_eq!(under_other.len(), 1);
        assert_eq!(under_other[0].id(), QuestionId::new(2));
    }

    #[test]
    fn filter_can_come_back_empty() {
        let library = vec![question(1, Some("IE553"))];
        let filtered = filter_by_course(&library, &code("IE455"), &code("IE553"));
        assert!(filtered.is_empty());
    }
}

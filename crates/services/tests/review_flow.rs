use std::sync::Arc;

use services::{LibraryService, ReviewSession, SessionView, default_catalog};
use storage::repository::{InMemoryStore, QuestionStore};

#[tokio::test]
async fn seed_load_filter_and_navigate() {
    let store = InMemoryStore::new();
    let library_svc = LibraryService::new(Arc::new(store.clone()));
    let catalog = default_catalog();

    // First run: the store is absent, so the built-in set is seeded.
    let library = library_svc.load_or_seed().await.unwrap();
    assert!(!library.is_empty());
    assert_eq!(store.save_count(), 1);

    let mut session = ReviewSession::new(
        library,
        catalog.default_course().clone(),
        catalog.default_course().clone(),
    );

    // The default course has records and starts on the first one, hidden.
    let first = match session.view() {
        SessionView::Card(card) => card,
        other => panic!("expected a card, got {other:?}"),
    };
    assert_eq!(first.position, 1);
    assert!(first.solution.is_none());

    // Reveal, then move: the reveal must not survive the move.
    session.toggle_solution();
    session.next();
    match session.view() {
        SessionView::Card(card) => {
            assert_eq!(card.position, 2);
            assert!(card.solution.is_none());
        }
        other => panic!("expected a card, got {other:?}"),
    }

    // Switch to the other catalog course and walk to its end.
    let other_course = catalog.codes()[1].clone();
    session.select_course(other_course.clone());
    assert!(!session.is_empty());
    let total = session.len();
    for _ in 0..total + 3 {
        session.next();
    }
    match session.view() {
        SessionView::Card(card) => {
            assert_eq!(card.position, total);
            assert_eq!(card.total, total);
        }
        other => panic!("expected a card, got {other:?}"),
    }

    // A second startup merges nothing and writes nothing.
    let reloaded = library_svc.load_or_seed().await.unwrap();
    assert_eq!(store.save_count(), 1);
    assert_eq!(reloaded, store.load_all().await.unwrap());
}

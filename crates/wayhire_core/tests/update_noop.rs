use wayhire_core::{update, AppState, Msg};

#[test]
fn closing_absent_notice_or_form_changes_nothing() {
    let mut state = AppState::new();
    for msg in [Msg::NoticeDismissed, Msg::ApplyCancelled, Msg::ApplySubmitted] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
        state = next;
    }
    assert!(!state.consume_dirty());
}

#[test]
fn scroll_without_search_does_nothing() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::Scrolled(wayhire_core::ScrollMetrics::default()),
    );

    assert!(effects.is_empty());
    assert_eq!(next.view().total_jobs, 0);
    assert_eq!(next.view().empty_message, None);
}

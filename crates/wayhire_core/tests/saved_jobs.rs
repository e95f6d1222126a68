use wayhire_core::{
    update, AppState, AppliedJobIds, Effect, FetchRequest, JobPosting, Msg, SaveToggle,
    SavedJobSet, SearchResultPage,
};

fn job(id: &str) -> JobPosting {
    JobPosting::new(id, format!("Title {id}"), format!("Employer {id}"))
}

fn ids(set: &SavedJobSet) -> Vec<&str> {
    set.jobs().iter().map(|j| j.job_id.as_str()).collect()
}

fn listing_with(jobs: Vec<JobPosting>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::SearchInputChanged("q".into()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let request: FetchRequest = match &effects[..] {
        [Effect::FetchPage(request)] => request.clone(),
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request,
            result: Some(SearchResultPage::ok(jobs)),
        },
    );
    state
}

#[test]
fn toggle_prepends_and_removes() {
    let mut saved = SavedJobSet::default();
    assert_eq!(saved.toggle(job("a")), SaveToggle::Saved);
    assert_eq!(saved.toggle(job("b")), SaveToggle::Saved);
    assert_eq!(ids(&saved), vec!["b", "a"]);

    assert_eq!(saved.toggle(job("a")), SaveToggle::Removed);
    assert_eq!(ids(&saved), vec!["b"]);
}

#[test]
fn toggling_twice_restores_membership_and_order() {
    let mut saved = SavedJobSet::from_persisted(vec![job("c"), job("b"), job("a")]);
    let before = saved.clone();

    saved.toggle(job("z"));
    saved.toggle(job("z"));
    assert_eq!(saved, before);

    saved.toggle(job("c"));
    saved.toggle(job("c"));
    assert_eq!(ids(&saved), vec!["c", "b", "a"]);
}

#[test]
fn saving_present_id_is_noop() {
    let mut saved = SavedJobSet::default();
    assert!(saved.save(job("a")));
    assert!(!saved.save(job("a")));
    assert_eq!(saved.len(), 1);
    assert!(saved.remove("missing").is_none());
}

#[test]
fn persisted_duplicates_are_collapsed() {
    let saved = SavedJobSet::from_persisted(vec![job("a"), job("b"), job("a")]);
    assert_eq!(ids(&saved), vec!["a", "b"]);

    let applied = AppliedJobIds::from_persisted(vec!["x".into(), "y".into(), "x".into()]);
    assert_eq!(applied.ids(), ["x", "y"]);
}

#[test]
fn applied_add_is_idempotent() {
    let mut applied = AppliedJobIds::default();
    assert!(applied.add("a"));
    assert!(applied.add("b"));
    assert!(!applied.add("a"));
    assert_eq!(applied.ids(), ["a", "b"]);
    assert!(applied.contains("b"));
}

#[test]
fn save_toggle_persists_whole_collection() {
    let state = listing_with(vec![job("a"), job("b")]);

    let (state, effects) = update(state, Msg::SaveToggled { job_id: "a".into() });
    assert_eq!(
        effects,
        vec![Effect::PersistSavedJobs {
            jobs: vec![job("a")]
        }]
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Job saved successfully! Title a at Employer a")
    );

    let (state, effects) = update(state, Msg::SaveToggled { job_id: "b".into() });
    assert_eq!(
        effects,
        vec![Effect::PersistSavedJobs {
            jobs: vec![job("b"), job("a")]
        }]
    );

    let (state, effects) = update(state, Msg::SaveToggled { job_id: "a".into() });
    assert_eq!(
        effects,
        vec![Effect::PersistSavedJobs {
            jobs: vec![job("b")]
        }]
    );
    assert_eq!(
        state.view().notice.as_deref(),
        Some("Job removed from saved! Title a at Employer a")
    );
    assert!(!state.view().jobs[0].is_saved);
    assert!(state.view().jobs[1].is_saved);
}

#[test]
fn saved_job_outside_listing_can_be_unsaved() {
    let (state, _) = update(AppState::new(), Msg::RestoreSavedJobs(vec![job("old")]));
    assert_eq!(state.view().saved_jobs.len(), 1);

    let (state, effects) = update(state, Msg::SaveToggled { job_id: "old".into() });
    assert_eq!(effects, vec![Effect::PersistSavedJobs { jobs: Vec::new() }]);
    assert!(state.view().saved_jobs.is_empty());
}

#[test]
fn unknown_job_cannot_be_saved() {
    let state = listing_with(vec![job("a")]);
    let (state, effects) = update(state, Msg::SaveToggled { job_id: "zzz".into() });
    assert!(effects.is_empty());
    assert!(state.saved_jobs().is_empty());
}

#[test]
fn restore_does_not_write_back() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RestoreAppliedJobs(vec!["a".into(), "b".into()]),
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().applied_count, 2);
}

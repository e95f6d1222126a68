use crate::{
    AppState, AppliedJobIds, ApplyForm, Effect, FetchKind, FetchOutcome, Msg, SaveToggle,
    SavedJobSet,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchInputChanged(text) => {
            state.search_input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let query = state.search_input.clone();
            match state.listing.begin_search(&query) {
                Some(request) => {
                    state.selected = None;
                    state.trigger.rearm();
                    state.mark_dirty();
                    vec![Effect::FetchPage(request)]
                }
                None => Vec::new(),
            }
        }
        Msg::Scrolled(metrics) => {
            state.trigger.observe(metrics);
            if !state.trigger.take_pending() {
                return (state, Vec::new());
            }
            match state.listing.begin_load_more() {
                Some(request) => {
                    state.mark_dirty();
                    vec![Effect::FetchPage(request)]
                }
                None => Vec::new(),
            }
        }
        Msg::PageLoaded { request, result } => {
            let outcome = state.listing.complete(&request, result);
            if outcome == FetchOutcome::Stale {
                return (state, Vec::new());
            }
            state.trigger.rearm();
            if request.kind == FetchKind::Search {
                state.selected = state
                    .listing
                    .jobs()
                    .first()
                    .map(|job| job.job_id.clone());
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::JobSelected { job_id } => {
            if state.find_job(&job_id).is_some() {
                state.selected = Some(job_id);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilterToggled(tag) => {
            if !state.filters.remove(&tag) {
                state.filters.insert(tag);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::FiltersCleared => {
            if !state.filters.is_empty() {
                state.filters.clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SaveToggled { job_id } => {
            let Some(job) = state.find_job(&job_id).cloned() else {
                return (state, Vec::new());
            };
            let summary = format!("{} at {}", job.title, job.employer_name);
            let notice = match state.saved.toggle(job) {
                SaveToggle::Saved => format!("Job saved successfully! {summary}"),
                SaveToggle::Removed => format!("Job removed from saved! {summary}"),
            };
            state.notice = Some(notice);
            state.mark_dirty();
            vec![Effect::PersistSavedJobs {
                jobs: state.saved.jobs().to_vec(),
            }]
        }
        Msg::RestoreSavedJobs(jobs) => {
            state.saved = SavedJobSet::from_persisted(jobs);
            state.mark_dirty();
            Vec::new()
        }
        Msg::RestoreAppliedJobs(job_ids) => {
            state.applied = AppliedJobIds::from_persisted(job_ids);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ApplyOpened { job_id } => {
            if state.find_job(&job_id).is_some() {
                state.apply_form = Some(ApplyForm::new(job_id));
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ApplyInput(input) => {
            if let Some(form) = state.apply_form.as_mut() {
                form.set(input);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ApplySubmitted => submit_application(&mut state),
        Msg::ApplyCancelled => {
            if state.apply_form.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            if state.notice.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn submit_application(state: &mut AppState) -> Vec<Effect> {
    let submitted = match state.apply_form.as_mut() {
        Some(form) => form.submit().map(|()| form.job_id().to_string()),
        None => return Vec::new(),
    };
    state.mark_dirty();
    let Ok(job_id) = submitted else {
        return Vec::new();
    };

    let title = state
        .find_job(&job_id)
        .map(|job| job.title.clone())
        .unwrap_or_else(|| job_id.clone());
    state.apply_form = None;
    state.notice = Some(format!("You have successfully applied for {title}."));

    if state.applied.add(job_id) {
        vec![Effect::PersistAppliedJobs {
            job_ids: state.applied.ids().to_vec(),
        }]
    } else {
        Vec::new()
    }
}

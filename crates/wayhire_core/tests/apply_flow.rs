use wayhire_core::{
    update, AppState, ApplyField, ApplyInput, Effect, JobPosting, Msg, ResumeFile,
    MAX_RESUME_BYTES,
};

fn state_with_saved_job() -> AppState {
    let job = JobPosting::new("job-1", "Frontend Developer", "Acme");
    let (state, _) = update(AppState::new(), Msg::RestoreSavedJobs(vec![job]));
    state
}

fn pdf(size_bytes: u64) -> ResumeFile {
    ResumeFile {
        file_name: "resume.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        size_bytes,
    }
}

fn filled_form(resume: ResumeFile) -> AppState {
    let (mut state, _) = update(
        state_with_saved_job(),
        Msg::ApplyOpened {
            job_id: "job-1".into(),
        },
    );
    for input in [
        ApplyInput::Name("Ada Lovelace".into()),
        ApplyInput::Email("ada@example.com".into()),
        ApplyInput::Linkedin("https://www.linkedin.com/in/ada".into()),
        ApplyInput::Resume(Some(resume.clone())),
    ] {
        let (next, effects) = update(state, Msg::ApplyInput(input));
        assert!(effects.is_empty());
        state = next;
    }
    state
}

#[test]
fn valid_application_records_job_id() {
    let state = filled_form(pdf(120 * 1024));
    let (state, effects) = update(state, Msg::ApplySubmitted);

    assert_eq!(
        effects,
        vec![Effect::PersistAppliedJobs {
            job_ids: vec!["job-1".to_string()]
        }]
    );
    let view = state.view();
    assert!(view.apply_form.is_none());
    assert_eq!(view.applied_count, 1);
    assert!(view.saved_jobs[0].is_applied);
    assert_eq!(
        view.notice.as_deref(),
        Some("You have successfully applied for Frontend Developer.")
    );
}

#[test]
fn non_pdf_resume_blocks_submission() {
    let resume = ResumeFile {
        file_name: "resume.docx".to_string(),
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            .to_string(),
        size_bytes: 10_000,
    };
    let state = filled_form(resume);
    let (state, effects) = update(state, Msg::ApplySubmitted);

    assert!(effects.is_empty());
    assert!(state.applied_jobs().ids().is_empty());
    let form = state.view().apply_form.expect("form stays open");
    assert_eq!(form.error(ApplyField::Resume), Some("Only PDF files are allowed."));
    assert_eq!(form.errors.len(), 1);
}

#[test]
fn oversized_resume_blocks_submission() {
    let state = filled_form(pdf(MAX_RESUME_BYTES + 1));
    let (state, effects) = update(state, Msg::ApplySubmitted);
    assert!(effects.is_empty());
    assert_eq!(
        state.view().apply_form.unwrap().error(ApplyField::Resume),
        Some("File size cannot exceed 200KB.")
    );

    let state = filled_form(pdf(MAX_RESUME_BYTES));
    let (_, effects) = update(state, Msg::ApplySubmitted);
    assert_eq!(effects.len(), 1);
}

#[test]
fn empty_form_reports_every_required_field() {
    let (state, _) = update(
        state_with_saved_job(),
        Msg::ApplyOpened {
            job_id: "job-1".into(),
        },
    );
    let (state, effects) = update(state, Msg::ApplySubmitted);
    assert!(effects.is_empty());

    let form = state.view().apply_form.unwrap();
    assert_eq!(form.error(ApplyField::Name), Some("Name is required"));
    assert_eq!(form.error(ApplyField::Email), Some("Email is required"));
    assert_eq!(form.error(ApplyField::Linkedin), Some("LinkedIn URL is required"));
    assert_eq!(form.error(ApplyField::Resume), Some("Resume is required"));
}

#[test]
fn malformed_email_and_url_are_reported() {
    let state = filled_form(pdf(1024));
    let (state, _) = update(state, Msg::ApplyInput(ApplyInput::Email("ada-at-example".into())));
    let (state, _) = update(state, Msg::ApplyInput(ApplyInput::Linkedin("linkedin/ada".into())));
    let (state, effects) = update(state, Msg::ApplySubmitted);

    assert!(effects.is_empty());
    let form = state.view().apply_form.unwrap();
    assert_eq!(form.error(ApplyField::Email), Some("Email is invalid"));
    assert_eq!(form.error(ApplyField::Linkedin), Some("LinkedIn URL is invalid"));
    assert_eq!(form.error(ApplyField::Name), None);
}

#[test]
fn cancel_discards_form() {
    let state = filled_form(pdf(1024));
    let (state, effects) = update(state, Msg::ApplyCancelled);
    assert!(effects.is_empty());
    assert!(state.view().apply_form.is_none());

    let (state, _) = update(
        state,
        Msg::ApplyOpened {
            job_id: "job-1".into(),
        },
    );
    let form = state.view().apply_form.unwrap();
    assert!(form.name.is_empty());
    assert!(form.resume_name.is_none());
}

#[test]
fn applying_twice_writes_once() {
    let state = filled_form(pdf(1024));
    let (state, effects) = update(state, Msg::ApplySubmitted);
    assert_eq!(effects.len(), 1);

    let (mut state, _) = update(
        state,
        Msg::ApplyOpened {
            job_id: "job-1".into(),
        },
    );
    if let Some(form) = state.apply_form() {
        assert_eq!(form.job_id(), "job-1");
    }
    for input in [
        ApplyInput::Name("Ada".into()),
        ApplyInput::Email("ada@example.com".into()),
        ApplyInput::Linkedin("https://linkedin.com/in/ada".into()),
        ApplyInput::Resume(Some(pdf(1024))),
    ] {
        state = update(state, Msg::ApplyInput(input)).0;
    }
    let (state, effects) = update(state, Msg::ApplySubmitted);
    assert!(effects.is_empty());
    assert_eq!(state.applied_jobs().ids(), ["job-1"]);
}

#[test]
fn unknown_job_does_not_open_form() {
    let (state, _) = update(
        AppState::new(),
        Msg::ApplyOpened {
            job_id: "ghost".into(),
        },
    );
    assert!(state.apply_form().is_none());
}

use chrono::{DateTime, Utc};
use wayhire_core::{
    AppViewModel, ApplyField, ApplyFormView, FilterTag, JobDetailView, JobRowView, ListingPhase,
};

use super::constants::DESCRIPTION_PREVIEW_CHARS;
use super::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Listing,
    Saved,
}

pub struct RenderContext<'a> {
    pub screen: Screen,
    pub viewport: &'a Viewport,
    pub status: Option<&'a str>,
    pub now: DateTime<Utc>,
}

pub fn render(view: &AppViewModel, ctx: &RenderContext<'_>) -> Vec<String> {
    let mut lines = Vec::new();

    match ctx.screen {
        Screen::Listing => render_listing(view, ctx, &mut lines),
        Screen::Saved => render_saved(view, ctx, &mut lines),
    }

    if let Some(detail) = &view.selected {
        lines.push(String::new());
        render_detail(detail, ctx.now, &mut lines);
    }

    if let Some(form) = &view.apply_form {
        lines.push(String::new());
        render_form(form, &mut lines);
    }

    lines.push(String::new());
    if let Some(notice) = &view.notice {
        lines.push(format!("* {notice}  (ok to dismiss)"));
    }
    if let Some(status) = ctx.status {
        lines.push(status.to_string());
    }
    lines.push("> ".to_string());
    lines
}

fn render_listing(view: &AppViewModel, ctx: &RenderContext<'_>, lines: &mut Vec<String>) {
    let header = if view.query.is_empty() {
        "Job search".to_string()
    } else {
        format!(
            "Jobs for \"{}\" | {} loaded | page {} | {}",
            view.query,
            view.total_jobs,
            view.page,
            if view.has_more { "more available" } else { "end of results" }
        )
    };
    lines.push(header);
    lines.push(filter_line(&view.active_filters));
    lines.push("-".repeat(72));

    if view.phase == ListingPhase::Searching {
        lines.push("Searching...".to_string());
        return;
    }
    if let Some(message) = view.empty_message {
        lines.push(message.to_string());
        return;
    }

    let range = ctx.viewport.visible_rows(view.jobs.len());
    for (index, row) in view.jobs.iter().enumerate().take(range.end).skip(range.start) {
        lines.push(row_line(index + 1, row));
    }
    if range.end < view.jobs.len() {
        lines.push(format!("  ... {} more below", view.jobs.len() - range.end));
    }
    match view.phase {
        ListingPhase::LoadingMore => lines.push("Loading more jobs...".to_string()),
        _ if !view.has_more && range.end == view.jobs.len() => {
            lines.push("No more jobs to load.".to_string())
        }
        _ => {}
    }
}

fn render_saved(view: &AppViewModel, _ctx: &RenderContext<'_>, lines: &mut Vec<String>) {
    lines.push(format!(
        "Saved jobs | {} saved | {} applied",
        view.saved_jobs.len(),
        view.applied_count
    ));
    lines.push("-".repeat(72));
    if view.saved_jobs.is_empty() {
        lines.push("No saved jobs yet. Use `save` on a listing.".to_string());
        return;
    }
    for (index, row) in view.saved_jobs.iter().enumerate() {
        lines.push(row_line(index + 1, row));
    }
}

fn filter_line(active: &[FilterTag]) -> String {
    let boxes: Vec<String> = FilterTag::ALL
        .iter()
        .map(|tag| {
            let mark = if active.contains(tag) { 'x' } else { ' ' };
            format!("[{mark}] {tag}")
        })
        .collect();
    format!("Filters: {}", boxes.join("  "))
}

fn row_line(number: usize, row: &JobRowView) -> String {
    let cursor = if row.is_selected { '>' } else { ' ' };
    let mut line = format!(
        "{cursor}{number:>3}. {} | {} | {} | {}",
        row.title, row.employer, row.location, row.salary
    );
    if let Some(period) = &row.salary_period {
        if row.salary != "N/A" {
            line.push(' ');
            line.push_str(&period.to_ascii_lowercase());
        }
    }
    if row.is_remote {
        line.push_str(" [remote]");
    }
    if row.is_saved {
        line.push_str(" [saved]");
    }
    if row.is_applied {
        line.push_str(" [applied]");
    }
    line
}

fn render_detail(detail: &JobDetailView, now: DateTime<Utc>, lines: &mut Vec<String>) {
    let row = &detail.row;
    lines.push(format!("{} at {}", row.title, row.employer));
    if let Some(company_type) = &detail.company_type {
        lines.push(format!("  {company_type}"));
    }
    let mut meta = vec![row.location.clone()];
    if !row.employment_type.is_empty() {
        meta.push(row.employment_type.clone());
    }
    if let Some(posted) = row.posted_at {
        meta.push(posted_label(posted, now));
    }
    lines.push(format!("  {}", meta.join(" | ")));
    if row.is_applied {
        lines.push("  You applied to this job.".to_string());
    }

    if !detail.description.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "  {}",
            preview(&detail.description, DESCRIPTION_PREVIEW_CHARS)
        ));
    }
    for (title, items) in [
        ("Qualifications", &detail.qualifications),
        ("Responsibilities", &detail.responsibilities),
        ("Benefits", &detail.benefits),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(format!("  {title}:"));
        lines.extend(items.iter().map(|item| format!("    - {item}")));
    }
    if let Some(link) = &detail.apply_link {
        lines.push(format!("  Apply link: {link}"));
    }
}

fn render_form(form: &ApplyFormView, lines: &mut Vec<String>) {
    lines.push(format!("Apply for {}", form.job_title));
    let fields = [
        (ApplyField::Name, "Name", form.name.clone()),
        (ApplyField::Email, "Email", form.email.clone()),
        (ApplyField::Linkedin, "LinkedIn", form.linkedin.clone()),
        (
            ApplyField::Resume,
            "Resume",
            form.resume_name.clone().unwrap_or_default(),
        ),
    ];
    for (field, label, value) in fields {
        lines.push(format!("  {label:<9} {value}"));
        if let Some(error) = form.error(field) {
            lines.push(format!("            ! {error}"));
        }
    }
    lines.push("  submit | cancel".to_string());
}

pub fn posted_label(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - posted).num_days() {
        days if days <= 0 => "Posted today".to_string(),
        1 => "Posted 1 day ago".to_string(),
        days => format!("Posted {days} days ago"),
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn row(id: &str) -> JobRowView {
        JobRowView {
            job_id: id.to_string(),
            title: format!("Title {id}"),
            employer: "Acme".to_string(),
            location: "Austin, TX".to_string(),
            salary: "N/A".to_string(),
            salary_period: Some("YEAR".to_string()),
            employment_type: "FULLTIME".to_string(),
            is_remote: false,
            posted_at: None,
            is_selected: false,
            is_saved: false,
            is_applied: false,
        }
    }

    fn ctx(viewport: &Viewport) -> RenderContext<'_> {
        RenderContext {
            screen: Screen::Listing,
            viewport,
            status: None,
            now: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn posted_label_counts_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(posted_label(now - Duration::hours(3), now), "Posted today");
        assert_eq!(posted_label(now - Duration::days(1), now), "Posted 1 day ago");
        assert_eq!(posted_label(now - Duration::days(9), now), "Posted 9 days ago");
        assert_eq!(posted_label(now + Duration::days(1), now), "Posted today");
    }

    #[test]
    fn row_line_shows_markers() {
        let mut r = row("a");
        r.is_selected = true;
        r.is_saved = true;
        r.is_remote = true;
        let line = row_line(1, &r);
        assert!(line.starts_with(">  1. Title a | Acme"));
        assert!(line.ends_with("[remote] [saved]"));
        assert!(!line.contains("year"));
    }

    #[test]
    fn listing_renders_only_visible_window() {
        let view = AppViewModel {
            query: "rust".to_string(),
            total_jobs: 25,
            has_more: true,
            page: 3,
            jobs: (1..=25).map(|n| row(&n.to_string())).collect(),
            ..AppViewModel::default()
        };
        let viewport = Viewport::default();
        let lines = render(&view, &ctx(&viewport));

        assert!(lines[0].contains("25 loaded"));
        assert!(lines.iter().any(|l| l.contains("Title 10 |")));
        assert!(!lines.iter().any(|l| l.contains("Title 11 |")));
        assert!(lines.iter().any(|l| l.contains("15 more below")));
    }

    #[test]
    fn empty_message_replaces_rows() {
        let view = AppViewModel {
            query: "rust".to_string(),
            empty_message: Some(wayhire_core::EMPTY_FAILED),
            ..AppViewModel::default()
        };
        let viewport = Viewport::default();
        let lines = render(&view, &ctx(&viewport));
        assert!(lines.iter().any(|l| l == wayhire_core::EMPTY_FAILED));
    }

    #[test]
    fn form_errors_sit_under_their_field() {
        let form = ApplyFormView {
            job_id: "a".to_string(),
            job_title: "Designer".to_string(),
            name: "Ada".to_string(),
            email: String::new(),
            linkedin: String::new(),
            resume_name: Some("cv.docx".to_string()),
            errors: vec![(ApplyField::Resume, "Only PDF files are allowed.")],
        };
        let mut lines = Vec::new();
        render_form(&form, &mut lines);
        let resume = lines.iter().position(|l| l.contains("cv.docx")).unwrap();
        assert!(lines[resume + 1].contains("Only PDF files are allowed."));
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("a  b\n c", 10), "a b c");
        assert_eq!(preview("héllo wörld", 5), "héllo...");
    }
}

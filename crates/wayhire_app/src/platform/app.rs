use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use chrono::Utc;
use wayhire_core::{update, AppState, ApplyInput, JobId, Msg};
use wayhire_engine::ReqwestJobSearch;
use wayhire_logging::{wayhire_info, wayhire_warn, LevelFilter};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence::Persistence;
use super::resume::resume_from_path;
use super::ui::constants::{CLEAR_SCREEN, HELP};
use super::ui::input::{self, Command};
use super::ui::render::{self, RenderContext, Screen};
use super::ui::viewport::Viewport;

/// Everything the main loop reacts to: typed lines and engine results.
pub(crate) enum AppEvent {
    Line(String),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load();
    wayhire_logging::initialize(config.log_destination(), LevelFilter::Info, &config.log_file);
    wayhire_info!(
        "Starting wayhire: country={} data_dir={} ephemeral={}",
        config.country,
        config.data_dir.display(),
        config.ephemeral
    );
    if config.api_key.is_none() {
        wayhire_warn!("RAPIDAPI_KEY is not set; searches will be rejected by the job board");
    }

    let search = ReqwestJobSearch::new(config.fetch_settings())
        .context("failed to build the job search client")?;
    let persistence = Persistence::new(config.open_store());
    let restore = persistence.restore_msgs();

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(search), persistence, event_tx.clone());
    spawn_stdin_reader(event_tx);

    let mut app = App::new(
        AppState::with_settings(&config.country, config.scroll_threshold),
        runner,
    );
    for msg in restore {
        app.dispatch(msg);
    }
    app.search(config.query.clone());
    app.draw()?;

    for event in event_rx {
        match event {
            AppEvent::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            AppEvent::Msg(msg) => app.dispatch(msg),
            AppEvent::InputClosed => break,
        }
        if app.redraw {
            app.draw()?;
        }
    }

    wayhire_info!("Shutting down");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

struct App {
    state: AppState,
    runner: EffectRunner,
    viewport: Viewport,
    screen: Screen,
    status: Option<String>,
    redraw: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            viewport: Viewport::default(),
            screen: Screen::default(),
            status: None,
            redraw: true,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        }
        self.state = state;
        self.viewport.clamp(self.row_count());
        self.runner.run(effects);
    }

    fn search(&mut self, query: String) {
        self.screen = Screen::Listing;
        self.viewport.reset();
        self.dispatch(Msg::SearchInputChanged(query));
        self.dispatch(Msg::SearchSubmitted);
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        self.status = None;
        self.redraw = true;
        let command = match input::parse(line) {
            Ok(command) => command,
            Err(err) => {
                self.status = Some(err.to_string());
                return true;
            }
        };

        match command {
            Command::Search(query) => self.search(query),
            Command::Down => self.scroll(true),
            Command::Up => self.scroll(false),
            Command::Open(n) => {
                if let Some(job_id) = self.job_at(n) {
                    self.dispatch(Msg::JobSelected { job_id });
                }
            }
            Command::Save(n) => {
                if let Some(job_id) = self.target(n) {
                    self.dispatch(Msg::SaveToggled { job_id });
                }
            }
            Command::Filter(tag) => {
                self.viewport.reset();
                self.dispatch(Msg::FilterToggled(tag));
            }
            Command::ClearFilters => self.dispatch(Msg::FiltersCleared),
            Command::Apply(n) => {
                if let Some(job_id) = self.target(n) {
                    self.dispatch(Msg::ApplyOpened { job_id });
                }
            }
            Command::Name(value) => self.form_input(ApplyInput::Name(value)),
            Command::Email(value) => self.form_input(ApplyInput::Email(value)),
            Command::Linkedin(value) => self.form_input(ApplyInput::Linkedin(value)),
            Command::Resume(path) => match resume_from_path(&path) {
                Ok(file) => self.form_input(ApplyInput::Resume(Some(file))),
                Err(err) => {
                    wayhire_warn!("Cannot read resume {}: {err}", path.display());
                    self.status = Some(format!("Cannot read {}: {err}", path.display()));
                }
            },
            Command::Submit => self.dispatch(Msg::ApplySubmitted),
            Command::Cancel => self.dispatch(Msg::ApplyCancelled),
            Command::ShowSaved => self.screen = Screen::Saved,
            Command::ShowJobs => self.screen = Screen::Listing,
            Command::Dismiss => self.dispatch(Msg::NoticeDismissed),
            Command::Help => self.status = Some(HELP.to_string()),
            Command::Quit => return false,
        }
        true
    }

    fn scroll(&mut self, down: bool) {
        if self.screen != Screen::Listing {
            return;
        }
        let rows = self.row_count();
        if down {
            self.viewport.scroll_down(rows);
        } else {
            self.viewport.scroll_up();
        }
        let metrics = self.viewport.metrics(rows);
        self.dispatch(Msg::Scrolled(metrics));
    }

    fn form_input(&mut self, input: ApplyInput) {
        if self.state.apply_form().is_none() {
            self.status = Some("Open an application with `apply` first.".to_string());
            return;
        }
        self.dispatch(Msg::ApplyInput(input));
    }

    /// Row `n` when given, otherwise the selected job.
    fn target(&mut self, n: Option<usize>) -> Option<JobId> {
        match n {
            Some(n) => self.job_at(n),
            None => {
                let selected = self.state.selected_job_id().map(str::to_string);
                if selected.is_none() {
                    self.status = Some("No job selected; pass a row number.".to_string());
                }
                selected
            }
        }
    }

    fn job_at(&mut self, n: usize) -> Option<JobId> {
        let index = n.checked_sub(1)?;
        let job_id = match self.screen {
            Screen::Listing => self
                .state
                .visible_jobs()
                .get(index)
                .map(|job| job.job_id.clone()),
            Screen::Saved => self
                .state
                .saved_jobs()
                .jobs()
                .get(index)
                .map(|job| job.job_id.clone()),
        };
        if job_id.is_none() {
            self.status = Some(format!("There is no row {n}."));
        }
        job_id
    }

    fn row_count(&self) -> usize {
        match self.screen {
            Screen::Listing => self.state.visible_jobs().len(),
            Screen::Saved => self.state.saved_jobs().len(),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let view = self.state.view();
        let ctx = RenderContext {
            screen: self.screen,
            viewport: &self.viewport,
            status: self.status.as_deref(),
            now: Utc::now(),
        };
        let lines = render::render(&view, &ctx);

        let mut out = io::stdout().lock();
        write!(out, "{CLEAR_SCREEN}")?;
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        self.redraw = false;
        Ok(())
    }
}

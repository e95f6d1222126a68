use std::sync::{mpsc, Arc};

use wayhire_core::{Effect, Msg};
use wayhire_engine::{EngineEvent, EngineHandle, EventSink, JobSearch};
use wayhire_logging::wayhire_info;

use super::app::AppEvent;
use super::persistence::Persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    persistence: Persistence,
}

impl EffectRunner {
    pub fn new(
        search: Arc<dyn JobSearch>,
        persistence: Persistence,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        let sink = Arc::new(AppEventSink { tx: events });
        Self {
            engine: EngineHandle::new(search, sink),
            persistence,
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(request) => {
                    wayhire_info!(
                        "FetchPage generation={} kind={:?} page={} query={:?}",
                        request.generation,
                        request.kind,
                        request.page,
                        request.query
                    );
                    self.engine.fetch(request);
                }
                Effect::PersistSavedJobs { jobs } => self.persistence.save_saved_jobs(&jobs),
                Effect::PersistAppliedJobs { job_ids } => {
                    self.persistence.save_applied_jobs(&job_ids)
                }
            }
        }
    }
}

/// Feeds engine results back into the UI loop as messages.
struct AppEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for AppEventSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            EngineEvent::PageFetched { request, page } => {
                let _ = self.tx.send(AppEvent::Msg(Msg::PageLoaded {
                    request,
                    result: page,
                }));
            }
        }
    }
}

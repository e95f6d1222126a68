use std::sync::{mpsc, Arc};
use std::thread;

use wayhire_core::FetchRequest;
use wayhire_logging::wayhire_error;

use crate::{EngineEvent, JobSearch};

/// Receives engine events. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch(FetchRequest),
}

/// Runs page fetches on a background tokio runtime and reports each result
/// through the sink, exactly once per request.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(search: Arc<dyn JobSearch>, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    wayhire_error!("Failed to start fetch runtime: {}", err);
                    // Answer every request with a failure so no session waits forever.
                    while let Ok(EngineCommand::Fetch(request)) = cmd_rx.recv() {
                        sink.emit(EngineEvent::PageFetched {
                            request,
                            page: None,
                        });
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let search = search.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(search.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn fetch(&self, request: FetchRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch(request));
    }
}

async fn handle_command(search: &dyn JobSearch, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch(request) => {
            let page = search
                .fetch_page(&request.query, request.page, &request.country)
                .await;
            sink.emit(EngineEvent::PageFetched { request, page });
        }
    }
}

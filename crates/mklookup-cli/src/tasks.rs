//! Executes controller commands off the UI thread.
//!
//! Each network command runs on its own short-lived worker thread and posts
//! its completion back through the channel as a [`UiEvent`]. When a worker
//! cannot be started the command fails immediately with a network error, so
//! the controller always sees a completion.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use log::{debug, warn};
use mklookup_client::LookupApi;
use mklookup_engine::{Command, UiEvent};
use mklookup_types::Error;

/// Work handed to a spawned worker.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Starts a named worker running `job`.
pub type SpawnFn = fn(String, Job) -> io::Result<()>;

fn spawn_thread(name: String, job: Job) -> io::Result<()> {
    thread::Builder::new().name(name).spawn(job).map(|_| ())
}

pub struct TaskRunner {
    api: Arc<dyn LookupApi>,
    tx: Sender<UiEvent>,
    spawner: SpawnFn,
}

impl TaskRunner {
    pub fn new(api: Arc<dyn LookupApi>, tx: Sender<UiEvent>) -> Self {
        Self::with_spawner(api, tx, spawn_thread)
    }

    pub fn with_spawner(api: Arc<dyn LookupApi>, tx: Sender<UiEvent>, spawner: SpawnFn) -> Self {
        Self { api, tx, spawner }
    }

    pub fn execute(&self, command: Command) {
        match command {
            Command::Search { seq, query } => {
                self.spawn(
                    format!("search-{}", seq),
                    move |api| UiEvent::SearchCompleted {
                        seq,
                        result: api.search(&query),
                    },
                    move |err| UiEvent::SearchCompleted {
                        seq,
                        result: Err(err),
                    },
                );
            }
            Command::Generate { seq, request } => {
                self.spawn(
                    format!("generate-{}", seq),
                    move |api| UiEvent::GenerateCompleted {
                        seq,
                        result: api.generate_sap_code(&request),
                    },
                    move |err| UiEvent::GenerateCompleted {
                        seq,
                        result: Err(err),
                    },
                );
            }
            Command::Quit => {}
        }
    }

    fn spawn<F, G>(&self, name: String, job: F, on_spawn_error: G)
    where
        F: FnOnce(&dyn LookupApi) -> UiEvent + Send + 'static,
        G: FnOnce(Error) -> UiEvent,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!("starting worker {}", name);

        let spawned = (self.spawner)(
            name.clone(),
            Box::new(move || {
                let event = job(api.as_ref());
                // The UI may have quit already
                let _ = tx.send(event);
            }),
        );

        if let Err(err) = spawned {
            warn!("could not start worker {}: {}", name, err);
            let event = on_spawn_error(Error::Network(format!(
                "could not start request worker: {}",
                err
            )));
            let _ = self.tx.send(event);
        }
    }
}

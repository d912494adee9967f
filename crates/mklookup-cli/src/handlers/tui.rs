use std::sync::Arc;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Result;
use mklookup_client::LookupApi;
use mklookup_engine::{LookupController, UiEvent};

use crate::config::Config;
use crate::presentation::renderers::TuiRenderer;
use crate::tasks::TaskRunner;

pub fn handle(
    config: &Config,
    api: Arc<dyn LookupApi>,
    mk: Option<String>,
    corporate: bool,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut controller = LookupController::new(config.controller_options());

    let now = Instant::now();
    if let Some(mk) = mk {
        controller.handle(UiEvent::SetInput(mk), now);
    }
    if corporate {
        controller.handle(UiEvent::ToggleCorporate, now);
    }

    let runner = TaskRunner::new(api, tx);
    TuiRenderer::new(controller, runner, rx, config.ui.mouse).run()
}

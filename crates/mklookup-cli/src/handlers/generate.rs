use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use log::info;
use mklookup_client::LookupApi;
use mklookup_engine::ConfirmDialog;
use mklookup_engine::controller::MSG_GENERATE_DEFAULT;
use mklookup_types::GenerateRequest;

use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::GenerateViewModel;
use crate::types::OutputFormat;

pub fn handle(api: &dyn LookupApi, mk: &str, yes: bool, format: OutputFormat) -> Result<()> {
    let request = GenerateRequest::new(mk)?;

    if !yes && !confirm(request.identifier())? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let response = api.generate_sap_code(&request)?;
    info!("generate requested for {}", request.identifier());

    let message = response
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| MSG_GENERATE_DEFAULT.to_string());
    let vm = GenerateViewModel {
        customer_mk: request.identifier().to_string(),
        message,
    };

    let renderer = ConsoleRenderer::new(
        format == OutputFormat::Json,
        io::stdout().is_terminal(),
    );
    renderer.render_generate(&vm)
}

/// Asks on stderr and reads the answer from stdin.
fn confirm(identifier: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        bail!("Confirmation required: pass --yes to generate without a prompt");
    }

    let dialog = ConfirmDialog {
        identifier: identifier.to_string(),
    };
    let mut stderr = io::stderr();
    write!(stderr, "{}\n{}\nProceed? [y/N] ", dialog.title(), dialog.body())?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

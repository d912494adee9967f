use anyhow::Result;
use is_terminal::IsTerminal;
use log::info;
use mklookup_client::LookupApi;
use mklookup_engine::ResultsView;

use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::LookupViewModel;
use crate::types::OutputFormat;

pub fn handle(
    api: &dyn LookupApi,
    mk: &str,
    corporate: bool,
    raw: bool,
    format: OutputFormat,
) -> Result<()> {
    let response = mklookup_client::search(api, mk, corporate)?;
    let results = ResultsView::from_response(&response);
    info!(
        "lookup for {} returned {} fields (sap status: {:?})",
        mk.trim(),
        results.rows().len(),
        response.status()
    );

    let vm = LookupViewModel {
        customer_mk: mk.trim().to_string(),
        is_corporate: corporate,
        results,
        raw: raw.then(|| response.customer_data.clone()),
    };

    let renderer = ConsoleRenderer::new(
        format == OutputFormat::Json,
        std::io::stdout().is_terminal(),
    );
    renderer.render_lookup(&vm)
}

//! Client for the customer lookup backend.
//!
//! The backend exposes two JSON endpoints:
//! - `POST /api/search/` looks up a Customer MK and reports its SAP status
//! - `POST /api/generate-sap-code/` asks the backend to create the SAP customer
//!
//! [`LookupApi`] is the seam used by the controller's task runner; the
//! production implementation is [`HttpLookupApi`].

mod http;

pub use http::{ClientOptions, GENERATE_PATH, HttpLookupApi, SEARCH_PATH, decode_body};

use mklookup_types::{
    GenerateRequest, GenerateResponse, Result, SearchQuery, SearchResponse,
};

/// Operations offered by the lookup backend.
pub trait LookupApi: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;

    fn generate_sap_code(&self, request: &GenerateRequest) -> Result<GenerateResponse>;
}

/// Validates the identifier, then performs one search request.
///
/// An empty identifier fails before the backend is contacted.
pub fn search(
    api: &dyn LookupApi,
    identifier: &str,
    is_corporate: bool,
) -> Result<SearchResponse> {
    let query = SearchQuery::new(identifier, is_corporate)?;
    api.search(&query)
}

/// Validates the identifier, then asks the backend to generate a SAP code.
pub fn generate_sap_code(api: &dyn LookupApi, identifier: &str) -> Result<GenerateResponse> {
    let request = GenerateRequest::new(identifier)?;
    api.generate_sap_code(&request)
}

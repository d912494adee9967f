//! In-process `LookupApi` double.

use std::collections::VecDeque;
use std::sync::Mutex;

use mklookup_client::LookupApi;
use mklookup_types::{
    Error, GenerateRequest, GenerateResponse, Result, SearchQuery, SearchResponse,
};
use serde_json::Value;

/// Records every call and answers from queued results.
///
/// When a queue runs dry the answer is a network error, so tests notice
/// unexpected extra requests.
#[derive(Default)]
pub struct RecordingApi {
    searches: Mutex<Vec<SearchQuery>>,
    generates: Mutex<Vec<GenerateRequest>>,
    search_results: Mutex<VecDeque<Result<SearchResponse>>>,
    generate_results: Mutex<VecDeque<Result<GenerateResponse>>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a search answer given as a backend body.
    pub fn push_search_body(&self, body: Value) -> &Self {
        let result = mklookup_client::decode_body(200, &body.to_string());
        self.push_search(result)
    }

    pub fn push_search(&self, result: Result<SearchResponse>) -> &Self {
        self.search_results
            .lock()
            .expect("lock poisoned")
            .push_back(result);
        self
    }

    pub fn push_generate(&self, result: Result<GenerateResponse>) -> &Self {
        self.generate_results
            .lock()
            .expect("lock poisoned")
            .push_back(result);
        self
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().expect("lock poisoned").clone()
    }

    pub fn generates(&self) -> Vec<GenerateRequest> {
        self.generates.lock().expect("lock poisoned").clone()
    }
}

impl LookupApi for RecordingApi {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.searches
            .lock()
            .expect("lock poisoned")
            .push(query.clone());
        self.search_results
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no queued search result".to_string())))
    }

    fn generate_sap_code(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.generates
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
        self.generate_results
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no queued generate result".to_string())))
    }
}

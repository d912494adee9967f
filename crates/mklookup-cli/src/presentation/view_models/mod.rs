use mklookup_engine::ResultsView;
use serde::Serialize;
use serde_json::Value;

/// Output of `mklookup search`.
#[derive(Debug, Clone, Serialize)]
pub struct LookupViewModel {
    pub customer_mk: String,
    pub is_corporate: bool,
    #[serde(flatten)]
    pub results: ResultsView,
    /// Unprocessed `customer_data`, only with `--raw`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,
}

/// Output of `mklookup generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateViewModel {
    pub customer_mk: String,
    pub message: String,
}

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Message shown when the identifier is missing.
pub const MISSING_IDENTIFIER: &str = "Please enter a Customer MK";

/// Body of `POST /api/search/`.
///
/// Built from user input at submit time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "customer_mk")]
    identifier: String,
    #[serde(rename = "is_corporate")]
    corporate: bool,
}

impl SearchQuery {
    /// Trims the identifier and rejects it when nothing is left.
    pub fn new(identifier: &str, corporate: bool) -> Result<Self> {
        let identifier = validate_identifier(identifier)?;
        Ok(Self {
            identifier,
            corporate,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_corporate(&self) -> bool {
        self.corporate
    }
}

/// Body of `POST /api/generate-sap-code/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    customer_mk: String,
}

impl GenerateRequest {
    pub fn new(identifier: &str) -> Result<Self> {
        Ok(Self {
            customer_mk: validate_identifier(identifier)?,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.customer_mk
    }
}

fn validate_identifier(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(MISSING_IDENTIFIER.to_string()));
    }
    Ok(trimmed.to_string())
}

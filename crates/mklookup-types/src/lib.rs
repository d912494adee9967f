pub mod error;
pub mod query;
pub mod record;
pub mod response;

pub use error::{Error, Result};
pub use query::{GenerateRequest, SearchQuery};
pub use record::{CustomerRecord, display_value};
pub use response::{GenerateResponse, SapStatus, SearchResponse, explicit_error};

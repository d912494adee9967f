//! Testing infrastructure for mklookup integration tests.
//!
//! - `StubServer`: a tiny HTTP server answering the backend endpoints with canned JSON
//! - `RecordingApi`: an in-process `LookupApi` that records every call
//! - `fixtures`: customer records and response bodies shaped like the real backend
//! - `TestWorld`: isolated config/log locations for running the CLI

pub mod api;
pub mod fixtures;
pub mod server;
pub mod world;

pub use api::RecordingApi;
pub use server::{RecordedRequest, StubResponse, StubServer};
pub use world::TestWorld;

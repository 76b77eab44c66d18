// Library root
// -----------
// This crate exposes a small library surface for the `github-id` binary.
// The binary (`main.rs`) wires these modules together for one lookup.
//
// Module responsibilities:
// - `api`: the blocking HTTP client that asks the user endpoint for the
//   authenticated account's numeric id.
// - `error`: the typed failure causes of a lookup.
// - `ui`: renders a lookup outcome as the single output line.
// - `logging`: tracing subscriber setup (stderr only).
pub mod api;
pub mod error;
pub mod logging;
pub mod ui;

pub use api::{ApiClient, Credentials, UserId};
pub use error::LookupError;

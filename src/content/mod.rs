//! Content service boundary.
//!
//! - `traits.rs` - [`ContentSource`], the seam the UI depends on
//! - `client.rs` - Gemini implementation
//! - `request.rs` - Prompts, schemas and wire types
//! - `worker.rs` - Async execution of UI fetch commands
//! - `images.rs` - Seeded portrait URLs

mod client;
mod error;
mod images;
mod request;
mod traits;
mod worker;

pub use client::GeminiClient;
pub use error::{ContentFetchError, ScreenError, DETAIL_FETCH_MESSAGE, LIST_FETCH_MESSAGE};
pub use images::{portrait_url, PortraitSize};
pub use request::{detail_schema, summary_list_schema, ContentRequest};
pub use traits::ContentSource;
pub use worker::{ContentEvent, ContentWorker};

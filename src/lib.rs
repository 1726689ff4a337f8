//! GIST - the summarization engine behind a desktop document organizer.
//!
//! Given a local document (`.docx`, `.txt`, `.md`) or a web page URL, the
//! engine deterministically produces a short extractive synopsis using only
//! statistical and structural heuristics - no learned models, no external
//! AI service.
//!
//! # Architecture
//!
//! The engine is a linear pipeline per source kind:
//! - local: read -> extract container text -> normalize -> frequency-ranked
//!   top-3 sentences (or verbatim passthrough for near-trivial text)
//! - remote: bounded fetch -> meta-description shortcut -> main-content
//!   extraction -> noise filter -> first-3 sentences, capped at 150 chars
//!
//! The host application consumes the string facade, which never raises:
//! every failure maps to a fixed, display-ready message.
//!
//! # Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     gist::setup_logging();
//!
//!     let synopsis = gist::summarize_local("/home/me/my-docs/report.docx").await;
//!     println!("{synopsis}");
//!
//!     let synopsis = gist::summarize_url("https://example.com/article").await;
//!     println!("{synopsis}");
//! }
//! ```
// Module declarations
pub mod core;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod text;

pub use engine::{Engine, summarize_local, summarize_url};
pub use errors::SummarizeError;

/// Configure structured logging for binaries and test harnesses.
///
/// Library code only emits `tracing` events; whoever hosts the engine
/// decides whether (and how) they are rendered.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}

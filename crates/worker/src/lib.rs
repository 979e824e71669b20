//! The batch rewrite protocol.
//!
//! Drains every article currently `pending` without a stored rewrite,
//! generates rewritten content for each through the
//! [`ArticleRewriter`](newsroom_llm::ArticleRewriter) seam, and commits the
//! rewrite before the status flip.

pub mod batch;

pub use batch::{run_batch, BatchSummary};

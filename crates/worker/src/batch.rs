//! One pass of the batch rewrite protocol.

use newsroom_core::lifecycle::RewriteStatus;
use newsroom_db::models::rewritten_article::CreateRewrittenArticle;
use newsroom_db::repositories::{ArticleRepo, RewrittenArticleRepo};
use newsroom_db::DbPool;
use newsroom_llm::ArticleRewriter;

/// Outcome counts for one batch pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidates returned by the selection query.
    pub fetched: usize,
    /// Articles whose rewrite was committed and whose status flipped.
    pub rewritten: usize,
    /// Articles skipped because generation returned blank text.
    pub skipped_empty: usize,
    /// Articles skipped because generation or persistence failed.
    pub failed: usize,
}

/// Run one pass over all pending, not-yet-rewritten articles.
///
/// Articles are processed strictly sequentially, in insertion order. A
/// failure on one article never aborts the pass; skipped articles stay
/// `pending`, and re-running the batch is the retry mechanism.
///
/// The candidate query's existence check is a point-in-time read, so two
/// passes running concurrently can both pick up the same article and store
/// duplicate rewrites. Deploy a single runner.
pub async fn run_batch(
    pool: &DbPool,
    rewriter: &dyn ArticleRewriter,
) -> Result<BatchSummary, sqlx::Error> {
    let candidates = ArticleRepo::list_pending_unrewritten(pool).await?;

    let mut summary = BatchSummary {
        fetched: candidates.len(),
        ..Default::default()
    };

    if candidates.is_empty() {
        // Articles are marked pending deliberately before a run, so an
        // empty set usually signals state drift (stale status values or
        // unexpected rewritten_articles rows), not a quiet day.
        tracing::error!(
            "No articles fetched despite being marked for rewriting; \
             check articles.status and rewritten_articles for stale data"
        );
        return Ok(summary);
    }

    let ids: Vec<_> = candidates.iter().map(|c| c.id).collect();
    tracing::info!(count = candidates.len(), ?ids, "Articles selected for rewriting");

    for candidate in &candidates {
        let rewritten_text = match rewriter.rewrite(candidate.id, &candidate.content).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(
                    article_id = candidate.id,
                    error = %err,
                    "Generation failed; leaving article pending"
                );
                summary.failed += 1;
                continue;
            }
        };

        if rewritten_text.trim().is_empty() {
            tracing::warn!(
                article_id = candidate.id,
                "Generation returned empty content; skipping"
            );
            summary.skipped_empty += 1;
            continue;
        }

        // The rewrite must be durably committed before the status flips:
        // a crash between the two leaves the article pending and eligible
        // for the next pass, never completed without content.
        let create = CreateRewrittenArticle {
            original_article_id: candidate.id,
            rewritten_content: rewritten_text,
        };
        if let Err(err) = RewrittenArticleRepo::create(pool, &create).await {
            tracing::error!(
                article_id = candidate.id,
                error = %err,
                "Failed to persist rewrite"
            );
            summary.failed += 1;
            continue;
        }

        if let Err(err) =
            ArticleRepo::set_status(pool, candidate.id, RewriteStatus::Completed).await
        {
            // The rewrite row exists, so the next pass will not pick this
            // article up again; the status must be reconciled by hand.
            tracing::error!(
                article_id = candidate.id,
                error = %err,
                "Rewrite committed but status update failed"
            );
            summary.failed += 1;
            continue;
        }

        tracing::info!(article_id = candidate.id, "Article rewritten");
        summary.rewritten += 1;
    }

    tracing::info!(
        fetched = summary.fetched,
        rewritten = summary.rewritten,
        skipped_empty = summary.skipped_empty,
        failed = summary.failed,
        "Batch processing completed"
    );

    Ok(summary)
}

//! Mutation followed by an authoritative re-read.
//!
//! Local state is never patched from a mutation's own response. After a write
//! succeeds the owning aggregate is read again, bypassing the cache, and the
//! result replaces the held state wholesale.

use std::future::Future;
use tracing::{debug, warn};

use super::view_state::ViewState;
use crate::error::AppError;

/// What happened to local state after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchOutcome {
    /// State now holds the server's post-write snapshot.
    Refreshed,
    /// The re-read failed; state still holds the pre-write snapshot.
    Stale,
}

/// Runs `mutation`, then `refetch` on success.
///
/// A mutation error is returned untouched and `refetch` is never started.
/// A refetch error is logged and reported as [`RefetchOutcome::Stale`]; it
/// never turns a successful write into a failure.
pub async fn mutate_then_refetch<T, M, MFut, RFut, F>(
    context: &str,
    state: &mut ViewState<T>,
    mutation: MFut,
    refetch: F,
) -> Result<(M, RefetchOutcome), AppError>
where
    MFut: Future<Output = Result<M, AppError>>,
    F: FnOnce() -> RFut,
    RFut: Future<Output = Result<T, AppError>>,
{
    let output = mutation.await?;

    let outcome = match refetch().await {
        Ok(fresh) => {
            state.replace(fresh);
            debug!("{context}: state refreshed (generation {})", state.generation());
            RefetchOutcome::Refreshed
        }
        Err(e) => {
            warn!("{context}: refetch after mutation failed, keeping previous state: {e}");
            RefetchOutcome::Stale
        }
    };

    Ok((output, outcome))
}

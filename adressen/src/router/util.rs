use adressen_core::normalize::Normalized;
use adressen_core::{AdressenError, Capability};

/// Join a collection of tasks and apply an optional stage-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with
/// `crate::core::with_request_deadline`. Results come back in task order no
/// matter which task settled first; on timeout no partial results are kept.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    capability: Capability,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, AdressenError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, capability, futures::future::join_all(tasks))
        .await
}

/// Collapse the failures of a stage in which every source failed.
///
/// Rules:
/// - A single failure is returned unchanged.
/// - If every failure is an `UpstreamTimeout`, the stage itself timed out → `RequestTimeout(capability)`.
/// - Else → `AllUpstreamsFailed(errors)`.
pub fn collapse_errors(capability: Capability, mut errors: Vec<AdressenError>) -> AdressenError {
    if errors.len() == 1
        && let Some(e) = errors.pop()
    {
        return e;
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, AdressenError::UpstreamTimeout { .. }))
    {
        return AdressenError::request_timeout(capability.as_str());
    }
    AdressenError::AllUpstreamsFailed(errors)
}

/// Settled outcome of a fan-out stage.
#[derive(Debug)]
pub struct Settled<T> {
    /// One record list per source, in request order; failed sources contribute an empty list.
    pub lists: Vec<Vec<T>>,
    /// Absorbed per-source failures, in request order.
    pub failures: Vec<AdressenError>,
}

/// Sort the per-source results of a stage into record lists and absorbed
/// failures.
///
/// Transport errors, timeouts and unreadable bodies count as failed sources;
/// bodies that are legitimately empty do not.
///
/// # Errors
/// Fails with [`collapse_errors`] when the stage had at least one source and
/// every source failed.
pub fn settle<T>(
    capability: Capability,
    upstream: &str,
    results: Vec<Result<Normalized<T>, AdressenError>>,
) -> Result<Settled<T>, AdressenError> {
    let attempted = results.len();
    let mut lists = Vec::with_capacity(attempted);
    let mut failures = Vec::new();

    for result in results {
        match result {
            Ok(normalized) => {
                if let Some(err) = normalized
                    .empty_reason()
                    .and_then(|reason| reason.to_error(upstream))
                {
                    failures.push(err);
                }
                lists.push(normalized.into_vec());
            }
            Err(e) => {
                failures.push(e);
                lists.push(Vec::new());
            }
        }
    }

    if attempted > 0 && failures.len() == attempted {
        return Err(collapse_errors(capability, failures));
    }
    #[cfg(feature = "tracing")]
    for f in &failures {
        tracing::warn!(capability = capability.as_str(), error = %f, "absorbed failed source");
    }
    Ok(Settled { lists, failures })
}

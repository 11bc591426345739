//! Per-item fan-out with position-matched results

use futures::future::{join_all, try_join_all};
use tracing::warn;

use crate::config::FailurePolicy;
use crate::error::PipelineError;

/// An icon dropped from the run, with the reason it failed
#[derive(Clone, Debug)]
pub struct SkippedIcon {
    /// Archive path or icon name identifying the item
    pub label: String,
    /// Rendered error that caused the skip
    pub reason: String,
}

/// Successful items of a stage plus whatever was skipped along the way
#[derive(Debug)]
pub(crate) struct StageOutcome<T> {
    pub items: Vec<T>,
    pub skipped: Vec<SkippedIcon>,
}

/// Run `task` over every item on the blocking pool and wait for all of them
///
/// Results are matched back to their input position, so `items` keeps the
/// input order regardless of completion order. Under `FailFast` the first
/// error rejects the whole stage; under `SkipFailed` failing items land in
/// `skipped` and the rest pass through.
pub(crate) async fn dispatch_all<T, O, F>(
    items: Vec<T>,
    labels: Vec<String>,
    policy: FailurePolicy,
    task: F,
) -> Result<StageOutcome<O>, PipelineError>
where
    T: Send + 'static,
    O: Send + 'static,
    F: Fn(T) -> Result<O, PipelineError> + Clone + Send + 'static,
{
    let handles: Vec<_> = items
        .into_iter()
        .map(|item| {
            let task = task.clone();
            tokio::task::spawn_blocking(move || task(item))
        })
        .collect();

    let results = handles.into_iter().map(|handle| async move {
        match handle.await {
            Ok(result) => result,
            Err(e) => Err(PipelineError::Task(e.to_string())),
        }
    });

    match policy {
        FailurePolicy::FailFast => {
            let items = try_join_all(results).await?;
            Ok(StageOutcome {
                items,
                skipped: Vec::new(),
            })
        }
        FailurePolicy::SkipFailed => {
            let mut collected = Vec::new();
            let mut skipped = Vec::new();
            for (label, result) in labels.into_iter().zip(join_all(results).await) {
                match result {
                    Ok(item) => collected.push(item),
                    Err(e) => {
                        warn!("Skipping {}: {}", label, e);
                        skipped.push(SkippedIcon {
                            label,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            Ok(StageOutcome {
                items: collected,
                skipped,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_results_keep_input_order() {
        // Later items finish first; positions must still match the input
        let items = vec![30u64, 20, 10];
        let labels = items.iter().map(|n| n.to_string()).collect();

        let out = dispatch_all(items, labels, FailurePolicy::FailFast, |n| {
            std::thread::sleep(Duration::from_millis(n));
            Ok(n)
        })
        .await
        .unwrap();

        assert_eq!(out.items, vec![30, 20, 10]);
        assert!(out.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_fail_fast_rejects_the_batch() {
        let items = vec![1u32, 2, 3];
        let labels = items.iter().map(|n| n.to_string()).collect();

        let result = dispatch_all(items, labels, FailurePolicy::FailFast, |n| {
            if n == 2 {
                Err(PipelineError::Task("boom".to_string()))
            } else {
                Ok(n)
            }
        })
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_skip_failed_collects_failures() {
        let items = vec![1u32, 2, 3];
        let labels = items.iter().map(|n| n.to_string()).collect();

        let out = dispatch_all(items, labels, FailurePolicy::SkipFailed, |n| {
            if n == 2 {
                Err(PipelineError::Task("boom".to_string()))
            } else {
                Ok(n)
            }
        })
        .await
        .unwrap();

        assert_eq!(out.items, vec![1, 3]);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].label, "2");
        assert!(out.skipped[0].reason.contains("boom"));
    }
}

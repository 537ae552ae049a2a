use crate::utils::error::{FightError, Result};
use std::future::Future;
use std::time::Duration;

/// Wraps an async operation with an artificial processing delay and a hard
/// timeout ceiling.
///
/// The delay simulates processing cost and only applies to successes; a
/// failing operation propagates immediately. Operation plus delay must finish
/// within the ceiling, else the whole pipeline fails with `Timeout` and the
/// losing side's work is dropped.
#[derive(Debug, Clone, Copy)]
pub struct ResponsePipeline {
    delay: Duration,
    timeout: Duration,
}

impl ResponsePipeline {
    pub fn new(delay_millis: u64, timeout_millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_millis),
            timeout: Duration::from_millis(timeout_millis),
        }
    }

    pub async fn run<F, T>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
        T: Send,
    {
        let ceiling_millis = self.timeout.as_millis() as u64;

        let delayed = async {
            let value = operation.await?;
            // Timer-driven suspension, not a blocking sleep.
            tokio::time::sleep(self.delay).await;
            Ok(value)
        };

        match tokio::time::timeout(self.timeout, delayed).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Operation exceeded timeout ceiling of {}ms", ceiling_millis);
                Err(FightError::Timeout(ceiling_millis))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_success_within_ceiling() {
        let pipeline = ResponsePipeline::new(50, 200);
        let started = Instant::now();

        let value = pipeline.run(async { Ok(42) }).await.unwrap();

        assert_eq!(value, 42);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_delay_exceeding_ceiling_times_out() {
        let pipeline = ResponsePipeline::new(300, 100);
        let started = Instant::now();

        let result: Result<i32> = pipeline.run(async { Ok(42) }).await;

        match result {
            Err(FightError::Timeout(ceiling)) => assert_eq!(ceiling, 100),
            other => panic!("expected Timeout, got {:?}", other),
        }
        // Fails at the ceiling, never by waiting out the full delay.
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_slow_operation_times_out() {
        let pipeline = ResponsePipeline::new(0, 100);

        let result: Result<i32> = pipeline
            .run(async {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Ok(42)
            })
            .await;

        assert!(matches!(result, Err(FightError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_failure_propagates_without_delay() {
        let pipeline = ResponsePipeline::new(200, 500);
        let started = Instant::now();

        let result: Result<i32> = pipeline
            .run(async {
                Err(FightError::DownstreamUnavailable {
                    service: "hero".to_string(),
                    reason: "connection refused".to_string(),
                })
            })
            .await;

        assert!(matches!(
            result,
            Err(FightError::DownstreamUnavailable { .. })
        ));
        // The delay stage never applies to a failure.
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}

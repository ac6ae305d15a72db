//! Startup schema initialization.
//!
//! Creates the messages table in the background, retrying on a fixed
//! interval until the store becomes reachable. Failures here are never
//! surfaced to clients; request handling does not wait for this task, so
//! queries against a not-yet-initialized schema fail with a store error.

use std::{fmt::Display, future::Future, time::Duration};

use tokio::time;
use tracing::{error, info};

use crate::{
    configuration::{AppState, Config, State},
    error::Error,
};

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub interval: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> RetryPolicy {
        RetryPolicy {
            interval: Duration::from_secs(config.schema_retry_interval_secs),
            max_attempts: config.schema_retry_max_attempts,
        }
    }
}

pub async fn schema_init_task(
    app_state: AppState<State>,
) -> Result<(), Error> {
    let policy = RetryPolicy::from_config(&app_state.config);

    tokio::spawn(async move {
        run_with_retry(policy, || async {
            app_state.database.message.create_table().await
        })
        .await
        .map_err(|err| Error::SchemaInit(err.to_string()))?;

        info!("Database schema ready");
        Ok(())
    })
    .await?
}

/// Run `operation` until it succeeds, sleeping `policy.interval` between
/// attempts. With a configured maximum the last error is returned once the
/// attempts are exhausted.
pub async fn run_with_retry<F, Fut, T, E>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if let Some(max) = policy.max_attempts {
                    if attempt >= max {
                        error!(
                            "Giving up after {} attempts: {}",
                            attempt, err
                        );
                        return Err(err);
                    }
                }

                error!(
                    "Attempt {} failed, retrying in {}s: {}",
                    attempt,
                    policy.interval.as_secs_f64(),
                    err
                );
                time::sleep(policy.interval).await;
            },
        }
    }
}

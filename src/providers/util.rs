use anyhow::Error;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Retries an async request with a fixed delay between attempts
///
/// # Parameters
/// - `operation`: Closure returning a future
/// - `retries`: Number of retry attempts (total runs = 1 initial + retries)
/// - `delay_ms`: Milliseconds between retry attempts
///
/// # Returns
/// Either the successful result or the error from the last attempt
pub async fn with_retry<F, Fut, T>(
    mut operation: F,
    retries: usize,
    delay_ms: u64,
) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, reqwest::Error>>,
{
    let mut attempt = 1;
    loop {
        match operation().await.map_err(anyhow::Error::from) {
            Ok(val) => return Ok(val),
            Err(err) => {
                if attempt > retries {
                    return Err(err);
                }
                debug!(
                    "Attempt {}/{} failed: {}. Retrying...",
                    attempt, retries, err
                );
                attempt += 1;
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_retry_succeeds_after_failures() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let good_url = format!("{}/reviews", mock_server.uri());
        let mut calls = 0;
        let result = with_retry(
            || {
                calls += 1;
                let url = if calls < 3 {
                    "http://127.0.0.1:9/reviews".to_string()
                } else {
                    good_url.clone()
                };
                let client = client.clone();
                async move { client.get(url).send().await }
            },
            3,
            1,
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_retry_gives_up() {
        let client = reqwest::Client::new();
        let mut calls = 0;
        let result = with_retry(
            || {
                calls += 1;
                let client = client.clone();
                async move { client.get("http://127.0.0.1:9/samples").send().await }
            },
            2,
            1,
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls, 3);
    }
}

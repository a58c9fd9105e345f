use std::sync::LazyLock;
use std::time::Duration;

/// User-Agent sent with every outbound request
pub fn user_agent() -> String {
    format!("opensalary-bot/{}", crate::pkg_version())
}

/// Global HTTP client shared by the salary source and the webhook providers.
///
/// Initialized lazily on first access so connections and DNS lookups are
/// pooled across polls.
///
/// - **Timeouts**: 30s per request, 10s to connect
/// - **Compression**: gzip and brotli
/// - **TLS**: rustls
///
/// # Example
/// ```rust,ignore
/// use crate::external::client::HTTP_CLIENT;
///
/// let body = HTTP_CLIENT
///     .get("https://api.opensalary.jp/api/salary-entries?page=1")
///     .send()
///     .await?
///     .text()
///     .await?;
/// ```
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true)
        .brotli(true)
        .user_agent(user_agent())
        .build()
        .expect("Failed to build HTTP client")
});

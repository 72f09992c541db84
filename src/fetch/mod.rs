use std::time::Duration;

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

pub static MENU_URL: &str = "https://www.kasca-mrlacnik.jedilnilist.si/stran/malica/";

/// Covers connecting and reading the whole body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `timeout` bounds each request as a whole, use [`REQUEST_TIMEOUT`] outside tests.
pub fn make_client(timeout: Duration) -> Result<Client, RequestError> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn menu_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let res = client.get(url.clone()).send().await?.error_for_status()?;
    let text = res.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

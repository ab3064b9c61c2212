use reqwest::Client;
use tracing::{instrument, Level};

use crate::config::{Config, School};
use crate::error::Result;

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// The URL to actually request for a school: the configured page, prefixed with
/// the relay when one is set. The relay contract is plain concatenation onto its
/// query, so no extra encoding is applied.
fn request_url(config: &Config, school: School) -> String {
    let target = config.url(school);
    match config.relay() {
        Some(relay) => format!("{relay}{target}"),
        None => target.to_string(),
    }
}

/// Fetches one school's menu page. A non-success status is an error; retrying
/// is the caller's business (and currently nobody's).
#[instrument(skip(client, config), fields(school = school.key()), level = Level::TRACE)]
pub async fn menu_page(client: &Client, config: &Config, school: School) -> Result<String> {
    let response = client
        .get(request_url(config, school))
        .send()
        .await?
        .error_for_status()?;
    let start = std::time::Instant::now();
    let text = response.text().await?;
    log::trace!(
        "Got menu page for {}\tin {:?}",
        school.key(),
        start.elapsed()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn config(relay: Option<&str>) -> Config {
        Config::new(
            Url::parse("https://menu.example/karby").unwrap(),
            Url::parse("https://menu.example/olympia").unwrap(),
            relay.map(|r| Url::parse(r).unwrap()),
        )
    }

    #[test]
    fn test_request_url_direct() {
        let url = request_url(&config(None), School::Karby);
        assert_eq!(url, "https://menu.example/karby");
    }

    #[test]
    fn test_request_url_through_relay() {
        let url = request_url(
            &config(Some("https://relay.example/v1/proxy/?quest=")),
            School::Olympia,
        );
        assert_eq!(
            url,
            "https://relay.example/v1/proxy/?quest=https://menu.example/olympia"
        );
    }
}

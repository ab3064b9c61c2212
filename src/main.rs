#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod parse;
mod present;
mod resolve;

use chrono::Local;
use scraper::Html;

use crate::config::{Config, School};

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    let client = fetch::make_client();

    let pages = futures::future::join_all(
        School::ALL
            .iter()
            .map(|&school| fetch::menu_page(&client, &config, school)),
    )
    .await;

    for (school, page) in School::ALL.into_iter().zip(pages) {
        match page {
            Ok(page) => {
                let document = Html::parse_document(&page);
                let panels = parse::extract_panels(&document);
                let selection = resolve::resolve(&panels, Local::now().naive_local());
                print!("{}", present::render(school, selection.as_ref()));
            }
            Err(e) => {
                log::warn!("failed to fetch menu for {}: {e}", school.key());
                print!("{}", present::render_fetch_failure(school));
            }
        }
    }
    Ok(())
}

#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cli;
mod error;
mod fetch;
mod parse;
mod present;

use std::process::ExitCode;

use clap::Parser;
use scraper::Html;

use crate::{
    cli::Args,
    parse::{DailyMenu, Layout},
};

pub use error::Result;

/// Fetches and extracts the whole menu before anything is rendered, so a
/// failure never leaves half a menu on the terminal.
async fn run(args: &Args) -> Result<Vec<String>> {
    let client = fetch::make_client(fetch::REQUEST_TIMEOUT)?;
    log::info!("fetching {}", args.url);
    let page = fetch::menu_page(&client, &args.url).await?;
    let document = Html::parse_document(&page);
    let layout = Layout::detect(&document);
    log::debug!("using the {} page layout", layout.name);
    let menu = DailyMenu::from_html(&document, layout)?;
    Ok(present::render(&menu, args.display_mode()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    let lines = match run(&args).await {
        Ok(lines) => lines,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("food: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = present::print(&lines, &mut std::io::stdout().lock()) {
        eprintln!("food: could not write the menu: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

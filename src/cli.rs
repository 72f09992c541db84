use clap::Parser;
use url::Url;

use crate::{fetch::MENU_URL, present::DisplayMode};

/// Prints today's lunch menu of the Mrlačnik cafeteria.
#[derive(Parser, Debug)]
#[command(name = "food", version, about, long_about = None)]
pub struct Args {
    /// Prints short summary of todays menu
    #[arg(short, long, overrides_with = "long")]
    pub short: bool,

    /// Prints formatted summary of todays menu, prices included
    #[arg(short, long, overrides_with = "short")]
    pub long: bool,

    /// Menu page to read instead of the cafeteria's own
    #[arg(long, value_name = "URL", default_value = MENU_URL)]
    pub url: Url,
}

impl Args {
    pub const fn display_mode(&self) -> DisplayMode {
        if self.long {
            DisplayMode::Long
        } else {
            DisplayMode::Short
        }
    }
}

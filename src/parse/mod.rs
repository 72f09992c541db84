mod error;
mod menu_page;
mod remove_excess_whitespace;
mod static_selector;
mod text_from_selection;

pub use error::Error;
pub use menu_page::{DailyMenu, Layout, MenuItem};
pub use remove_excess_whitespace::{remove_excess_whitespace, WHITESPACE_RUN};
pub use text_from_selection::text_from_selection;

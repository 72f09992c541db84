mod allergens;
mod daily_menu;
mod layout;
mod menu_item;
mod money;

pub use daily_menu::DailyMenu;
pub use layout::Layout;
pub use menu_item::MenuItem;

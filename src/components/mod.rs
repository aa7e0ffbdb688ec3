//! UI Components
//!
//! Reusable Leptos components.

mod about;
mod api_data;
mod button;
mod card;
mod confirm_button;
mod footer;
mod hero;
mod layout;
pub(crate) mod navbar;
mod task_manager;
mod task_row;

pub use about::About;
pub use api_data::ApiData;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardPadding, CardVariant};
pub use confirm_button::ConfirmButton;
pub use footer::Footer;
pub use hero::Hero;
pub use layout::Layout;
pub use navbar::Navbar;
pub use task_manager::TaskManager;
pub use task_row::TaskRow;

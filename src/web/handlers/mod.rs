//! HTML template rendering handlers.

mod blog;
mod home;
mod not_found;
mod ranking;

pub use blog::{blog_detail_handler, blog_list_handler};
pub use home::{download_form_handler, home_handler};
pub use not_found::not_found_handler;
pub use ranking::ranking_handler;

mod apply_edit;
mod get_editor_options;
mod get_portfolio;
mod reset_portfolio;
mod upload_image;

pub use apply_edit::apply_edit_handler;
pub use get_editor_options::get_editor_options_handler;
pub use get_portfolio::get_portfolio_handler;
pub use reset_portfolio::reset_portfolio_handler;
pub use upload_image::{upload_avatar_handler, upload_project_image_handler};

//! The users of the application and the route handlers for them.
//!
//! Users cannot be deleted through the API.

mod core;
mod create_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{NewUser, User, UserId, create_user_table, map_row_to_user};
pub use create_endpoint::create_user_endpoint;
pub use edit_endpoint::edit_user_endpoint;
pub use get_endpoint::get_user_endpoint;
pub use list_endpoint::list_users_endpoint;

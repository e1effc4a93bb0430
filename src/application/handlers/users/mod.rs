//! User account command handlers.

mod login_user;
mod register_user;
mod remove_user;
mod update_user;

pub use login_user::{LoginResult, LoginUserCommand, LoginUserHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use remove_user::{RemoveUserCommand, RemoveUserHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};

mod account;
mod authenticated_user;

pub use account::{Account, NewAccount};
pub use authenticated_user::AuthenticatedUser;

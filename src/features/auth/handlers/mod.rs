pub mod auth_handler;

pub use auth_handler::{
    __path_get_current_user, __path_login, __path_refresh_token, __path_register,
    get_current_user, login, refresh_token, register,
};

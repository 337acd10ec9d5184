pub mod application_handler;

pub use application_handler::{
    __path_list_applications, __path_submit_application, __path_update_application_status,
    list_applications, submit_application, update_application_status,
};

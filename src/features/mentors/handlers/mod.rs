pub mod mentor_handler;

pub use mentor_handler::{
    __path_create_mentor, __path_delete_own_mentor, __path_get_mentor, __path_get_own_mentor,
    __path_list_mentors, __path_update_own_mentor, create_mentor, delete_own_mentor, get_mentor,
    get_own_mentor, list_mentors, update_own_mentor,
};

mod application;

pub use application::{Application, ApplicationStatus, NewApplication, StatusChange};

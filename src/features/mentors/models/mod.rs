mod mentor;

pub use mentor::{Mentor, MentorUpdate, NewMentor};

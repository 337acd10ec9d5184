mod mentor_dto;

pub use mentor_dto::*;

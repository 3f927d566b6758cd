pub mod contact;
pub mod experience;
pub mod project;

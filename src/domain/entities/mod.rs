pub mod contact_me;
pub mod experience;
pub mod period;
pub mod project;
pub mod resume;

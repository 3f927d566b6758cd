pub mod contact_me;
pub mod experiences;
pub mod home;
pub mod json_error;
pub mod projects;
pub mod resume;
pub mod system;

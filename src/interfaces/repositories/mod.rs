pub mod contact_me;
pub mod experience;
pub mod project;
pub mod sqlx_repo;

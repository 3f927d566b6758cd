pub mod entities;
pub mod use_cases;
pub mod resume_builder;
pub mod tenure;
pub mod theme;

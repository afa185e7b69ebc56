pub mod a001_profile;
pub mod a002_project;
pub mod a003_experience;
pub mod a004_skill;
pub mod a005_education;

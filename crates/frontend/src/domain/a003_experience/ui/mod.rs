mod timeline;

pub use timeline::ExperienceSection;

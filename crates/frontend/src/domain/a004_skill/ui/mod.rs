mod tabs;

pub use tabs::SkillsSection;

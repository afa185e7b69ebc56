mod view;

pub use view::EducationSection;

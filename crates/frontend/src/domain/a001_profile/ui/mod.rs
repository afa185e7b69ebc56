mod about;
mod hero;

pub use about::AboutSection;
pub use hero::HeroSection;

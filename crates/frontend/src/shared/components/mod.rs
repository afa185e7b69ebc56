pub mod reveal_card;
pub mod section_heading;
pub mod ui;

pub use reveal_card::RevealCard;
pub use section_heading::SectionHeading;

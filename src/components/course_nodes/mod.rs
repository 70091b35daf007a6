mod component;
mod render;

pub use component::CourseNodes;
pub use render::{CourseCardData, card_class, course_cards, credit_hours, display_title};

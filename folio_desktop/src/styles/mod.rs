mod button;
mod container;
mod input;

pub use button::{icon_button_style, nav_link_style, primary_button_style};
pub use container::{feedback_style, section_style, top_bar_style, transparent_style};
pub use input::input_style;

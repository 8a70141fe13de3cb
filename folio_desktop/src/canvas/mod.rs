mod nav_menu;
mod particle_field;
mod tilt_card;

pub use nav_menu::NavMenuBackdrop;
pub use particle_field::ParticleFieldCanvas;
pub use tilt_card::TiltCardCanvas;

mod particles;
mod reveal;
mod spring;
mod states;
mod tilt;
mod typewriter;

pub use particles::{Particle, ParticleField};
pub use reveal::{RevealSection, RevealTracker};
pub use spring::Spring;
pub use states::NavMenuState;
pub use tilt::{TiltCardState, TiltTransform};
pub use typewriter::Typewriter;

//! Core package for the Folio showcase: configuration, content, and shared
//! utilities consumed by the desktop frontend.

pub mod content;
pub mod utils;

pub use content::{NavLink, ProjectCard, Section, SiteContent};
pub use utils::config::Config;
pub use utils::error::{FolioError, FolioResult};

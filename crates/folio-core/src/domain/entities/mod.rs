pub mod common;
pub mod experience;
pub mod profile;
pub mod project;
pub mod quick_link;

pub use common::{ImageAsset, Technology};
pub use experience::Experience;
pub use profile::{CallToAction, ProfileInfo};
pub use project::{Project, ProjectLink};
pub use quick_link::QuickLink;

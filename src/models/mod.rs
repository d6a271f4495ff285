pub mod event;
pub mod image;
pub mod participant;
pub mod user;

pub use event::Event;
pub use image::Image;
pub use participant::{Participant, SourceOfDiscovery};
pub use user::User;

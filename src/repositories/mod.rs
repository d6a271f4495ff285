pub mod event_repository;
pub mod image_repository;
pub mod participant_repository;
pub mod user_repository;

pub use event_repository::{EventRepository, PgEventRepository};
pub use image_repository::{ImageRepository, PgImageRepository};
pub use participant_repository::{ParticipantRepository, PgParticipantRepository};
pub use user_repository::{PgUserRepository, UserRepository};

pub mod image_service;
pub mod participant_service;
pub mod system_user;

pub use image_service::ImageService;
pub use participant_service::ParticipantService;
pub use system_user::ensure_system_user;

pub mod client;
pub mod images;
pub mod importer;
pub mod mapper;
pub mod payload;
pub mod scheduler;

pub use client::{EventFeed, TicketmasterClient};
pub use images::collect_image_links;
pub use importer::{Importer, RunSummary};
pub use mapper::map_event;
pub use payload::ProviderEvent;

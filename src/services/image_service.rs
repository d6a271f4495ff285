use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::Image;
use crate::repositories::ImageRepository;

#[derive(Clone)]
pub struct ImageService {
    images: Arc<dyn ImageRepository>,
}

impl ImageService {
    pub fn new(images: Arc<dyn ImageRepository>) -> Self {
        Self { images }
    }

    /// Resolves each link to an image row, reusing an existing row with the
    /// same link. Links that fail to persist are skipped.
    pub async fn create_images_with_links(&self, links: &[String]) -> Vec<Image> {
        let mut resolved = Vec::with_capacity(links.len());

        for link in links {
            if link.is_empty() {
                continue;
            }

            match self.images.find_by_link(link).await {
                Ok(Some(existing)) => {
                    debug!("Reusing image {} for {}", existing.id, link);
                    resolved.push(existing);
                    continue;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!("Image lookup failed for {}: {}", link, err);
                }
            }

            let image = Image::new(link.as_str());
            match self.images.create(&image).await {
                Ok(()) => resolved.push(image),
                Err(err) => warn!("Failed to create image for {}: {}", link, err),
            }
        }

        resolved
    }

    pub async fn attach_to_event(&self, event_id: uuid::Uuid, images: &[Image]) -> anyhow::Result<()> {
        self.images.attach_to_event(event_id, images).await
    }
}

use std::collections::HashSet;

use super::payload::{ProviderEvent, ProviderImage};

/// Picks the image links to attach to an imported event: the tallest image
/// of each attraction, or the tallest event-level image when no attraction
/// has any. Links are unique and keep provider order.
pub fn collect_image_links(event: &ProviderEvent) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for attraction in &event.embedded.attractions {
        if let Some(best) = tallest(&attraction.images) {
            push_unique(&mut links, &mut seen, &best.url);
        }
    }

    if links.is_empty() {
        if let Some(best) = tallest(&event.images) {
            push_unique(&mut links, &mut seen, &best.url);
        }
    }

    links
}

fn push_unique(links: &mut Vec<String>, seen: &mut HashSet<String>, url: &str) {
    if !url.is_empty() && seen.insert(url.to_string()) {
        links.push(url.to_string());
    }
}

/// First image wins ties.
fn tallest(images: &[ProviderImage]) -> Option<&ProviderImage> {
    images.iter().fold(None, |best: Option<&ProviderImage>, candidate| match best {
        Some(current) if current.height >= candidate.height => Some(current),
        _ => Some(candidate),
    })
}

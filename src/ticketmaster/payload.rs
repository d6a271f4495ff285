//! Wire shapes of the Discovery API `events.json` response. Every field is
//! optional on the wire, so everything defaults.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: DiscoveryEmbedded,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryEmbedded {
    #[serde(default)]
    pub events: Vec<ProviderEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderEvent {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub images: Vec<ProviderImage>,

    #[serde(rename = "_embedded", default)]
    pub embedded: EventEmbedded,

    #[serde(default)]
    pub dates: Dates,

    #[serde(default)]
    pub classifications: Vec<Classification>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderImage {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventEmbedded {
    #[serde(default)]
    pub venues: Vec<Venue>,

    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub city: Named,

    #[serde(default)]
    pub country: Named,

    #[serde(default)]
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: String,
}

/// Coordinates arrive as decimal strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: String,

    #[serde(default)]
    pub longitude: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attraction {
    #[serde(default)]
    pub images: Vec<ProviderImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dates {
    #[serde(default)]
    pub start: StartDate,

    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDate {
    #[serde(default)]
    pub date_time: String,

    #[serde(default)]
    pub local_date: String,

    #[serde(default)]
    pub local_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default)]
    pub segment: Named,

    #[serde(default)]
    pub genre: Named,

    #[serde(default)]
    pub sub_genre: Named,
}

impl ProviderEvent {
    pub fn primary_venue(&self) -> Option<&Venue> {
        self.embedded.venues.first()
    }
}

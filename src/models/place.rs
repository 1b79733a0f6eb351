use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One entry of the text-search `results` array. Every field is optional
/// upstream, defaults are applied when the row is assembled.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct RawPlace {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub price_level: Option<i64>,
    pub business_status: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub types: Vec<String>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub photos: Vec<Photo>,
    pub icon: Option<String>,
    pub plus_code: Option<PlusCode>,
}

impl RawPlace {
    pub fn location(&self) -> Option<&Location> {
        self.geometry.as_ref().and_then(|g| g.location.as_ref())
    }

    pub fn photo_reference(&self) -> Option<&str> {
        self.photos
            .first()
            .and_then(|p| p.photo_reference.as_deref())
    }
}

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub weekday_text: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Geometry {
    pub location: Option<Location>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Photo {
    pub height: Option<i64>,
    pub width: Option<i64>,
    pub photo_reference: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PlusCode {
    pub global_code: Option<String>,
    pub compound_code: Option<String>,
}

/// Opaque `next_page_token` handed out by the text-search endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct PageCursor(pub String);

impl PageCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of text-search results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPage {
    pub places: Vec<RawPlace>,
    pub next_page_token: Option<PageCursor>,
}

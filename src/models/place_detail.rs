use serde::{Deserialize, Serialize};
use crate::models::place::OpeningHours;

/// Field mask requested from the details endpoint.
pub const DETAIL_FIELDS: &str =
    "formatted_phone_number,international_phone_number,website,opening_hours";

/// Supplementary fields for one place. `Default` is the empty detail used
/// whenever enrichment fails.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct PlaceDetail {
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHours>,
}

impl PlaceDetail {
    /// National format first, international as fallback. Empty strings count as absent.
    pub fn phone_number(&self) -> Option<&str> {
        non_empty(&self.formatted_phone_number)
            .or_else(|| non_empty(&self.international_phone_number))
    }

    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }

    pub fn weekly_hours(&self) -> String {
        self.opening_hours
            .as_ref()
            .map(|h| h.weekday_text.join("; "))
            .unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(formatted: Option<&str>, international: Option<&str>) -> PlaceDetail {
        PlaceDetail {
            formatted_phone_number: formatted.map(String::from),
            international_phone_number: international.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn phone_prefers_national_format() {
        let d = detail(Some("01 42 60 00 00"), Some("+33 1 42 60 00 00"));
        assert_eq!(d.phone_number(), Some("01 42 60 00 00"));
    }

    #[test]
    fn phone_falls_back_to_international() {
        assert_eq!(
            detail(None, Some("+33 1 42 60 00 00")).phone_number(),
            Some("+33 1 42 60 00 00")
        );
        assert_eq!(
            detail(Some(""), Some("+33 1 42 60 00 00")).phone_number(),
            Some("+33 1 42 60 00 00")
        );
        assert_eq!(detail(None, None).phone_number(), None);
    }

    #[test]
    fn weekly_hours_are_joined() {
        let d = PlaceDetail {
            opening_hours: Some(OpeningHours {
                open_now: None,
                weekday_text: vec![
                    "Monday: 9:00 AM – 5:00 PM".to_string(),
                    "Tuesday: Closed".to_string(),
                ],
            }),
            ..Default::default()
        };
        assert_eq!(d.weekly_hours(), "Monday: 9:00 AM – 5:00 PM; Tuesday: Closed");
        assert_eq!(PlaceDetail::default().weekly_hours(), "");
    }
}

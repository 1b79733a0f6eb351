use crate::models::place::RawPlace;
use crate::models::place_detail::PlaceDetail;
use crate::models::result_row::ResultRow;
use crate::models::search_request::SearchRequest;

/// Rating and price level as the filters see them: 0 when absent upstream.
pub fn rating_and_price(place: &RawPlace) -> (f64, i64) {
    (place.rating.unwrap_or(0.0), place.price_level.unwrap_or(0))
}

/// Both bounds are inclusive.
pub fn passes_filters(place: &RawPlace, request: &SearchRequest) -> bool {
    let (rating, price_level) = rating_and_price(place);
    rating >= request.min_rating && price_level <= request.max_price_level
}

/// Flattens a place and its detail into one row. Callers filter first.
pub fn assemble_row(place: RawPlace, detail: PlaceDetail, emails: Option<String>) -> ResultRow {
    let (rating, price_level) = rating_and_price(&place);
    let location = place.location().cloned();

    ResultRow {
        opening_hours_weekly: detail.weekly_hours(),
        phone_number: detail.phone_number().map(String::from),
        website: detail.website().map(String::from),
        photo_reference: place.photo_reference().map(String::from),
        open_now: place.opening_hours.as_ref().and_then(|h| h.open_now),
        types: place.types.join(", "),
        latitude: location.as_ref().and_then(|l| l.lat),
        longitude: location.as_ref().and_then(|l| l.lng),
        plus_code: place.plus_code.and_then(|p| p.global_code),
        name: place.name,
        address: place.formatted_address,
        vicinity: place.vicinity,
        rating,
        user_ratings_total: place.user_ratings_total,
        price_level,
        business_status: place.business_status,
        place_id: place.place_id,
        icon: place.icon,
        emails,
    }
}

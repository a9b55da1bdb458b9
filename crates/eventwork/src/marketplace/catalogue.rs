/// Cities offered when workers and authorisers pick a home location or job venue.
pub const SUPPORTED_CITIES: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

/// Resolve user input to the catalogue spelling of a supported city.
pub fn canonical_city(raw: &str) -> Option<&'static str> {
    let wanted = raw.trim();
    SUPPORTED_CITIES
        .into_iter()
        .find(|city| city.eq_ignore_ascii_case(wanted))
}

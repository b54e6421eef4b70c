//! The fixed country list offered by the signup form, and the country keyed
//! catalog of province/state options. Options double as identifiers, so each
//! list must be free of duplicates.

pub const COUNTRIES: [&str; 3] = ["United States", "Canada", "Other"];

/// The sub-list for a country, or `None` when the country has no known
/// provinces ("Other", and anything outside the catalog).
pub fn provinces_for(country: &str) -> Option<&'static [&'static str]> {
    match country {
        "United States" => Some(&US_STATES),
        "Canada" => Some(&CANADIAN_PROVINCES),
        _ => None,
    }
}

const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

const CANADIAN_PROVINCES: [&str; 13] = [
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Northwest Territories",
    "Nova Scotia",
    "Nunavut",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
    "Yukon",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use speculoos::prelude::*;

    use super::{provinces_for, COUNTRIES};

    #[test]
    fn united_states_has_fifty_states() {
        let states = provinces_for("United States").expect("a catalog entry");
        assert_that(&states.len()).is_equal_to(50);
        assert_that(&states.contains(&"California")).is_true();
    }

    #[test]
    fn canada_has_thirteen_provinces_and_territories() {
        let provinces = provinces_for("Canada").expect("a catalog entry");
        assert_that(&provinces.len()).is_equal_to(13);
        assert_that(&provinces.contains(&"Quebec")).is_true();
    }

    #[test]
    fn other_has_no_sub_list() {
        assert_that(&provinces_for("Other")).is_none();
    }

    #[test]
    fn unknown_countries_have_no_sub_list() {
        assert_that(&provinces_for("Atlantis")).is_none();
        assert_that(&provinces_for("")).is_none();
    }

    #[test]
    fn options_are_unique_within_each_list() {
        for country in COUNTRIES {
            if let Some(options) = provinces_for(country) {
                let unique: HashSet<_> = options.iter().collect();
                assert_that(&unique.len()).is_equal_to(options.len());
            }
        }
    }
}

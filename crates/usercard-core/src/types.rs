//! Person Record - one generated identity as served by the random-user API
//!
//! Field names follow the API's JSON so records decode without renaming.
//! Extra fields the API sends (`login`, `dob`, `registered`, ...) are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single fetched person.
///
/// Records are immutable once fetched; the card replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub email: String,
    /// Free text; only "male" (any case) is special-cased by the icon policy
    pub gender: String,
    pub picture: Picture,
    pub location: Location,
    pub phone: String,
    pub cell: String,
    /// Nationality code (e.g. "US", "FR")
    pub nat: String,
}

impl Person {
    /// "first last", used for the heading and the avatar alt text
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Honorific rendered with a trailing dot ("Mr.", "Ms.")
    pub fn display_title(&self) -> String {
        format!("{}.", self.name.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Image URLs at the resolutions the API offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: Coordinates,
}

impl Location {
    /// "12 Main St"
    pub fn street_line(&self) -> String {
        format!("{} {}", self.street.number, self.street.name)
    }

    /// "Springfield, USA"
    pub fn city_country(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

/// Postal code as the API sends it.
///
/// Some nationalities come back as JSON numbers, others as strings
/// (e.g. "EC1A 1BB"), so both are accepted and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

/// Latitude/longitude, kept as the strings the API sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// Envelope returned by the random-user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomUserResponse {
    pub results: Vec<Person>,
}

impl RandomUserResponse {
    /// Take the first (and only requested) result.
    pub fn into_first(self) -> Option<Person> {
        self.results.into_iter().next()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A record matching the shapes used throughout the tests.
    pub fn person() -> Person {
        Person {
            name: Name {
                title: "Mr".to_string(),
                first: "Homer".to_string(),
                last: "Simpson".to_string(),
            },
            email: "a@b.com".to_string(),
            gender: "male".to_string(),
            picture: Picture {
                large: "https://randomuser.me/api/portraits/men/1.jpg".to_string(),
                medium: "https://randomuser.me/api/portraits/med/men/1.jpg".to_string(),
                thumbnail: "https://randomuser.me/api/portraits/thumb/men/1.jpg".to_string(),
            },
            location: Location {
                street: Street {
                    number: 12,
                    name: "Main St".to_string(),
                },
                city: "Springfield".to_string(),
                state: "Oregon".to_string(),
                country: "USA".to_string(),
                postcode: Postcode::Number(97403),
                coordinates: Coordinates {
                    latitude: "44.0462".to_string(),
                    longitude: "-123.0220".to_string(),
                },
            },
            phone: "(555) 010-1234".to_string(),
            cell: "(555) 010-9876".to_string(),
            nat: "US".to_string(),
        }
    }
}

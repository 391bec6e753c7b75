//! Contact actions derived from the current record.
//!
//! Each action is a navigation target: a mail composer, a dialer or a map
//! search. Building the target is pure; actually leaving the app is the
//! job of a [`Navigator`] supplied by the front-end.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::config::MAPS_SEARCH_URL;
use crate::types::{Location, Person};

/// Bytes left as-is in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The three contact buttons, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactKind {
    Email,
    Call,
    Map,
}

impl ContactKind {
    pub const ALL: [ContactKind; 3] = [ContactKind::Email, ContactKind::Call, ContactKind::Map];

    pub fn action_for(&self, person: &Person) -> ContactAction {
        match self {
            ContactKind::Email => ContactAction::email(person),
            ContactKind::Call => ContactAction::call(person),
            ContactKind::Map => ContactAction::map(person),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Call => "Call",
            ContactKind::Map => "Map",
        }
    }
}

/// A user-triggered jump out of the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    /// Compose a mail to this address
    Email(String),
    /// Dial this number (the record's `phone`, never `cell`)
    Call(String),
    /// Search a map for this free-text address
    Map(String),
}

impl ContactAction {
    pub fn email(person: &Person) -> Self {
        ContactAction::Email(person.email.clone())
    }

    pub fn call(person: &Person) -> Self {
        ContactAction::Call(person.phone.clone())
    }

    pub fn map(person: &Person) -> Self {
        ContactAction::Map(map_address(&person.location))
    }

    pub fn kind(&self) -> ContactKind {
        match self {
            ContactAction::Email(_) => ContactKind::Email,
            ContactAction::Call(_) => ContactKind::Call,
            ContactAction::Map(_) => ContactKind::Map,
        }
    }

    /// Navigation target for this action.
    ///
    /// `mailto:` and `tel:` carry the raw field; the map address is
    /// percent-encoded as one URI component and appended to the search URL.
    pub fn uri(&self) -> Result<Url, url::ParseError> {
        match self {
            ContactAction::Email(address) => Url::parse(&format!("mailto:{}", address)),
            ContactAction::Call(number) => Url::parse(&format!("tel:{}", number)),
            ContactAction::Map(address) => Url::parse(&format!(
                "{}{}",
                MAPS_SEARCH_URL,
                utf8_percent_encode(address, URI_COMPONENT)
            )),
        }
    }
}

/// Free-text address for the map search.
///
/// State and postcode are left out, and so are the coordinates.
pub fn map_address(location: &Location) -> String {
    format!(
        "{} {}, {}, {}",
        location.street.number, location.street.name, location.city, location.country
    )
}

/// Platform hook that leaves the app for a contact target.
pub trait Navigator {
    fn navigate(&self, action: &ContactAction);
}

//! Property-based tests for the card state and derived values
//!
//! Uses proptest to check the card's invariants over arbitrary
//! interleavings of fetches, failures and toggles.

use proptest::prelude::*;
use usercard_core::{
    map_address, ApplyPolicy, CardState, ContactAction, Coordinates, FetchError, FetchTicket,
    GenderIcon, Location, Name, Person, Picture, Postcode, Street,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Every upper/lower-case spelling of "male"
fn male_spelling_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 4).prop_map(|upper| {
        "male"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ./#'-]{1,30}").expect("valid regex")
}

fn person(first: String) -> Person {
    Person {
        name: Name {
            title: "Mx".to_string(),
            first,
            last: "Doe".to_string(),
        },
        email: "doe@example.com".to_string(),
        gender: "unknown".to_string(),
        picture: Picture {
            large: String::new(),
            medium: String::new(),
            thumbnail: String::new(),
        },
        location: Location {
            street: Street {
                number: 1,
                name: "High St".to_string(),
            },
            city: "Town".to_string(),
            state: "Shire".to_string(),
            country: "Land".to_string(),
            postcode: Postcode::Number(1),
            coordinates: Coordinates {
                latitude: "0".to_string(),
                longitude: "0".to_string(),
            },
        },
        phone: "1".to_string(),
        cell: "2".to_string(),
        nat: "XX".to_string(),
    }
}

/// Operations a user or the network can perform on a card
#[derive(Debug, Clone)]
enum CardOp {
    Begin,
    Succeed(usize), // Index into outstanding tickets
    Fail(usize),    // Index into outstanding tickets
    Toggle,
}

fn card_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CardOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(CardOp::Begin),
            2 => (0..8usize).prop_map(CardOp::Succeed),
            1 => (0..8usize).prop_map(CardOp::Fail),
            2 => Just(CardOp::Toggle),
        ],
        0..max_ops,
    )
}

fn policy_strategy() -> impl Strategy<Value = ApplyPolicy> {
    prop_oneof![Just(ApplyPolicy::LatestIssued), Just(ApplyPolicy::LastResolved)]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any casing of "male" selects the male icon
    #[test]
    fn male_any_case(gender in male_spelling_strategy()) {
        prop_assert_eq!(GenderIcon::from_gender(&gender), GenderIcon::Male);
    }

    /// Everything that is not "male" falls back to the female icon
    #[test]
    fn non_male_falls_back(gender in ".{0,20}") {
        prop_assume!(!gender.eq_ignore_ascii_case("male"));
        prop_assert_eq!(GenderIcon::from_gender(&gender), GenderIcon::Female);
    }

    /// The map address is always "number street, city, country"
    #[test]
    fn map_address_shape(
        number in 0i64..100_000,
        street in word_strategy(),
        city in word_strategy(),
        country in word_strategy(),
        state in word_strategy(),
    ) {
        let mut p = person("Map".to_string());
        p.location.street = Street { number, name: street.clone() };
        p.location.city = city.clone();
        p.location.country = country.clone();
        p.location.state = state;

        let address = map_address(&p.location);
        prop_assert_eq!(&address, &format!("{} {}, {}, {}", number, street, city, country));

        // Encoded as a single path segment, whatever the address contains
        let uri = ContactAction::Map(address).uri().unwrap();
        prop_assert!(!uri.as_str().contains(' '));
        prop_assert_eq!(uri.path_segments().unwrap().count(), 3);
    }

    /// Loading tracks outstanding tickets, failures never touch the record,
    /// and only toggles move the expansion flag.
    #[test]
    fn card_invariants(ops in card_ops_strategy(60), policy in policy_strategy()) {
        let mut state = CardState::with_policy(policy);
        let mut outstanding: Vec<FetchTicket> = Vec::new();
        let mut counter = 0u32;

        for op in ops {
            let record_before = state.record().cloned();
            let expanded_before = state.is_expanded();

            match op {
                CardOp::Begin => {
                    outstanding.push(state.begin_fetch());
                    prop_assert_eq!(state.record().cloned(), record_before);
                }
                CardOp::Succeed(i) if !outstanding.is_empty() => {
                    let ticket = outstanding.remove(i % outstanding.len());
                    counter += 1;
                    let outcome = state.complete(ticket, Ok(person(counter.to_string())));
                    if policy == ApplyPolicy::LastResolved {
                        prop_assert!(outcome.is_applied());
                    }
                    if !outcome.is_applied() {
                        prop_assert_eq!(state.record().cloned(), record_before);
                    }
                }
                CardOp::Fail(i) if !outstanding.is_empty() => {
                    let ticket = outstanding.remove(i % outstanding.len());
                    state.complete(ticket, Err(FetchError::EmptyResults));
                    prop_assert_eq!(state.record().cloned(), record_before);
                }
                CardOp::Toggle => {
                    state.toggle_expansion();
                    prop_assert_eq!(state.record().cloned(), record_before.clone());
                    if record_before.is_some() {
                        prop_assert_ne!(state.is_expanded(), expanded_before);
                    }
                    continue;
                }
                _ => {}
            }

            prop_assert_eq!(state.is_expanded(), expanded_before);
            prop_assert_eq!(state.is_loading(), !outstanding.is_empty());
        }
    }
}

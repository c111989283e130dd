//! Free-text filtering and stable sorting of already-authorized summaries.
//!
//! This module is deliberately pure: [`filter_and_sort`] takes a slice,
//! returns a fresh `Vec`, and never mutates its input, so it can be
//! re-run on every change to the source list, search term, or sort key.
//! Authorization happens before data reaches this point; refinement can
//! only ever narrow what the caller already sees.

use chrono::{DateTime, Utc};

use tourhub_core::types::sorting::SortKey;
use tourhub_entity::event::Event;
use tourhub_entity::venue::Venue;

/// A summary row that can be searched and sorted.
pub trait ListEntry {
    /// The fixed set of fields matched by free-text search.
    fn search_fields(&self) -> Vec<String>;

    /// The designated date for `recent` / `oldest` ordering.
    fn sort_date(&self) -> DateTime<Utc>;

    /// The display name for `name-asc` / `name-desc` ordering.
    fn sort_name(&self) -> String;

    /// Booking volume for `bookings-desc` ordering.
    fn bookings(&self) -> i64 {
        0
    }
}

/// Filter by case-insensitive substring, then sort by the given key.
///
/// A record matches when the term is empty or at least one searchable
/// field contains it. Every ordering is stable: records that compare
/// equal keep their relative order from the input.
pub fn filter_and_sort<T: ListEntry + Clone>(
    items: &[T],
    search_term: &str,
    sort_key: SortKey,
) -> Vec<T> {
    let needle = search_term.trim().to_lowercase();

    let mut refined: Vec<T> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    match sort_key {
        SortKey::Recent => refined.sort_by(|a, b| b.sort_date().cmp(&a.sort_date())),
        SortKey::Oldest => refined.sort_by(|a, b| a.sort_date().cmp(&b.sort_date())),
        SortKey::NameAsc => {
            refined.sort_by(|a, b| a.sort_name().to_lowercase().cmp(&b.sort_name().to_lowercase()))
        }
        SortKey::NameDesc => {
            refined.sort_by(|a, b| b.sort_name().to_lowercase().cmp(&a.sort_name().to_lowercase()))
        }
        SortKey::BookingsDesc => refined.sort_by(|a, b| b.bookings().cmp(&a.bookings())),
    }

    refined
}

impl ListEntry for Event {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.city.clone(),
            self.category.clone(),
            self.venue_name.clone(),
        ]
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort_name(&self) -> String {
        self.title.clone()
    }

    fn bookings(&self) -> i64 {
        self.bookings_count as i64
    }
}

impl ListEntry for Venue {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.city.clone(), self.category.clone()]
    }

    fn sort_date(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn sort_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Customer {
        first: &'static str,
        last: &'static str,
        email: &'static str,
        phone: &'static str,
        joined: DateTime<Utc>,
        bookings: i64,
    }

    impl ListEntry for Customer {
        fn search_fields(&self) -> Vec<String> {
            vec![
                self.first.to_string(),
                self.last.to_string(),
                self.email.to_string(),
                self.phone.to_string(),
            ]
        }

        fn sort_date(&self) -> DateTime<Utc> {
            self.joined
        }

        fn sort_name(&self) -> String {
            format!("{} {}", self.first, self.last)
        }

        fn bookings(&self) -> i64 {
            self.bookings
        }
    }

    fn day(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, n, 0, 0, 0).unwrap()
    }

    fn customer(
        first: &'static str,
        last: &'static str,
        email: &'static str,
        joined: DateTime<Utc>,
        bookings: i64,
    ) -> Customer {
        Customer {
            first,
            last,
            email,
            phone: "555-0100",
            joined,
            bookings,
        }
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let out: Vec<Customer> = filter_and_sort(&[], "", SortKey::Recent);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_term_matches_everything_sorted_recent() {
        let items = vec![
            customer("Ann", "Lee", "a@x.com", day(1), 5),
            customer("Bob", "Ng", "b@x.com", day(3), 2),
            customer("Cy", "Oh", "c@x.com", day(2), 9),
        ];
        let out = filter_and_sort(&items, "", SortKey::Recent);
        let names: Vec<_> = out.iter().map(|c| c.first).collect();
        assert_eq!(names, vec!["Bob", "Cy", "Ann"]);
        // Input untouched.
        assert_eq!(items[0].first, "Ann");
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let items = vec![
            customer("Ann", "Lee", "a@x.com", day(1), 0),
            customer("Bob", "Ng", "b@x.com", day(2), 0),
        ];
        let out = filter_and_sort(&items, "an", SortKey::Recent);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].first, "Ann");
    }

    #[test]
    fn test_search_covers_email_and_phone() {
        let items = vec![
            customer("Ann", "Lee", "a@x.com", day(1), 0),
            customer("Bob", "Ng", "b@x.com", day(2), 0),
        ];
        assert_eq!(filter_and_sort(&items, "b@x", SortKey::Recent).len(), 1);
        assert_eq!(filter_and_sort(&items, "555", SortKey::Recent).len(), 2);
    }

    #[test]
    fn test_recent_sort_is_stable_on_ties() {
        let items = vec![
            customer("First", "In", "1@x.com", day(5), 0),
            customer("Second", "In", "2@x.com", day(5), 0),
            customer("Third", "In", "3@x.com", day(5), 0),
        ];
        let out = filter_and_sort(&items, "", SortKey::Recent);
        let names: Vec<_> = out.iter().map(|c| c.first).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_oldest_sorts_ascending() {
        let items = vec![
            customer("Ann", "Lee", "a@x.com", day(3), 0),
            customer("Bob", "Ng", "b@x.com", day(1), 0),
        ];
        let out = filter_and_sort(&items, "", SortKey::Oldest);
        assert_eq!(out[0].first, "Bob");
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let items = vec![
            customer("bob", "ng", "b@x.com", day(1), 0),
            customer("Ann", "Lee", "a@x.com", day(2), 0),
        ];
        let asc = filter_and_sort(&items, "", SortKey::NameAsc);
        assert_eq!(asc[0].first, "Ann");
        let desc = filter_and_sort(&items, "", SortKey::NameDesc);
        assert_eq!(desc[0].first, "bob");
    }

    #[test]
    fn test_bookings_desc() {
        let items = vec![
            customer("Bob", "Ng", "b@x.com", day(1), 2),
            customer("Ann", "Lee", "a@x.com", day(2), 5),
        ];
        let out = filter_and_sort(&items, "", SortKey::BookingsDesc);
        assert_eq!(out[0].first, "Ann");
        assert_eq!(out[1].first, "Bob");
    }
}

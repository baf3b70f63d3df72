//! Property-based tests for domain invariants
//!
//! These tests verify that ownership, truncation and identity invariants
//! hold for arbitrary venues, labels and allocation sequences.

use proptest::prelude::*;
use venue_ticketing::domain::{
    validation_constants::fixed_text::{CAPACITY, MAX_CONTENT_BYTES},
    Capacity, FixedText, SeatCount, Ticket, TicketId, TicketIdAllocator, TicketIdVerdict,
    VenueError, VenueLayout, ZoneCount,
};

// Property test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Generate per-row seat counts
    pub fn seat_rows() -> impl Strategy<Value = Vec<u32>> {
        vec(0u32..500, 0..40)
    }

    /// Generate a consistent venue layout
    pub fn venue_layout() -> impl Strategy<Value = VenueLayout> {
        (any::<u32>(), any::<u32>(), seat_rows()).prop_map(|(capacity, zones, rows)| {
            let num_rows = rows.len();
            VenueLayout::new(
                Capacity::new(capacity),
                num_rows,
                ZoneCount::new(zones),
                rows.into_iter().map(SeatCount::new).collect(),
            )
            .expect("row count matches generated rows")
        })
    }

    /// Generate arbitrary text, including multi-byte characters
    pub fn label() -> impl Strategy<Value = String> {
        any::<String>()
    }
}

// Domain invariants to verify
pub struct DomainInvariants;

impl DomainInvariants {
    /// Invariant: the row count always equals the length of the seat sequence
    pub fn rows_match_sequence(venue: &VenueLayout) -> bool {
        venue.num_rows() == venue.seats_per_row().len()
    }

    /// Invariant: stored text fits the buffer and keeps the terminator byte
    pub fn text_is_bounded(text: &FixedText) -> bool {
        text.len() <= MAX_CONTENT_BYTES && text.as_bytes()[CAPACITY - 1] == 0
    }

    /// Invariant: a sequence of identifiers is strictly increasing by one
    pub fn ids_are_consecutive(ids: &[TicketId]) -> bool {
        ids.windows(2)
            .all(|pair| pair[1].into_inner() == pair[0].into_inner() + 1)
    }
}

proptest! {
    #[test]
    fn prop_layout_rows_match_sequence(venue in generators::venue_layout()) {
        prop_assert!(DomainInvariants::rows_match_sequence(&venue));
    }

    #[test]
    fn prop_replace_with_clone_is_noop(venue in generators::venue_layout()) {
        let mut replaced = venue.clone();
        let snapshot = replaced.clone();
        replaced.replace(&snapshot);
        prop_assert_eq!(replaced, venue);
    }

    #[test]
    fn prop_copy_is_isolated(venue in generators::venue_layout(), extra in 0u32..100) {
        let original = venue.clone();
        let mut copy = venue.clone();

        let mut rows = copy.seats_per_row().to_vec();
        rows.push(SeatCount::new(extra));
        let grown = VenueLayout::new(copy.max_seats(), rows.len(), copy.num_zones(), rows)
            .expect("row count matches");
        copy.replace(&grown);

        prop_assert_eq!(&venue, &original);
        prop_assert_ne!(copy, original);
    }

    #[test]
    fn prop_row_lookup_respects_bounds(venue in generators::venue_layout(), index in -50i64..50) {
        let rows = venue.num_rows();
        match venue.seats_in_row(index) {
            Ok(seats) => {
                let position = usize::try_from(index).expect("in-range index is non-negative");
                prop_assert_eq!(seats, venue.seats_per_row()[position]);
            }
            Err(error) => {
                prop_assert_eq!(error, VenueError::IndexOutOfRange { index, rows });
                prop_assert!(index < 0 || usize::try_from(index).map_or(true, |i| i >= rows));
            }
        }
    }

    #[test]
    fn prop_mismatched_row_count_is_rejected(rows in generators::seat_rows(), skew in 1usize..5) {
        let declared = rows.len() + skew;
        let result = VenueLayout::new(
            Capacity::new(0),
            declared,
            ZoneCount::new(0),
            rows.into_iter().map(SeatCount::new).collect(),
        );
        let is_mismatch = matches!(result, Err(VenueError::RowCountMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn prop_fixed_text_is_bounded(source in generators::label()) {
        let text = FixedText::new(&source);
        prop_assert!(DomainInvariants::text_is_bounded(&text));
        prop_assert!(source.starts_with(text.as_str()));
    }

    #[test]
    fn prop_allocations_are_consecutive(start in 1u64..1_000_000, count in 1usize..200) {
        let mut allocator = TicketIdAllocator::starting_at(TicketId::new(start));
        let ids: Vec<_> = (0..count).map(|_| allocator.allocate()).collect();

        prop_assert_eq!(ids[0], TicketId::new(start));
        prop_assert!(DomainInvariants::ids_are_consecutive(&ids));
    }

    #[test]
    fn prop_unknown_labels_issue_nothing(label in generators::label()) {
        prop_assume!(!["VIP", "Lawn", "Balcony"].contains(&label.as_str()));

        let mut allocator = TicketIdAllocator::new();
        prop_assert!(Ticket::issue_for_label(&mut allocator, &label).is_err());
        prop_assert_eq!(allocator.peek(), TicketId::new(1));
    }

    #[test]
    fn prop_ticket_id_window(candidate in any::<i64>()) {
        let verdict = TicketIdVerdict::assess(candidate);
        prop_assert_eq!(verdict.is_valid(), (1..1_000_000).contains(&candidate));
    }
}

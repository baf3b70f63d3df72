//! Venue layout: the physical seating configuration of an event location
//!
//! The layout owns its per-row seat counts as a plain `Vec`, so cloning is a
//! deep copy and replacing a layout drops the previous sequence.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Declared maximum number of seats in the venue
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct Capacity(u32);

/// Number of seating zones in the venue
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct ZoneCount(u32);

/// Seats available in a single row
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct SeatCount(u32);

/// Failures when building or querying a venue layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueError {
    #[error("Venue declares {declared} rows but {supplied} seat counts were supplied")]
    RowCountMismatch { declared: usize, supplied: usize },

    #[error("Row index {index} is out of range for a venue with {rows} rows")]
    IndexOutOfRange { index: i64, rows: usize },
}

/// Seating configuration of a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueLayout {
    max_seats: Capacity,
    num_zones: ZoneCount,
    seats_per_row: Vec<SeatCount>,
}

impl VenueLayout {
    /// Build a layout, checking that `seats_per_row` has exactly `num_rows` entries
    pub fn new(
        max_seats: Capacity,
        num_rows: usize,
        num_zones: ZoneCount,
        seats_per_row: Vec<SeatCount>,
    ) -> Result<Self, VenueError> {
        if seats_per_row.len() != num_rows {
            return Err(VenueError::RowCountMismatch {
                declared: num_rows,
                supplied: seats_per_row.len(),
            });
        }

        Ok(Self {
            max_seats,
            num_zones,
            seats_per_row,
        })
    }

    /// A venue with no capacity, rows or zones
    pub fn empty() -> Self {
        Self {
            max_seats: Capacity::new(0),
            num_zones: ZoneCount::new(0),
            seats_per_row: Vec::new(),
        }
    }

    pub fn max_seats(&self) -> Capacity {
        self.max_seats
    }

    pub fn num_rows(&self) -> usize {
        self.seats_per_row.len()
    }

    pub fn num_zones(&self) -> ZoneCount {
        self.num_zones
    }

    pub fn seats_per_row(&self) -> &[SeatCount] {
        &self.seats_per_row
    }

    /// Seat count of the row at `index`
    pub fn seats_in_row(&self, index: i64) -> Result<SeatCount, VenueError> {
        let seats = usize::try_from(index)
            .ok()
            .and_then(|i| self.seats_per_row.get(i).copied());

        seats.ok_or_else(|| {
            let error = VenueError::IndexOutOfRange {
                index,
                rows: self.num_rows(),
            };
            warn!(%error, "row lookup rejected");
            error
        })
    }

    /// Overwrite every field with a deep copy of `other`
    pub fn replace(&mut self, other: &Self) {
        self.max_seats = other.max_seats;
        self.num_zones = other.num_zones;
        self.seats_per_row = other.seats_per_row.clone();
    }

    /// Sum of the seat counts over all rows
    pub fn total_row_seats(&self) -> u64 {
        self.seats_per_row
            .iter()
            .map(|seats| u64::from(seats.into_inner()))
            .sum()
    }

    /// Whether the rows hold more seats than the declared capacity
    pub fn exceeds_capacity(&self) -> bool {
        self.total_row_seats() > u64::from(self.max_seats.into_inner())
    }
}

impl Default for VenueLayout {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for VenueLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Venue: Max Seats={}, Rows={}, Zones={}",
            self.max_seats,
            self.num_rows(),
            self.num_zones
        )?;
        write!(f, "Seats per Row:")?;
        for seats in &self.seats_per_row {
            write!(f, " {seats}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(counts: &[u32]) -> Vec<SeatCount> {
        counts.iter().copied().map(SeatCount::new).collect()
    }

    fn arena() -> VenueLayout {
        VenueLayout::new(
            Capacity::new(100),
            5,
            ZoneCount::new(2),
            seats(&[20, 20, 20, 20, 20]),
        )
        .unwrap()
    }

    #[test]
    fn test_layout_construction() {
        let venue = arena();
        assert_eq!(venue.max_seats().into_inner(), 100);
        assert_eq!(venue.num_rows(), 5);
        assert_eq!(venue.num_zones().into_inner(), 2);
        assert_eq!(venue.total_row_seats(), 100);
        assert!(!venue.exceeds_capacity());
    }

    #[test]
    fn test_row_count_mismatch_is_rejected() {
        let result = VenueLayout::new(Capacity::new(10), 3, ZoneCount::new(1), seats(&[5, 5]));
        assert_eq!(
            result,
            Err(VenueError::RowCountMismatch {
                declared: 3,
                supplied: 2
            })
        );
    }

    #[test]
    fn test_seats_in_row_bounds() {
        let venue = VenueLayout::new(
            Capacity::new(60),
            3,
            ZoneCount::new(1),
            seats(&[10, 20, 30]),
        )
        .unwrap();

        assert_eq!(venue.seats_in_row(0), Ok(SeatCount::new(10)));
        assert_eq!(venue.seats_in_row(2), Ok(SeatCount::new(30)));
        assert_eq!(
            venue.seats_in_row(3),
            Err(VenueError::IndexOutOfRange { index: 3, rows: 3 })
        );
        assert_eq!(
            venue.seats_in_row(-1),
            Err(VenueError::IndexOutOfRange { index: -1, rows: 3 })
        );
    }

    #[test]
    fn test_empty_layout_rejects_every_index() {
        let venue = VenueLayout::empty();
        assert_eq!(venue.num_rows(), 0);
        assert!(venue.seats_in_row(0).is_err());
    }

    #[test]
    fn test_replace_discards_previous_rows() {
        let mut venue = arena();
        let smaller =
            VenueLayout::new(Capacity::new(8), 2, ZoneCount::new(1), seats(&[3, 5])).unwrap();

        venue.replace(&smaller);
        assert_eq!(venue, smaller);
        assert_eq!(venue.num_rows(), 2);
        assert!(venue.seats_in_row(2).is_err());
    }

    #[test]
    fn test_replace_with_equal_value_is_noop() {
        let mut venue = arena();
        let same = venue.clone();
        venue.replace(&same);
        assert_eq!(venue, arena());
    }

    #[test]
    fn test_clone_is_isolated() {
        let original = arena();
        let mut copy = original.clone();
        copy.seats_per_row[0] = SeatCount::new(99);

        assert_ne!(copy, original);
        assert_eq!(original.seats_in_row(0), Ok(SeatCount::new(20)));
    }

    #[test]
    fn test_capacity_overflow_is_detected() {
        let venue =
            VenueLayout::new(Capacity::new(10), 2, ZoneCount::new(1), seats(&[8, 8])).unwrap();
        assert!(venue.exceeds_capacity());
    }

    #[test]
    fn test_display_lists_scalars_and_rows_in_order() {
        let venue = VenueLayout::new(
            Capacity::new(100),
            5,
            ZoneCount::new(2),
            seats(&[20, 21, 22, 23, 24]),
        )
        .unwrap();

        assert_eq!(
            venue.to_string(),
            "Venue: Max Seats=100, Rows=5, Zones=2\nSeats per Row: 20 21 22 23 24"
        );
    }
}

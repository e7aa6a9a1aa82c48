use std::fmt;

use tracing::debug;

use crate::base_types::{CustomerIdx, TripIdx};

/// How the alternative trips of a customer can interleave within one duty.
/// The order is meaningful: a later variant requires stricter exclusivity tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlternativeType {
    Unknown,
    /// no two trips of the customer can be served one after another.
    Parallel,
    /// some trip of the customer can directly follow another one.
    Consecutive,
    /// some third-party trip fits between two trips of the customer.
    Intermittent,
    /// some trip of an intermittent customer fits between two trips of the customer.
    Overlapping,
}

impl AlternativeType {
    /// customers of this type need their route commitment to be remembered along a duty.
    pub fn requires_tracking(&self) -> bool {
        *self >= AlternativeType::Intermittent
    }
}

impl fmt::Display for AlternativeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AlternativeType::Unknown => "unknown",
            AlternativeType::Parallel => "parallel",
            AlternativeType::Consecutive => "consecutive",
            AlternativeType::Intermittent => "intermittent",
            AlternativeType::Overlapping => "overlapping",
        };
        write!(f, "{}", name)
    }
}

/// Classifies every customer by the weakest type that still holds.
///
/// The first pass decides between parallel, consecutive and intermittent. The second pass
/// upgrades to overlapping and reads the types of the first pass for the third-party trips.
/// is_time_feasible(s, t) must be the time-only test `finish(s) + travel(s, t) <= start(t)`.
pub(crate) fn classify_customers(
    customer_trips: &[Vec<TripIdx>],
    trip_customers: &[CustomerIdx],
    is_time_feasible: impl Fn(TripIdx, TripIdx) -> bool,
) -> Vec<AlternativeType> {
    let all_trips: Vec<TripIdx> = (0..trip_customers.len())
        .map(|j| TripIdx(j as u32))
        .collect();

    let fits_between = |s: TripIdx, p: TripIdx, t: TripIdx| {
        is_time_feasible(s, p) && is_time_feasible(p, t)
    };

    // first pass
    let mut types: Vec<AlternativeType> = customer_trips
        .iter()
        .enumerate()
        .map(|(c, trips)| {
            let customer = CustomerIdx(c as u32);
            let mut alternative_type = AlternativeType::Parallel;
            for (s, t) in consecutive_pairs(trips, &is_time_feasible) {
                alternative_type = alternative_type.max(AlternativeType::Consecutive);
                if all_trips
                    .iter()
                    .any(|&p| trip_customers[p.idx()] != customer && fits_between(s, p, t))
                {
                    alternative_type = AlternativeType::Intermittent;
                    break;
                }
            }
            alternative_type
        })
        .collect();

    // second pass
    let intermittent = types.clone();
    for (c, trips) in customer_trips.iter().enumerate() {
        let customer = CustomerIdx(c as u32);
        let overlapping = consecutive_pairs(trips, &is_time_feasible).any(|(s, t)| {
            all_trips.iter().any(|&p| {
                let other = trip_customers[p.idx()];
                other != customer
                    && intermittent[other.idx()] == AlternativeType::Intermittent
                    && fits_between(s, p, t)
            })
        });
        if overlapping {
            types[c] = AlternativeType::Overlapping;
        }
        debug!("{} is {}", customer, types[c]);
    }

    types
}

/// all ordered pairs (s, t) of distinct trips where t can follow s.
fn consecutive_pairs<'a>(
    trips: &'a [TripIdx],
    is_time_feasible: &'a impl Fn(TripIdx, TripIdx) -> bool,
) -> impl Iterator<Item = (TripIdx, TripIdx)> + 'a {
    trips.iter().flat_map(move |&s| {
        trips
            .iter()
            .filter(move |&&t| s != t && is_time_feasible(s, t))
            .map(move |&t| (s, t))
    })
}

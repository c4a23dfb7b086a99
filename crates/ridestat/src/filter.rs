//! Filter engine: narrows the unified table by (city, month, weekday).

use serde::Serialize;

use crate::model::{City, TripRecord, MONTH_NAMES, WEEKDAY_NAMES};

/// The (city, month, weekday) filter triple.
///
/// `City::All` and `None` mean "no constraint on this dimension". The
/// predicate is the conjunction of the active dimensions only, so every
/// combination of set/unset dimensions is handled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selector {
    /// City constraint; `City::All` matches every record.
    pub city: City,
    /// Month number constraint (1-12); `None` matches every record.
    pub month: Option<u32>,
    /// Weekday number constraint (0 = Monday); `None` matches every record.
    pub weekday: Option<u32>,
}

impl Selector {
    /// The no-constraint selector.
    pub const ALL: Selector = Selector {
        city: City::All,
        month: None,
        weekday: None,
    };

    /// Build a selector from its three dimensions.
    pub fn new(city: City, month: Option<u32>, weekday: Option<u32>) -> Self {
        Self {
            city,
            month,
            weekday,
        }
    }

    /// True when no dimension constrains the data.
    pub fn is_unfiltered(&self) -> bool {
        self.city == City::All && self.month.is_none() && self.weekday.is_none()
    }

    /// True when `record` satisfies every active dimension.
    pub fn matches(&self, record: &TripRecord) -> bool {
        let city_ok = self.city == City::All || record.city == self.city;
        let month_ok = self.month.is_none_or(|m| record.month == m);
        let weekday_ok = self.weekday.is_none_or(|d| record.weekday == d);
        city_ok && month_ok && weekday_ok
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = match self.month {
            Some(m) => MONTH_NAMES[(m - 1) as usize],
            None => "All",
        };
        let weekday = match self.weekday {
            Some(d) => WEEKDAY_NAMES[d as usize],
            None => "All",
        };
        write!(f, "{}, {}, {}", self.city, month, weekday)
    }
}

/// Return the records matching `selector`, preserving table order.
///
/// The result borrows from the table; the table itself is never mutated.
/// An empty result is valid.
pub fn apply<'a>(records: &'a [TripRecord], selector: &Selector) -> Vec<&'a TripRecord> {
    records.iter().filter(|r| selector.matches(r)).collect()
}

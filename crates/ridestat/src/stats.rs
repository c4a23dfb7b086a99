//! Aggregation reporter: the fixed battery of descriptive statistics.

use indexmap::IndexMap;
use serde::Serialize;

use crate::filter::Selector;
use crate::model::TripRecord;

/// Every group tied at the maximum count for a "most common" statistic.
///
/// When several groups share the top count, all of them are reported, in
/// first-encountered row order. An empty subset yields `count = 0` and no
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCounts<T> {
    /// The maximum count.
    pub count: usize,
    /// All values whose count equals the maximum.
    pub values: Vec<T>,
}

impl<T> TopCounts<T> {
    /// True when the subset had nothing to count.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sum and arithmetic mean of trip durations over a subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationSummary {
    /// Number of rides in the subset.
    pub rides: usize,
    /// Total travel time in seconds.
    pub total_seconds: f64,
    /// Mean travel time in seconds; 0.0 for an empty subset.
    pub mean_seconds: f64,
}

/// Birth-year extremes and mode among records with a known birth year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearSummary {
    /// Earliest (oldest rider) birth year.
    pub earliest: i32,
    /// Latest (youngest rider) birth year.
    pub latest: i32,
    /// All modal birth years, tied at the maximum count.
    pub most_common: Vec<i32>,
}

/// The full statistics battery over one filtered subset.
///
/// `top_month` and `top_weekday` are only present when the selector left
/// that dimension unfiltered; on single-month or single-weekday subsets
/// the statistic is redundant and omitted. `genders` and `birth_years`
/// are `None` when no record in the subset carries that field.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Size of the subset the report was computed over.
    pub rides: usize,
    /// Most common month name(s); omitted when filtering by month.
    pub top_month: Option<TopCounts<String>>,
    /// Most common weekday name(s); omitted when filtering by weekday.
    pub top_weekday: Option<TopCounts<String>>,
    /// Most common start hour(s) of day.
    pub top_hour: TopCounts<u32>,
    /// Most commonly used start station(s).
    pub top_start_station: TopCounts<String>,
    /// Most commonly used end station(s).
    pub top_end_station: TopCounts<String>,
    /// Most frequent start/end station combination(s), as full-trip keys.
    pub top_trip: TopCounts<String>,
    /// Total and mean travel time.
    pub durations: DurationSummary,
    /// Ride counts per user type, descending; missing values excluded.
    pub user_types: Vec<(String, usize)>,
    /// Ride counts per gender, descending; `None` when no gender data.
    pub genders: Option<Vec<(String, usize)>>,
    /// Birth-year summary; `None` when no birth-year data.
    pub birth_years: Option<BirthYearSummary>,
}

impl StatsReport {
    /// Compute the report over `subset`, produced by `selector`.
    pub fn compute(subset: &[&TripRecord], selector: &Selector) -> Self {
        let top_month = selector
            .month
            .is_none()
            .then(|| top_ties(&count_by(subset, |r| r.month_name.clone())));
        let top_weekday = selector
            .weekday
            .is_none()
            .then(|| top_ties(&count_by(subset, |r| r.weekday_name.clone())));

        let user_types = sorted_desc(count_by_optional(subset, |r| r.user_type.clone()));

        let gender_counts = count_by_optional(subset, |r| r.gender.clone());
        let genders = if gender_counts.is_empty() {
            None
        } else {
            Some(sorted_desc(gender_counts))
        };

        let birth_year_counts = count_by_optional(subset, |r| r.birth_year);
        let birth_years = if birth_year_counts.is_empty() {
            None
        } else {
            Some(BirthYearSummary {
                earliest: *birth_year_counts.keys().min().unwrap(),
                latest: *birth_year_counts.keys().max().unwrap(),
                most_common: top_ties(&birth_year_counts).values,
            })
        };

        Self {
            rides: subset.len(),
            top_month,
            top_weekday,
            top_hour: top_ties(&count_by(subset, |r| r.hour)),
            top_start_station: top_ties(&count_by(subset, |r| r.start_station.clone())),
            top_end_station: top_ties(&count_by(subset, |r| r.end_station.clone())),
            top_trip: top_ties(&count_by(subset, |r| r.full_trip.clone())),
            durations: duration_summary(subset),
            user_types,
            genders,
            birth_years,
        }
    }
}

/// Group the subset by a key, counting rides per group.
///
/// `IndexMap` keeps groups in first-encountered row order, so tied groups
/// surface deterministically.
fn count_by<K, F>(subset: &[&TripRecord], key: F) -> IndexMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&TripRecord) -> K,
{
    let mut counts = IndexMap::new();
    for record in subset {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

/// Like `count_by`, but records with a missing value are excluded.
fn count_by_optional<K, F>(subset: &[&TripRecord], key: F) -> IndexMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&TripRecord) -> Option<K>,
{
    let mut counts = IndexMap::new();
    for record in subset {
        if let Some(k) = key(record) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// All keys tied at the maximum count.
fn top_ties<K: Clone>(counts: &IndexMap<K, usize>) -> TopCounts<K> {
    let max = counts.values().copied().max().unwrap_or(0);
    let values = counts
        .iter()
        .filter(|&(_, &count)| count == max && max > 0)
        .map(|(k, _)| k.clone())
        .collect();
    TopCounts { count: max, values }
}

/// Counts sorted descending; ties keep first-encountered order.
fn sorted_desc<K>(counts: IndexMap<K, usize>) -> Vec<(K, usize)> {
    let mut pairs: Vec<(K, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

/// Total and mean duration; an empty subset reports zeros rather than
/// dividing by zero.
fn duration_summary(subset: &[&TripRecord]) -> DurationSummary {
    let rides = subset.len();
    let total_seconds: f64 = subset.iter().map(|r| r.duration_seconds).sum();
    let mean_seconds = if rides == 0 {
        0.0
    } else {
        total_seconds / rides as f64
    };
    DurationSummary {
        rides,
        total_seconds,
        mean_seconds,
    }
}

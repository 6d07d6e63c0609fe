//! Daily rate series as produced by acquisition

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use super::CurrencyCode;

/// One dated rate. `rate` is `None` when no observation exists for the date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub rate: Option<f64>,
}

impl Observation {
    pub fn new(date: NaiveDate, rate: f64) -> Self {
        Self { date, rate: Some(rate) }
    }

    pub fn missing(date: NaiveDate) -> Self {
        Self { date, rate: None }
    }

    /// The rate if it is usable in a calculation. Non-finite and negative
    /// values count as absent.
    pub fn usable_rate(&self) -> Option<f64> {
        self.rate.filter(|r| r.is_finite() && *r >= 0.0)
    }
}

/// Insertion order a producer declares for every sequence in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesOrder {
    NewestFirst,
    OldestFirst,
    /// No positional guarantee; consumers order by date.
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesSet {
    order: SeriesOrder,
    series: BTreeMap<CurrencyCode, Vec<Observation>>,
}

impl TimeSeriesSet {
    pub fn new(order: SeriesOrder) -> Self {
        Self {
            order,
            series: BTreeMap::new(),
        }
    }

    /// Build a set from `(code, observations)` pairs in the declared order.
    pub fn from_series<I, C>(order: SeriesOrder, series: I) -> Self
    where
        I: IntoIterator<Item = (C, Vec<Observation>)>,
        C: Into<CurrencyCode>,
    {
        let mut set = Self::new(order);
        for (code, observations) in series {
            set.series.entry(code.into()).or_default().extend(observations);
        }
        set
    }

    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    /// Register a currency so it is keyed even if nothing is ever pushed.
    pub fn insert_currency(&mut self, code: impl Into<CurrencyCode>) {
        self.series.entry(code.into()).or_default();
    }

    pub fn push(&mut self, code: impl Into<CurrencyCode>, observation: Observation) {
        self.series.entry(code.into()).or_default().push(observation);
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&[Observation]> {
        self.series.get(code).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &[Observation])> {
        self.series.iter().map(|(code, obs)| (code, obs.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Usable rates with dates discarded. Order carries no meaning.
    pub fn rates(observations: &[Observation]) -> Vec<f64> {
        observations.iter().filter_map(Observation::usable_rate).collect()
    }

    /// Usable rates with index 0 the most recent observation and the last
    /// index the oldest. Declared orders are trusted positionally.
    pub fn newest_first_rates(&self, observations: &[Observation]) -> Vec<f64> {
        match self.order {
            SeriesOrder::NewestFirst => Self::rates(observations),
            SeriesOrder::OldestFirst => observations
                .iter()
                .rev()
                .filter_map(Observation::usable_rate)
                .collect(),
            SeriesOrder::Unordered => {
                let mut sorted = observations.to_vec();
                sorted.sort_by(|a, b| b.date.cmp(&a.date));
                Self::rates(&sorted)
            }
        }
    }
}

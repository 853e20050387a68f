//! Section results of one assessment page and their monetary total.

use assessment_sdk::{CalculationResult, ResultKind};

/// Latest result per widget title, in first-report order.
#[derive(Debug, Clone, Default)]
pub struct SectionResults {
    entries: Vec<(String, CalculationResult)>,
}

impl SectionResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `title`. An overwritten entry keeps
    /// its original position.
    pub fn record(&mut self, title: impl Into<String>, result: CalculationResult) {
        let title = title.into();
        if let Some(slot) = self.entries.iter_mut().find(|(t, _)| *t == title) {
            slot.1 = result;
        } else {
            self.entries.push((title, result));
        }
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&CalculationResult> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, result)| result)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CalculationResult)> {
        self.entries.iter().map(|(t, r)| (t.as_str(), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the raw values of all money-typed entries.
    #[must_use]
    pub fn total_money(&self) -> f64 {
        total_money(self.entries.iter().map(|(_, r)| r))
    }
}

/// Hours are not converted into money; only `Money` results count.
#[must_use]
pub fn total_money<'a>(results: impl IntoIterator<Item = &'a CalculationResult>) -> f64 {
    results
        .into_iter()
        .filter(|r| r.kind == ResultKind::Money)
        .map(|r| r.raw_value)
        .sum()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn result(kind: ResultKind, raw_value: f64) -> CalculationResult {
        CalculationResult {
            metric: String::new(),
            description: String::new(),
            source: String::new(),
            raw_value,
            kind,
            details: None,
        }
    }

    #[test]
    fn total_excludes_hours() {
        let mut map = SectionResults::new();
        map.record("a", result(ResultKind::Money, 100.0));
        map.record("b", result(ResultKind::Hours, 5.0));
        map.record("c", result(ResultKind::Money, 50.0));

        assert!((map.total_money() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_map_totals_zero() {
        let map = SectionResults::new();
        assert!(map.is_empty());
        assert!(map.total_money().abs() < f64::EPSILON);
    }

    #[test]
    fn record_overwrites_in_place() {
        let mut map = SectionResults::new();
        map.record("first", result(ResultKind::Money, 1.0));
        map.record("second", result(ResultKind::Money, 2.0));
        map.record("first", result(ResultKind::Money, 10.0));

        assert_eq!(map.len(), 2);
        let titles: Vec<_> = map.entries().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert!((map.get("first").unwrap().raw_value - 10.0).abs() < f64::EPSILON);
        assert!((map.total_money() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_results_reduce_the_total() {
        let mut map = SectionResults::new();
        map.record("gain", result(ResultKind::Money, 500.0));
        map.record("loss", result(ResultKind::Money, -200.0));
        assert!((map.total_money() - 300.0).abs() < f64::EPSILON);
    }
}

//! Numeric summary entity derived from a sample of integers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// How many leading sample values get a squares-map entry
const SAMPLE_SQUARES_LIMIT: usize = 10;

/// Descriptive statistics for a sequence of integers.
///
/// Scalar statistics are `None` when undefined: all of them for an empty
/// sample, and `stdev` additionally for a single-element sample. `None`
/// serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Population (not sample) standard deviation
    pub stdev: Option<f64>,
    pub evens_count: usize,
    pub odds_count: usize,
    pub unique_count: usize,
    /// First min(10, count) values mapped to their squares;
    /// duplicate values collapse onto the same key
    pub sample_squares: BTreeMap<i64, i64>,
}

impl NumericSummary {
    /// Summarize a sample of integers
    pub fn from_samples(nums: &[i64]) -> Self {
        let evens_count = nums.iter().filter(|x| *x % 2 == 0).count();
        let odds_count = nums.len() - evens_count;
        let unique_count = nums.iter().collect::<HashSet<_>>().len();
        let sample_squares: BTreeMap<i64, i64> = nums
            .iter()
            .take(SAMPLE_SQUARES_LIMIT)
            .map(|&x| (x, x * x))
            .collect();

        Self {
            count: nums.len(),
            min: nums.iter().min().copied(),
            max: nums.iter().max().copied(),
            mean: mean(nums),
            median: median(nums),
            stdev: population_stdev(nums),
            evens_count,
            odds_count,
            unique_count,
            sample_squares,
        }
    }
}

fn mean(nums: &[i64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    let sum: i64 = nums.iter().sum();
    Some(sum as f64 / nums.len() as f64)
}

fn median(nums: &[i64]) -> Option<f64> {
    if nums.is_empty() {
        return None;
    }
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

/// Population standard deviation (divides by N), defined only for N >= 2
fn population_stdev(nums: &[i64]) -> Option<f64> {
    if nums.len() < 2 {
        return None;
    }
    let m = mean(nums)?;
    let sum_sq: f64 = nums
        .iter()
        .map(|&x| {
            let d = x as f64 - m;
            d * d
        })
        .sum();
    Some((sum_sq / nums.len() as f64).sqrt())
}

/// Sign classification of an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Classify an integer; total over all inputs
    pub fn of(x: i64) -> Self {
        if x < 0 {
            Sign::Negative
        } else if x == 0 {
            Sign::Zero
        } else {
            Sign::Positive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Negative => "negative",
            Sign::Zero => "zero",
            Sign::Positive => "positive",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return `a / b`, or `None` when `b` is zero
pub fn safe_divide(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        None
    } else {
        Some(a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        let summary = NumericSummary::from_samples(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.median, None);
        assert_eq!(summary.stdev, None);
        assert_eq!(summary.evens_count, 0);
        assert_eq!(summary.odds_count, 0);
        assert_eq!(summary.unique_count, 0);
        assert!(summary.sample_squares.is_empty());
    }

    #[test]
    fn test_single_element_has_no_stdev() {
        let summary = NumericSummary::from_samples(&[7]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, Some(7));
        assert_eq!(summary.max, Some(7));
        assert_eq!(summary.mean, Some(7.0));
        assert_eq!(summary.median, Some(7.0));
        assert_eq!(summary.stdev, None);
    }

    #[test]
    fn test_basic_statistics() {
        let summary = NumericSummary::from_samples(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(summary.count, 8);
        assert_eq!(summary.min, Some(2));
        assert_eq!(summary.max, Some(9));
        assert_eq!(summary.mean, Some(5.0));
        assert_eq!(summary.median, Some(4.5));
        // Known population stdev for this sample is exactly 2
        assert!((summary.stdev.unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(summary.evens_count, 4);
        assert_eq!(summary.odds_count, 4);
        assert_eq!(summary.unique_count, 5);
    }

    #[test]
    fn test_parity_with_negatives() {
        let summary = NumericSummary::from_samples(&[-4, -3, 0, 1]);
        assert_eq!(summary.evens_count, 2);
        assert_eq!(summary.odds_count, 2);
        assert_eq!(summary.evens_count + summary.odds_count, summary.count);
    }

    #[test]
    fn test_summary_invariants() {
        let nums: Vec<i64> = vec![13, 2, 8, 8, 41, 5, 77, 3, 2, 60, 19];
        let summary = NumericSummary::from_samples(&nums);
        let (min, max) = (summary.min.unwrap() as f64, summary.max.unwrap() as f64);
        let median = summary.median.unwrap();
        let mean = summary.mean.unwrap();
        assert!(min <= median && median <= max);
        assert!(min <= mean && mean <= max);
        assert!(summary.stdev.unwrap() >= 0.0);
        assert_eq!(summary.evens_count + summary.odds_count, summary.count);
        assert!(summary.unique_count <= summary.count);
    }

    #[test]
    fn test_sample_squares_takes_first_ten() {
        let nums: Vec<i64> = (1..=15).collect();
        let summary = NumericSummary::from_samples(&nums);
        assert_eq!(summary.sample_squares.len(), 10);
        for (k, v) in &summary.sample_squares {
            assert_eq!(*v, k * k);
        }
        assert!(!summary.sample_squares.contains_key(&11));
    }

    #[test]
    fn test_sample_squares_duplicates_collapse() {
        let summary = NumericSummary::from_samples(&[3, 3, 3, 5]);
        assert_eq!(summary.sample_squares.len(), 2);
        assert_eq!(summary.sample_squares[&3], 9);
        assert_eq!(summary.sample_squares[&5], 25);
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(10.0, 0.0), None);
        assert_eq!(safe_divide(10.0, 2.0), Some(5.0));
    }

    #[test]
    fn test_sign_classification() {
        assert_eq!(Sign::of(-3).as_str(), "negative");
        assert_eq!(Sign::of(0).as_str(), "zero");
        assert_eq!(Sign::of(4).as_str(), "positive");
        assert_eq!(Sign::of(7).to_string(), "positive");
    }
}

//! Resume / job-description scoring engine

pub mod text;
pub mod skills;
pub mod sections;
pub mod formatting;
pub mod density;
pub mod ats;
pub mod suggestions;
pub mod engine;

/// Round to one decimal place. Every score in the report goes through this
/// helper so the overall-score invariant holds exactly.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn test_round1() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(0.04), 0.0);
        assert_eq!(round1(100.0), 100.0);
    }
}

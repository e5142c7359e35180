//! Domain service for the calculator.
//!
//! Pure arithmetic over primitive inputs; no state is retained between calls.

use tracing::debug;

use super::value_object::Marks;

/// Income up to and including this amount is not taxed
pub const TAX_FREE_LIMIT: f64 = 250_000.0;

/// Upper bound (inclusive) of the 5% bracket
pub const LOWER_BRACKET_LIMIT: f64 = 500_000.0;

/// Rate applied to the whole income in the lower bracket
pub const LOWER_BRACKET_RATE: f64 = 0.05;

/// Rate applied to the whole income above [`LOWER_BRACKET_LIMIT`]
pub const UPPER_BRACKET_RATE: f64 = 0.10;

/// Minimum voting age in years
pub const VOTING_AGE: i32 = 18;

/// Scale a CGPA is expressed on
const CGPA_SCALE: f64 = 10.0;

/// Domain service that performs the calculator operations.
///
/// Stateless; cloning or sharing it between requests is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Tax owed for an income.
    ///
    /// The bracket rate applies to the whole income, not only to the part
    /// above the bracket boundary. Negative incomes fall in the tax-free bracket.
    pub fn tax(&self, income: f64) -> f64 {
        let tax = if income <= TAX_FREE_LIMIT {
            0.0
        } else if income <= LOWER_BRACKET_LIMIT {
            income * LOWER_BRACKET_RATE
        } else {
            income * UPPER_BRACKET_RATE
        };
        debug!(income, tax, "calculated tax");
        tax
    }

    /// CGPA on a 0-10 scale, rounded to two decimal places (half up).
    pub fn cgpa(&self, marks: &Marks) -> f64 {
        let raw = f64::from(marks.total()) / f64::from(Marks::max_total()) * CGPA_SCALE;
        // raw is never negative, so round() is round-half-up here
        let cgpa = (raw * 100.0).round() / 100.0;
        debug!(total = marks.total(), cgpa, "calculated cgpa");
        cgpa
    }

    /// Whether a person of the given age may vote.
    pub fn is_eligible_to_vote(&self, age: i32) -> bool {
        age >= VOTING_AGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(values: [i64; 5]) -> Marks {
        Marks::new(&values).unwrap()
    }

    #[test]
    fn test_tax_free_bracket() {
        // テスト項目: 250000 以下の所得は非課税
        let calculator = Calculator::new();

        assert_eq!(calculator.tax(0.0), 0.0);
        assert_eq!(calculator.tax(100_000.0), 0.0);
        assert_eq!(calculator.tax(250_000.0), 0.0);
    }

    #[test]
    fn test_tax_lower_bracket() {
        // テスト項目: 250000 超 500000 以下は所得全体の 5%
        let calculator = Calculator::new();

        assert!((calculator.tax(250_001.0) - 12_500.05).abs() < 1e-6);
        assert!((calculator.tax(500_000.0) - 25_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_tax_upper_bracket() {
        // テスト項目: 500000 超は所得全体の 10%
        let calculator = Calculator::new();

        assert_eq!(calculator.tax(600_000.0), 60_000.0);
        assert!((calculator.tax(500_001.0) - 50_000.1).abs() < 1e-6);
    }

    #[test]
    fn test_tax_negative_income_is_untaxed() {
        // テスト項目: 負の所得は境界式どおり非課税扱いになる
        let calculator = Calculator::new();

        assert_eq!(calculator.tax(-1_000.0), 0.0);
    }

    #[test]
    fn test_cgpa_bounds() {
        // テスト項目: 満点は 10.0、全て 0 点は 0.0
        let calculator = Calculator::new();

        assert_eq!(calculator.cgpa(&marks([100, 100, 100, 100, 100])), 10.0);
        assert_eq!(calculator.cgpa(&marks([0, 0, 0, 0, 0])), 0.0);
    }

    #[test]
    fn test_cgpa_mixed_marks() {
        // テスト項目: 合計 350 点の CGPA は 7.0
        let calculator = Calculator::new();

        assert_eq!(calculator.cgpa(&marks([50, 60, 70, 80, 90])), 7.0);
    }

    #[test]
    fn test_cgpa_rounds_to_two_decimals() {
        // テスト項目: CGPA は小数第 2 位で丸められる
        // given (前提条件): 合計 333 点 -> 6.66
        let calculator = Calculator::new();

        // when (操作):
        let cgpa = calculator.cgpa(&marks([67, 67, 67, 66, 66]));

        // then (期待する結果):
        assert_eq!(cgpa, 6.66);
    }

    #[test]
    fn test_voting_age_boundary() {
        // テスト項目: 18 歳以上のみ投票可能
        let calculator = Calculator::new();

        assert!(!calculator.is_eligible_to_vote(17));
        assert!(calculator.is_eligible_to_vote(18));
        assert!(calculator.is_eligible_to_vote(90));
        assert!(!calculator.is_eligible_to_vote(-5));
    }
}

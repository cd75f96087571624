//! Ledger operations
//!
//! Pure functions over a movement list. Movements are signed amounts in
//! chronological order: positive entries are deposits, negative entries are
//! withdrawals. Nothing here rounds; truncation happens at render time.

use rust_decimal::Decimal;
use serde::Serialize;

/// Per-deposit interest below this value is left out of the total
pub fn interest_threshold() -> Decimal {
    Decimal::ONE
}

/// A loan is covered when some movement reaches this share of it
pub fn loan_collateral_ratio() -> Decimal {
    Decimal::new(1, 1)
}

/// Sum of all movements
pub fn balance(movements: &[Decimal]) -> Decimal {
    movements.iter().copied().sum()
}

/// Sum of all deposits
pub fn income(movements: &[Decimal]) -> Decimal {
    movements
        .iter()
        .copied()
        .filter(|mov| *mov > Decimal::ZERO)
        .sum()
}

/// Absolute value of the sum of all withdrawals
pub fn expense(movements: &[Decimal]) -> Decimal {
    movements
        .iter()
        .copied()
        .filter(|mov| *mov < Decimal::ZERO)
        .sum::<Decimal>()
        .abs()
}

/// Interest earned on deposits at `rate` percent.
///
/// Each deposit earns `deposit * rate / 100`; only per-deposit values of at
/// least [`interest_threshold`] count towards the total.
pub fn qualifying_interest(movements: &[Decimal], rate: Decimal) -> Decimal {
    movements
        .iter()
        .copied()
        .filter(|mov| *mov > Decimal::ZERO)
        .map(|deposit| deposit * rate / Decimal::ONE_HUNDRED)
        .filter(|interest| *interest >= interest_threshold())
        .sum()
}

/// Whether some past movement is large enough to back a loan of `amount`
pub fn has_collateral_for(movements: &[Decimal], amount: Decimal) -> bool {
    let required = amount * loan_collateral_ratio();
    movements.iter().any(|mov| *mov >= required)
}

/// All figures shown next to the movement list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    /// Untruncated qualifying interest
    pub interest: Decimal,
}

impl Summary {
    /// Interest as displayed: truncated toward zero
    pub fn display_interest(&self) -> Decimal {
        self.interest.trunc()
    }
}

/// Compute every summary figure in one pass over the caller's data
pub fn summarize(movements: &[Decimal], rate: Decimal) -> Summary {
    Summary {
        balance: balance(movements),
        income: income(movements),
        expense: expense(movements),
        interest: qualifying_interest(movements, rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn jonas() -> Vec<Decimal> {
        vec![
            dec!(200),
            dec!(450),
            dec!(-400),
            dec!(3000),
            dec!(-650),
            dec!(-130),
            dec!(70),
            dec!(1300),
        ]
    }

    #[test]
    fn test_reference_account_figures() {
        let movements = jonas();

        assert_eq!(income(&movements), dec!(5020));
        assert_eq!(expense(&movements), dec!(1180));
        assert_eq!(balance(&movements), dec!(3840));
    }

    #[test]
    fn test_qualifying_interest_drops_small_deposits() {
        // 200 -> 2.4, 450 -> 5.4, 3000 -> 36, 70 -> 0.84 (dropped), 1300 -> 15.6
        let interest = qualifying_interest(&jonas(), dec!(1.2));
        assert_eq!(interest, dec!(59.4));

        let summary = summarize(&jonas(), dec!(1.2));
        assert_eq!(summary.display_interest(), dec!(59));
    }

    #[test]
    fn test_interest_threshold_is_inclusive() {
        // 100 * 1% = exactly 1
        assert_eq!(qualifying_interest(&[dec!(100)], dec!(1)), dec!(1));
        assert_eq!(qualifying_interest(&[dec!(99)], dec!(1)), Decimal::ZERO);
    }

    #[test]
    fn test_withdrawals_earn_no_interest() {
        assert_eq!(qualifying_interest(&[dec!(-5000)], dec!(10)), Decimal::ZERO);
    }

    #[test]
    fn test_empty_movements() {
        let summary = summarize(&[], dec!(1.5));
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expense, Decimal::ZERO);
        assert_eq!(summary.interest, Decimal::ZERO);
    }

    #[test]
    fn test_collateral_rule() {
        let movements = jonas();
        // largest movement is 3000, covers loans up to 30000
        assert!(has_collateral_for(&movements, dec!(30000)));
        assert!(!has_collateral_for(&movements, dec!(30001)));
    }

    #[test]
    fn test_collateral_can_come_from_any_movement() {
        // 10% of -100 is -10, which a withdrawal of -5 clears
        assert!(has_collateral_for(&[dec!(-5)], dec!(-100)));
        assert!(!has_collateral_for(&[], dec!(1)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: balance always equals income minus expense.
        #[test]
        fn balance_equals_income_minus_expense(
            cents in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..50)
        ) {
            let movements: Vec<Decimal> = cents.into_iter().map(|c| Decimal::new(c, 2)).collect();
            prop_assert_eq!(
                balance(&movements),
                income(&movements) - expense(&movements)
            );
        }

        /// Property: interest never exceeds the rate applied to all income.
        #[test]
        fn interest_is_bounded_by_income(
            amounts in prop::collection::vec(-10_000i64..10_000i64, 0..30),
            rate_tenths in 0i64..100i64
        ) {
            let movements: Vec<Decimal> = amounts.into_iter().map(Decimal::from).collect();
            let rate = Decimal::new(rate_tenths, 1);
            let interest = qualifying_interest(&movements, rate);
            prop_assert!(interest >= Decimal::ZERO);
            prop_assert!(interest <= income(&movements) * rate / Decimal::ONE_HUNDRED);
        }
    }
}

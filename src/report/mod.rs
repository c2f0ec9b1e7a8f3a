//! Debtor reporting: ordering by amount owed and printing with highlights.

use std::io::Write;

use tracing::debug;

use crate::domain::Debtor;
use crate::error::AppError;

pub mod format;

pub use format::*;

/// Return the debtors sorted by debt, largest first.
///
/// The sort is stable, so debtors owing the same amount keep their input order.
pub fn order_debtors_by_debt(debtors: &[Debtor]) -> Vec<Debtor> {
    let mut sorted = debtors.to_vec();
    sorted.sort_by(|a, b| b.debt.total_cmp(&a.debt));
    debug!(count = sorted.len(), "ordered debtors by debt");
    sorted
}

/// Order the debtors and print them to stdout.
pub fn payday(debtors: &[Debtor]) -> Result<(), AppError> {
    let ordered = order_debtors_by_debt(debtors);
    print_debtors_debts(&ordered)
}

/// Order the debtors and write them to `out` with a custom highlight threshold.
pub fn payday_with<W: Write>(out: &mut W, debtors: &[Debtor], threshold: f64) -> Result<(), AppError> {
    let ordered = order_debtors_by_debt(debtors);
    write_debtors_debts(out, &ordered, threshold)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::sample_debtors;

    #[test]
    fn orders_sample_debtors_descending() {
        let ordered = order_debtors_by_debt(&sample_debtors());
        let debts: Vec<f64> = ordered.iter().map(|d| d.debt).collect();
        assert_eq!(debts, vec![1250.0, 200.0, 100.0, 50.0, 10.0]);
    }

    #[test]
    fn does_not_mutate_input() {
        let debtors = sample_debtors();
        let _ = order_debtors_by_debt(&debtors);
        assert_eq!(debtors, sample_debtors());
    }

    #[test]
    fn ties_keep_input_order() {
        let debtors = vec![
            Debtor::new("First", 50.0),
            Debtor::new("Big", 75.0),
            Debtor::new("Second", 50.0),
            Debtor::new("Third", 50.0),
        ];
        let names: Vec<String> = order_debtors_by_debt(&debtors)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Big", "First", "Second", "Third"]);
    }

    #[test]
    fn random_lists_come_out_descending() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(0..30);
            let debtors: Vec<Debtor> = (0..n)
                .map(|i| Debtor::new(format!("P{i}"), rng.gen_range(-10.0..500.0)))
                .collect();
            let ordered = order_debtors_by_debt(&debtors);
            assert_eq!(ordered.len(), debtors.len());
            for pair in ordered.windows(2) {
                assert!(pair[0].debt >= pair[1].debt);
            }
        }
    }

    #[test]
    fn payday_report_for_sample_debtors() {
        let mut buf = Vec::new();
        payday_with(&mut buf, &sample_debtors(), HIGHLIGHT_THRESHOLD).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Person5: !!!1250.0!!!",
                "Person2: !!!200.0!!!",
                "Person1: 100.0",
                "Person4: 50.0",
                "Person3: 10.0",
            ]
        );
    }

    #[test]
    fn payday_prints_to_stdout() {
        assert!(payday(&sample_debtors()).is_ok());
        assert!(payday(&[]).is_ok());
    }

    #[test]
    fn highlight_markers_follow_threshold() {
        let debtors = vec![Debtor::new("A", 100.0), Debtor::new("B", 100.01)];
        let mut buf = Vec::new();
        payday_with(&mut buf, &debtors, HIGHLIGHT_THRESHOLD).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for line in text.lines() {
            assert_eq!(line.contains("!!!"), line.starts_with("B:"), "line: {line}");
        }
    }
}

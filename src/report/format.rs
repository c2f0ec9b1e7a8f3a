//! Terminal formatting for debtor reports.
//!
//! Formatting is kept apart from ordering so each piece can be tested on its own.

use std::io::Write;

use crate::domain::Debtor;
use crate::error::AppError;

/// Debts strictly above this amount are highlighted.
pub const HIGHLIGHT_THRESHOLD: f64 = 100.0;

/// Format one report line: `name: debt`, or `name: !!!debt!!!` above `threshold`.
pub fn format_debtor_line(debtor: &Debtor, threshold: f64) -> String {
    let amount = fmt_amount(debtor.debt);
    if debtor.debt > threshold {
        format!("{}: !!!{amount}!!!", debtor.name)
    } else {
        format!("{}: {amount}", debtor.name)
    }
}

/// Write one line per debtor, in the order given.
pub fn write_debtors_debts<W: Write>(
    out: &mut W,
    debtors: &[Debtor],
    threshold: f64,
) -> Result<(), AppError> {
    for debtor in debtors {
        writeln!(out, "{}", format_debtor_line(debtor, threshold))?;
    }
    Ok(())
}

/// Print one line per debtor to stdout using the default highlight threshold.
pub fn print_debtors_debts(debtors: &[Debtor]) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_debtors_debts(&mut out, debtors, HIGHLIGHT_THRESHOLD)
}

// Whole amounts keep one decimal (`100.0`), very large or very small magnitudes
// switch to exponent form (`1e+16`, `1e-05`), everything else uses the shortest
// representation that round-trips.
fn fmt_amount(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }
    let magnitude = v.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return fmt_exponent(v);
    }
    if v.fract() == 0.0 {
        return format!("{v:.1}");
    }
    format!("{v}")
}

// `1.5e-7` -> `1.5e-07`: explicit sign, at least two exponent digits.
fn fmt_exponent(v: f64) -> String {
    let raw = format!("{v:e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_strictly_above_threshold() {
        assert_eq!(format_debtor_line(&Debtor::new("A", 100.0), 100.0), "A: 100.0");
        assert_eq!(format_debtor_line(&Debtor::new("B", 100.5), 100.0), "B: !!!100.5!!!");
        assert_eq!(format_debtor_line(&Debtor::new("C", 0.0), 100.0), "C: 0.0");
    }

    #[test]
    fn custom_threshold_moves_the_highlight() {
        let d = Debtor::new("A", 50.0);
        assert_eq!(format_debtor_line(&d, 10.0), "A: !!!50.0!!!");
        assert_eq!(format_debtor_line(&d, 50.0), "A: 50.0");
    }

    #[test]
    fn amounts_render_like_plain_floats() {
        assert_eq!(fmt_amount(1250.0), "1250.0");
        assert_eq!(fmt_amount(10.25), "10.25");
        assert_eq!(fmt_amount(-3.0), "-3.0");
        assert_eq!(fmt_amount(f64::INFINITY), "inf");
        assert_eq!(fmt_amount(f64::NAN), "nan");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(fmt_amount(1e16), "1e+16");
        assert_eq!(fmt_amount(2.5e20), "2.5e+20");
        assert_eq!(fmt_amount(1e-5), "1e-05");
        assert_eq!(fmt_amount(-1.5e-7), "-1.5e-07");
        assert_eq!(fmt_amount(1e-100), "1e-100");
        assert_eq!(fmt_amount(9999999999999998.0), "9999999999999998.0");
        assert_eq!(fmt_amount(0.0001), "0.0001");
        assert_eq!(fmt_amount(0.0), "0.0");
    }

    #[test]
    fn highlighted_line_with_exponent_amount() {
        assert_eq!(format_debtor_line(&Debtor::new("Whale", 1e16), 100.0), "Whale: !!!1e+16!!!");
    }

    #[test]
    fn negative_debt_is_printed_without_highlight() {
        assert_eq!(format_debtor_line(&Debtor::new("X", -20.0), 100.0), "X: -20.0");
    }

    #[test]
    fn write_keeps_input_order() {
        let debtors = vec![Debtor::new("Low", 1.0), Debtor::new("High", 500.0)];
        let mut buf = Vec::new();
        write_debtors_debts(&mut buf, &debtors, HIGHLIGHT_THRESHOLD).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Low: 1.0\nHigh: !!!500.0!!!\n");
    }

    #[test]
    fn write_empty_list_prints_nothing() {
        let mut buf = Vec::new();
        write_debtors_debts(&mut buf, &[], HIGHLIGHT_THRESHOLD).unwrap();
        assert!(buf.is_empty());
    }
}

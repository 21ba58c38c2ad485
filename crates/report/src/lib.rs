#![deny(warnings)]

//! Text rendering for calculator results and the sinks that receive it.
//!
//! Engines return plain records; this crate turns them into log lines and
//! hands the lines to whatever [`LineSink`] the host injects.

use bills::BillOutcome;
use bookstore::BookstoreResult;
use calc_core::ValidationError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{error, info};

const BOOKSTORE_FOOTER: &str = "===========================================";
const BILLS_FOOTER: &str = "=====================================";

/// Destination for rendered lines.
pub trait LineSink {
    fn info(&mut self, line: &str);
    fn error(&mut self, line: &str);
}

/// Collects lines in memory; error lines get an `error: ` prefix.
impl LineSink for Vec<String> {
    fn info(&mut self, line: &str) {
        self.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.push(format!("error: {line}"));
    }
}

/// Forwards lines to `tracing` at info/error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn info(&mut self, line: &str) {
        info!("{}", line);
    }

    fn error(&mut self, line: &str) {
        error!("{}", line);
    }
}

/// Dollar amount with two decimals, e.g. `$14.97` or `$-2.60`.
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Render a bookstore result as a framed block of lines.
pub fn bookstore_lines(r: &BookstoreResult) -> Vec<String> {
    vec![
        format!(
            "=== Bookstore Calculation for {} Copies ===",
            r.number_of_copies()
        ),
        format!("Cover Price per Book: {}", money(r.cover_price())),
        format!(
            "Discounted Price per Book (40% off): {}",
            money(r.discounted_price())
        ),
        format!("Cost of Books: {}", money(r.books_cost())),
        format!("Shipping Cost: {}", money(r.shipping_cost())),
        format!("Total Wholesale Cost: {}", money(r.total_wholesale_cost())),
        format!("Total Revenue (when sold): {}", money(r.total_revenue())),
        format!(
            "Profit (before operational costs): {}",
            money(r.profit())
        ),
        BOOKSTORE_FOOTER.to_string(),
    ]
}

/// Render a bill breakdown. Denominations with a zero count are omitted.
pub fn bill_lines(outcome: &BillOutcome) -> Vec<String> {
    let breakdown = match outcome {
        BillOutcome::ZeroAmount => return vec!["Amount is $0. No bills needed.".to_string()],
        BillOutcome::Bills(b) => b,
    };
    let mut lines = vec![format!(
        "=== Dollar Bills Breakdown for ${} ===",
        outcome.amount()
    )];
    lines.extend(
        breakdown
            .entries()
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(denom, count)| format!("{count} x ${denom} bill(s)")),
    );
    lines.push(BILLS_FOOTER.to_string());
    lines
}

/// User-facing message for a rejected input.
pub fn error_line(err: &ValidationError) -> String {
    let mut msg = err.to_string();
    if let Some(first) = msg.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("{msg}.")
}

/// Write every line to the sink at info level.
pub fn publish<S: LineSink + ?Sized>(lines: &[String], sink: &mut S) {
    for line in lines {
        sink.info(line);
    }
}

/// Pretty JSON for any result record.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn bookstore_reference_block() {
        let r = bookstore::compute(Decimal::new(2495, 2), 60).unwrap();
        let lines = bookstore_lines(&r);
        assert_eq!(
            lines,
            vec![
                "=== Bookstore Calculation for 60 Copies ===",
                "Cover Price per Book: $24.95",
                "Discounted Price per Book (40% off): $14.97",
                "Cost of Books: $898.20",
                "Shipping Cost: $47.25",
                "Total Wholesale Cost: $945.45",
                "Total Revenue (when sold): $1497.00",
                "Profit (before operational costs): $551.55",
                BOOKSTORE_FOOTER,
            ]
        );
    }

    #[test]
    fn money_rounds_and_pads() {
        assert_eq!(money(Decimal::new(3, 0)), "$3.00");
        assert_eq!(money(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(money(Decimal::new(-260, 2)), "$-2.60");
    }

    #[test]
    fn bills_omit_zero_counts() {
        let out = bills::compute(247).unwrap();
        assert_eq!(
            bill_lines(&out),
            vec![
                "=== Dollar Bills Breakdown for $247 ===",
                "2 x $100 bill(s)",
                "2 x $20 bill(s)",
                "1 x $5 bill(s)",
                "2 x $1 bill(s)",
                BILLS_FOOTER,
            ]
        );
    }

    #[test]
    fn zero_amount_single_line() {
        let out = bills::compute(0).unwrap();
        assert_eq!(bill_lines(&out), vec!["Amount is $0. No bills needed."]);
    }

    #[test]
    fn error_lines_read_as_sentences() {
        assert_eq!(
            error_line(&ValidationError::NonPositiveCopies),
            "Number of copies must be greater than zero."
        );
        assert_eq!(
            error_line(&ValidationError::NegativeAmount),
            "Dollar amount cannot be negative."
        );
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<String> = Vec::new();
        publish(&["a".to_string(), "b".to_string()], &mut sink);
        sink.error("bad");
        assert_eq!(sink, vec!["a", "b", "error: bad"]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_sink_keeps_severity() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut sink = TracingSink;
            publish(&["Shipping Cost: $47.25".to_string()], &mut sink);
            sink.error("Cover price must be greater than zero.");
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" INFO "));
        assert!(lines[0].ends_with("Shipping Cost: $47.25"));
        assert!(lines[1].contains("ERROR "));
        assert!(lines[1].ends_with("Cover price must be greater than zero."));
    }

    #[test]
    fn json_shapes() {
        let r = bookstore::compute(Decimal::new(1000, 2), 2).unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&r).unwrap()).unwrap();
        assert_eq!(v["number_of_copies"], 2);
        assert_eq!(v["shipping_cost"], "3.75");

        let out = bills::compute(0).unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&out).unwrap()).unwrap();
        assert_eq!(v["outcome"], "zero_amount");

        let out = bills::compute(15).unwrap();
        let v: serde_json::Value = serde_json::from_str(&to_json(&out).unwrap()).unwrap();
        assert_eq!(v["outcome"], "bills");
        assert_eq!(v["tens"], 1);
        assert_eq!(v["fives"], 1);
        assert_eq!(v["ones"], 0);
    }
}

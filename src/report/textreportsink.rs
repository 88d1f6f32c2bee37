use std::io::Write;

use crate::report::report::Report;
use crate::report::reportsink::{
    ReportError,
    ReportSink
};

// ─────────────────────────────────────────────────────────────────────────────
// TextReportSink
// ─────────────────────────────────────────────────────────────────────────────
//
// 輸出格式：
//   1. 各方法估計值
//   2. 精確值
//   3. 各方法絕對誤差
//   4. 依絕對誤差遞增排序的表格
//   5. 最佳 / 最差方法
//
// 估計值以最短可還原十進位表示，誤差以科學記號表示

pub struct TextReportSink<W: Write> {
    writer: W,
    reports_written: usize
}

impl<W: Write> TextReportSink<W> {
    pub fn new(writer: W) -> TextReportSink<W> {
        TextReportSink { writer, reports_written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<(), ReportError> {
        let w = &mut self.writer;
        if self.reports_written > 0 {
            writeln!(w)?;
        }
        let interval = report.interval();
        writeln!(w, "Scenario: {} on [{}, {}]", report.scenario(), interval.lower(), interval.upper())?;
        for estimate in report.estimates() {
            writeln!(w, "Approximation using {}: {}", estimate.method(), estimate.value())?;
        }
        writeln!(w, "Exact integral: {}", report.exact())?;
        for estimate in report.estimates() {
            writeln!(w, "Absolute error for {}: {:e}",
                     estimate.method(), (estimate.value() - report.exact()).abs())?;
        }
        writeln!(w)?;

        let comparison = report.comparison();
        let records = comparison.records();
        let method_width = records
            .iter()
            .map(|r| r.method().chars().count())
            .chain(std::iter::once("Method".len()))
            .max()
            .unwrap_or(0);
        let estimates: Vec<String> = records.iter().map(|r| r.estimate().to_string()).collect();
        let estimate_width = estimates
            .iter()
            .map(|s| s.len())
            .chain(std::iter::once("Estimate".len()))
            .max()
            .unwrap_or(0);

        writeln!(w, "{:<4}  {:<mw$}  {:<ew$}  {}",
                 "Rank", "Method", "Estimate", "Absolute Error",
                 mw = method_width, ew = estimate_width)?;
        for (rank, (record, estimate)) in records.iter().zip(estimates.iter()).enumerate() {
            writeln!(w, "{:<4}  {:<mw$}  {:<ew$}  {:e}",
                     rank + 1, record.method(), estimate, record.absolute_error(),
                     mw = method_width, ew = estimate_width)?;
        }
        writeln!(w)?;

        let best = comparison.best();
        let worst = comparison.worst();
        writeln!(w, "The best estimate is {} with an absolute error of {:e}",
                 best.method(), best.absolute_error())?;
        writeln!(w, "The worst estimate is {} with an absolute error of {:e}",
                 worst.method(), worst.absolute_error())?;
        w.flush()?;
        self.reports_written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::comparator::compare;
    use crate::evaluation::evaluator::Estimate;
    use crate::math::quadrature::interval::Interval;

    fn sample_report() -> Report {
        let estimates = vec![
            Estimate::new("Alpha".to_owned(), 1.25),
            Estimate::new("Beta".to_owned(), 1.0),
        ];
        let comparison = compare(&estimates, 1.0).unwrap();
        Report::new("demo".to_owned(), Interval::new(0.0, 1.0), 1.0, estimates, comparison)
    }

    #[test]
    fn writes_estimates_table_and_summary() {
        let mut sink = TextReportSink::new(Vec::new());
        sink.write_report(&sample_report()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with("Scenario: demo on [0, 1]\n"));
        assert!(text.contains("Approximation using Alpha: 1.25\n"));
        assert!(text.contains("Exact integral: 1\n"));
        assert!(text.contains("Absolute error for Alpha: 2.5e-1\n"));
        assert!(text.contains("The best estimate is Beta with an absolute error of 0e0\n"));
        assert!(text.contains("The worst estimate is Alpha with an absolute error of 2.5e-1\n"));

        let rows: Vec<&str> = text.lines().filter(|line| line.starts_with('1') || line.starts_with('2')).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Beta"));
        assert!(rows[1].contains("Alpha"));
    }

    #[test]
    fn separates_consecutive_reports() {
        let mut sink = TextReportSink::new(Vec::new());
        sink.write_report(&sample_report()).unwrap();
        sink.write_report(&sample_report()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches("Scenario: demo").count(), 2);
        assert!(text.contains("absolute error of 2.5e-1\n\nScenario: demo"));
    }
}

use std::io::Write;

use serde::Serialize;

use crate::evaluation::comparator::ResultRecord;
use crate::evaluation::evaluator::Estimate;
use crate::report::report::Report;
use crate::report::reportsink::{
    ReportError,
    ReportSink
};

#[derive(Serialize)]
struct ReportJsonProp<'a> {
    scenario: &'a str,
    lower: f64,
    upper: f64,
    exact: f64,
    estimates: &'a [Estimate],
    ranking: &'a [ResultRecord],
    best: &'a ResultRecord,
    worst: &'a ResultRecord
}

/// Writes one pretty-printed JSON object per report.
pub struct JsonReportSink<W: Write> {
    writer: W
}

impl<W: Write> JsonReportSink<W> {
    pub fn new(writer: W) -> JsonReportSink<W> {
        JsonReportSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<(), ReportError> {
        let comparison = report.comparison();
        let json_prop = ReportJsonProp {
            scenario: report.scenario(),
            lower: report.interval().lower(),
            upper: report.interval().upper(),
            exact: report.exact(),
            estimates: report.estimates(),
            ranking: comparison.records(),
            best: comparison.best(),
            worst: comparison.worst()
        };
        serde_json::to_writer_pretty(&mut self.writer, &json_prop)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

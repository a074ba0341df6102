use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use super::collaborators::{CollaboratorError, ResultSink, ScreeningReport};
use super::domain::ProfileField;
use super::questionnaire::Questionnaire;

const TRAILING_COLUMNS: [&str; 3] = ["disposition", "rationale", "status"];

struct CsvState<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

/// Tabular export: one header, then one row per screened application.
///
/// Columns are the profile fields, the canonical questions in questionnaire order, and the
/// disposition, rationale and applied status.
pub struct CsvResultSink<W: Write> {
    questionnaire: Questionnaire,
    state: Mutex<CsvState<W>>,
}

impl<W: Write> CsvResultSink<W> {
    pub fn new(writer: W, questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            state: Mutex::new(CsvState {
                writer: csv::Writer::from_writer(writer),
                header_written: false,
            }),
        }
    }

    pub fn header(&self) -> Vec<String> {
        ProfileField::ALL
            .iter()
            .map(|field| field.key().to_string())
            .chain(
                self.questionnaire
                    .questions()
                    .map(|question| question.display_text().to_string()),
            )
            .chain(TRAILING_COLUMNS.iter().map(|column| column.to_string()))
            .collect()
    }

    fn row(&self, report: &ScreeningReport) -> Vec<String> {
        ProfileField::ALL
            .iter()
            .map(|field| report.profile.field(*field).unwrap_or_default())
            .chain(self.questionnaire.questions().map(|question| {
                report
                    .answers
                    .text(question)
                    .map(str::to_string)
                    .unwrap_or_default()
            }))
            .chain([
                report.disposition.label().to_string(),
                report.rationale.clone(),
                report.status_label.clone().unwrap_or_default(),
            ])
            .collect()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CsvState<W>>, CollaboratorError> {
        self.state
            .lock()
            .map_err(|_| CollaboratorError::Unavailable("csv writer lock poisoned".to_string()))
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, CollaboratorError> {
        let state = self
            .state
            .into_inner()
            .map_err(|_| CollaboratorError::Unavailable("csv writer lock poisoned".to_string()))?;
        state
            .writer
            .into_inner()
            .map_err(|err| CollaboratorError::Io(err.into_error()))
    }
}

impl<W: Write + Send> ResultSink for CsvResultSink<W> {
    fn record(&self, report: &ScreeningReport) -> Result<(), CollaboratorError> {
        let row = self.row(report);
        let mut state = self.lock()?;

        if !state.header_written {
            state.writer.write_record(self.header())?;
            state.header_written = true;
        }
        state.writer.write_record(row)?;
        Ok(())
    }

    fn finish(&self) -> Result<(), CollaboratorError> {
        self.lock()?.writer.flush()?;
        Ok(())
    }
}

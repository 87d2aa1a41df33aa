use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};

use quiz_core::model::{Difficulty, OptionKey, OptionSet, Question, QuestionId, TopicTag};

use crate::source::{QuestionSource, StorageError};

const COL_SERIAL: &str = "Serial No";
const COL_QUESTION: &str = "Question";
const COL_OPTIONS: &str = "Options";
const COL_CORRECT: &str = "Correct option";
const COL_TOPIC: &str = "TAG";
const COL_DIFFICULTY: &str = "Difficulty tag";

const REQUIRED_COLUMNS: [&str; 6] = [
    COL_SERIAL,
    COL_QUESTION,
    COL_OPTIONS,
    COL_CORRECT,
    COL_TOPIC,
    COL_DIFFICULTY,
];

/// Question bank backed by an xlsx workbook.
///
/// Columns are located by header name on the first worksheet, so column
/// order in the file does not matter. Question order follows row order.
#[derive(Debug, Clone)]
pub struct XlsxQuestionBank {
    path: PathBuf,
}

impl XlsxQuestionBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for XlsxQuestionBank {
    fn load(&self) -> Result<Vec<Question>, StorageError> {
        let mut workbook = open_workbook_auto(&self.path)?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(StorageError::NoWorksheet)?;
        let range = workbook.worksheet_range(&sheet_name)?;
        questions_from_rows(range.rows())
    }
}

/// Parse a header row plus data rows into the ordered question sequence.
///
/// Split out from the file I/O so row mapping is testable on constructed
/// cells. Row numbers in errors are 1-based workbook rows (header is row 1).
///
/// # Errors
///
/// Returns `StorageError::MissingHeader` / `MissingColumn` for a bad layout,
/// and `StorageError::BadRow` for the first row failing domain validation.
pub fn questions_from_rows<'a>(
    mut rows: impl Iterator<Item = &'a [Data]>,
) -> Result<Vec<Question>, StorageError> {
    let header = rows.next().ok_or(StorageError::MissingHeader)?;
    let columns = ColumnMap::from_header(header)?;

    let mut questions = Vec::new();
    for (offset, row) in rows.enumerate() {
        // Trailing blank rows are common in hand-edited sheets.
        if row.iter().all(is_blank_cell) {
            continue;
        }
        let row_number = offset + 2;
        let question = columns
            .question_from_row(row)
            .map_err(|source| StorageError::BadRow {
                row: row_number,
                source,
            })?;
        questions.push(question);
    }

    Ok(questions)
}

struct ColumnMap {
    serial: usize,
    question: usize,
    options: usize,
    correct: usize,
    topic: usize,
    difficulty: usize,
}

impl ColumnMap {
    fn from_header(header: &[Data]) -> Result<Self, StorageError> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|cell| cell_text(cell) == name)
                .ok_or(StorageError::MissingColumn { name })
        };

        // Probe all required names so the first diagnostic names a real gap.
        for name in REQUIRED_COLUMNS {
            find(name)?;
        }

        Ok(Self {
            serial: find(COL_SERIAL)?,
            question: find(COL_QUESTION)?,
            options: find(COL_OPTIONS)?,
            correct: find(COL_CORRECT)?,
            topic: find(COL_TOPIC)?,
            difficulty: find(COL_DIFFICULTY)?,
        })
    }

    fn question_from_row(&self, row: &[Data]) -> Result<Question, quiz_core::Error> {
        let serial = QuestionId::new(cell_at(row, self.serial))?;
        let options = OptionSet::parse(&cell_at(row, self.options))?;
        let correct = OptionKey::new(cell_at(row, self.correct))?;
        let topic = TopicTag::new(cell_at(row, self.topic))?;
        let difficulty: Difficulty = cell_at(row, self.difficulty).parse()?;

        Ok(Question::new(
            serial,
            cell_at(row, self.question),
            options,
            correct,
            topic,
            difficulty,
        )?)
    }
}

fn cell_at(row: &[Data], index: usize) -> String {
    row.get(index).map(cell_text).unwrap_or_default()
}

/// Stringify a cell. Serial numbers are frequently numeric cells, so whole
/// floats render without a fractional part.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Bool(value) => value.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

fn is_blank_cell(cell: &Data) -> bool {
    matches!(cell, Data::Empty) || cell_text(cell).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Data> {
        REQUIRED_COLUMNS
            .iter()
            .map(|name| Data::String((*name).to_string()))
            .collect()
    }

    fn row(
        serial: Data,
        question: &str,
        options: &str,
        correct: &str,
        topic: &str,
        difficulty: &str,
    ) -> Vec<Data> {
        vec![
            serial,
            Data::String(question.to_string()),
            Data::String(options.to_string()),
            Data::String(correct.to_string()),
            Data::String(topic.to_string()),
            Data::String(difficulty.to_string()),
        ]
    }

    #[test]
    fn maps_rows_in_order_with_numeric_serials() {
        let rows = vec![
            header(),
            row(
                Data::Float(1.0),
                r"If $\sqrt{x+5} = 4$, find $x$.",
                "A@@10, B@@11",
                "B",
                "Algebra",
                "Medium",
            ),
            row(
                Data::String("2".to_string()),
                "Integrate $x^2$.",
                "A@@$x^3/3$, B@@$x^3$",
                "A",
                "Calculus",
                "Hard",
            ),
        ];

        let questions = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id().as_str(), "1");
        assert_eq!(questions[0].difficulty(), Difficulty::Medium);
        assert_eq!(questions[1].id().as_str(), "2");
        assert_eq!(questions[1].topic().as_str(), "Calculus");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let rows = vec![
            header(),
            vec![Data::Empty; 6],
            row(
                Data::Int(7),
                "Question",
                "A@@1, B@@2",
                "A",
                "Geometry",
                "Easy",
            ),
        ];

        let questions = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id().as_str(), "7");
    }

    #[test]
    fn malformed_options_abort_with_row_number() {
        let rows = vec![
            header(),
            row(Data::Int(1), "Q", "A@@1, B@@2", "A", "Algebra", "Easy"),
            row(Data::Int(2), "Q", "A-81", "A", "Algebra", "Easy"),
        ];

        let err = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap_err();
        match err {
            StorageError::BadRow { row, .. } => assert_eq!(row, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_column_is_named() {
        let mut bad_header = header();
        bad_header.remove(2); // drop "Options"
        let rows = vec![bad_header];

        let err = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap_err();
        match err {
            StorageError::MissingColumn { name } => assert_eq!(name, COL_OPTIONS),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let rows = vec![
            header(),
            row(Data::Int(1), "Q", "A@@1, B@@2", "A", "Algebra", "Extreme"),
        ];

        let err = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap_err();
        assert!(matches!(err, StorageError::BadRow { row: 2, .. }));
    }

    #[test]
    fn empty_sheet_reports_missing_header() {
        let rows: Vec<Vec<Data>> = Vec::new();
        let err = questions_from_rows(rows.iter().map(Vec::as_slice)).unwrap_err();
        assert!(matches!(err, StorageError::MissingHeader));
    }
}

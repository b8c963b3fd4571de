//! Flat-file read and report write.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use miniops_core::DomainError;

use crate::grade::Grade;
use crate::student::Student;

/// Failure of a read or write of the report files.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A malformed input line (missing field or non-integer id/score).
    #[error(transparent)]
    Malformed(#[from] DomainError),

    /// The underlying file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one non-blank input line.
///
/// The line must split into at least three comma-separated fields
/// (id, name, score) after trimming; extra fields are ignored.
fn parse_line(line_no: usize, line: &str) -> Result<Student, DomainError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(DomainError::missing_field(format!(
            "line {line_no}: expected id,name,score (got {} fields)",
            fields.len()
        )));
    }

    let id: u32 = fields[0].parse().map_err(|_| {
        DomainError::invalid_format(format!("line {line_no}: id '{}' is not an integer", fields[0]))
    })?;
    let score: i64 = fields[2].parse().map_err(|_| {
        DomainError::invalid_format(format!(
            "line {line_no}: score '{}' is not an integer",
            fields[2]
        ))
    })?;

    Ok(Student::new(id, fields[1], score))
}

/// Read all students from a text file.
///
/// Blank lines (after trimming) are skipped. The first malformed line aborts
/// the entire read; no partial results are returned.
pub fn read_students(path: &Path) -> Result<Vec<Student>, ReportError> {
    let reader = BufReader::new(File::open(path)?);
    let mut students = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(index + 1, &line)?);
    }

    Ok(students)
}

/// Write the report: one line per student, in the order given.
pub fn write_report(path: &Path, students: &[Student]) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for student in students {
        writeln!(
            writer,
            "{} (ID: {}): Score = {}, Grade = {}",
            student.name,
            student.id,
            student.score,
            Grade::from_score(student.score),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Read `input`, derive grades, and write the report to `output`.
///
/// The input is fully parsed before the output file is created, so a
/// malformed input never leaves a partial report behind.
pub fn generate_report(input: &Path, output: &Path) -> Result<(), ReportError> {
    let students = read_students(input)?;
    tracing::debug!(count = students.len(), "parsed student records");
    write_report(output, &students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("students.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn well_formed_input_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "2, Tunde Bello, 72\n1, Ada Obi, 85\n");

        let students = read_students(&input).unwrap();
        assert_eq!(
            students,
            vec![
                Student::new(2, "Tunde Bello", 72),
                Student::new(1, "Ada Obi", 85),
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "\n1, Ada Obi, 85\n   \n2, Tunde Bello, 72\n\n");

        let students = read_students(&input).unwrap();
        assert_eq!(students.len(), 2);
    }

    #[test]
    fn fields_are_trimmed_and_extras_ignored() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "  7 ,  Chi Eze  , 64 , extra, fields\n");

        let students = read_students(&input).unwrap();
        assert_eq!(students, vec![Student::new(7, "Chi Eze", 64)]);
    }

    #[test]
    fn two_field_line_aborts_with_missing_field() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "1, Ada Obi, 85\n2, Tunde Bello\n");

        let err = read_students(&input).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Malformed(DomainError::MissingField(_))
        ));
    }

    #[test]
    fn non_integer_id_aborts_with_invalid_format() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "one, Ada Obi, 85\n");

        let err = read_students(&input).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Malformed(DomainError::InvalidFormat(_))
        ));
    }

    #[test]
    fn non_integer_score_aborts_with_invalid_format() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "1, Ada Obi, eighty-five\n");

        let err = read_students(&input).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Malformed(DomainError::InvalidFormat(_))
        ));
    }

    #[test]
    fn report_lines_use_the_fixed_format() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report.txt");

        let students = vec![
            Student::new(1, "Ada Obi", 85),
            Student::new(5, "Nia Abara", 43),
        ];
        write_report(&output, &students).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(
            report,
            "Ada Obi (ID: 1): Score = 85, Grade = A\n\
             Nia Abara (ID: 5): Score = 43, Grade = F\n"
        );
    }

    #[test]
    fn malformed_input_never_writes_partial_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "1, Ada Obi, 85\n2, Tunde Bello\n");
        let output = dir.path().join("report.txt");

        let err = generate_report(&input, &output).unwrap_err();
        assert!(matches!(err, ReportError::Malformed(_)));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_file_surfaces_an_io_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("does-not-exist.txt");
        let output = dir.path().join("report.txt");

        let err = generate_report(&input, &output).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
        assert!(!output.exists());
    }

    #[test]
    fn generate_report_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "1, Ada Obi, 80\n2, Tunde Bello, 79\n3, Chi Eze, 59\n");
        let output = dir.path().join("report.txt");

        generate_report(&input, &output).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(
            report,
            "Ada Obi (ID: 1): Score = 80, Grade = A\n\
             Tunde Bello (ID: 2): Score = 79, Grade = B\n\
             Chi Eze (ID: 3): Score = 59, Grade = D\n"
        );
    }
}

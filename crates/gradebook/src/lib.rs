//! Student-grade file report demo.
//!
//! Reads `id,name,score` lines from a text file, derives letter grades, and
//! writes a one-line-per-student report file. Any malformed line aborts the
//! entire read; the report is never partially written.

pub mod grade;
pub mod report;
pub mod student;

pub use grade::Grade;
pub use report::{ReportError, generate_report, read_students, write_report};
pub use student::Student;

use std::fs;
use std::io::Write;
use std::path::Path;

/// Run the gradebook demonstration sequence.
///
/// Seeds a sample input file under `dir`, generates the report next to it,
/// and echoes the report to stdout. File-system failures surface to the
/// caller; malformed-input conditions would too, but the seeded input is
/// well formed.
pub fn run_demo(dir: &Path) -> Result<(), ReportError> {
    println!("\n--- Gradebook demo ---");

    let input = dir.join("students.txt");
    let output = dir.join("report.txt");

    let mut file = fs::File::create(&input)?;
    writeln!(file, "1, Ada Obi, 85")?;
    writeln!(file, "2, Tunde Bello, 72")?;
    writeln!(file, "3, Chi Eze, 64")?;
    writeln!(file, "4, Sefu Juma, 51")?;
    writeln!(file, "5, Nia Abara, 43")?;
    drop(file);

    generate_report(&input, &output)?;

    let report = fs::read_to_string(&output)?;
    print!("{report}");

    println!("--- Gradebook demo end ---");
    Ok(())
}

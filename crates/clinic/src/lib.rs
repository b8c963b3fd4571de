//! Health-records demo: patients and their prescriptions.

pub mod patient;
pub mod prescription;
pub mod records;

pub use patient::{Patient, PatientId};
pub use prescription::{Prescription, PrescriptionId};
pub use records::HealthRecords;

/// Run the health-records demonstration sequence, printing outcomes to
/// stdout.
pub fn run_demo() {
    println!("\n--- Clinic demo ---");
    let records = HealthRecords::with_sample_data();

    for patient in records.patients() {
        println!("{} (id {}), age {}", patient.name, patient.id, patient.age);
        for rx in records.prescriptions_for(patient.id) {
            println!("  rx #{}: {} — {}", rx.id, rx.medication, rx.dosage);
        }
    }

    // Lookup of an absent patient id; the condition is caught and printed.
    match records.patient(PatientId(42)) {
        Ok(patient) => println!("Unexpected hit: {}", patient.name),
        Err(err) => println!("Lookup of patient 42 rejected: {err}"),
    }

    println!("--- Clinic demo end ---");
}

//! Health-records lookup over two repositories.

use miniops_core::{DomainResult, Repository};

use crate::patient::{Patient, PatientId};
use crate::prescription::{Prescription, PrescriptionId};

/// Patients and prescriptions, each in their own repository.
#[derive(Debug, Default)]
pub struct HealthRecords {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
}

impl HealthRecords {
    pub fn new() -> Self {
        Self {
            patients: Repository::new(),
            prescriptions: Repository::new(),
        }
    }

    /// Records pre-populated with the fixed sample data used by the demo
    /// driver.
    pub fn with_sample_data() -> Self {
        let mut records = Self::new();
        let patients = [
            Patient::new(PatientId(1), "Amina Yusuf", 34),
            Patient::new(PatientId(2), "Kwame Mensah", 58),
        ];
        let prescriptions = [
            Prescription::new(
                PrescriptionId(1),
                PatientId(1),
                "Amoxicillin",
                "500mg, 3x daily",
            ),
            Prescription::new(
                PrescriptionId(2),
                PatientId(2),
                "Lisinopril",
                "10mg, 1x daily",
            ),
            Prescription::new(
                PrescriptionId(3),
                PatientId(2),
                "Metformin",
                "850mg, 2x daily",
            ),
        ];
        for patient in patients {
            records
                .patients
                .add(patient)
                .expect("sample data has distinct patient ids");
        }
        for rx in prescriptions {
            records
                .prescriptions
                .add(rx)
                .expect("sample data has distinct prescription ids");
        }
        records
    }

    pub fn add_patient(&mut self, patient: Patient) -> DomainResult<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> DomainResult<()> {
        self.prescriptions.add(prescription)
    }

    pub fn patient(&self, id: PatientId) -> DomainResult<&Patient> {
        self.patients.get(id)
    }

    /// Snapshot of all patients in ascending id order.
    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list()
    }

    /// All prescriptions whose owning patient id matches, in ascending
    /// prescription id order. An unknown patient id simply yields an empty
    /// list; grouping is not enforced referentially.
    pub fn prescriptions_for(&self, patient_id: PatientId) -> Vec<Prescription> {
        self.prescriptions
            .iter()
            .filter(|rx| rx.patient_id == patient_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniops_core::DomainError;

    #[test]
    fn prescriptions_group_by_patient_id() {
        let records = HealthRecords::with_sample_data();

        let first = records.prescriptions_for(PatientId(1));
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].medication, "Amoxicillin");

        let second = records.prescriptions_for(PatientId(2));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn absent_patient_lookup_reports_not_found() {
        let records = HealthRecords::with_sample_data();
        let err = records.patient(PatientId(42)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn unknown_patient_id_yields_no_prescriptions() {
        let records = HealthRecords::with_sample_data();
        assert!(records.prescriptions_for(PatientId(42)).is_empty());
    }

    #[test]
    fn duplicate_patient_is_rejected() {
        let mut records = HealthRecords::with_sample_data();
        let err = records
            .add_patient(Patient::new(PatientId(1), "Imposter", 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
        assert_eq!(records.patient(PatientId(1)).unwrap().name, "Amina Yusuf");
    }

    #[test]
    fn prescriptions_may_reference_an_unfiled_patient() {
        // Grouping key only; no referential enforcement.
        let mut records = HealthRecords::new();
        records
            .add_prescription(Prescription::new(
                PrescriptionId(1),
                PatientId(77),
                "Ibuprofen",
                "200mg as needed",
            ))
            .unwrap();
        assert_eq!(records.prescriptions_for(PatientId(77)).len(), 1);
    }
}

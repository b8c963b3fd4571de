//! Prescription records, grouped by owning patient id.

use serde::{Deserialize, Serialize};

use miniops_core::Entity;

use crate::patient::PatientId;

/// Prescription identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrescriptionId(pub u32);

impl core::fmt::Display for PrescriptionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A prescription on file.
///
/// `patient_id` is a grouping key only; no referential integrity is
/// enforced against the patient repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: PatientId,
    pub medication: String,
    pub dosage: String,
}

impl Prescription {
    pub fn new(
        id: PrescriptionId,
        patient_id: PatientId,
        medication: impl Into<String>,
        dosage: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            dosage: dosage.into(),
        }
    }
}

impl Entity for Prescription {
    type Id = PrescriptionId;

    fn id(&self) -> PrescriptionId {
        self.id
    }
}

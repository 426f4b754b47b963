// registry/src/registry.rs

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use log::debug;
use serde_json::Value;

use models::errors::RegistryResult;
use models::summary::NOT_SCHEDULED;
use models::{DoctorId, Patient, PatientId, PatientSummary, Prescription};

use crate::update::PatientUpdate;

/// The patient record system: four co-located collections keyed by the
/// patient identifier.
///
/// Bookkeeping rules:
/// - patient identifiers are unique; re-adding one silently overwrites the
///   prior record, medical history included;
/// - the appointment schedule holds one doctor per patient, overwritten on
///   re-scheduling, with no history and no foreign-key check;
/// - the consultation queue is FIFO and unduplicated entries are not
///   enforced — every scheduling call appends;
/// - the prescription log is append-only and never shrinks.
#[derive(Debug, Default)]
pub struct PatientRegistry {
    patients: HashMap<PatientId, Patient>,
    appointment_schedule: HashMap<PatientId, DoctorId>,
    consultation_queue: VecDeque<PatientId>,
    prescription_log: Vec<Prescription>,
}

impl PatientRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or silently overwrites) the patient record keyed by `id` and
    /// returns it. Always succeeds; an overwrite loses the prior record
    /// entirely, medical history included.
    pub fn add_patient(
        &mut self,
        id: PatientId,
        name: String,
        age: u32,
        medical_history: Vec<String>,
        current_condition: Option<String>,
    ) -> &Patient {
        debug!("adding patient record {id}");
        let record = Patient::with_details(id.clone(), name, age, medical_history, current_condition);
        match self.patients.entry(id) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(record),
        }
    }

    /// Applies a set of (field name, new value) updates to the record keyed
    /// by `id`, replacing each targeted field wholesale.
    ///
    /// Every entry is parsed before anything is mutated, so an unknown field
    /// name (`InvalidField`) or wrongly shaped value (`InvalidFieldValue`)
    /// leaves the record untouched. An unknown `id` is a silent no-op.
    pub fn update_patient(
        &mut self,
        id: &PatientId,
        updates: &HashMap<String, Value>,
    ) -> RegistryResult<()> {
        let mut parsed = Vec::with_capacity(updates.len());
        for (field, value) in updates {
            parsed.push(PatientUpdate::parse(field, value)?);
        }

        let Some(patient) = self.patients.get_mut(id) else {
            debug!("update for unknown patient {id} ignored");
            return Ok(());
        };
        for update in &parsed {
            update.apply(patient);
        }
        debug!("updated patient record {id}");
        Ok(())
    }

    /// Removes the first occurrence of `id` from the consultation queue.
    /// No-op if absent. The patient record, appointment assignment, and
    /// prescription log are untouched.
    pub fn remove_from_queue(&mut self, id: &PatientId) {
        if let Some(position) = self.consultation_queue.iter().position(|queued| queued == id) {
            self.consultation_queue.remove(position);
            debug!("removed {id} from the consultation queue");
        }
    }

    /// Assigns (or re-assigns) `doctor_id` to `patient_id`, then appends the
    /// patient to the queue tail. Neither identifier is checked for
    /// existence; both are opaque tokens at this layer, and a patient
    /// already queued is appended again.
    pub fn schedule_appointment(&mut self, patient_id: PatientId, doctor_id: DoctorId) {
        debug!("scheduling {patient_id} with {doctor_id}");
        self.appointment_schedule
            .insert(patient_id.clone(), doctor_id);
        self.consultation_queue.push_back(patient_id);
    }

    /// Appends a prescription for `patient_id` to the log and returns `true`,
    /// or returns `false` without side effects if the patient is unknown.
    /// The boolean is the sole error channel.
    pub fn issue_prescription(&mut self, patient_id: &PatientId, medication: &str) -> bool {
        if !self.patients.contains_key(patient_id) {
            debug!("prescription for unknown patient {patient_id} refused");
            return false;
        }
        self.prescription_log
            .push(Prescription::new(patient_id.clone(), medication.to_string()));
        true
    }

    /// Returns a summary of the patient, or `None` if the identifier is
    /// unknown. Medications are the in-order projection of the prescription
    /// log filtered to this patient, repeats kept.
    pub fn get_summary(&self, patient_id: &PatientId) -> Option<PatientSummary> {
        let patient = self.patients.get(patient_id)?;
        let doctor = self.appointment_schedule.get(patient_id);
        let medications = self
            .prescription_log
            .iter()
            .filter(|prescription| &prescription.patient_id == patient_id)
            .map(|prescription| prescription.medication.clone())
            .collect();

        Some(PatientSummary {
            name: patient.name.clone(),
            age: patient.age,
            doctor: doctor.cloned(),
            appointment_details: doctor
                .map_or_else(|| NOT_SCHEDULED.to_string(), |doctor_id| doctor_id.to_string()),
            medications,
        })
    }

    /// Pops the front of the consultation queue, or `None` if it is empty.
    pub fn call_next_patient(&mut self) -> Option<PatientId> {
        let next = self.consultation_queue.pop_front();
        if let Some(ref id) = next {
            debug!("calling {id} for consultation");
        }
        next
    }

    /// Returns the record keyed by `id`, if any.
    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// Returns the doctor currently assigned to `id`, if ever scheduled.
    pub fn assigned_doctor(&self, id: &PatientId) -> Option<&DoctorId> {
        self.appointment_schedule.get(id)
    }

    /// Iterates the consultation queue front to back.
    pub fn consultation_queue(&self) -> impl Iterator<Item = &PatientId> {
        self.consultation_queue.iter()
    }

    /// The full prescription log, in issuance order.
    pub fn prescriptions(&self) -> &[Prescription] {
        self.prescription_log.as_slice()
    }

    pub fn queue_len(&self) -> usize {
        self.consultation_queue.len()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::PatientRegistry;
    use models::errors::RegistryError;
    use models::{Doctor, DoctorId, PatientId};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn pid(value: &str) -> PatientId {
        PatientId::new(value.to_string()).unwrap()
    }

    fn did(value: &str) -> DoctorId {
        DoctorId::new(value.to_string()).unwrap()
    }

    // The sample directory from the reference data set. Reference data only;
    // the registry never reads it.
    fn sample_doctors() -> Vec<Doctor> {
        vec![
            Doctor::new(did("D001"), "Dr. Smith".to_string(), "General".to_string()),
            Doctor::new(did("D002"), "Dr. Johnson".to_string(), "Cardiologist".to_string()),
            Doctor::new(did("D003"), "Dr. Lee".to_string(), "Dermatologist".to_string()),
        ]
    }

    fn seeded_registry() -> PatientRegistry {
        let mut registry = PatientRegistry::new();
        registry.add_patient(pid("P001"), "Fatma Baharoon".to_string(), 18, Vec::new(), None);
        registry.add_patient(
            pid("P002"),
            "Hind Ahli".to_string(),
            19,
            vec!["Allergy to penicillin".to_string()],
            Some("Fever".to_string()),
        );
        registry.add_patient(pid("P003"), "Roudha Ahli".to_string(), 19, Vec::new(), None);
        registry
    }

    fn history_update(text: &str) -> HashMap<String, Value> {
        let mut updates = HashMap::new();
        updates.insert("medical_history".to_string(), json!(text));
        updates
    }

    #[test]
    fn should_return_supplied_details_in_summary_after_add() {
        let registry = seeded_registry();
        let summary = registry.get_summary(&pid("P001")).unwrap();
        assert_eq!(summary.name, "Fatma Baharoon");
        assert_eq!(summary.age, 18);
        assert_eq!(summary.doctor, None);
        assert_eq!(summary.appointment_details, "Not scheduled");
        assert!(summary.medications.is_empty());
    }

    #[test]
    fn should_replace_record_entirely_when_re_adding_same_id() {
        let mut registry = seeded_registry();
        registry.add_patient(pid("P002"), "Hind A.".to_string(), 20, Vec::new(), None);

        let record = registry.patient(&pid("P002")).unwrap();
        assert_eq!(record.name, "Hind A.");
        assert_eq!(record.age, 20);
        // The prior medical history is lost, not merged.
        assert!(record.medical_history.is_empty());
        assert!(record.current_condition.is_none());
        assert_eq!(registry.patient_count(), 3);
    }

    #[test]
    fn should_update_known_fields_wholesale() {
        let mut registry = seeded_registry();
        let mut updates = HashMap::new();
        updates.insert("medical_history".to_string(), json!(["Asthma"]));
        updates.insert("current_condition".to_string(), json!("Recovered"));
        registry.update_patient(&pid("P002"), &updates).unwrap();

        let record = registry.patient(&pid("P002")).unwrap();
        assert_eq!(record.medical_history, vec!["Asthma"]);
        assert_eq!(record.current_condition.as_deref(), Some("Recovered"));
    }

    #[test]
    fn should_ignore_update_for_unknown_patient() {
        let mut registry = seeded_registry();
        registry
            .update_patient(&pid("Pxxx"), &history_update("Asthma"))
            .unwrap();
        assert_eq!(registry.patient_count(), 3);
        assert!(registry.patient(&pid("Pxxx")).is_none());
    }

    #[test]
    fn should_reject_unknown_field_without_mutating() {
        let mut registry = seeded_registry();
        let mut updates = HashMap::new();
        updates.insert("current_condition".to_string(), json!("Recovered"));
        updates.insert("name".to_string(), json!("Someone Else"));

        let err = registry.update_patient(&pid("P002"), &updates).unwrap_err();
        assert_eq!(err, RegistryError::InvalidField("name".to_string()));

        // All-or-nothing: the recognized entry was not applied either.
        let record = registry.patient(&pid("P002")).unwrap();
        assert_eq!(record.name, "Hind Ahli");
        assert_eq!(record.current_condition.as_deref(), Some("Fever"));
    }

    #[test]
    fn should_refuse_prescription_for_unknown_patient() {
        let mut registry = seeded_registry();
        assert!(registry.issue_prescription(&pid("P001"), "Ibuprofen"));
        let log_len = registry.prescriptions().len();

        assert!(!registry.issue_prescription(&pid("Pxxx"), "Aspirin"));
        assert_eq!(registry.prescriptions().len(), log_len);
    }

    #[test]
    fn should_project_medications_in_order_under_interleaving() {
        let mut registry = seeded_registry();
        registry.issue_prescription(&pid("P001"), "Ibuprofen");
        registry.issue_prescription(&pid("P002"), "Paracetamol");
        registry.issue_prescription(&pid("P001"), "Vitamin D");
        registry.issue_prescription(&pid("P002"), "Paracetamol");
        registry.issue_prescription(&pid("P001"), "Ibuprofen");

        let summary = registry.get_summary(&pid("P001")).unwrap();
        assert_eq!(summary.medications, vec!["Ibuprofen", "Vitamin D", "Ibuprofen"]);
        let summary = registry.get_summary(&pid("P002")).unwrap();
        assert_eq!(summary.medications, vec!["Paracetamol", "Paracetamol"]);
    }

    #[test]
    fn should_overwrite_assignment_but_append_to_queue_on_reschedule() {
        let mut registry = seeded_registry();
        registry.schedule_appointment(pid("P001"), did("D001"));
        registry.schedule_appointment(pid("P001"), did("D003"));

        // Assignment is last-write-wins.
        assert_eq!(registry.assigned_doctor(&pid("P001")), Some(&did("D003")));
        // The queue is not deduplicated: both calls appended.
        let queue: Vec<_> = registry.consultation_queue().cloned().collect();
        assert_eq!(queue, vec![pid("P001"), pid("P001")]);
    }

    #[test]
    fn should_accept_doctor_absent_from_any_directory() {
        let mut registry = seeded_registry();
        let unknown = did("D999");
        assert!(sample_doctors().iter().all(|doctor| doctor.id != unknown));

        registry.schedule_appointment(pid("P001"), unknown.clone());
        let summary = registry.get_summary(&pid("P001")).unwrap();
        assert_eq!(summary.doctor, Some(unknown));
        assert_eq!(summary.appointment_details, "D999");
    }

    #[test]
    fn should_remove_only_first_queue_occurrence() {
        let mut registry = seeded_registry();
        registry.schedule_appointment(pid("P001"), did("D001"));
        registry.schedule_appointment(pid("P002"), did("D002"));
        registry.schedule_appointment(pid("P001"), did("D001"));

        registry.remove_from_queue(&pid("P001"));
        let queue: Vec<_> = registry.consultation_queue().cloned().collect();
        assert_eq!(queue, vec![pid("P002"), pid("P001")]);

        // Removal leaves the record and assignment alone.
        assert!(registry.patient(&pid("P001")).is_some());
        assert_eq!(registry.assigned_doctor(&pid("P001")), Some(&did("D001")));
    }

    #[test]
    fn should_tolerate_removal_of_absent_queue_entry() {
        let mut registry = seeded_registry();
        registry.remove_from_queue(&pid("P003"));
        assert_eq!(registry.queue_len(), 0);
    }

    #[test]
    fn should_return_none_when_calling_next_on_empty_queue() {
        let mut registry = seeded_registry();
        assert_eq!(registry.call_next_patient(), None);
    }

    #[test]
    fn should_run_end_to_end_consultation_scenario() {
        let mut registry = PatientRegistry::new();
        registry.add_patient(pid("P001"), "Fatma".to_string(), 18, Vec::new(), None);
        registry.add_patient(
            pid("P002"),
            "Hind".to_string(),
            19,
            vec!["Allergy to penicillin".to_string()],
            Some("Fever".to_string()),
        );

        registry.schedule_appointment(pid("P001"), did("D001"));
        registry.schedule_appointment(pid("P002"), did("D002"));

        assert!(registry.issue_prescription(&pid("P001"), "Ibuprofen"));
        assert!(registry.issue_prescription(&pid("P002"), "Paracetamol"));
        assert!(!registry.issue_prescription(&pid("Pxxx"), "Aspirin"));

        let summary = registry.get_summary(&pid("P001")).unwrap();
        assert_eq!(summary.name, "Fatma");
        assert_eq!(summary.age, 18);
        assert_eq!(summary.doctor, Some(did("D001")));
        assert_eq!(summary.appointment_details, "D001");
        assert_eq!(summary.medications, vec!["Ibuprofen"]);

        let queue: Vec<_> = registry.consultation_queue().cloned().collect();
        assert_eq!(queue, vec![pid("P001"), pid("P002")]);

        assert_eq!(registry.call_next_patient(), Some(pid("P001")));
        let queue: Vec<_> = registry.consultation_queue().cloned().collect();
        assert_eq!(queue, vec![pid("P002")]);
    }
}

//! Three-step sign-up wizard: name, then student id, then interests.
//!
//! The machine only moves forward. Scrolling the next step into view is the
//! host's reaction to an `Advanced` event, not something the wizard does.

use log::debug;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Name,
    StudentId,
    Interests,
    Done,
}

impl WizardStep {
    fn next(self) -> Self {
        match self {
            WizardStep::Name => WizardStep::StudentId,
            WizardStep::StudentId => WizardStep::Interests,
            WizardStep::Interests | WizardStep::Done => WizardStep::Done,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardRecord {
    pub name: String,
    pub student_id: String,
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Name(String),
    StudentId(String),
    Interests(Vec<String>),
}

impl Submission {
    fn step(&self) -> WizardStep {
        match self {
            Submission::Name(_) => WizardStep::Name,
            Submission::StudentId(_) => WizardStep::StudentId,
            Submission::Interests(_) => WizardStep::Interests,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    /// Moved on; the host should bring this step into view.
    Advanced(WizardStep),
    /// The final step was submitted. Emitted exactly once.
    Completed(WizardRecord),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    record: WizardRecord,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn record(&self) -> &WizardRecord {
        &self.record
    }

    /// Merges the answer for the current step and advances. Returns `None`
    /// and changes nothing when the submission is for another step or the
    /// name is blank.
    pub fn submit(&mut self, submission: Submission) -> Option<WizardEvent> {
        if submission.step() != self.step {
            debug!(
                "Ignoring {:?} submit while on {:?}",
                submission.step(),
                self.step
            );
            return None;
        }

        match submission {
            Submission::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    debug!("Ignoring blank name");
                    return None;
                }
                self.record.name = name.to_string();
            }
            // no guard here, an empty id is accepted
            Submission::StudentId(student_id) => self.record.student_id = student_id,
            Submission::Interests(interests) => {
                self.record.interests = interests;
                self.step = WizardStep::Done;
                return Some(WizardEvent::Completed(self.record.clone()));
            }
        }

        self.step = self.step.next();
        Some(WizardEvent::Advanced(self.step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests() -> Vec<String> {
        vec!["Coding".to_string(), "AI/ML".to_string()]
    }

    #[test]
    fn test_blank_name_is_silently_rejected() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.submit(Submission::Name(String::new())), None);
        assert_eq!(wizard.submit(Submission::Name("   \t".to_string())), None);
        assert_eq!(wizard, Wizard::new());
    }

    #[test]
    fn test_name_is_trimmed_and_advances() {
        let mut wizard = Wizard::new();
        let event = wizard.submit(Submission::Name(" Alice ".to_string()));
        assert_eq!(event, Some(WizardEvent::Advanced(WizardStep::StudentId)));
        assert_eq!(wizard.record().name, "Alice");
        assert_eq!(wizard.step(), WizardStep::StudentId);
    }

    #[test]
    fn test_full_run_completes_once() {
        let mut wizard = Wizard::new();
        wizard.submit(Submission::Name(" Alice ".to_string()));
        assert_eq!(
            wizard.submit(Submission::StudentId("S123".to_string())),
            Some(WizardEvent::Advanced(WizardStep::Interests))
        );

        let expected = WizardRecord {
            name: "Alice".to_string(),
            student_id: "S123".to_string(),
            interests: interests(),
        };
        let mut completions = 0;
        for _ in 0..3 {
            if let Some(WizardEvent::Completed(record)) =
                wizard.submit(Submission::Interests(interests()))
            {
                assert_eq!(record, expected);
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(wizard.step(), WizardStep::Done);
        assert_eq!(wizard.record(), &expected);
    }

    #[test]
    fn test_empty_student_id_is_accepted() {
        let mut wizard = Wizard::new();
        wizard.submit(Submission::Name("Bo".to_string()));
        assert_eq!(
            wizard.submit(Submission::StudentId(String::new())),
            Some(WizardEvent::Advanced(WizardStep::Interests))
        );
        assert_eq!(wizard.record().student_id, "");
    }

    #[test]
    fn test_out_of_order_submits_are_ignored() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.submit(Submission::Interests(interests())), None);
        assert_eq!(wizard.submit(Submission::StudentId("S1".to_string())), None);
        assert_eq!(wizard, Wizard::new());

        wizard.submit(Submission::Name("Alice".to_string()));
        // no way back to the name step
        assert_eq!(wizard.submit(Submission::Name("Mallory".to_string())), None);
        assert_eq!(wizard.record().name, "Alice");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = WizardRecord {
            name: "Alice".to_string(),
            student_id: "S123".to_string(),
            interests: interests(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"Alice","studentId":"S123","interests":["Coding","AI/ML"]}"#
        );
    }
}

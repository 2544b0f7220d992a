/// Lifecycle stage of a flow's current (or last) submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }
}

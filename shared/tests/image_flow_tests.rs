use async_trait::async_trait;
use futures::executor::block_on;
use shared::{
    ClassificationService, ClassifyError, FlowError, ImageSubmissionFlow, PredictionResult,
    SubmissionStatus, UploadFile,
};
use std::cell::Cell;
use std::rc::Rc;

/// Counts how many previews are alive at once.
#[derive(Debug, Clone, Default)]
struct PreviewLedger {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

struct TestPreview {
    live: Rc<Cell<usize>>,
}

impl Drop for TestPreview {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Debug, Clone)]
struct TestFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
    ledger: PreviewLedger,
}

impl TestFile {
    fn image(name: &str, ledger: &PreviewLedger) -> Self {
        Self {
            name: name.to_string(),
            media_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            ledger: ledger.clone(),
        }
    }
}

impl UploadFile for TestFile {
    type Preview = TestPreview;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn create_preview(&self) -> TestPreview {
        let live = &self.ledger.live;
        live.set(live.get() + 1);
        self.ledger.created.set(self.ledger.created.get() + 1);
        TestPreview {
            live: Rc::clone(live),
        }
    }
}

/// Returns a canned outcome and records each upload.
struct ScriptedClassifier {
    outcome: Result<&'static str, ClassifyError>,
    calls: Cell<usize>,
    uploaded: std::cell::RefCell<Vec<String>>,
}

impl ScriptedClassifier {
    fn responding(body: &'static str) -> Self {
        Self {
            outcome: Ok(body),
            calls: Cell::new(0),
            uploaded: Default::default(),
        }
    }

    fn failing(err: ClassifyError) -> Self {
        Self {
            outcome: Err(err),
            calls: Cell::new(0),
            uploaded: Default::default(),
        }
    }
}

#[async_trait(?Send)]
impl ClassificationService<TestFile> for ScriptedClassifier {
    async fn classify(&self, file: &TestFile) -> Result<PredictionResult, ClassifyError> {
        self.calls.set(self.calls.get() + 1);
        self.uploaded.borrow_mut().push(file.name.clone());
        match &self.outcome {
            Ok(body) => PredictionResult::from_json(body),
            Err(err) => Err(err.clone()),
        }
    }
}

const TWO_PREDICTIONS: &str =
    r#"{"predictions":[{"label":"Leaf Blight","score":0.87},{"label":"Healthy","score":0.13}]}"#;

#[test]
fn select_then_submit_issues_one_request_and_terminates() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::responding(TWO_PREDICTIONS);
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();

    assert_eq!(service.calls.get(), 1);
    assert_eq!(*service.uploaded.borrow(), vec!["leaf.jpg".to_string()]);
    assert!(flow.status().is_terminal());
}

#[test]
fn successful_classification_preserves_order_and_scores() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::responding(TWO_PREDICTIONS);
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();

    assert_eq!(flow.status(), SubmissionStatus::Succeeded);
    assert_eq!(flow.error(), None);
    let results = flow.results().expect("results stored");
    let pairs: Vec<(&str, f32)> = results.iter().map(|p| (p.label.as_str(), p.score)).collect();
    assert_eq!(pairs, vec![("Leaf Blight", 0.87), ("Healthy", 0.13)]);
}

#[test]
fn submit_without_file_never_calls_service() {
    let service = ScriptedClassifier::responding(TWO_PREDICTIONS);
    let mut flow: ImageSubmissionFlow<TestFile> = ImageSubmissionFlow::new();

    let err = block_on(flow.submit(&service)).unwrap_err();

    assert_eq!(err, FlowError::NoFileSelected);
    assert_eq!(service.calls.get(), 0);
    assert_eq!(flow.error(), Some("Please select an image file"));
    assert_eq!(flow.status(), SubmissionStatus::Idle);
}

#[test]
fn server_error_reports_status_code() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::failing(ClassifyError::Status(500));
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();

    assert_eq!(flow.status(), SubmissionStatus::Failed);
    assert!(flow.error().unwrap().contains("500"));
    assert!(flow.results().is_none());
}

#[test]
fn transport_failure_uses_message_or_fallback() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();
    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();

    let with_message = ScriptedClassifier::failing(ClassifyError::Transport(Some(
        "NetworkError when attempting to fetch resource.".into(),
    )));
    block_on(flow.submit(&with_message)).unwrap();
    assert_eq!(
        flow.error(),
        Some("NetworkError when attempting to fetch resource.")
    );

    let without_message = ScriptedClassifier::failing(ClassifyError::Transport(None));
    block_on(flow.submit(&without_message)).unwrap();
    assert_eq!(flow.error(), Some("Failed to get predictions"));
    assert_eq!(flow.status(), SubmissionStatus::Failed);
}

#[test]
fn malformed_body_fails_with_parse_error() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::responding(r#"{"prediction":"blight"}"#);
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();

    assert_eq!(flow.status(), SubmissionStatus::Failed);
    let error = flow.error().unwrap();
    assert!(error.starts_with("Failed to parse response"));
}

#[test]
fn repeated_selection_keeps_one_live_preview() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();

    for i in 0..5 {
        flow.select_file(TestFile::image(&format!("leaf-{i}.png"), &ledger)).unwrap();
        assert_eq!(ledger.live.get(), 1);
    }

    assert_eq!(ledger.created.get(), 5);
    assert_eq!(flow.selected_file().unwrap().name, "leaf-4.png");
}

#[test]
fn clear_releases_preview_and_empties_state_after_failure() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::failing(ClassifyError::Status(502));
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();
    flow.clear();

    assert_eq!(ledger.live.get(), 0);
    assert!(flow.selected_file().is_none());
    assert!(flow.preview().is_none());
    assert!(flow.error().is_none());
    assert!(flow.results().is_none());
    assert_eq!(flow.status(), SubmissionStatus::Failed);
}

#[test]
fn clear_after_success_drops_results() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::responding(TWO_PREDICTIONS);
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();
    flow.clear();

    assert!(flow.results().is_none());
    assert_eq!(ledger.live.get(), 0);
    assert!(!flow.can_submit());
}

#[test]
fn new_selection_after_failure_clears_error() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::failing(ClassifyError::Status(500));
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("first.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();
    assert!(flow.error().is_some());

    flow.select_file(TestFile::image("second.jpg", &ledger)).unwrap();
    assert!(flow.error().is_none());
    assert!(flow.results().is_none());
    assert_eq!(flow.status(), SubmissionStatus::Failed);
}

#[test]
fn empty_file_is_rejected_without_touching_state() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();
    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();

    let mut empty = TestFile::image("empty.jpg", &ledger);
    empty.bytes.clear();

    assert_eq!(flow.select_file(empty), Err(FlowError::EmptyFile));
    assert_eq!(flow.selected_file().unwrap().name, "leaf.jpg");
    assert_eq!(ledger.live.get(), 1);
}

#[test]
fn non_image_selection_is_only_a_soft_warning() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();
    let mut pdf = TestFile::image("notes.pdf", &ledger);
    pdf.media_type = "application/pdf".into();

    assert!(flow.select_file(pdf).is_ok());
    assert!(flow.can_submit());
}

#[test]
fn second_submission_is_refused_while_in_flight() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();
    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();

    let file = flow.begin_submit().unwrap();
    assert_eq!(file.name, "leaf.jpg");
    assert_eq!(flow.status(), SubmissionStatus::InFlight);
    assert!(!flow.can_submit());
    assert_eq!(
        flow.begin_submit().unwrap_err(),
        FlowError::AlreadyInFlight
    );

    flow.finish(PredictionResult::from_json(TWO_PREDICTIONS));
    assert_eq!(flow.status(), SubmissionStatus::Succeeded);
}

#[test]
fn selection_cannot_be_cleared_while_in_flight() {
    let ledger = PreviewLedger::default();
    let mut flow = ImageSubmissionFlow::new();
    assert!(!flow.can_clear());

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    assert!(flow.can_clear());

    flow.begin_submit().unwrap();
    assert!(!flow.can_clear());

    flow.finish(PredictionResult::from_json(TWO_PREDICTIONS));
    assert!(flow.can_clear());
    assert_eq!(flow.selected_file().unwrap().name, "leaf.jpg");
    assert_eq!(flow.results().unwrap().len(), 2);
}

#[test]
fn stray_finish_is_ignored() {
    let mut flow: ImageSubmissionFlow<TestFile> = ImageSubmissionFlow::new();
    flow.finish(Err(ClassifyError::Status(500)));

    assert_eq!(flow.status(), SubmissionStatus::Idle);
    assert!(flow.error().is_none());
}

#[test]
fn resubmission_clears_previous_results_before_request() {
    let ledger = PreviewLedger::default();
    let service = ScriptedClassifier::responding(TWO_PREDICTIONS);
    let mut flow = ImageSubmissionFlow::new();

    flow.select_file(TestFile::image("leaf.jpg", &ledger)).unwrap();
    block_on(flow.submit(&service)).unwrap();
    assert!(flow.results().is_some());

    flow.begin_submit().unwrap();
    assert!(flow.results().is_none());
    assert!(flow.error().is_none());
}

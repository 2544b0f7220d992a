//! Upload-an-image-and-classify-it controller.

use crate::error::{ClassifyError, FlowError};
use crate::file::{UploadFile, selection_warnings};
use crate::models::PredictionResult;
use crate::service::ClassificationService;
use crate::status::SubmissionStatus;

/// State of the disease-prediction form.
///
/// The flow exclusively owns the preview of the selected file: it is dropped
/// (and therefore released) before a new one is created and on `clear`.
pub struct ImageSubmissionFlow<F: UploadFile> {
    selected_file: Option<F>,
    preview: Option<F::Preview>,
    status: SubmissionStatus,
    error: Option<String>,
    results: Option<PredictionResult>,
}

impl<F: UploadFile> Default for ImageSubmissionFlow<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            preview: None,
            status: SubmissionStatus::Idle,
            error: None,
            results: None,
        }
    }
}

impl<F: UploadFile> ImageSubmissionFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn preview(&self) -> Option<&F::Preview> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> Option<&PredictionResult> {
        self.results.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.status.is_in_flight()
    }

    /// The selection stays put while its request is outstanding, so a late
    /// result always lands next to the image it was computed for.
    pub fn can_clear(&self) -> bool {
        self.selected_file.is_some() && !self.status.is_in_flight()
    }

    pub fn select_file(&mut self, file: F) -> Result<(), FlowError> {
        if file.size() == 0 {
            return Err(FlowError::EmptyFile);
        }

        for warning in selection_warnings(&file) {
            log::warn!("{}", warning);
        }

        // Release the old preview before the new one exists.
        self.preview = None;
        self.preview = Some(file.create_preview());
        log::debug!("Selected {} ({} bytes)", file.name(), file.size());
        self.selected_file = Some(file);
        self.error = None;
        self.results = None;
        Ok(())
    }

    /// Moves the flow to `InFlight` and returns the file to upload.
    ///
    /// Every successful call must be paired with exactly one [`finish`](Self::finish).
    pub fn begin_submit(&mut self) -> Result<F, FlowError> {
        if self.status.is_in_flight() {
            return Err(FlowError::AlreadyInFlight);
        }

        let Some(file) = self.selected_file.clone() else {
            let err = FlowError::NoFileSelected;
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.status = SubmissionStatus::InFlight;
        self.error = None;
        self.results = None;
        log::debug!("Submitting {} for classification", file.name());
        Ok(file)
    }

    pub fn finish(&mut self, outcome: Result<PredictionResult, ClassifyError>) {
        if !self.status.is_in_flight() {
            log::warn!("Ignoring classification outcome, nothing in flight");
            return;
        }

        match outcome {
            Ok(results) => {
                log::info!("Received {} predictions", results.len());
                self.results = Some(results);
                self.status = SubmissionStatus::Succeeded;
            }
            Err(err) => {
                log::warn!("Classification failed: {}", err);
                self.error = Some(err.to_string());
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    /// Runs one full submission against `service`: a single request, then
    /// finalization to `Succeeded` or `Failed`.
    pub async fn submit<S>(&mut self, service: &S) -> Result<(), FlowError>
    where
        S: ClassificationService<F> + ?Sized,
    {
        let file = self.begin_submit()?;
        let outcome = service.classify(&file).await;
        self.finish(outcome);
        Ok(())
    }

    /// Back to the empty form. The submission status is left untouched.
    pub fn clear(&mut self) {
        self.preview = None;
        self.selected_file = None;
        self.error = None;
        self.results = None;
    }
}

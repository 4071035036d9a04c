mod state;
mod ui;

pub use state::{GeneratorForm, Tab};

use crate::config::{self, DashboardConfig};
use crate::pipeline::{
    assessment_stage, document_stages, mime_type_for, Assessment, AssessmentStatus, Clock,
    DocumentStatus, StageScheduler, StagedStore, SystemClock, UploadedDocument,
};
use crate::theme;
use crate::toast::Toasts;
use chrono::Local;
use eframe::{egui, App, CreationContext};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct DashboardApp {
    config: DashboardConfig,
    config_path: PathBuf,
    clock: Box<dyn Clock>,
    pub(crate) active_tab: Tab,
    pub(crate) documents: StagedStore<UploadedDocument>,
    pub(crate) assessments: StagedStore<Assessment>,
    document_schedule: StageScheduler<DocumentStatus>,
    assessment_schedule: StageScheduler<AssessmentStatus>,
    pub(crate) form: GeneratorForm,
    pub(crate) is_generating: bool,
    pub(crate) toasts: Toasts,
}

impl DashboardApp {
    pub fn new(cc: &CreationContext<'_>, config: DashboardConfig, config_path: PathBuf) -> Self {
        theme::apply(config.theme, &cc.egui_ctx);
        info!("dashboard ready");
        Self::with_config(config, config_path)
    }

    fn with_config(config: DashboardConfig, config_path: PathBuf) -> Self {
        let active_tab = Tab::from_key(&config.default_tab).unwrap_or(Tab::Overview);

        Self {
            config,
            config_path,
            clock: Box::new(SystemClock),
            active_tab,
            documents: StagedStore::new(),
            assessments: StagedStore::new(),
            document_schedule: StageScheduler::new(),
            assessment_schedule: StageScheduler::new(),
            form: GeneratorForm::default(),
            is_generating: false,
            toasts: Toasts::new(),
        }
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Shared entry point for the drop surface and the file picker. Files
    /// with unsupported extensions are ignored.
    pub(crate) fn ingest_paths(&mut self, paths: &[PathBuf]) {
        let now = self.clock.now();
        for path in paths {
            let Some(mime_type) = mime_type_for(path) else {
                debug!(path = %path.display(), "skipping unsupported file");
                continue;
            };
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let size = file_size(path);
            self.ingest_document(name, size, mime_type, now);
        }
    }

    fn ingest_document(&mut self, name: String, size: u64, mime_type: &str, now: Instant) {
        let document = UploadedDocument::new(name, size, mime_type);
        info!(name = %document.name, size = document.size, "document queued");
        for transition in document_stages(&document, now) {
            self.document_schedule.schedule(transition);
        }
        self.documents.append(document);
    }

    /// Validates the form; an incomplete submission warns and leaves the
    /// store untouched.
    pub(crate) fn generate_assessment(&mut self) {
        let now = self.clock.now();
        let Some(request) = self.form.submission() else {
            warn!("assessment form incomplete");
            self.toasts.warning(
                now,
                "Missing Information",
                "Please fill in all fields to generate an assessment.",
            );
            return;
        };

        let assessment = Assessment::new(&request, Local::now());
        info!(title = %assessment.title, "assessment queued");
        self.assessment_schedule
            .schedule(assessment_stage(&assessment.id, &request.topic, now));
        self.assessments.prepend(assessment);
        self.is_generating = true;
        self.form.clear();
    }

    /// The one user-driven transition: starting a ready assessment marks it
    /// completed. Anything not yet ready is left alone.
    pub(crate) fn start_assessment(&mut self, id: &str) {
        let ready = self
            .assessments
            .get(id)
            .map_or(false, |assessment| {
                assessment.status == AssessmentStatus::Ready
            });
        if ready && self.assessments.advance(id, AssessmentStatus::Completed) {
            info!(assessment_id = id, "assessment started");
        }
    }

    /// Applies every due transition, surfaces completion notices and asks for
    /// a repaint at the next deadline so stages fire without user input.
    fn apply_due_transitions(&mut self, ctx: &egui::Context) {
        let now = self.clock.now();
        let mut mutated = false;

        for transition in self.document_schedule.drain_due(now) {
            if self.documents.advance(&transition.item_id, transition.status) {
                mutated = true;
                debug!(
                    id = %transition.item_id,
                    status = transition.status.label(),
                    "document advanced"
                );
                if let Some(notice) = transition.notice {
                    self.toasts.success(now, notice.title, notice.body);
                }
            }
        }

        for transition in self.assessment_schedule.drain_due(now) {
            if transition.status == AssessmentStatus::Ready {
                self.is_generating = false;
            }
            if self
                .assessments
                .advance(&transition.item_id, transition.status)
            {
                mutated = true;
                debug!(
                    id = %transition.item_id,
                    status = transition.status.label(),
                    "assessment advanced"
                );
                if let Some(notice) = transition.notice {
                    self.toasts.success(now, notice.title, notice.body);
                }
            }
        }

        let had_toasts = !self.toasts.is_empty();
        self.toasts.prune(now);
        if mutated || (had_toasts && self.toasts.is_empty()) {
            ctx.request_repaint();
        }

        let next_wake = [
            self.document_schedule.next_deadline(),
            self.assessment_schedule.next_deadline(),
            self.toasts.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(deadline) = next_wake {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

impl App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_due_transitions(ctx);
        self.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.default_tab = self.active_tab.key().to_string();
        if let Err(e) = config::save(&self.config, &self.config_path) {
            warn!("could not save config: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{AssessmentKind, Difficulty};
    use crate::toast::ToastKind;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Virtual clock shared between the test and the app; advancing it is the
    /// only way time moves.
    #[derive(Clone)]
    struct SharedClock(Rc<Cell<Instant>>);

    impl SharedClock {
        fn start() -> Self {
            Self(Rc::new(Cell::new(Instant::now())))
        }

        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for SharedClock {
        fn now(&self) -> Instant {
            self.0.get()
        }
    }

    fn test_app(clock: &SharedClock) -> DashboardApp {
        let mut app =
            DashboardApp::with_config(DashboardConfig::default(), PathBuf::from("test.json"));
        app.clock = Box::new(clock.clone());
        app
    }

    fn fill_form(app: &mut DashboardApp, topic: &str) {
        app.form.topic = topic.to_string();
        app.form.kind = Some(AssessmentKind::MultipleChoice);
        app.form.difficulty = Some(Difficulty::Hard);
        app.form.question_count = Some(10);
    }

    #[test]
    fn valid_submission_appends_one_generating_assessment_and_resets_the_form() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        fill_form(&mut app, "Linear Algebra");

        app.generate_assessment();

        assert_eq!(app.assessments.len(), 1);
        let assessment = app.assessments.iter().next().unwrap();
        assert_eq!(assessment.title, "Linear Algebra Assessment");
        assert_eq!(assessment.status, AssessmentStatus::Generating);
        assert!(app.is_generating);
        assert!(app.form.topic.is_empty());
        assert!(app.form.kind.is_none());
    }

    #[test]
    fn incomplete_submission_warns_and_leaves_the_store_alone() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        fill_form(&mut app, "Graph Theory");
        app.form.difficulty = None;

        app.generate_assessment();

        assert!(app.assessments.is_empty());
        assert!(!app.is_generating);
        let toasts = app.toasts.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Warning);
        assert_eq!(toasts[0].title, "Missing Information");
        assert_eq!(
            toasts[0].description,
            "Please fill in all fields to generate an assessment."
        );
    }

    #[test]
    fn generation_scenario_reaches_ready_after_three_seconds() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        let ctx = egui::Context::default();
        fill_form(&mut app, "Linear Algebra");

        app.generate_assessment();
        let id = app.assessments.iter().next().unwrap().id.clone();

        clock.advance(Duration::from_secs(1));
        app.apply_due_transitions(&ctx);
        assert_eq!(
            app.assessments.get(&id).unwrap().status,
            AssessmentStatus::Generating
        );
        assert!(app.toasts.is_empty());

        clock.advance(Duration::from_secs(2));
        app.apply_due_transitions(&ctx);
        assert_eq!(
            app.assessments.get(&id).unwrap().status,
            AssessmentStatus::Ready
        );
        assert!(!app.is_generating);
        let toasts = app.toasts.active();
        assert_eq!(toasts[0].title, "Assessment Generated");
        assert_eq!(
            toasts[0].description,
            "Your Linear Algebra assessment is ready to use!"
        );

        // Late polls never revert a terminal status.
        clock.advance(Duration::from_secs(10));
        app.apply_due_transitions(&ctx);
        assert_eq!(
            app.assessments.get(&id).unwrap().status,
            AssessmentStatus::Ready
        );
    }

    #[test]
    fn new_assessments_are_listed_newest_first() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);

        fill_form(&mut app, "Calculus");
        app.generate_assessment();
        fill_form(&mut app, "Statistics");
        app.generate_assessment();

        let titles: Vec<&str> = app.assessments.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["Statistics Assessment", "Calculus Assessment"]);

        let ids: Vec<&str> = app.assessments.iter().map(|a| a.id.as_str()).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn documents_walk_the_three_second_pipeline() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        let ctx = egui::Context::default();
        let now = clock.now();

        app.ingest_document("notes.pdf".to_string(), 1536, "application/pdf", now);
        app.ingest_document("essay.docx".to_string(), 2048, "application/msword", now);
        assert_eq!(app.documents.len(), 2);
        assert!(app
            .documents
            .iter()
            .all(|d| d.status == DocumentStatus::Uploading));

        clock.advance(Duration::from_secs(1));
        app.apply_due_transitions(&ctx);
        assert!(app
            .documents
            .iter()
            .all(|d| d.status == DocumentStatus::Processing));
        assert!(app.toasts.is_empty());

        clock.advance(Duration::from_secs(2));
        app.apply_due_transitions(&ctx);
        assert!(app
            .documents
            .iter()
            .all(|d| d.status == DocumentStatus::Completed));
        let toasts = app.toasts.active();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].title, "Document Processed");
        assert_eq!(
            toasts[0].description,
            "notes.pdf has been processed and is ready for analysis."
        );
    }

    #[test]
    fn starting_a_ready_assessment_marks_it_completed() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        let ctx = egui::Context::default();
        fill_form(&mut app, "Topology");
        app.generate_assessment();
        let id = app.assessments.iter().next().unwrap().id.clone();

        // Not ready yet; starting is a no-op.
        app.start_assessment(&id);
        assert_eq!(
            app.assessments.get(&id).unwrap().status,
            AssessmentStatus::Generating
        );

        clock.advance(Duration::from_secs(3));
        app.apply_due_transitions(&ctx);
        app.start_assessment(&id);
        assert_eq!(
            app.assessments.get(&id).unwrap().status,
            AssessmentStatus::Completed
        );
    }

    #[test]
    fn completion_toasts_expire() {
        let clock = SharedClock::start();
        let mut app = test_app(&clock);
        let ctx = egui::Context::default();
        app.ingest_document(
            "slides.txt".to_string(),
            64,
            "text/plain",
            clock.now(),
        );

        clock.advance(Duration::from_secs(3));
        app.apply_due_transitions(&ctx);
        assert_eq!(app.toasts.active().len(), 1);

        clock.advance(Duration::from_secs(5));
        app.apply_due_transitions(&ctx);
        assert!(app.toasts.is_empty());
    }
}

//! Render Report use case.
//!
//! Reads one session document, parses it into a [`Session`] and hands it to
//! the renderer for the requested [`ReportFormat`]:
//!
//! 1. Check the document exists (nothing is parsed or written otherwise)
//! 2. Read the whole document through the [`SessionSource`] port
//! 3. Parse with [`SessionParser`] (never fails on content)
//! 4. Render to the output path (derived from the input unless given)

use crate::config::ReportStyle;
use crate::ports::progress::RenderProgressNotifier;
use crate::ports::report_renderer::{RenderError, ReportRenderer};
use crate::ports::session_source::{SessionSource, SourceError};
use council_domain::{ReportFormat, Session, SessionParser};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while producing a report.
#[derive(Error, Debug)]
pub enum RenderReportError {
    #[error("Session file not found: {}", .0.display())]
    SessionNotFound(PathBuf),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("No renderer registered for format '{0}'")]
    UnsupportedFormat(ReportFormat),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl RenderReportError {
    /// Check if the input document was missing
    pub fn is_not_found(&self) -> bool {
        match self {
            RenderReportError::SessionNotFound(_) => true,
            RenderReportError::Source(source) => source.is_not_found(),
            _ => false,
        }
    }
}

/// Input for the [`RenderReportUseCase`].
#[derive(Debug, Clone)]
pub struct RenderReportInput {
    /// Path of the session document
    pub session_path: PathBuf,
    /// Requested output format
    pub format: ReportFormat,
    /// Explicit output path (defaults to the input path with a new extension)
    pub output: Option<PathBuf>,
}

impl RenderReportInput {
    pub fn new(session_path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            session_path: session_path.into(),
            format,
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Where the report will be written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.session_path, self.format))
    }
}

/// Output of the [`RenderReportUseCase`].
#[derive(Debug, Clone)]
pub struct RenderReportOutput {
    /// The parsed session
    pub session: Session,
    /// Path of the written report
    pub output_path: PathBuf,
}

/// Same stem as the input, extension replaced by the format's.
pub fn default_output_path(session_path: &Path, format: ReportFormat) -> PathBuf {
    session_path.with_extension(format.extension())
}

/// Use case for rendering a session document into a report.
pub struct RenderReportUseCase {
    source: Arc<dyn SessionSource>,
    renderers: Vec<Arc<dyn ReportRenderer>>,
    parser: SessionParser,
    style: ReportStyle,
}

impl RenderReportUseCase {
    pub fn new(source: Arc<dyn SessionSource>, style: ReportStyle) -> Self {
        let parser = SessionParser::with_labels(&style.labels);
        Self {
            source,
            renderers: Vec::new(),
            parser,
            style,
        }
    }

    /// Register a renderer; a later renderer for the same format wins.
    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderers.retain(|r| r.format() != renderer.format());
        self.renderers.push(renderer);
        self
    }

    /// Read and parse a session; the caller has already checked it exists.
    fn read_session(&self, session_path: &Path) -> Result<Session, RenderReportError> {
        let content = self.source.read(session_path)?;
        let session = self.parser.parse(&content);
        debug!(
            "Parsed {} bytes: {} rounds, consensus {}",
            content.len(),
            session.round_count(),
            session.consensus
        );
        Ok(session)
    }

    /// Execute the use case with progress callbacks.
    pub fn execute(
        &self,
        input: RenderReportInput,
        progress: &dyn RenderProgressNotifier,
    ) -> Result<RenderReportOutput, RenderReportError> {
        info!(
            "Rendering {} as {}",
            input.session_path.display(),
            input.format
        );

        let renderer = self
            .renderers
            .iter()
            .find(|r| r.format() == input.format)
            .ok_or(RenderReportError::UnsupportedFormat(input.format))?;

        if !self.source.exists(&input.session_path) {
            return Err(RenderReportError::SessionNotFound(input.session_path));
        }

        progress.on_parse_start(&input.session_path);
        let session = self.read_session(&input.session_path)?;
        progress.on_parsed(&session);

        let output_path = input.output_path();
        progress.on_render_start(input.format);
        renderer.render(&session, &self.style, &output_path)?;
        progress.on_render_complete(&output_path);

        info!("Report written to {}", output_path.display());

        Ok(RenderReportOutput {
            session,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const DOC: &str = "\
# Council Session: 2025-01-15-143022
## Topic: Test topic

### Round 1
**CLAUDE:** question
**GEMINI:** answer

**Consensus Reached:** No
";

    struct InMemorySource {
        files: HashMap<PathBuf, String>,
    }

    impl InMemorySource {
        fn with(path: &str, content: &str) -> Self {
            Self {
                files: HashMap::from([(PathBuf::from(path), content.to_string())]),
            }
        }
    }

    impl SessionSource for InMemorySource {
        fn exists(&self, location: &Path) -> bool {
            self.files.contains_key(location)
        }

        fn read(&self, location: &Path) -> Result<String, SourceError> {
            self.files
                .get(location)
                .cloned()
                .ok_or_else(|| SourceError::NotFound(location.to_path_buf()))
        }
    }

    /// Records what it was asked to render.
    struct RecordingRenderer {
        format: ReportFormat,
        rendered: Mutex<Vec<(String, PathBuf)>>,
    }

    impl RecordingRenderer {
        fn new(format: ReportFormat) -> Arc<Self> {
            Arc::new(Self {
                format,
                rendered: Mutex::new(Vec::new()),
            })
        }
    }

    impl ReportRenderer for RecordingRenderer {
        fn format(&self) -> ReportFormat {
            self.format
        }

        fn render(
            &self,
            session: &Session,
            _style: &ReportStyle,
            output: &Path,
        ) -> Result<(), RenderError> {
            self.rendered
                .lock()
                .unwrap()
                .push((session.topic.clone(), output.to_path_buf()));
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn format(&self) -> ReportFormat {
            ReportFormat::Pdf
        }

        fn render(&self, _: &Session, _: &ReportStyle, _: &Path) -> Result<(), RenderError> {
            Err(RenderError::MissingDependency {
                format: ReportFormat::Pdf,
                tried: vec!["weasyprint".to_string()],
                hint: "Install WeasyPrint.".to_string(),
            })
        }
    }

    fn use_case(renderer: Arc<dyn ReportRenderer>) -> RenderReportUseCase {
        RenderReportUseCase::new(
            Arc::new(InMemorySource::with("sessions/council.md", DOC)),
            ReportStyle::default(),
        )
        .with_renderer(renderer)
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("sessions/council.md"), ReportFormat::Svg),
            PathBuf::from("sessions/council.svg")
        );
        assert_eq!(
            default_output_path(Path::new("notes"), ReportFormat::Html),
            PathBuf::from("notes.html")
        );
    }

    #[test]
    fn test_render_to_derived_path() {
        let renderer = RecordingRenderer::new(ReportFormat::Html);
        let output = use_case(renderer.clone())
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Html),
                &NoProgress,
            )
            .unwrap();

        assert_eq!(output.output_path, PathBuf::from("sessions/council.html"));
        assert_eq!(output.session.topic, "Test topic");
        assert_eq!(output.session.rounds.len(), 1);
        assert_eq!(
            *renderer.rendered.lock().unwrap(),
            vec![(
                "Test topic".to_string(),
                PathBuf::from("sessions/council.html")
            )]
        );
    }

    #[test]
    fn test_render_to_explicit_output() {
        let renderer = RecordingRenderer::new(ReportFormat::Svg);
        let output = use_case(renderer)
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Svg)
                    .with_output("out/report.svg"),
                &NoProgress,
            )
            .unwrap();
        assert_eq!(output.output_path, PathBuf::from("out/report.svg"));
    }

    #[test]
    fn test_missing_session_renders_nothing() {
        let renderer = RecordingRenderer::new(ReportFormat::Html);
        let error = use_case(renderer.clone())
            .execute(
                RenderReportInput::new("sessions/missing.md", ReportFormat::Html),
                &NoProgress,
            )
            .unwrap_err();

        assert!(error.is_not_found());
        assert!(renderer.rendered.lock().unwrap().is_empty());
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RenderProgressNotifier for RecordingProgress {
        fn on_parse_start(&self, _: &Path) {
            self.events.lock().unwrap().push("parse".to_string());
        }

        fn on_parsed(&self, session: &Session) {
            self.events
                .lock()
                .unwrap()
                .push(format!("parsed {}", session.rounds.len()));
        }

        fn on_render_start(&self, format: ReportFormat) {
            self.events.lock().unwrap().push(format!("render {format}"));
        }

        fn on_render_complete(&self, _: &Path) {
            self.events.lock().unwrap().push("done".to_string());
        }
    }

    #[test]
    fn test_progress_events_in_order() {
        let progress = RecordingProgress::default();
        use_case(RecordingRenderer::new(ReportFormat::Svg))
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Svg),
                &progress,
            )
            .unwrap();
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["parse", "parsed 1", "render svg", "done"]
        );
    }

    #[test]
    fn test_missing_session_reports_no_progress() {
        let progress = RecordingProgress::default();
        let error = use_case(RecordingRenderer::new(ReportFormat::Svg))
            .execute(
                RenderReportInput::new("sessions/missing.md", ReportFormat::Svg),
                &progress,
            )
            .unwrap_err();
        assert!(matches!(error, RenderReportError::SessionNotFound(_)));
        assert!(progress.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_format() {
        let renderer = RecordingRenderer::new(ReportFormat::Html);
        let error = use_case(renderer)
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Png),
                &NoProgress,
            )
            .unwrap_err();
        assert!(matches!(
            error,
            RenderReportError::UnsupportedFormat(ReportFormat::Png)
        ));
    }

    #[test]
    fn test_render_error_propagates() {
        let error = use_case(Arc::new(FailingRenderer))
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Pdf),
                &NoProgress,
            )
            .unwrap_err();
        assert!(matches!(
            error,
            RenderReportError::Render(RenderError::MissingDependency { .. })
        ));
    }

    #[test]
    fn test_later_renderer_replaces_earlier() {
        let first = RecordingRenderer::new(ReportFormat::Html);
        let second = RecordingRenderer::new(ReportFormat::Html);
        use_case(first.clone())
            .with_renderer(second.clone())
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Html),
                &NoProgress,
            )
            .unwrap();
        assert!(first.rendered.lock().unwrap().is_empty());
        assert_eq!(second.rendered.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_read_session_uses_configured_labels() {
        let labels = council_domain::TurnLabels::new(
            council_domain::Speaker::new("CHAIR", "Chair"),
            council_domain::Speaker::new("MEMBER", "Member"),
        );
        let source = InMemorySource::with("s.md", "### Round 7\n**CHAIR:** a\n**MEMBER:** b");
        let use_case = RenderReportUseCase::new(
            Arc::new(source),
            ReportStyle::default().with_labels(labels),
        );
        let session = use_case.read_session(Path::new("s.md")).unwrap();
        assert_eq!(session.rounds[0].number, 7);
    }

    /// Counts existence checks against an in-memory document.
    struct CountingSource {
        inner: InMemorySource,
        checks: Mutex<usize>,
    }

    impl SessionSource for CountingSource {
        fn exists(&self, location: &Path) -> bool {
            *self.checks.lock().unwrap() += 1;
            self.inner.exists(location)
        }

        fn read(&self, location: &Path) -> Result<String, SourceError> {
            self.inner.read(location)
        }
    }

    #[test]
    fn test_existence_checked_once_per_run() {
        let source = Arc::new(CountingSource {
            inner: InMemorySource::with("sessions/council.md", DOC),
            checks: Mutex::new(0),
        });
        RenderReportUseCase::new(source.clone(), ReportStyle::default())
            .with_renderer(RecordingRenderer::new(ReportFormat::Html))
            .execute(
                RenderReportInput::new("sessions/council.md", ReportFormat::Html),
                &NoProgress,
            )
            .unwrap();
        assert_eq!(*source.checks.lock().unwrap(), 1);
    }
}

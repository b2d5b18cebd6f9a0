//! HTML report renderer
//!
//! The page is a minijinja template with HTML auto-escaping; every value the
//! session contributes is escaped. Turn texts pass through the
//! `format_response` filter, bound to the style's character limit.

use council_application::{RenderError, ReportRenderer, ReportStyle};
use council_domain::{Consensus, Palette, ReportFormat, Round, Session, Speaker, format_response};
use minijinja::{Environment, context};
use serde::Serialize;
use std::path::Path;

const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("templates/report.html");

/// Heading shown at the top of every report
pub const REPORT_TITLE: &str = "AI Council Session";

/// Length of the fingerprint prefix shown in the footer
const FINGERPRINT_CHARS: usize = 12;

#[derive(Debug, Serialize)]
struct SpeakerView {
    name: String,
    icon: String,
}

impl From<&Speaker> for SpeakerView {
    fn from(speaker: &Speaker) -> Self {
        Self {
            name: speaker.display_name.clone(),
            icon: speaker.icon(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RoundView<'a> {
    number: u32,
    first_text: &'a str,
    prose: &'a str,
    key_points: &'a [String],
    action_items: &'a [String],
    has_lists: bool,
    status: Option<&'a str>,
    status_class: Option<String>,
    confidence_percent: Option<i64>,
}

impl<'a> From<&'a Round> for RoundView<'a> {
    fn from(round: &'a Round) -> Self {
        let reply = &round.reply;
        Self {
            number: round.number,
            first_text: &round.first_turn,
            prose: &reply.prose,
            key_points: &reply.key_points,
            action_items: &reply.action_items,
            has_lists: reply.has_lists(),
            status: reply.status.as_ref().map(|s| s.as_str()),
            status_class: reply.status.as_ref().map(|s| s.as_str().to_lowercase()),
            confidence_percent: reply.confidence_percent(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    title: &'static str,
    topic: &'a str,
    date: String,
    stance: &'a str,
    rounds: Vec<RoundView<'a>>,
    consensus: Consensus,
    agreed_position: Option<&'a str>,
    action_items: &'a [String],
    fingerprint: String,
}

impl<'a> From<&'a Session> for ReportView<'a> {
    fn from(session: &'a Session) -> Self {
        let mut fingerprint = session.fingerprint();
        fingerprint.truncate(FINGERPRINT_CHARS);
        Self {
            title: REPORT_TITLE,
            topic: &session.topic,
            date: session.display_date(),
            stance: &session.stance,
            rounds: session.rounds.iter().map(RoundView::from).collect(),
            consensus: session.consensus,
            agreed_position: session.agreed_position.as_deref(),
            action_items: &session.action_items,
            fingerprint,
        }
    }
}

/// Renders a session as a standalone HTML page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the page to a string.
    pub fn render_html(
        &self,
        session: &Session,
        style: &ReportStyle,
    ) -> Result<String, RenderError> {
        let env = Self::environment(style.max_response_chars)?;
        let template = env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        let colors: &Palette = &style.palette;
        template
            .render(context! {
                report => ReportView::from(session),
                colors => colors,
                first => SpeakerView::from(&style.labels.first),
                second => SpeakerView::from(&style.labels.second),
            })
            .map_err(|e| RenderError::Template(e.to_string()))
    }

    fn environment(max_chars: usize) -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();
        env.add_filter("format_response", move |text: String| {
            format_response(&text, max_chars)
        });
        env.add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        Ok(env)
    }
}

impl ReportRenderer for HtmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(
        &self,
        session: &Session,
        style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError> {
        let html = self.render_html(session, style)?;
        std::fs::write(output, html).map_err(|e| RenderError::io(output, e))
    }
}

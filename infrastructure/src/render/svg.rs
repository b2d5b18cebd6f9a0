//! SVG report renderer
//!
//! A compact overview: header block, two fixed-height cards per round and a
//! consensus box. Every block has a fixed height, so the document height is
//! known before drawing:
//!
//! ```text
//! height = HEADER (100) + ROUND (280) x rounds + CONSENSUS (150) + 2 x PADDING (40)
//! ```

use super::html::REPORT_TITLE;
use council_application::{RenderError, ReportRenderer, ReportStyle};
use council_domain::{ReportFormat, Session, Speaker, first_line, format_response, preview};
use std::path::Path;

pub const WIDTH: u64 = 800;
pub const PADDING: u64 = 40;
const CONTENT_WIDTH: u64 = WIDTH - PADDING * 2;
const HEADER_HEIGHT: u64 = 100;
const ROUND_HEIGHT: u64 = 280;
const CONSENSUS_HEIGHT: u64 = 150;
const CARD_HEIGHT: u64 = 90;

const FONT: &str = "sans-serif";

const TOPIC_PREVIEW_CHARS: usize = 65;
const TURN_PREVIEW_CHARS: usize = 85;
const TURN_FORMAT_CHARS: usize = 120;
const POSITION_PREVIEW_CHARS: usize = 100;

/// Document height for a session with `rounds` rounds.
///
/// Saturates instead of wrapping for absurd round counts.
pub fn document_height(rounds: usize) -> u64 {
    u64::try_from(rounds)
        .ok()
        .and_then(|rounds| rounds.checked_mul(ROUND_HEIGHT))
        .unwrap_or(u64::MAX)
        .saturating_add(HEADER_HEIGHT + CONSENSUS_HEIGHT + PADDING * 2)
}

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whitespace runs (including newlines) collapsed to single spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Default)]
struct Rect<'a> {
    x: u64,
    y: u64,
    width: u64,
    height: u64,
    radius: u64,
    fill: &'a str,
    stroke: Option<&'a str>,
}

struct Text<'a> {
    x: u64,
    y: u64,
    size: u64,
    weight: Option<u32>,
    fill: &'a str,
    opacity: Option<f32>,
}

impl<'a> Text<'a> {
    fn new(x: u64, y: u64, size: u64, fill: &'a str) -> Self {
        Self {
            x,
            y,
            size,
            weight: None,
            fill,
            opacity: None,
        }
    }

    fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Appends SVG elements to a string buffer.
struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    fn new(width: u64, height: u64) -> Self {
        let mut buf = String::new();
        buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        buf.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
             width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
        ));
        Self { buf }
    }

    fn rect(&mut self, rect: Rect<'_>) {
        self.buf.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
            rect.x, rect.y, rect.width, rect.height
        ));
        if rect.radius > 0 {
            self.buf
                .push_str(&format!(" rx=\"{0}\" ry=\"{0}\"", rect.radius));
        }
        self.buf
            .push_str(&format!(" fill=\"{}\"", escape_xml(rect.fill)));
        if let Some(stroke) = rect.stroke {
            self.buf.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"1\"",
                escape_xml(stroke)
            ));
        }
        self.buf.push_str("/>\n");
    }

    fn text(&mut self, style: Text<'_>, content: &str) {
        self.buf.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"{}px\" font-family=\"{}\"",
            style.x,
            style.y,
            escape_xml(style.fill),
            style.size,
            FONT
        ));
        if let Some(weight) = style.weight {
            self.buf.push_str(&format!(" font-weight=\"{weight}\""));
        }
        if let Some(opacity) = style.opacity {
            self.buf.push_str(&format!(" opacity=\"{opacity}\""));
        }
        self.buf
            .push_str(&format!(">{}</text>\n", escape_xml(content)));
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</svg>\n");
        self.buf
    }
}

/// Renders a session as an SVG overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the drawing to a string.
    pub fn render_svg(&self, session: &Session, style: &ReportStyle) -> String {
        let colors = &style.palette;
        let height = document_height(session.rounds.len());
        let mut svg = SvgWriter::new(WIDTH, height);

        svg.rect(Rect {
            width: WIDTH,
            height,
            fill: &colors.page_bg,
            ..Default::default()
        });

        let mut y = PADDING;

        // Header
        svg.rect(Rect {
            x: PADDING,
            y,
            width: CONTENT_WIDTH,
            height: 80,
            radius: 8,
            fill: &colors.header_bg,
            ..Default::default()
        });
        svg.text(
            Text::new(PADDING + 20, y + 28, 16, &colors.header_text).weight(600),
            REPORT_TITLE,
        );
        svg.text(
            Text::new(PADDING + 20, y + 48, 11, &colors.header_text).opacity(0.85),
            &preview(&single_line(&session.topic), TOPIC_PREVIEW_CHARS),
        );
        let meta = format!(
            "{}  |  Stance: {}  |  {} Rounds",
            session.display_date(),
            session.stance,
            session.round_count()
        );
        svg.text(
            Text::new(PADDING + 20, y + 68, 10, &colors.header_text).opacity(0.6),
            &meta,
        );
        y += HEADER_HEIGHT;

        for round in &session.rounds {
            svg.text(
                Text::new(PADDING, y + 12, 10, &colors.text_muted).weight(600),
                &format!("ROUND {}", round.number),
            );
            y += 24;

            let first_preview = preview(
                first_line(&format_response(&round.first_turn, TURN_FORMAT_CHARS)),
                TURN_PREVIEW_CHARS,
            );
            self.card(
                &mut svg,
                y,
                style,
                &style.labels.first,
                &colors.first_accent,
                &first_preview,
            );

            let reply = &round.reply;
            let prose = if reply.prose.is_empty() {
                "(Structured response)".to_string()
            } else {
                single_line(&reply.prose)
            };
            y += 100;
            self.card(
                &mut svg,
                y,
                style,
                &style.labels.second,
                &colors.second_accent,
                &preview(&prose, TURN_PREVIEW_CHARS),
            );

            if let Some(status) = &reply.status {
                let (bg, fg) = colors.status_colors(status);
                svg.rect(Rect {
                    x: PADDING + 14,
                    y: y + 64,
                    width: 70,
                    height: 18,
                    radius: 3,
                    fill: bg,
                    ..Default::default()
                });
                svg.text(
                    Text::new(PADDING + 22, y + 76, 9, fg).weight(600),
                    status.as_str(),
                );
            }
            y += 100;
        }

        if session.consensus.is_known() {
            svg.rect(Rect {
                x: PADDING,
                y,
                width: CONTENT_WIDTH,
                height: 80,
                radius: 6,
                fill: &colors.consensus_bg,
                stroke: Some(&colors.consensus_border),
            });
            let title = if session.consensus.is_reached() {
                "Consensus Reached"
            } else {
                "No Consensus"
            };
            svg.text(
                Text::new(PADDING + 20, y + 28, 13, &colors.text_primary).weight(600),
                title,
            );
            if let Some(position) = session.agreed_position.as_deref().filter(|p| !p.is_empty()) {
                svg.text(
                    Text::new(PADDING + 20, y + 52, 10, &colors.text_secondary),
                    &preview(&single_line(position), POSITION_PREVIEW_CHARS),
                );
            }
        }

        svg.finish()
    }

    /// A participant card: border, accent stripe, icon, name and one line of text.
    fn card(
        &self,
        svg: &mut SvgWriter,
        y: u64,
        style: &ReportStyle,
        speaker: &Speaker,
        accent: &str,
        line: &str,
    ) {
        let colors = &style.palette;
        svg.rect(Rect {
            x: PADDING,
            y,
            width: CONTENT_WIDTH,
            height: CARD_HEIGHT,
            radius: 6,
            fill: &colors.card_bg,
            stroke: Some(&colors.border_light),
        });
        svg.rect(Rect {
            x: PADDING,
            y,
            width: 3,
            height: CARD_HEIGHT,
            fill: accent,
            ..Default::default()
        });
        svg.rect(Rect {
            x: PADDING + 14,
            y: y + 12,
            width: 20,
            height: 20,
            radius: 3,
            fill: accent,
            ..Default::default()
        });
        svg.text(
            Text::new(PADDING + 20, y + 26, 11, "white").weight(700),
            &speaker.icon(),
        );
        svg.text(
            Text::new(PADDING + 42, y + 26, 12, &colors.text_primary).weight(600),
            &speaker.display_name,
        );
        svg.text(
            Text::new(PADDING + 14, y + 52, 10, &colors.text_secondary),
            line,
        );
    }
}

impl ReportRenderer for SvgRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Svg
    }

    fn render(
        &self,
        session: &Session,
        style: &ReportStyle,
        output: &Path,
    ) -> Result<(), RenderError> {
        let svg = self.render_svg(session, style);
        std::fs::write(output, svg).map_err(|e| RenderError::io(output, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{Consensus, ReplyStatus, Round, SessionParser, StructuredReply};

    fn round(number: u32, first: &str, reply: StructuredReply) -> Round {
        Round {
            number,
            first_turn: first.to_string(),
            second_turn: reply.prose.clone(),
            reply,
        }
    }

    fn render(session: &Session) -> String {
        SvgRenderer::new().render_svg(session, &ReportStyle::default())
    }

    #[test]
    fn test_document_height() {
        assert_eq!(document_height(0), 330);
        assert_eq!(document_height(3), 100 + 840 + 150 + 80);
        // Past the u32 range the height keeps growing instead of wrapping.
        assert_eq!(document_height(20_000_000), 5_600_000_330);
        assert_eq!(document_height(usize::MAX), u64::MAX);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_session_has_header_only() {
        let svg = render(&Session::default());
        assert!(svg.contains("width=\"800\" height=\"330\""));
        assert!(svg.contains(">AI Council Session</text>"));
        assert!(!svg.contains("ROUND"));
        assert!(!svg.contains("Consensus"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_round_cards() {
        let session = Session {
            stance: "neutral".to_string(),
            rounds: vec![
                round(1, "Why?\nBecause.", StructuredReply::prose_only("Fine by me.")),
                round(
                    4,
                    "Next",
                    StructuredReply {
                        status: Some(ReplyStatus::Deadlock),
                        ..Default::default()
                    },
                ),
            ],
            ..Default::default()
        };
        let svg = render(&session);

        assert!(svg.contains(&format!("height=\"{}\"", document_height(2))));
        assert!(svg.contains(">ROUND 1</text>"));
        assert!(svg.contains(">ROUND 4</text>"));
        assert!(svg.contains(">Claude (Chair)</text>"));
        assert!(svg.contains(">Why?</text>"));
        assert!(svg.contains(">Fine by me.</text>"));
        assert!(svg.contains(">(Structured response)</text>"));
        assert!(svg.contains(">DEADLOCK</text>"));
        assert!(svg.contains("fill=\"#FEE2E2\""));
        assert!(svg.contains("  |  Stance: neutral  |  2 Rounds"));
    }

    #[test]
    fn test_long_text_is_previewed_and_escaped() {
        let session = Session {
            topic: format!("{} <tags>", "t".repeat(70)),
            ..Default::default()
        };
        let svg = render(&session);
        assert!(svg.contains(&format!(">{}...</text>", "t".repeat(65))));
        assert!(!svg.contains("<tags>"));
    }

    #[test]
    fn test_consensus_box() {
        let position = "p".repeat(120);
        let session = Session {
            consensus: Consensus::Reached,
            agreed_position: Some(position),
            ..Default::default()
        };
        let svg = render(&session);
        assert!(svg.contains(">Consensus Reached</text>"));
        assert!(svg.contains(&format!(">{}...</text>", "p".repeat(100))));

        let session = Session {
            consensus: Consensus::NotReached,
            ..Default::default()
        };
        assert!(render(&session).contains(">No Consensus</text>"));
    }

    #[test]
    fn test_custom_labels_and_palette() {
        let labels = council_domain::TurnLabels::new(
            council_domain::Speaker::new("CHAIR", "moderator"),
            council_domain::Speaker::new("MEMBER", "Member"),
        );
        let doc = "### Round 1\n**CHAIR:** a\n**MEMBER:** b";
        let session = SessionParser::with_labels(&labels).parse(doc);
        let mut style = ReportStyle::default().with_labels(labels);
        style.palette.first_accent = "#010203".to_string();

        let svg = SvgRenderer::new().render_svg(&session, &style);
        assert!(svg.contains(">moderator</text>"));
        assert!(svg.contains(">M</text>"));
        assert!(svg.contains("fill=\"#010203\""));
    }
}

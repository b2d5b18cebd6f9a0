//! External document converters
//!
//! PDF and PNG output is produced by command-line tools installed on the
//! user's system. Discovery mirrors how a shell would resolve them: an
//! explicitly configured command wins, otherwise the known candidates are
//! tried in order via `which`.
//!
//! | Target | Candidates (in order) | Arguments |
//! |--------|-----------------------|-----------|
//! | PDF    | `weasyprint`, `wkhtmltopdf` | `<in.html> <out.pdf>` |
//! | PNG    | `rsvg-convert`, `cairosvg`  | 2x zoom, `<in.svg>` → `<out.png>` |

use council_application::RenderError;
use council_domain::ReportFormat;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Zoom factor used when rasterizing SVG
pub const PNG_SCALE: &str = "2";

/// A known converter tool and its argument convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    WeasyPrint,
    Wkhtmltopdf,
    RsvgConvert,
    CairoSvg,
    /// Unrecognised tool called as `<command> <input> <output>`
    Generic,
}

impl ConverterKind {
    /// Kind from a command name or path (`/usr/bin/rsvg-convert` → `RsvgConvert`)
    pub fn from_command(command: &str) -> Self {
        let name = Path::new(command)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(command);
        match name {
            "weasyprint" => ConverterKind::WeasyPrint,
            "wkhtmltopdf" => ConverterKind::Wkhtmltopdf,
            "rsvg-convert" => ConverterKind::RsvgConvert,
            "cairosvg" => ConverterKind::CairoSvg,
            _ => ConverterKind::Generic,
        }
    }

    fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        match self {
            ConverterKind::WeasyPrint | ConverterKind::Generic => vec![input, output],
            ConverterKind::Wkhtmltopdf => vec!["--quiet".to_string(), input, output],
            ConverterKind::RsvgConvert => vec![
                "--zoom".to_string(),
                PNG_SCALE.to_string(),
                "--format".to_string(),
                "png".to_string(),
                "--output".to_string(),
                output,
                input,
            ],
            ConverterKind::CairoSvg => vec![
                input,
                "--scale".to_string(),
                PNG_SCALE.to_string(),
                "--output".to_string(),
                output,
            ],
        }
    }
}

/// Which converters to look for and how to explain their absence.
#[derive(Debug, Clone)]
pub struct ConverterSpec {
    pub format: ReportFormat,
    pub candidates: &'static [&'static str],
    pub hint: &'static str,
}

/// HTML to PDF
pub const PDF_CONVERTERS: ConverterSpec = ConverterSpec {
    format: ReportFormat::Pdf,
    candidates: &["weasyprint", "wkhtmltopdf"],
    hint: "Install WeasyPrint (pip install weasyprint) or wkhtmltopdf, or use --format html.",
};

/// SVG to PNG
pub const PNG_CONVERTERS: ConverterSpec = ConverterSpec {
    format: ReportFormat::Png,
    candidates: &["rsvg-convert", "cairosvg"],
    hint: "Install librsvg (rsvg-convert) or CairoSVG (pip install cairosvg), or use --format svg.",
};

/// A resolved converter executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub program: PathBuf,
    pub kind: ConverterKind,
}

impl Converter {
    /// Locate a converter: `configured` if given, else the first installed
    /// candidate.
    pub fn discover(spec: &ConverterSpec, configured: Option<&str>) -> Result<Self, RenderError> {
        let tried: Vec<&str> = match configured {
            Some(command) => vec![command],
            None => spec.candidates.to_vec(),
        };

        for command in &tried {
            if let Ok(program) = which::which(command) {
                debug!("Using {} converter {}", spec.format, program.display());
                return Ok(Self {
                    program,
                    kind: ConverterKind::from_command(command),
                });
            }
        }

        Err(RenderError::MissingDependency {
            format: spec.format,
            tried: tried.iter().map(|s| s.to_string()).collect(),
            hint: spec.hint.to_string(),
        })
    }

    /// Convert `input` into `output`, waiting for the tool to finish.
    pub fn run(&self, input: &Path, output: &Path) -> Result<(), RenderError> {
        let args = self.kind.args(input, output);
        let command = self.program.display().to_string();
        debug!("Running {} {}", command, args.join(" "));

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RenderError::ConverterFailed {
                command: command.clone(),
                status: "not started".to_string(),
                stderr: e.to_string(),
            })?;

        if !result.status.success() {
            return Err(RenderError::ConverterFailed {
                command,
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_command() {
        assert_eq!(
            ConverterKind::from_command("weasyprint"),
            ConverterKind::WeasyPrint
        );
        assert_eq!(
            ConverterKind::from_command("/usr/local/bin/rsvg-convert"),
            ConverterKind::RsvgConvert
        );
        assert_eq!(
            ConverterKind::from_command("my-pdf-tool"),
            ConverterKind::Generic
        );
    }

    #[test]
    fn test_rsvg_args_zoom_twice() {
        let args = ConverterKind::RsvgConvert.args(Path::new("in.svg"), Path::new("out.png"));
        assert_eq!(
            args,
            vec!["--zoom", "2", "--format", "png", "--output", "out.png", "in.svg"]
        );
    }

    #[test]
    fn test_wkhtmltopdf_args() {
        let args = ConverterKind::Wkhtmltopdf.args(Path::new("a.html"), Path::new("a.pdf"));
        assert_eq!(args, vec!["--quiet", "a.html", "a.pdf"]);
    }

    #[test]
    fn test_configured_missing_converter() {
        let error =
            Converter::discover(&PDF_CONVERTERS, Some("definitely_not_a_converter_123xyz"))
                .unwrap_err();
        match error {
            RenderError::MissingDependency { format, tried, hint } => {
                assert_eq!(format, ReportFormat::Pdf);
                assert_eq!(tried, vec!["definitely_not_a_converter_123xyz"]);
                assert!(hint.contains("--format html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_candidates_installed() {
        let spec = ConverterSpec {
            format: ReportFormat::Png,
            candidates: &["no_such_tool_a_123xyz", "no_such_tool_b_123xyz"],
            hint: "hint",
        };
        let error = Converter::discover(&spec, None).unwrap_err();
        assert!(error.is_missing_dependency());
        assert!(error.to_string().contains("no_such_tool_a_123xyz, no_such_tool_b_123xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_converter_reports_status() {
        let converter = Converter {
            program: which::which("false").unwrap(),
            kind: ConverterKind::Generic,
        };
        let error = converter
            .run(Path::new("in.html"), Path::new("out.pdf"))
            .unwrap_err();
        assert!(matches!(error, RenderError::ConverterFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_converter() {
        let converter = Converter {
            program: which::which("true").unwrap(),
            kind: ConverterKind::Generic,
        };
        converter
            .run(Path::new("in.html"), Path::new("out.pdf"))
            .unwrap();
    }
}

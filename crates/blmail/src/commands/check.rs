use std::io::IsTerminal;
use std::io::Read as _;

use anyhow::Context;
use anyhow::Result;
use blmail_conf::DiagnosticSeverity;
use blmail_conf::DiagnosticsConfig;
use blmail_conf::Settings;
use blmail_html::HtmlPolicy;
use blmail_source::DiagnosticRenderer;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use clap::Parser;
use clap::ValueEnum;
use rayon::prelude::*;

use crate::args::Args;
use crate::commands::plural;
use crate::commands::resolve_project_root;
use crate::commands::Command;
use crate::diagnostics::collect_findings;
use crate::diagnostics::render_finding;
use crate::diagnostics::Finding;
use crate::diagnostics::JsonFinding;
use crate::exit::Exit;
use crate::report::validate_template_with;
use crate::walk::walk_templates;
use crate::walk::WalkOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Annotated source snippets
    Text,
    /// A JSON array of findings
    Json,
}

#[derive(Debug, Parser)]
pub struct Check {
    /// Templates or directories to check. If omitted, reads stdin when it is
    /// piped, otherwise walks the current directory.
    paths: Vec<Utf8PathBuf>,

    /// Report these codes or code prefixes as errors (e.g. T200,H2).
    #[arg(long, value_delimiter = ',')]
    select: Vec<String>,

    /// Ignore these codes or code prefixes (e.g. H201,H203).
    #[arg(long, value_delimiter = ',')]
    ignore: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also check hidden files and directories.
    #[arg(long)]
    hidden: bool,

    /// Don't respect `.gitignore` and `.ignore` files.
    #[arg(long)]
    no_ignore: bool,

    /// Include or (with a leading `!`) exclude files matching this glob.
    #[arg(long = "glob", short = 'g', value_name = "GLOB")]
    globs: Vec<String>,
}

impl Command for Check {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let project_root = resolve_project_root()?;
        let settings = Settings::new(&project_root, args.global.config.as_deref())
            .context("Failed to load settings")?;

        let config = build_diagnostics_config(&settings, &self.select, &self.ignore);
        let policy = HtmlPolicy::from_settings(&settings);

        let reading_stdin = !std::io::stdin().is_terminal() && self.paths.is_empty();

        if reading_stdin {
            return self.check_stdin(&config, &policy);
        }

        let files = self.discover_files(&project_root);

        if files.is_empty() {
            tracing::info!("no templates to check");
            return Ok(Exit::success());
        }

        // Validation is pure, so files are checked in parallel; rendering
        // stays on the main thread to keep output in path order.
        let results = files
            .par_iter()
            .map(|path| check_file(path, &policy))
            .collect::<Result<Vec<_>>>()?;

        let tally = self.emit(&results, &config)?;

        if tally.errors > 0 {
            let error_word = plural(tally.errors, "error", "errors");
            let file_word = plural(tally.files_with_errors, "file", "files");
            Ok(Exit::error().with_message(format!(
                "Found {} {error_word} in {} {file_word}.",
                tally.errors, tally.files_with_errors
            )))
        } else {
            Ok(self.clean_exit(&tally))
        }
    }
}

impl Check {
    fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            hidden: self.hidden,
            globs: self.globs.clone(),
            no_ignore: self.no_ignore,
        }
    }

    fn discover_files(&self, project_root: &Utf8Path) -> Vec<Utf8PathBuf> {
        let roots: Vec<Utf8PathBuf> = if self.paths.is_empty() {
            vec![project_root.to_owned()]
        } else {
            self.paths
                .iter()
                .map(|p| {
                    if p.is_relative() {
                        project_root.join(p)
                    } else {
                        p.clone()
                    }
                })
                .collect()
        };
        walk_templates(&roots, &self.walk_options())
    }

    fn check_stdin(&self, config: &DiagnosticsConfig, policy: &HtmlPolicy) -> Result<Exit> {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;

        let result = FileCheckResult::new(Utf8PathBuf::from("<stdin>"), source, policy);
        let tally = self.emit(std::slice::from_ref(&result), config)?;

        if tally.errors > 0 {
            let word = plural(tally.errors, "error", "errors");
            Ok(Exit::error().with_message(format!("Found {} {word}.", tally.errors)))
        } else {
            Ok(self.clean_exit(&tally))
        }
    }

    /// Print every finding that is not turned off and count them.
    fn emit(&self, results: &[FileCheckResult], config: &DiagnosticsConfig) -> Result<Tally> {
        let fmt = pick_renderer();
        let mut tally = Tally::default();
        let mut json = Vec::new();

        for result in results {
            let mut file_errors = 0;
            let path = result.path.as_str();
            let source = result.source.as_str();

            for finding in &result.findings {
                let severity = config.get_severity(finding.code);
                match severity {
                    DiagnosticSeverity::Off => continue,
                    DiagnosticSeverity::Error => file_errors += 1,
                    DiagnosticSeverity::Warning
                    | DiagnosticSeverity::Info
                    | DiagnosticSeverity::Hint => tally.warnings += 1,
                }

                match self.format {
                    OutputFormat::Text => {
                        if let Some(output) = render_finding(source, path, finding, config, &fmt) {
                            println!("{output}\n");
                        }
                    }
                    OutputFormat::Json => {
                        json.push(JsonFinding::new(source, path, finding, severity));
                    }
                }
            }

            if file_errors > 0 {
                tally.errors += file_errors;
                tally.files_with_errors += 1;
            }
        }

        if self.format == OutputFormat::Json {
            let output =
                serde_json::to_string_pretty(&json).context("Failed to serialize findings")?;
            println!("{output}");
        }

        Ok(tally)
    }

    fn clean_exit(&self, tally: &Tally) -> Exit {
        if tally.warnings > 0 && self.format == OutputFormat::Text {
            let word = plural(tally.warnings, "warning", "warnings");
            Exit::success().with_message(format!("Found {} {word}, no errors.", tally.warnings))
        } else {
            Exit::success()
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    errors: usize,
    warnings: usize,
    files_with_errors: usize,
}

/// Findings for one template, collected off the main thread.
struct FileCheckResult {
    path: Utf8PathBuf,
    source: String,
    findings: Vec<Finding>,
}

impl FileCheckResult {
    fn new(path: Utf8PathBuf, source: String, policy: &HtmlPolicy) -> Self {
        let report = validate_template_with(&source, policy);
        let findings = collect_findings(&source, &report);
        tracing::trace!(%path, findings = findings.len(), valid = report.valid, "checked");
        Self {
            path,
            source,
            findings,
        }
    }
}

fn check_file(path: &Utf8Path, policy: &HtmlPolicy) -> Result<FileCheckResult> {
    let source =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read `{path}`"))?;
    Ok(FileCheckResult::new(path.to_owned(), source, policy))
}

fn build_diagnostics_config(
    settings: &Settings,
    select: &[String],
    ignore: &[String],
) -> DiagnosticsConfig {
    let mut config = settings.diagnostics().clone();

    for code in select {
        config.set_severity(code, DiagnosticSeverity::Error);
    }

    for code in ignore {
        config.set_severity(code, DiagnosticSeverity::Off);
    }

    config
}

fn pick_renderer() -> DiagnosticRenderer {
    if std::io::stdout().is_terminal() {
        DiagnosticRenderer::styled()
    } else {
        DiagnosticRenderer::plain()
    }
}

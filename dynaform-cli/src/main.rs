use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use dynaform::{
    DocumentFormat, DynamicForm, FormConfig, OutputDestination, OutputOptions, UiOptions,
    emit_history, parse_document_str,
};

const DEFAULT_CONFIG_PATH: &str = "formConfig.json";
const DEFAULT_TITLE: &str = "Dynamic Form";

#[derive(Debug, Parser)]
#[command(
    name = "dynaform",
    version,
    about = "Render per-company form configurations as interactive TUIs"
)]
struct Cli {
    /// Config source: file path, inline payload, or "-" for stdin
    #[arg(short = 'c', long = "config", value_name = "SOURCE", default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Where to write the submission history on exit ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; overrides the format implied by file extensions or the config
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Submit without checking required fields and patterns
    #[arg(long = "no-validate")]
    no_validate: bool,

    /// Hide the submitted data panel
    #[arg(long = "no-history")]
    no_history: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the configured company names and exit
    #[arg(long = "list-companies")]
    list_companies: bool,
}

#[derive(Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut diagnostics = DiagnosticCollector::default();

    let config_format = resolve_format_hint(&cli.config, &mut diagnostics);
    let config = match config_format {
        Some(format) => match load_config(&cli.config, format) {
            Ok(config) => Some(config),
            Err(err) => {
                diagnostics.push_input("config", format!("{err:#}"));
                None
            }
        },
        None => None,
    };

    let (output_settings, output_paths) =
        build_output_options(&cli, config_format, &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;
    let config = config.ok_or_else(|| eyre!("no configuration loaded"))?;
    tracing::info!(companies = config.companies.len(), source = %cli.config, "configuration ready");

    if cli.list_companies {
        for name in config.company_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let options = UiOptions::default()
        .with_native_validation(!cli.no_validate)
        .with_history(!cli.no_history);
    let mut ui = DynamicForm::new(config)
        .with_title(cli.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()))
        .with_options(options);
    if let Some(output) = output_settings {
        ui = ui.with_output(output);
    }

    let history = ui.run().map_err(Report::msg)?;

    if cli.outputs.is_empty() && !history.is_empty() {
        let stdout = OutputOptions::new(cli.format.or(config_format).unwrap_or_default())
            .with_pretty(!cli.no_pretty);
        emit_history(&history, &stdout).map_err(Report::msg)?;
    }

    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // The terminal UI owns stdout, so logs only go to an explicit file.
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// `None` means the source names a format this build cannot read.
fn resolve_format_hint(source: &str, diagnostics: &mut DiagnosticCollector) -> Option<DocumentFormat> {
    if source == "-" {
        return Some(DocumentFormat::default());
    }
    match probe_format_from_extension(Path::new(source)) {
        ExtensionFormat::Known(format) => Some(format),
        ExtensionFormat::UnsupportedFeature {
            format_name,
            feature_flag,
        } => {
            diagnostics.push_input(
                "config",
                format!(
                    "config '{source}' requires {format_name} support, but this build lacks the '{feature_flag}' feature"
                ),
            );
            None
        }
        ExtensionFormat::Unknown => Some(DocumentFormat::default()),
    }
}

fn load_config(source: &str, format: DocumentFormat) -> Result<FormConfig> {
    let value = load_value(source, format)?;
    FormConfig::from_value(value).wrap_err("configuration does not match the expected structure")
}

fn load_value(source: &str, format: DocumentFormat) -> Result<serde_json::Value> {
    if source == "-" {
        let contents = read_from_source(&InputSource::Stdin)?;
        return parse_contents(&contents, format, "config");
    }

    let path = PathBuf::from(source);
    match read_from_source(&InputSource::File(path.clone())) {
        Ok(contents) => parse_contents(&contents, format, "config"),
        Err(err) => {
            if is_not_found(&err) && source != DEFAULT_CONFIG_PATH {
                return parse_contents(source, format, "inline config");
            }
            Err(err.wrap_err(format!("failed to load config from {}", path.display())))
        }
    }
}

fn read_from_source(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read from stdin")?;
            Ok(buffer)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read file {}", path.display())),
    }
}

fn is_not_found(err: &Report) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<serde_json::Value> {
    parse_document_str(contents, format).wrap_err_with(|| format!("failed to parse {label}"))
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(
    cli: &Cli,
    config_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }

    if destinations.is_empty() {
        return (None, Vec::new());
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = if let Some(explicit) = cli.format {
        explicit
    } else if file_paths.is_empty() {
        config_hint.unwrap_or_default()
    } else {
        infer_format_from_files(&file_paths, diagnostics).unwrap_or_default()
    };

    if diagnostics.len() > start {
        return (None, file_paths);
    }

    (
        Some(
            OutputOptions::new(format)
                .with_pretty(!cli.no_pretty)
                .with_destinations(destinations),
        ),
        file_paths,
    )
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        match probe_format_from_extension(path) {
            ExtensionFormat::Known(format) => {
                if let Some(existing) = detected {
                    if existing != format {
                        diagnostics.push_output(format!(
                            "output file {} uses {format} but other destinations use {existing}; align extensions",
                            path.display()
                        ));
                    }
                } else {
                    detected = Some(format);
                }
            }
            ExtensionFormat::UnsupportedFeature {
                format_name,
                feature_flag,
            } => diagnostics.push_output(format!(
                "output file {} requires {format_name} support, but this build was compiled without the '{feature_flag}' feature",
                path.display()
            )),
            ExtensionFormat::Unknown => diagnostics.push_output(format!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            )),
        }
    }
    detected
}

fn probe_format_from_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    let normalized = ext.to_string_lossy().to_ascii_lowercase();
    match normalized.as_str() {
        "json" => ExtensionFormat::Known(DocumentFormat::Json),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => ExtensionFormat::Known(DocumentFormat::Yaml),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => ExtensionFormat::UnsupportedFeature {
            format_name: "yaml",
            feature_flag: "yaml",
        },
        #[cfg(feature = "toml")]
        "toml" => ExtensionFormat::Known(DocumentFormat::Toml),
        #[cfg(not(feature = "toml"))]
        "toml" => ExtensionFormat::UnsupportedFeature {
            format_name: "toml",
            feature_flag: "toml",
        },
        _ => ExtensionFormat::Unknown,
    }
}

#[derive(Debug)]
enum ExtensionFormat {
    Known(DocumentFormat),
    #[allow(dead_code)]
    UnsupportedFeature {
        format_name: &'static str,
        feature_flag: &'static str,
    },
    Unknown,
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_falls_back_to_json() {
        let mut diagnostics = DiagnosticCollector::default();
        let format = resolve_format_hint("inline payload", &mut diagnostics);
        assert_eq!(format, Some(DocumentFormat::Json));
        assert_eq!(diagnostics.len(), 0);
    }

    #[test]
    fn output_extensions_must_agree() {
        let mut diagnostics = DiagnosticCollector::default();
        let paths = vec![PathBuf::from("a.json"), PathBuf::from("b.txt")];
        infer_format_from_files(&paths, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn explicit_format_skips_extension_inference() {
        let cli = Cli::parse_from(["dynaform", "-o", "submissions.out", "--format", "json"]);
        let mut diagnostics = DiagnosticCollector::default();
        let (options, paths) = build_output_options(&cli, None, &mut diagnostics);
        assert_eq!(diagnostics.len(), 0);
        assert_eq!(paths, vec![PathBuf::from("submissions.out")]);
        assert_eq!(options.expect("output options").format, DocumentFormat::Json);
    }

    #[test]
    fn unknown_output_extension_needs_explicit_format() {
        let cli = Cli::parse_from(["dynaform", "-o", "submissions.out"]);
        let mut diagnostics = DiagnosticCollector::default();
        let (options, _) = build_output_options(&cli, None, &mut diagnostics);
        assert!(options.is_none());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn structural_mismatch_is_reported_as_such() {
        let err = load_config(r#"{"companies":[{"fields":[]}]}"#, DocumentFormat::Json)
            .expect_err("company without a name");
        assert!(format!("{err:#}").contains("does not match the expected structure"));
    }

    #[test]
    fn inline_payload_is_accepted_when_no_file_matches() {
        let config = load_config(
            r#"{"companies":[{"name":"Solo","fields":[]}]}"#,
            DocumentFormat::Json,
        )
        .expect("inline config");
        assert_eq!(config.company_names(), vec!["Solo".to_string()]);
    }
}

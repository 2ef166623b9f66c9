use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_LOG_FILE_PATH: &str = "logs/perplexity-search.log";
const FALLBACK_LOG_FILE_NAME: &str = "perplexity-search.log";

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File,
    Both,
}

impl LogOutput {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::Both => "both",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LogSettings {
    format: LogFormat,
    output: LogOutput,
    file_path: PathBuf,
}

impl LogSettings {
    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        let format = match normalized(get_var("LOG_FORMAT")).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        let output = match normalized(get_var("LOG_OUTPUT")).as_deref() {
            Some("file") => LogOutput::File,
            Some("both") => LogOutput::Both,
            _ => LogOutput::Stderr,
        };
        let file_path = get_var("LOG_FILE_PATH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH));

        Self {
            format,
            output,
            file_path,
        }
    }
}

fn normalized(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_ascii_lowercase())
}

/// Keeps the background file writer alive; drop it last so buffered lines
/// are flushed.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

fn daily_file_writer(path: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| std::ffi::OsStr::new(FALLBACK_LOG_FILE_NAME));

    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn install(format: LogFormat, writer: BoxMakeWriter) -> InitResult {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .try_init(),
    }
}

/// Installs the global subscriber from `LOG_FORMAT`, `LOG_OUTPUT`,
/// `LOG_FILE_PATH` and `RUST_LOG`.
pub fn init() -> LogGuard {
    let settings = LogSettings::from_env_with(|key| env::var(key).ok());

    if settings.output == LogOutput::Stderr {
        let _ = install(settings.format, BoxMakeWriter::new(std::io::stderr));
        return LogGuard { _file: None };
    }

    match daily_file_writer(&settings.file_path) {
        Ok((file_writer, guard)) => {
            let writer = match settings.output {
                LogOutput::Both => BoxMakeWriter::new(std::io::stderr.and(file_writer)),
                _ => BoxMakeWriter::new(file_writer),
            };
            let _ = install(settings.format, writer);
            LogGuard { _file: Some(guard) }
        }
        Err(err) => {
            eprintln!(
                "perplexity-search: failed to initialize LOG_OUTPUT={} at '{}': {}; using stderr instead",
                settings.output.as_str(),
                settings.file_path.display(),
                err
            );
            let _ = install(settings.format, BoxMakeWriter::new(std::io::stderr));
            LogGuard { _file: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{DEFAULT_LOG_FILE_PATH, LogFormat, LogOutput, LogSettings};

    fn settings_from_pairs(pairs: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        LogSettings::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_pretty_stderr_with_default_file_path() {
        let settings = settings_from_pairs(&[]);
        assert_eq!(settings.format, LogFormat::Pretty);
        assert_eq!(settings.output, LogOutput::Stderr);
        assert_eq!(settings.file_path, PathBuf::from(DEFAULT_LOG_FILE_PATH));
    }

    #[test]
    fn reads_json_format_and_output_targets() {
        let settings = settings_from_pairs(&[
            ("LOG_FORMAT", " JSON "),
            ("LOG_OUTPUT", "Both"),
            ("LOG_FILE_PATH", "custom/search.log"),
        ]);
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.output, LogOutput::Both);
        assert_eq!(settings.file_path, PathBuf::from("custom/search.log"));

        let file_only = settings_from_pairs(&[("LOG_OUTPUT", "file")]);
        assert_eq!(file_only.output, LogOutput::File);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let settings = settings_from_pairs(&[
            ("LOG_FORMAT", "xml"),
            ("LOG_OUTPUT", "syslog"),
            ("LOG_FILE_PATH", "   "),
        ]);
        assert_eq!(settings.format, LogFormat::Pretty);
        assert_eq!(settings.output, LogOutput::Stderr);
        assert_eq!(settings.file_path, PathBuf::from(DEFAULT_LOG_FILE_PATH));
    }
}

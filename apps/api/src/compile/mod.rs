//! PDF compilation collaborator.
//!
//! `pdflatex` is invoked as a black box inside a temporary working directory:
//! LaTeX string in, PDF byte buffer (or a structured failure with the
//! compiler log) out. The run is bounded by a timeout so a wedged compiler
//! can never hang the caller, and the timeout is reported as its own error
//! variant. Compilation never touches editor state.

pub mod handlers;

use std::process::Stdio;
use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("LaTeX compilation timed out after {0} seconds")]
    Timeout(u64),

    #[error("LaTeX compilation failed: {message}")]
    Failed {
        message: String,
        log: Option<String>,
    },

    #[error("failed to run the LaTeX compiler: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct CompiledPdf {
    pub pdf: Bytes,
    pub log: Option<String>,
}

pub struct LatexCompiler {
    bin: String,
    timeout: Duration,
}

impl LatexCompiler {
    pub fn new(bin: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            bin: bin.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Compiles `source` to a PDF byte buffer.
    pub async fn compile(&self, source: &str) -> Result<CompiledPdf, CompileError> {
        let workdir = tempfile::tempdir()?;
        let tex_path = workdir.path().join("main.tex");
        tokio::fs::write(&tex_path, source).await?;

        let run = Command::new(&self.bin)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg("-output-directory")
            .arg(workdir.path())
            .arg(&tex_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, run).await {
            Ok(result) => result?,
            Err(_) => return Err(CompileError::Timeout(self.timeout.as_secs())),
        };

        let log = tokio::fs::read_to_string(workdir.path().join("main.log"))
            .await
            .ok();

        if !output.status.success() {
            let message = first_error_line(log.as_deref(), &output.stdout)
                .unwrap_or_else(|| format!("{} exited with {}", self.bin, output.status));
            return Err(CompileError::Failed { message, log });
        }

        let pdf = tokio::fs::read(workdir.path().join("main.pdf"))
            .await
            .map_err(|_| CompileError::Failed {
                message: format!("{} reported success but produced no PDF", self.bin),
                log: log.clone(),
            })?;

        info!("LaTeX compilation succeeded ({} bytes)", pdf.len());
        Ok(CompiledPdf {
            pdf: Bytes::from(pdf),
            log,
        })
    }
}

/// First `!`-prefixed error line from the compiler log, falling back to the
/// captured stdout.
fn first_error_line(log: Option<&str>, stdout: &[u8]) -> Option<String> {
    let from_log = log.and_then(|log| {
        log.lines()
            .find(|line| line.starts_with('!'))
            .map(|line| line.trim_start_matches('!').trim().to_string())
    });
    from_log.or_else(|| {
        String::from_utf8_lossy(stdout)
            .lines()
            .find(|line| line.starts_with('!'))
            .map(|line| line.trim_start_matches('!').trim().to_string())
    })
}

/// Remediation suggestions for a compilation failure, keyed off the error
/// message text.
pub fn suggestions_for(message: &str) -> Vec<&'static str> {
    let mut suggestions = Vec::new();

    if message.contains("timed out") || message.contains("timeout") {
        suggestions.push("LaTeX compilation timed out - check for missing packages or infinite loops");
    } else if message.contains("Undefined control sequence") {
        suggestions.push("Check for typos in LaTeX commands");
    } else if message.contains("Missing") {
        suggestions.push("Check for missing braces, brackets, or packages");
    } else if message.contains("Package") {
        suggestions.push("Install missing LaTeX packages with: sudo tlmgr install <package-name>");
    }

    suggestions.push("Check that your LaTeX syntax is correct");
    suggestions.push("Ensure you are using supported LaTeX packages");
    suggestions.push("Try using the rendered LaTeX source to debug manually");

    if message.contains("timed out") || message.contains("timeout") {
        suggestions.push("Try installing missing LaTeX packages: sudo tlmgr install <package-name>");
    }

    suggestions
}

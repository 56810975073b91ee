use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::parsing::read_upload;
use matcher::{
    input_warnings, CompatibilityScorer, DocumentFormat, DocumentParser, InputWarning,
    JobRequirement, MatchTier, ParseError, ParsedDocument, RuleBasedScorer, ScoreReport,
};

/// Resume Matcher - score a resume against one or more job descriptions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Resume file (.txt, .pdf or .docx)
    resume: PathBuf,

    /// Job description text file; repeat to score several jobs
    #[arg(short, long = "job", required = true)]
    jobs: Vec<PathBuf>,

    /// Comma-separated required skills, applied to every job
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,

    /// Declared MIME type of the resume (default: inferred from the extension)
    #[arg(long)]
    mime: Option<String>,

    /// Upload size ceiling in bytes (overrides MATCHER_MAX_UPLOAD_BYTES)
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Keep an empty skill list empty instead of inferring it from the job text
    #[arg(long)]
    no_infer_skills: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobResult {
    job: String,
    required_skills: Vec<String>,
    report: ScoreReport,
    tier: MatchTier,
    tier_label: &'static str,
    warnings: Vec<InputWarning>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    resume: &'a ParsedDocument,
    results: Vec<JobResult>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Resume Matcher v{}", env!("CARGO_PKG_VERSION"));

    let max_bytes = cli.max_bytes.unwrap_or(config.max_upload_bytes);
    let infer_skills = config.infer_required_skills && !cli.no_infer_skills;

    let format = match &cli.mime {
        Some(mime) => DocumentFormat::from_mime(mime),
        None => DocumentFormat::from_path(&cli.resume),
    };
    let format = match format {
        Ok(format) => format,
        Err(e) => return Ok(report_parse_error(&e)),
    };

    let bytes = match read_upload(&cli.resume, max_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            if let Some(parse_err) = e.downcast_ref::<ParseError>() {
                return Ok(report_parse_error(parse_err));
            }
            return Err(e);
        }
    };

    // PDF and DOCX extraction is CPU-bound; keep it off the async workers.
    let parser = DocumentParser::new(max_bytes);
    let parsed = tokio::task::spawn_blocking(move || parser.parse(&bytes, format))
        .await
        .context("Resume parser task failed")?;
    let resume = match parsed {
        Ok(doc) => Arc::new(doc),
        Err(e) => return Ok(report_parse_error(&e)),
    };

    let scorer: Arc<dyn CompatibilityScorer> = Arc::new(RuleBasedScorer);
    info!("Scoring {} job(s) with the {} scorer", cli.jobs.len(), scorer.backend());

    let mut handles = Vec::with_capacity(cli.jobs.len());
    for path in &cli.jobs {
        let description = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description '{}'", path.display()))?;

        let mut job = JobRequirement::new(description, &cli.skills);
        if infer_skills {
            job = job.with_inferred_skills();
        }

        let resume = Arc::clone(&resume);
        let scorer = Arc::clone(&scorer);
        let label = path.display().to_string();
        handles.push(tokio::task::spawn_blocking(move || {
            let report = scorer.score(&resume, &job);
            let tier = report.tier();
            JobResult {
                job: label,
                warnings: input_warnings(&resume, &job),
                required_skills: job.required_skills,
                report,
                tier,
                tier_label: tier.label(),
            }
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.context("Scoring task failed")?);
    }

    let output = Output {
        resume: &resume,
        results,
    };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(ExitCode::SUCCESS)
}

/// Exit status for a rejected resume. Every `ParseError` is a client error,
/// so rejections never share status 1 with runtime failures.
const REJECTED_EXIT_STATUS: u8 = 2;

/// Prints the error envelope on stdout.
fn report_parse_error(err: &ParseError) -> ExitCode {
    error!(code = err.code(), "Resume rejected: {err}");
    println!("{}", err.to_json());
    ExitCode::from(REJECTED_EXIT_STATUS)
}

use candidate_ranking::config::{AppConfig, RankingConfig};
use candidate_ranking::error::AppError;
use candidate_ranking::import::{CandidateFormat, CandidateImporter};
use candidate_ranking::verifiers::{run_schema_checks, SchemaCheckPlan};
use candidate_ranking::{
    summarize_candidates, Candidate, CandidateRanker, RankedCandidate, RankingError,
    RankingSummary,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputFormat {
    Csv,
    Json,
}

impl From<InputFormat> for CandidateFormat {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Csv => CandidateFormat::Csv,
            InputFormat::Json => CandidateFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Candidate file (CSV with candidate_id,relevance,confidence or a JSON array)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Input encoding (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub(crate) format: Option<InputFormat>,
    /// Override the configured relevance weight
    #[arg(long)]
    pub(crate) relevance_weight: Option<f64>,
    /// Override the configured confidence weight
    #[arg(long)]
    pub(crate) confidence_weight: Option<f64>,
    /// Only print the first N ranked candidates (the summary still covers all of them)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit the ranking and summary as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SchemaCheckArgs {
    /// Repository root the artifact paths are resolved against
    #[arg(long, default_value = ".")]
    pub(crate) root: PathBuf,
    /// Experiment iteration whose design.yaml should be checked
    #[arg(long)]
    pub(crate) iteration_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingReport {
    pub(crate) ranking: Vec<RankedCandidate>,
    pub(crate) summary: RankingSummary,
}

impl RankingReport {
    pub(crate) fn build(ranker: &CandidateRanker, candidates: &[Candidate]) -> Self {
        let ranking = ranker.rank(candidates);
        let summary = summarize_candidates(&ranking);
        Self { ranking, summary }
    }
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let RankArgs {
        input,
        format,
        relevance_weight,
        confidence_weight,
        limit,
        json,
    } = args;

    let ranker = build_ranker(&config.ranking, relevance_weight, confidence_weight)?;
    let candidates = CandidateImporter::from_path(&input, format.map(CandidateFormat::from))?;
    let mut report = RankingReport::build(&ranker, &candidates);

    info!(
        input = %input.display(),
        count = report.summary.count,
        "ranked candidate pool"
    );

    if let Some(limit) = limit {
        report.ranking.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&ranker, &report));
    }

    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    let ranker = CandidateRanker::from_config(&config.ranking)?;
    let report = RankingReport::build(&ranker, &sample_candidates());

    println!("Candidate ranking demo");
    print!("{}", render_report(&ranker, &report));
    Ok(())
}

pub(crate) fn run_schema_check(args: SchemaCheckArgs) -> i32 {
    let plan = SchemaCheckPlan::new(&args.root, args.iteration_id.as_deref());
    let report = run_schema_checks(&plan);

    for check in &report.checked {
        println!(
            "- {} against {}",
            check.artifact.display(),
            check.schema.display()
        );
    }
    if report.passed() {
        println!("Schema checks passed ({} artifact(s))", report.checked.len());
    } else {
        println!("Schema checks failed ({} failure(s))", report.failures.len());
    }

    report.exit_code()
}

fn build_ranker(
    config: &RankingConfig,
    relevance_weight: Option<f64>,
    confidence_weight: Option<f64>,
) -> Result<CandidateRanker, RankingError> {
    let config = RankingConfig {
        relevance_weight: relevance_weight.unwrap_or(config.relevance_weight),
        confidence_weight: confidence_weight.unwrap_or(config.confidence_weight),
    };
    CandidateRanker::from_config(&config)
}

fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("x", 0.8, 0.9),
        Candidate::new("y", 0.4, 0.3),
        Candidate::new("b", 0.9, 0.5),
        Candidate::new("a", 0.9, 0.5),
        Candidate::new("c", 0.3, 0.2),
    ]
}

pub(crate) fn render_report(ranker: &CandidateRanker, report: &RankingReport) -> String {
    let summary = &report.summary;
    let mut out = format!(
        "Weights: relevance {:.2}, confidence {:.2}\n",
        ranker.relevance_weight(),
        ranker.confidence_weight()
    );

    if summary.count == 0 {
        out.push_str("\nRanking: none\n");
    } else {
        if report.ranking.len() < summary.count {
            out.push_str(&format!(
                "\nRanking (showing {} of {})\n",
                report.ranking.len(),
                summary.count
            ));
        } else {
            out.push_str("\nRanking\n");
        }
        for (position, candidate) in report.ranking.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {} ({:.4})\n",
                position + 1,
                candidate.candidate_id,
                candidate.score
            ));
        }
    }

    let top_candidate = summary
        .top_candidate_id
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);
    out.push_str(&format!(
        "\nSummary\n- candidates: {}\n- mean score: {:.4}\n- top candidate: {}\n",
        summary.count, summary.mean_score, top_candidate
    ));

    out
}

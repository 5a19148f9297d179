use crate::ranking::Candidate;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported on-disk encodings for candidate lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFormat {
    /// Header row `candidate_id,relevance,confidence`, one candidate per line.
    Csv,
    /// A JSON array of `{ "candidate_id", "relevance", "confidence" }` objects.
    Json,
}

impl CandidateFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum CandidateImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnknownFormat(PathBuf),
}

impl std::fmt::Display for CandidateImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateImportError::Io(err) => write!(f, "failed to read candidates: {}", err),
            CandidateImportError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
            CandidateImportError::Json(err) => write!(f, "invalid candidate JSON data: {}", err),
            CandidateImportError::UnknownFormat(path) => write!(
                f,
                "cannot infer candidate format for '{}' (use a .csv or .json file)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CandidateImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CandidateImportError::Io(err) => Some(err),
            CandidateImportError::Csv(err) => Some(err),
            CandidateImportError::Json(err) => Some(err),
            CandidateImportError::UnknownFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CandidateImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CandidateImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CandidateImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub struct CandidateImporter;

impl CandidateImporter {
    /// Load candidates from a file. Without an explicit format it is inferred from the extension.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: Option<CandidateFormat>,
    ) -> Result<Vec<Candidate>, CandidateImportError> {
        let path = path.as_ref();
        let format = match format.or_else(|| CandidateFormat::from_path(path)) {
            Some(format) => format,
            None => return Err(CandidateImportError::UnknownFormat(path.to_path_buf())),
        };

        let file = std::fs::File::open(path)?;
        let candidates = Self::from_reader(file, format)?;
        debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
        Ok(candidates)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: CandidateFormat,
    ) -> Result<Vec<Candidate>, CandidateImportError> {
        match format {
            CandidateFormat::Csv => parse_csv(reader),
            CandidateFormat::Json => Ok(serde_json::from_reader(reader)?),
        }
    }
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<Candidate>() {
        candidates.push(record?);
    }

    Ok(candidates)
}

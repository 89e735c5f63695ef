use super::dto::ExchangeDocument;
use super::mapper::to_exchange;
use dns_access_log_domain::{DomainError, ExchangeContext};
use std::io::Read;
use tracing::debug;

/// Loads completed exchanges from JSON (a single object or an array).
pub struct ExchangeReader;

impl ExchangeReader {
    /// Reads from a file, or from stdin when `path` is `-`.
    pub fn from_path(path: &str) -> Result<Vec<ExchangeContext>, DomainError> {
        if path == "-" {
            return Self::from_reader(std::io::stdin().lock());
        }
        let file = std::fs::File::open(path)
            .map_err(|e| DomainError::IoError(format!("{}: {}", path, e)))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ExchangeContext>, DomainError> {
        let document: ExchangeDocument = serde_json::from_reader(reader)
            .map_err(|e| DomainError::InvalidExchange(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_json(json: &str) -> Result<Vec<ExchangeContext>, DomainError> {
        let document: ExchangeDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidExchange(e.to_string()))?;
        Self::from_document(document)
    }

    fn from_document(document: ExchangeDocument) -> Result<Vec<ExchangeContext>, DomainError> {
        let dtos = match document {
            ExchangeDocument::Many(dtos) => dtos,
            ExchangeDocument::One(dto) => vec![*dto],
        };
        let exchanges = dtos
            .into_iter()
            .map(to_exchange)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = exchanges.len(), "Loaded DNS exchanges");
        Ok(exchanges)
    }
}

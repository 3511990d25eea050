use crate::error::{PpiError, Result};
use crate::models::{ClientConfig, Database};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the STRING and BioGRID interaction web services.
///
/// Retrieval and schema normalization live entirely here; the graph core only
/// ever sees plain `(String, String)` name pairs.
#[derive(Debug, Clone)]
pub struct PpiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PpiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { http, config })
    }

    /// Retrieves the reported interaction partners of `protein` from the
    /// selected database, normalized to `(source, target)` name pairs.
    ///
    /// Returns [`PpiError::NoInteractions`] when the database reports nothing
    /// for the protein.
    pub async fn fetch_interactions(
        &self,
        protein: &str,
        database: Database,
    ) -> Result<Vec<(String, String)>> {
        info!(%protein, %database, "retrieving interaction data");

        let pairs = match database {
            Database::String => self.fetch_string(protein).await?,
            Database::BioGrid => self.fetch_biogrid(protein).await?,
        };

        if pairs.is_empty() {
            warn!(%protein, %database, "no interactions found");
            return Err(PpiError::NoInteractions {
                protein: protein.to_string(),
                database: database.to_string(),
            });
        }

        info!(%protein, %database, count = pairs.len(), "retrieved interaction pairs");
        Ok(pairs)
    }

    async fn fetch_string(&self, protein: &str) -> Result<Vec<(String, String)>> {
        let params = [
            ("identifiers", protein.to_string()),
            ("species", self.config.species.to_string()),
        ];

        debug!(url = %self.config.string_api_url, "querying STRING");

        let records: Vec<Value> = self
            .http
            .get(&self.config.string_api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        string_pairs(&records)
    }

    async fn fetch_biogrid(&self, protein: &str) -> Result<Vec<(String, String)>> {
        let params = [
            ("searchNames", "true".to_string()),
            ("geneList", protein.to_string()),
            ("includeInteractors", "true".to_string()),
            ("taxId", self.config.species.to_string()),
            ("format", "json".to_string()),
            ("accesskey", self.config.biogrid_access_key.clone()),
        ];

        debug!(url = %self.config.biogrid_api_url, "querying BioGRID");

        let body: Value = self
            .http
            .get(&self.config.biogrid_api_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        biogrid_pairs(&body)
    }
}

/// Extracts interactor name pairs from a STRING network response.
///
/// STRING returns a JSON array of interaction records; the endpoint names
/// live in the `preferredName_A` and `preferredName_B` fields.
pub fn string_pairs(records: &[Value]) -> Result<Vec<(String, String)>> {
    records
        .iter()
        .map(|record| {
            let a = record.get("preferredName_A").and_then(Value::as_str);
            let b = record.get("preferredName_B").and_then(Value::as_str);

            match (a, b) {
                (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
                _ => Err(PpiError::schema_mismatch("STRING")),
            }
        })
        .collect()
}

/// Extracts interactor name pairs from a BioGRID interactions response.
///
/// BioGRID returns a JSON object keyed by interaction id; the endpoint names
/// live in the `OFFICIAL_SYMBOL_A` and `OFFICIAL_SYMBOL_B` fields of each
/// entry.
pub fn biogrid_pairs(body: &Value) -> Result<Vec<(String, String)>> {
    let entries = body
        .as_object()
        .ok_or_else(|| PpiError::schema_mismatch("BioGRID"))?;

    entries
        .values()
        .map(|record| {
            let a = record.get("OFFICIAL_SYMBOL_A").and_then(Value::as_str);
            let b = record.get("OFFICIAL_SYMBOL_B").and_then(Value::as_str);

            match (a, b) {
                (Some(a), Some(b)) => Ok((a.to_string(), b.to_string())),
                _ => Err(PpiError::schema_mismatch("BioGRID")),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_pairs_extracts_preferred_names() {
        let records = vec![
            json!({"preferredName_A": "TP53", "preferredName_B": "MDM2", "score": 0.999}),
            json!({"preferredName_A": "TP53", "preferredName_B": "EP300"}),
        ];

        let pairs = string_pairs(&records).unwrap();

        assert_eq!(
            pairs,
            vec![
                ("TP53".to_string(), "MDM2".to_string()),
                ("TP53".to_string(), "EP300".to_string()),
            ]
        );
    }

    #[test]
    fn string_pairs_rejects_missing_columns() {
        let records = vec![json!({"stringId_A": "9606.ENSP00000269305"})];

        assert!(matches!(
            string_pairs(&records),
            Err(PpiError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn string_pairs_of_empty_response_is_empty() {
        assert!(string_pairs(&[]).unwrap().is_empty());
    }

    #[test]
    fn biogrid_pairs_extracts_official_symbols() {
        let body = json!({
            "1234": {"OFFICIAL_SYMBOL_A": "BRCA1", "OFFICIAL_SYMBOL_B": "BARD1"},
            "5678": {"OFFICIAL_SYMBOL_A": "BRCA1", "OFFICIAL_SYMBOL_B": "TP53"},
        });

        let mut pairs = biogrid_pairs(&body).unwrap();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("BRCA1".to_string(), "BARD1".to_string()),
                ("BRCA1".to_string(), "TP53".to_string()),
            ]
        );
    }

    #[test]
    fn biogrid_pairs_rejects_missing_columns() {
        let body = json!({"1234": {"ENTREZ_GENE_A": "672"}});

        assert!(matches!(
            biogrid_pairs(&body),
            Err(PpiError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn biogrid_pairs_rejects_non_object_body() {
        assert!(matches!(
            biogrid_pairs(&json!([1, 2, 3])),
            Err(PpiError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn biogrid_pairs_of_empty_object_is_empty() {
        assert!(biogrid_pairs(&json!({})).unwrap().is_empty());
    }
}

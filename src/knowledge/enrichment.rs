//! Supplementary knowledge enrichment.
//!
//! The knowledge base can be extended with a `{category: {term: description}}`
//! mapping fetched from an external endpoint. The fetch is strictly
//! best-effort: any network failure, non-success status, or malformed payload
//! is absorbed and replaced with a fixed fallback mapping. Failures are
//! logged but never propagated; the builder always receives a usable mapping.

use std::collections::BTreeMap;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::knowledge::category::Category;

/// Category-to-terms mapping merged into the knowledge base.
pub type EnrichmentMap = BTreeMap<Category, BTreeMap<String, String>>;

/// Outcome of an enrichment fetch.
///
/// The fallback case carries the reason it was taken so tests and logs can
/// observe the decision instead of it disappearing into a silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Enrichment {
    /// The endpoint responded with a usable mapping.
    Fetched(EnrichmentMap),
    /// The static fallback mapping was substituted.
    Fallback {
        /// Why the fetch was abandoned.
        reason: String,
        /// The substituted mapping.
        map: EnrichmentMap,
    },
}

impl Enrichment {
    /// The usable mapping, regardless of how it was obtained.
    pub fn map(&self) -> &EnrichmentMap {
        match self {
            Enrichment::Fetched(map) => map,
            Enrichment::Fallback { map, .. } => map,
        }
    }

    /// Whether the fallback mapping was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Enrichment::Fallback { .. })
    }
}

/// A source of supplementary knowledge.
pub trait EnrichmentSource: Send + Sync + std::fmt::Debug {
    /// Fetch the supplementary mapping. Never fails; implementations
    /// substitute [`fallback_mapping`] on any problem.
    fn fetch(&self) -> Enrichment;
}

/// The fixed mapping substituted when no endpoint is reachable.
///
/// Three categories of general department knowledge, mirrored from the
/// deployed scraper's offline data (its legacy category keys mapped onto
/// the closed category set).
pub fn fallback_mapping() -> EnrichmentMap {
    let mut map = EnrichmentMap::new();

    let mut services = BTreeMap::new();
    services.insert(
        "water resource management".to_string(),
        "Water Resource Department manages water supply, irrigation, and drainage systems across Bihar.".to_string(),
    );
    services.insert(
        "irrigation services".to_string(),
        "Irrigation services include canal management, water distribution, and agricultural water supply.".to_string(),
    );
    services.insert(
        "project management".to_string(),
        "Various water resource projects are managed including infrastructure development and maintenance.".to_string(),
    );
    services.insert(
        "public information".to_string(),
        "Public information about water resources, projects, and services is available through the department.".to_string(),
    );
    map.insert(Category::Services, services);

    let mut functions = BTreeMap::new();
    functions.insert(
        "water resource department".to_string(),
        "Government department responsible for water resource management in Bihar state.".to_string(),
    );
    functions.insert(
        "irrigation department".to_string(),
        "Manages irrigation infrastructure and water distribution for agriculture.".to_string(),
    );
    functions.insert(
        "project monitoring".to_string(),
        "Monitors and oversees various water resource development projects.".to_string(),
    );
    map.insert(Category::Functions, functions);

    let mut procedures = BTreeMap::new();
    procedures.insert(
        "online services".to_string(),
        "Various online services are available for public convenience and information access.".to_string(),
    );
    procedures.insert(
        "information access".to_string(),
        "Citizens can access information about water resource projects and services.".to_string(),
    );
    procedures.insert(
        "project updates".to_string(),
        "Regular updates about ongoing and completed water resource projects.".to_string(),
    );
    // Legacy "procedures" key folds into Services.
    map.entry(Category::Services).or_default().extend(procedures);

    map
}

/// Enrichment source backed by an HTTP endpoint serving the JSON mapping.
#[derive(Debug)]
pub struct HttpEnrichmentSource {
    endpoint: String,
    timeout: Duration,
}

impl HttpEnrichmentSource {
    /// Create a source for the given endpoint with a bounded wait.
    pub fn new<S: Into<String>>(endpoint: S, timeout: Duration) -> Self {
        HttpEnrichmentSource {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    fn fetch_inner(&self) -> std::result::Result<EnrichmentMap, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| format!("client build failed: {e}"))?;

        let response = client
            .get(&self.endpoint)
            .send()
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("endpoint returned status {}", response.status()));
        }

        let raw: BTreeMap<String, BTreeMap<String, String>> = response
            .json()
            .map_err(|e| format!("payload parse failed: {e}"))?;

        let mut map = EnrichmentMap::new();
        for (key, terms) in raw {
            match Category::parse_key(&key) {
                Some(category) => {
                    map.entry(category).or_default().extend(terms);
                }
                None => {
                    warn!("skipping unknown enrichment category key '{key}'");
                }
            }
        }

        Ok(map)
    }
}

impl EnrichmentSource for HttpEnrichmentSource {
    fn fetch(&self) -> Enrichment {
        match self.fetch_inner() {
            Ok(map) => {
                info!(
                    "fetched enrichment mapping from {} ({} categories)",
                    self.endpoint,
                    map.len()
                );
                Enrichment::Fetched(map)
            }
            Err(reason) => {
                warn!("enrichment fetch from {} failed: {reason}; using fallback mapping", self.endpoint);
                Enrichment::Fallback {
                    reason,
                    map: fallback_mapping(),
                }
            }
        }
    }
}

/// Enrichment source serving a fixed in-memory mapping.
///
/// Used when no endpoint is configured and by tests that need to control
/// the supplementary knowledge exactly.
#[derive(Debug, Clone, Default)]
pub struct StaticEnrichmentSource {
    map: EnrichmentMap,
}

impl StaticEnrichmentSource {
    /// Serve the given mapping.
    pub fn new(map: EnrichmentMap) -> Self {
        StaticEnrichmentSource { map }
    }

    /// Serve the static fallback mapping.
    pub fn fallback() -> Self {
        StaticEnrichmentSource {
            map: fallback_mapping(),
        }
    }
}

impl EnrichmentSource for StaticEnrichmentSource {
    fn fetch(&self) -> Enrichment {
        Enrichment::Fetched(self.map.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_mapping_covers_three_scraper_categories() {
        let map = fallback_mapping();
        // services + procedures fold together, departments maps to functions.
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Category::Services].len(), 7);
        assert_eq!(map[&Category::Functions].len(), 3);
    }

    #[test]
    fn test_static_source_is_not_fallback() {
        let source = StaticEnrichmentSource::fallback();
        let enrichment = source.fetch();
        assert!(!enrichment.is_fallback());
        assert!(!enrichment.map().is_empty());
    }

    #[test]
    fn test_http_source_unreachable_endpoint_falls_back() {
        let source = HttpEnrichmentSource::new(
            "http://127.0.0.1:1/knowledge",
            Duration::from_millis(200),
        );
        let enrichment = source.fetch();
        assert!(enrichment.is_fallback());
        // The fallback mapping is still usable.
        assert!(!enrichment.map().is_empty());
    }
}

//! InfluxDB 1.x client
//!
//! Speaks the HTTP API directly: `/query` for InfluxQL (including DDL and
//! continuous query management), `/write` for line protocol, `/ping` for
//! health. Results come back as JSON and are parsed with serde.

pub mod error;

pub use error::InfluxError;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::core::config::InfluxConfig;
use crate::data::traits::{ContinuousQuery, StatsStore};

/// One series block from an InfluxQL result
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct StatementResult {
    #[serde(default)]
    series: Vec<Series>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<StatementResult>,
    error: Option<String>,
}

/// Async client for one InfluxDB 1.x instance
pub struct InfluxClient {
    http: Client,
    base_url: String,
    config: InfluxConfig,
}

impl InfluxClient {
    pub fn init(config: &InfluxConfig) -> Result<Self, InfluxError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let service = Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            config: config.clone(),
        };

        tracing::debug!(
            url = %config.url,
            database = %config.database,
            "InfluxClient initialized"
        );

        Ok(service)
    }

    /// Health check - verify the engine responds
    pub async fn ping(&self) -> Result<(), InfluxError> {
        let mut request = self.http.get(format!("{}/ping", self.base_url));
        if let Some(ref user) = self.config.user {
            request = request.basic_auth(user, self.config.password.as_deref());
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfluxError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Run one InfluxQL statement and return its series blocks
    pub async fn query(&self, db: Option<&str>, q: &str) -> Result<Vec<Series>, InfluxError> {
        let mut params: Vec<(&str, &str)> = vec![("q", q)];
        if let Some(db) = db {
            params.push(("db", db));
        }

        let mut request = self
            .http
            .post(format!("{}/query", self.base_url))
            .form(&params);
        if let Some(ref user) = self.config.user {
            request = request.basic_auth(user, self.config.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfluxError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: QueryResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(InfluxError::Query(err));
        }

        let mut series = Vec::new();
        for result in body.results {
            if let Some(err) = result.error {
                return Err(InfluxError::Query(err));
            }
            series.extend(result.series);
        }
        Ok(series)
    }

    /// First column of every row across the returned series, as strings
    fn string_column(series: &[Series]) -> Vec<String> {
        series
            .iter()
            .flat_map(|s| &s.values)
            .filter_map(|row| row.first())
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl StatsStore for InfluxClient {
    async fn list_databases(&self) -> Result<Vec<String>, InfluxError> {
        let series = self.query(None, "SHOW DATABASES").await?;
        Ok(Self::string_column(&series))
    }

    async fn create_database(&self, name: &str) -> Result<(), InfluxError> {
        self.query(None, &format!("CREATE DATABASE \"{name}\""))
            .await?;
        Ok(())
    }

    async fn drop_database(&self, name: &str) -> Result<(), InfluxError> {
        self.query(None, &format!("DROP DATABASE \"{name}\""))
            .await?;
        Ok(())
    }

    async fn drop_measurement(&self, db: &str, measurement: &str) -> Result<(), InfluxError> {
        self.query(Some(db), &format!("DROP MEASUREMENT \"{measurement}\""))
            .await?;
        Ok(())
    }

    async fn run_query(&self, db: &str, query: &str) -> Result<(), InfluxError> {
        self.query(Some(db), query).await?;
        Ok(())
    }

    async fn create_continuous_query(&self, db: &str, statement: &str) -> Result<(), InfluxError> {
        // The statement already carries ON "<db>"; the db param only scopes
        // the session.
        self.query(Some(db), statement).await?;
        Ok(())
    }

    async fn list_continuous_queries(&self) -> Result<Vec<ContinuousQuery>, InfluxError> {
        // One series per database; rows are [name, query].
        let series = self.query(None, "SHOW CONTINUOUS QUERIES").await?;
        let mut queries = Vec::new();
        for block in &series {
            for row in &block.values {
                let name = row
                    .first()
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        InfluxError::Malformed("continuous query row without a name".to_string())
                    })?;
                queries.push(ContinuousQuery {
                    database: block.name.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(queries)
    }

    async fn drop_continuous_query(&self, db: &str, name: &str) -> Result<(), InfluxError> {
        self.query(None, &format!("DROP CONTINUOUS QUERY \"{name}\" ON \"{db}\""))
            .await?;
        Ok(())
    }

    async fn write_points(&self, db: &str, lines: &str) -> Result<(), InfluxError> {
        let mut request = self
            .http
            .post(format!("{}/write", self.base_url))
            .query(&[("db", db)])
            .body(lines.to_string());
        if let Some(ref user) = self.config.user {
            request = request.basic_auth(user, self.config.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfluxError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

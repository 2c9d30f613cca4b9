//! GitHub vulnerability source
//!
//! Collects open Dependabot vulnerability alerts for every repository in an
//! organization through the GitHub GraphQL API. Two cursor-paginated queries:
//! the organization's repositories (name, URL, owning team slugs) and each
//! repository's open alerts (severity, package, advisory description and
//! identifiers). Both are consumed to exhaustion before the source reports
//! completion.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::errors::{ClassificationError, SourceError};
use crate::application::orchestrator::CompletionGuard;
use crate::config::{team_by_slug, TeamConfig};
use crate::domain::vulnerability::{
    Ecosystem, Finding, FindingIdentifiers, IdentifierKind, ProjectCollection, Severity,
};

use super::traits::VulnerabilitySource;

/// Link key and source name on projects populated by this source.
pub const GITHUB_SOURCE: &str = "GitHub";

const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const PAGE_SIZE: u32 = 100;

const ORG_REPOSITORIES_QUERY: &str = r#"
    query OrgRepositories($login: String!, $pageSize: Int!, $cursor: String) {
        organization(login: $login) {
            repositories(first: $pageSize, after: $cursor, orderBy: { field: NAME, direction: ASC }) {
                nodes {
                    name
                    url
                    teams(first: 100) {
                        nodes { slug }
                    }
                }
                pageInfo { hasNextPage endCursor }
            }
        }
    }
"#;

const REPOSITORY_ALERTS_QUERY: &str = r#"
    query RepositoryAlerts($login: String!, $name: String!, $pageSize: Int!, $cursor: String) {
        repository(owner: $login, name: $name) {
            vulnerabilityAlerts(first: $pageSize, after: $cursor, states: OPEN) {
                nodes {
                    securityVulnerability {
                        severity
                        package { name ecosystem }
                        advisory {
                            description
                            identifiers { type value }
                        }
                    }
                }
                pageInfo { hasNextPage endCursor }
            }
        }
    }
"#;

/// GraphQL query request structure
#[derive(Debug, Serialize)]
struct GraphQLRequest {
    query: String,
    variables: serde_json::Value,
}

/// GraphQL response structure
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
    #[serde(rename = "endCursor")]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrgRepositoriesData {
    organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
struct Organization {
    repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
struct RepositoryConnection {
    nodes: Vec<Repository>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct Repository {
    name: String,
    url: String,
    teams: TeamConnection,
}

#[derive(Debug, Deserialize)]
struct TeamConnection {
    nodes: Vec<TeamNode>,
}

#[derive(Debug, Deserialize)]
struct TeamNode {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryAlertsData {
    repository: Option<AlertRepository>,
}

#[derive(Debug, Deserialize)]
struct AlertRepository {
    #[serde(rename = "vulnerabilityAlerts")]
    vulnerability_alerts: AlertConnection,
}

#[derive(Debug, Deserialize)]
struct AlertConnection {
    nodes: Vec<AlertNode>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct AlertNode {
    #[serde(rename = "securityVulnerability")]
    security_vulnerability: SecurityVulnerability,
}

#[derive(Debug, Deserialize)]
struct SecurityVulnerability {
    severity: String,
    package: AlertPackage,
    advisory: Advisory,
}

#[derive(Debug, Deserialize)]
struct AlertPackage {
    name: String,
    ecosystem: String,
}

#[derive(Debug, Deserialize)]
struct Advisory {
    description: String,
    #[serde(default)]
    identifiers: Vec<AdvisoryIdentifier>,
}

#[derive(Debug, Deserialize)]
struct AdvisoryIdentifier {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

/// Vulnerability source backed by the GitHub GraphQL API.
pub struct GithubSource {
    client: Client,
    org: String,
    token: String,
    graphql_url: String,
    teams: Vec<TeamConfig>,
}

impl GithubSource {
    /// Create a source against the public GitHub API.
    pub fn new(
        org: impl Into<String>,
        token: impl Into<String>,
        teams: Vec<TeamConfig>,
    ) -> Result<Self, SourceError> {
        Self::with_endpoint(org, token, teams, GITHUB_GRAPHQL_URL)
    }

    /// Create a source against a substitute GraphQL endpoint. Used to point
    /// collection at a fixture server in tests and at GitHub Enterprise
    /// installations in production.
    pub fn with_endpoint(
        org: impl Into<String>,
        token: impl Into<String>,
        teams: Vec<TeamConfig>,
        graphql_url: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("vulnwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::Network)?;

        Ok(Self {
            client,
            org: org.into(),
            token: token.into(),
            graphql_url: graphql_url.into(),
            teams,
        })
    }

    /// Execute a GraphQL query
    async fn execute_query<T>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, SourceError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request_body = GraphQLRequest {
            query: query.to_string(),
            variables,
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Api { status, message });
        }

        let body = response.text().await?;
        let graphql_response: GraphQLResponse<T> = serde_json::from_str(&body)?;

        if let Some(errors) = graphql_response.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(SourceError::Api {
                status: 400,
                message: format!("GraphQL request failed: {}", messages.join(" | ")),
            });
        }

        graphql_response.data.ok_or_else(|| SourceError::Api {
            status: 500,
            message: "no data in GraphQL response".to_string(),
        })
    }

    async fn fetch_repository_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<RepositoryConnection, SourceError> {
        let variables = serde_json::json!({
            "login": self.org,
            "pageSize": PAGE_SIZE,
            "cursor": cursor,
        });

        let data: OrgRepositoriesData = self
            .execute_query(ORG_REPOSITORIES_QUERY, variables)
            .await?;

        data.organization
            .map(|org| org.repositories)
            .ok_or_else(|| SourceError::Api {
                status: 404,
                message: format!("organization {} not found", self.org),
            })
    }

    async fn fetch_alert_page(
        &self,
        repository: &str,
        cursor: Option<&str>,
    ) -> Result<AlertConnection, SourceError> {
        let variables = serde_json::json!({
            "login": self.org,
            "name": repository,
            "pageSize": PAGE_SIZE,
            "cursor": cursor,
        });

        let data: RepositoryAlertsData = self
            .execute_query(REPOSITORY_ALERTS_QUERY, variables)
            .await?;

        data.repository
            .map(|repo| repo.vulnerability_alerts)
            .ok_or_else(|| SourceError::Api {
                status: 404,
                message: format!("repository {}/{repository} not found", self.org),
            })
    }

    /// Process one repository node: register the project and its link,
    /// resolve owners, and drain its alert pages.
    async fn collect_repository(
        &self,
        collection: &ProjectCollection,
        repository: &Repository,
    ) -> Result<(), SourceError> {
        collection
            .add_link(&repository.name, GITHUB_SOURCE, repository.url.clone())
            .await;

        for team in &repository.teams.nodes {
            match team_by_slug(&team.slug, &self.teams) {
                Ok(configured) => {
                    collection
                        .add_owner(&repository.name, configured.clone())
                        .await;
                }
                // An owner GitHub knows but local config does not is omitted
                // entirely; a placeholder team must never enter the owner set.
                Err(_) => {
                    debug!(
                        repository = %repository.name,
                        slug = %team.slug,
                        "owning team not configured, omitting"
                    );
                }
            }
        }

        let mut cursor: Option<String> = None;
        loop {
            let page = self.fetch_alert_page(&repository.name, cursor.as_deref()).await?;
            for alert in page.nodes {
                match normalize_alert(alert.security_vulnerability) {
                    Ok(finding) => collection.add_finding(&repository.name, finding).await,
                    Err(e) => {
                        warn!(
                            repository = %repository.name,
                            error = %e,
                            "skipping unclassifiable alert"
                        );
                    }
                }
            }
            if !page.page_info.has_next_page {
                return Ok(());
            }
            cursor = page.page_info.end_cursor;
        }
    }
}

#[async_trait]
impl VulnerabilitySource for GithubSource {
    fn name(&self) -> &str {
        GITHUB_SOURCE
    }

    async fn collect_findings(
        &self,
        collection: &ProjectCollection,
        _guard: CompletionGuard,
    ) -> Result<(), SourceError> {
        let mut cursor: Option<String> = None;
        loop {
            debug!(org = %self.org, cursor = ?cursor, "fetching repository page");
            let page = self.fetch_repository_page(cursor.as_deref()).await?;
            for repository in &page.nodes {
                self.collect_repository(collection, repository).await?;
            }
            if !page.page_info.has_next_page {
                return Ok(());
            }
            cursor = page.page_info.end_cursor;
        }
    }
}

/// Map GitHub's severity label onto the canonical enumeration. Matching is
/// case-sensitive and exact; anything else is a classification failure.
fn severity_from_github(label: &str) -> Result<Severity, ClassificationError> {
    match label {
        "CRITICAL" => Ok(Severity::Critical),
        "HIGH" => Ok(Severity::High),
        "MODERATE" => Ok(Severity::Medium),
        "LOW" => Ok(Severity::Low),
        other => Err(ClassificationError::UnknownSeverity(other.to_string())),
    }
}

/// Map GitHub's `SecurityAdvisoryEcosystem` value onto the canonical
/// enumeration. Same failure rule as severities.
fn ecosystem_from_github(label: &str) -> Result<Ecosystem, ClassificationError> {
    match label {
        "GO" => Ok(Ecosystem::Go),
        "NPM" => Ok(Ecosystem::Npm),
        "PIP" => Ok(Ecosystem::PyPI),
        "MAVEN" => Ok(Ecosystem::Maven),
        "RUST" => Ok(Ecosystem::Cargo),
        "COMPOSER" => Ok(Ecosystem::Packagist),
        "RUBYGEMS" => Ok(Ecosystem::RubyGems),
        "NUGET" => Ok(Ecosystem::NuGet),
        other => Err(ClassificationError::UnknownEcosystem(other.to_string())),
    }
}

fn normalize_alert(vulnerability: SecurityVulnerability) -> Result<Finding, ClassificationError> {
    let severity = severity_from_github(&vulnerability.severity)?;
    let ecosystem = ecosystem_from_github(&vulnerability.package.ecosystem)?;

    let mut identifiers = FindingIdentifiers::new();
    for identifier in vulnerability.advisory.identifiers {
        let kind = match identifier.kind.as_str() {
            "CVE" => IdentifierKind::Cve,
            "GHSA" => IdentifierKind::Ghsa,
            _ => continue,
        };
        identifiers.entry(kind).or_insert(identifier.value);
    }

    Ok(Finding {
        ecosystem,
        severity,
        description: vulnerability.advisory.description,
        package_name: vulnerability.package.name,
        identifiers,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    use crate::application::orchestrator::CompletionBarrier;
    use crate::domain::vulnerability::Project;

    use super::*;

    fn single_repo_page(teams: serde_json::Value) -> serde_json::Value {
        json!({
            "data": {
                "organization": {
                    "repositories": {
                        "nodes": [
                            {
                                "name": "zaphod",
                                "url": "https://heart-of-gold/zaphod",
                                "teams": { "nodes": teams }
                            }
                        ],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    }
                }
            }
        })
    }

    fn single_alert_page() -> serde_json::Value {
        json!({
            "data": {
                "repository": {
                    "vulnerabilityAlerts": {
                        "nodes": [
                            {
                                "securityVulnerability": {
                                    "severity": "CRITICAL",
                                    "package": {
                                        "name": "improbability-drive",
                                        "ecosystem": "GO"
                                    },
                                    "advisory": {
                                        "description": "The Improbability Drive is far too improbable.",
                                        "identifiers": [
                                            { "type": "CVE", "value": "CVE-42" }
                                        ]
                                    }
                                }
                            }
                        ],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    }
                }
            }
        })
    }

    async fn mock_queries(
        server: &mut ServerGuard,
        repo_response: serde_json::Value,
        alert_response: serde_json::Value,
    ) {
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::Regex("vulnerabilityAlerts".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(alert_response.to_string())
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::Regex("organization".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(repo_response.to_string())
            .create_async()
            .await;
    }

    fn source(server: &ServerGuard, teams: Vec<TeamConfig>) -> GithubSource {
        GithubSource::with_endpoint(
            "heart-of-gold",
            "pangalactic-gargleblaster",
            teams,
            format!("{}/graphql", server.url()),
        )
        .expect("failed to build test source")
    }

    async fn collect(source: &GithubSource, collection: &ProjectCollection) -> Result<(), SourceError> {
        let barrier = CompletionBarrier::new();
        let guard = barrier.guard();
        source.collect_findings(collection, guard).await
    }

    fn expected_zaphod(owners: HashSet<TeamConfig>) -> Project {
        Project {
            name: "zaphod".to_string(),
            links: HashMap::from([(
                "GitHub".to_string(),
                "https://heart-of-gold/zaphod".to_string(),
            )]),
            findings: vec![Finding {
                ecosystem: Ecosystem::Go,
                severity: Severity::Critical,
                description: "The Improbability Drive is far too improbable.".to_string(),
                package_name: "improbability-drive".to_string(),
                identifiers: FindingIdentifiers::from([(
                    IdentifierKind::Cve,
                    "CVE-42".to_string(),
                )]),
            }],
            owners,
        }
    }

    #[tokio::test]
    async fn collects_single_project_with_single_finding() {
        let mut server = Server::new_async().await;
        mock_queries(&mut server, single_repo_page(json!([])), single_alert_page()).await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        collect(&source, &collection).await.expect("collection failed");

        assert_eq!(collection.into_projects(), vec![expected_zaphod(HashSet::new())]);
    }

    // An owning team reported by GitHub but absent from configuration must be
    // omitted entirely, never materialized as a placeholder team.
    #[tokio::test]
    async fn unconfigured_owner_slug_is_dropped() {
        let mut server = Server::new_async().await;
        mock_queries(
            &mut server,
            single_repo_page(json!([{ "slug": "crew" }])),
            single_alert_page(),
        )
        .await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        collect(&source, &collection).await.expect("collection failed");

        assert_eq!(collection.into_projects(), vec![expected_zaphod(HashSet::new())]);
    }

    #[tokio::test]
    async fn configured_owner_is_resolved_by_slug() {
        let mut server = Server::new_async().await;
        mock_queries(
            &mut server,
            single_repo_page(json!([{ "slug": "crew" }, { "slug": "marketing" }])),
            single_alert_page(),
        )
        .await;

        let crew = TeamConfig {
            name: "Heart of Gold Crew".to_string(),
            github_slug: "crew".to_string(),
            slack_channel: "#crew".to_string(),
        };
        let source = source(&server, vec![crew.clone()]);
        let collection = ProjectCollection::new();
        collect(&source, &collection).await.expect("collection failed");

        assert_eq!(
            collection.into_projects(),
            vec![expected_zaphod(HashSet::from([crew]))]
        );
    }

    #[tokio::test]
    async fn collecting_the_same_data_twice_is_idempotent() {
        let mut server = Server::new_async().await;
        mock_queries(&mut server, single_repo_page(json!([])), single_alert_page()).await;

        let source = source(&server, Vec::new());

        let first = ProjectCollection::new();
        collect(&source, &first).await.expect("first run failed");
        let second = ProjectCollection::new();
        collect(&source, &second).await.expect("second run failed");

        assert_eq!(first.into_projects(), second.into_projects());
    }

    #[tokio::test]
    async fn pagination_exhausts_repository_and_alert_pages() {
        let mut server = Server::new_async().await;

        // Repository pages: "alpha" then, behind cursor repos-2, "beta".
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("organization".to_string()),
                Matcher::Regex(r#""cursor":null"#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "data": { "organization": { "repositories": {
                        "nodes": [
                            { "name": "alpha", "url": "https://heart-of-gold/alpha", "teams": { "nodes": [] } }
                        ],
                        "pageInfo": { "hasNextPage": true, "endCursor": "repos-2" }
                    } } }
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("organization".to_string()),
                Matcher::Regex(r#""cursor":"repos-2""#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "data": { "organization": { "repositories": {
                        "nodes": [
                            { "name": "beta", "url": "https://heart-of-gold/beta", "teams": { "nodes": [] } }
                        ],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    } } }
                })
                .to_string(),
            )
            .create_async()
            .await;

        // Alpha's alerts span two pages; beta has none.
        let alert = |package: &str| {
            json!({
                "securityVulnerability": {
                    "severity": "HIGH",
                    "package": { "name": package, "ecosystem": "GO" },
                    "advisory": { "description": "d", "identifiers": [] }
                }
            })
        };
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("vulnerabilityAlerts".to_string()),
                Matcher::Regex(r#""cursor":null"#.to_string()),
                Matcher::Regex(r#""name":"alpha""#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "data": { "repository": { "vulnerabilityAlerts": {
                        "nodes": [alert("pkg-one")],
                        "pageInfo": { "hasNextPage": true, "endCursor": "alerts-2" }
                    } } }
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("vulnerabilityAlerts".to_string()),
                Matcher::Regex(r#""cursor":"alerts-2""#.to_string()),
                Matcher::Regex(r#""name":"alpha""#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "data": { "repository": { "vulnerabilityAlerts": {
                        "nodes": [alert("pkg-two")],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    } } }
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("vulnerabilityAlerts".to_string()),
                Matcher::Regex(r#""name":"beta""#.to_string()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "data": { "repository": { "vulnerabilityAlerts": {
                        "nodes": [],
                        "pageInfo": { "hasNextPage": false, "endCursor": null }
                    } } }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        collect(&source, &collection).await.expect("collection failed");

        let projects = collection.into_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "alpha");
        assert_eq!(projects[0].findings.len(), 2);
        // Discovery order within one source is preserved across pages.
        assert_eq!(projects[0].findings[0].package_name, "pkg-one");
        assert_eq!(projects[0].findings[1].package_name, "pkg-two");
        assert_eq!(projects[1].name, "beta");
        assert!(projects[1].findings.is_empty());
    }

    #[tokio::test]
    async fn unknown_severity_label_skips_the_alert_not_the_repository() {
        let mut server = Server::new_async().await;
        let alerts = json!({
            "data": { "repository": { "vulnerabilityAlerts": {
                "nodes": [
                    {
                        "securityVulnerability": {
                            "severity": "APOCALYPTIC",
                            "package": { "name": "doom", "ecosystem": "GO" },
                            "advisory": { "description": "d", "identifiers": [] }
                        }
                    },
                    single_alert_page()["data"]["repository"]["vulnerabilityAlerts"]["nodes"][0]
                ],
                "pageInfo": { "hasNextPage": false, "endCursor": null }
            } } }
        });
        mock_queries(&mut server, single_repo_page(json!([])), alerts).await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        collect(&source, &collection).await.expect("collection failed");

        let projects = collection.into_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].findings.len(), 1);
        assert_eq!(projects[0].findings[0].package_name, "improbability-drive");
    }

    #[tokio::test]
    async fn graphql_errors_surface_as_api_failure() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(
                json!({ "errors": [{ "message": "Bad credentials" }] }).to_string(),
            )
            .create_async()
            .await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        let err = collect(&source, &collection).await.expect_err("expected failure");

        match err {
            SourceError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("Bad credentials"), "unexpected message: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(collection.into_projects().is_empty());
    }

    #[tokio::test]
    async fn http_error_status_surfaces_with_partial_data_retained() {
        let mut server = Server::new_async().await;
        // First repository page succeeds, its alert fetch hits a 500.
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::Regex("organization".to_string()))
            .with_status(200)
            .with_body(single_repo_page(json!([])).to_string())
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::Regex("vulnerabilityAlerts".to_string()))
            .with_status(500)
            .with_body("upstream exploded")
            .create_async()
            .await;

        let source = source(&server, Vec::new());
        let collection = ProjectCollection::new();
        let err = collect(&source, &collection).await.expect_err("expected failure");

        match err {
            SourceError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
        // The project and its link were merged before the failure and stay.
        let projects = collection.into_projects();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "zaphod");
        assert!(projects[0].findings.is_empty());
    }

    #[test]
    fn severity_mapping_is_case_sensitive_and_exact() {
        assert_eq!(severity_from_github("CRITICAL"), Ok(Severity::Critical));
        assert_eq!(severity_from_github("HIGH"), Ok(Severity::High));
        assert_eq!(severity_from_github("MODERATE"), Ok(Severity::Medium));
        assert_eq!(severity_from_github("LOW"), Ok(Severity::Low));
        assert_eq!(
            severity_from_github("Critical"),
            Err(ClassificationError::UnknownSeverity("Critical".to_string()))
        );
    }

    #[test]
    fn ecosystem_mapping_covers_github_values() {
        assert_eq!(ecosystem_from_github("GO"), Ok(Ecosystem::Go));
        assert_eq!(ecosystem_from_github("NPM"), Ok(Ecosystem::Npm));
        assert_eq!(ecosystem_from_github("PIP"), Ok(Ecosystem::PyPI));
        assert_eq!(ecosystem_from_github("RUST"), Ok(Ecosystem::Cargo));
        assert_eq!(
            ecosystem_from_github("ACTIONS"),
            Err(ClassificationError::UnknownEcosystem("ACTIONS".to_string()))
        );
    }

    #[test]
    fn normalize_keeps_first_value_per_identifier_kind() {
        let vulnerability = SecurityVulnerability {
            severity: "LOW".to_string(),
            package: AlertPackage {
                name: "improbability-drive".to_string(),
                ecosystem: "GO".to_string(),
            },
            advisory: Advisory {
                description: "d".to_string(),
                identifiers: vec![
                    AdvisoryIdentifier { kind: "GHSA".to_string(), value: "GHSA-1".to_string() },
                    AdvisoryIdentifier { kind: "CVE".to_string(), value: "CVE-42".to_string() },
                    AdvisoryIdentifier { kind: "CVE".to_string(), value: "CVE-43".to_string() },
                    AdvisoryIdentifier { kind: "OSV".to_string(), value: "ignored".to_string() },
                ],
            },
        };

        let finding = normalize_alert(vulnerability).expect("normalization failed");
        assert_eq!(
            finding.identifiers,
            FindingIdentifiers::from([
                (IdentifierKind::Cve, "CVE-42".to_string()),
                (IdentifierKind::Ghsa, "GHSA-1".to_string()),
            ])
        );
    }
}

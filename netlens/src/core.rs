//! Core review logic shared by library consumers and the CLI.
//! No transport, persistence or UI dependencies.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::analysis::{analyze_circuit, CircuitAnalysis};
use crate::graph::{convert_to_graph, GraphData};
use crate::schema::NetlistData;
use crate::validator::{Finding, RulesEngine, Severity};

#[derive(Debug, thiserror::Error)]
pub enum NetlensError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for NetlensError {
    fn from(e: serde_json::Error) -> Self {
        NetlensError::Parse(e.to_string())
    }
}

/// Options for review runs (CLI or embedding application).
#[derive(Clone, Debug)]
pub struct ReviewOptions {
    /// Attach the force-graph conversion to the result.
    pub include_graph: bool,
    /// Attach circuit statistics to the result.
    pub include_analysis: bool,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            include_graph: true,
            include_analysis: true,
        }
    }
}

/// A reported validation issue: one finding plus reporting metadata.
///
/// The message text is the finding's stable contract string; `component`
/// and `net` expose the same data as typed fields so consumers do not have
/// to re-parse the message.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Issue {
    pub id: String,
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<String>,
}

impl Issue {
    pub fn from_finding(finding: &Finding) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            rule_id: finding.rule_id().to_string(),
            severity: finding.severity(),
            message: finding.to_string(),
            component: finding.component().map(str::to_string),
            net: finding.net().map(str::to_string),
        }
    }
}

/// Issue counts by severity.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ReviewStats {
    pub errors: usize,
    pub warnings: usize,
}

fn issues_to_stats(issues: &[Issue]) -> ReviewStats {
    let mut errors = 0;
    let mut warnings = 0;
    for issue in issues {
        match issue.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
        }
    }
    ReviewStats { errors, warnings }
}

/// Per-netlist review result with issues, counts and optional derived data.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReviewResult {
    /// Source file, when the review started from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub issues: Vec<Issue>,
    pub stats: ReviewStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<CircuitAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphData>,
    pub generated_at: DateTime<Utc>,
}

impl ReviewResult {
    pub fn has_errors(&self) -> bool {
        self.stats.errors > 0
    }

    pub fn total_issues(&self) -> usize {
        self.stats.errors + self.stats.warnings
    }

    /// The rendered message of every issue, in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.message.as_str()).collect()
    }
}

/// Parse a netlist from JSON text.
pub fn parse_netlist(json: &str) -> Result<NetlistData, NetlensError> {
    let netlist: NetlistData = serde_json::from_str(json)?;
    tracing::debug!(
        components = netlist.components.len(),
        nets = netlist.nets.len(),
        "parsed netlist payload"
    );
    Ok(netlist)
}

/// Load and parse a netlist file.
pub fn load_netlist(path: &Path) -> Result<NetlistData, NetlensError> {
    let text = std::fs::read_to_string(path)?;
    parse_netlist(&text)
}

/// Recursively discover netlist JSON files in a directory.
pub fn discover_netlist_files(dir: &Path) -> Result<Vec<PathBuf>, NetlensError> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files, 0)?;
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>, depth: usize) -> Result<(), NetlensError> {
    if depth > 20 {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if name.starts_with('.') || name == "node_modules" || name == "target" || name == "build" {
                continue;
            }
            walk_dir(&path, files, depth + 1)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                match ext {
                    "json" | "netlist" => files.push(path),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Core review API used by both embedding applications and the CLI.
pub struct NetlensCore;

impl NetlensCore {
    /// Review an already-parsed netlist.
    pub fn review_netlist(netlist: &NetlistData, options: ReviewOptions) -> ReviewResult {
        let engine = RulesEngine::with_default_rules();
        let issues: Vec<Issue> = engine
            .analyze(netlist)
            .iter()
            .map(Issue::from_finding)
            .collect();
        let stats = issues_to_stats(&issues);

        let analysis = options.include_analysis.then(|| analyze_circuit(netlist));
        let graph = options.include_graph.then(|| convert_to_graph(netlist));

        ReviewResult {
            file: None,
            issues,
            stats,
            analysis,
            graph,
            generated_at: Utc::now(),
        }
    }

    /// Review a netlist from JSON text.
    pub fn review_str(json: &str, options: ReviewOptions) -> Result<ReviewResult, NetlensError> {
        let netlist = parse_netlist(json)?;
        Ok(Self::review_netlist(&netlist, options))
    }

    /// Review a single netlist file.
    pub fn review_file(path: &Path, options: ReviewOptions) -> Result<ReviewResult, NetlensError> {
        let netlist = load_netlist(path)?;
        let mut result = Self::review_netlist(&netlist, options);
        result.file = Some(path.to_path_buf());
        Ok(result)
    }

    /// Review every netlist file in a directory.
    pub fn review_project(
        dir: &Path,
        options: ReviewOptions,
    ) -> Result<Vec<ReviewResult>, NetlensError> {
        let files = discover_netlist_files(dir)?;
        tracing::info!(files = files.len(), dir = %dir.display(), "reviewing project");
        let mut results = Vec::new();
        for path in files {
            results.push(Self::review_file(&path, options.clone())?);
        }
        Ok(results)
    }
}

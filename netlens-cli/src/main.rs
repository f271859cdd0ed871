//! Netlens CLI - PCB netlist validation and graph export from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use netlens::{
    analyze_circuit, convert_to_graph, load_netlist, Issue, NetlensCore, ReviewOptions,
    ReviewResult, Severity,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "netlens")]
#[command(about = "PCB netlist validation and graph export tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single netlist file
    Check {
        /// Path to a netlist .json file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if issues found at this severity or higher
        #[arg(long, value_enum)]
        fail_on: Option<FailOnSeverity>,

        /// Skip circuit statistics
        #[arg(long)]
        no_analysis: bool,
    },

    /// Convert a netlist file to force-graph JSON
    Graph {
        /// Path to a netlist .json file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print circuit statistics for a netlist file
    Analyze {
        /// Path to a netlist .json file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Validate all netlist files in a directory
    Project {
        /// Path to project directory
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if issues found at this severity or higher
        #[arg(long, value_enum)]
        fail_on: Option<FailOnSeverity>,
    },

    /// List available validation rules
    Rules {
        /// Show detailed rule descriptions
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for CI/CD
    Json,
    /// GitHub Actions format
    Github,
    /// GitLab CI format
    Gitlab,
}

#[derive(Clone, ValueEnum)]
enum FailOnSeverity {
    Errors,
    Warnings,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            file,
            format,
            fail_on,
            no_analysis,
        } => handle_check(&file, format, fail_on, no_analysis),
        Commands::Graph { file, compact } => handle_graph(&file, compact),
        Commands::Analyze { file, json } => handle_analyze(&file, json),
        Commands::Project {
            dir,
            format,
            fail_on,
        } => handle_project(&dir, format, fail_on),
        Commands::Rules { verbose } => {
            handle_rules(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_check(
    file: &PathBuf,
    format: OutputFormat,
    fail_on: Option<FailOnSeverity>,
    no_analysis: bool,
) -> i32 {
    let ext = file.extension().and_then(|s| s.to_str());
    if !matches!(ext, Some("json") | Some("netlist")) {
        eprintln!("Error: File must be .json or .netlist");
        return 1;
    }

    let options = ReviewOptions {
        include_graph: false,
        include_analysis: !no_analysis,
    };

    match NetlensCore::review_file(file, options) {
        Ok(review) => {
            output_results(&[review.clone()], &format);
            if let Some(severity) = fail_on {
                if should_fail(&review, &severity) {
                    return 1;
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_graph(file: &PathBuf, compact: bool) -> i32 {
    let netlist = match load_netlist(file) {
        Ok(netlist) => netlist,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let graph = convert_to_graph(&netlist);
    let rendered = if compact {
        serde_json::to_string(&graph)
    } else {
        serde_json::to_string_pretty(&graph)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_analyze(file: &PathBuf, json: bool) -> i32 {
    let netlist = match load_netlist(file) {
        Ok(netlist) => netlist,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let analysis = analyze_circuit(&netlist);
    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
        return 0;
    }

    println!("Circuit analysis for: {}", file.display());
    println!("  Components:  {}", analysis.component_count);
    println!("  Nets:        {}", analysis.net_count);
    println!("  Connections: {}", analysis.connection_count);
    println!("  Complexity:  {:.1}", analysis.complexity_score);
    if !analysis.component_types.is_empty() {
        println!("\n  Component types:");
        for (kind, count) in &analysis.component_types {
            println!("    {:<16} {}", kind, count);
        }
    }
    if !analysis.net_categories.is_empty() {
        println!("\n  Net categories:");
        for (category, count) in &analysis.net_categories {
            println!("    {:<16} {}", category, count);
        }
    }
    0
}

fn handle_project(
    dir: &PathBuf,
    format: OutputFormat,
    fail_on: Option<FailOnSeverity>,
) -> i32 {
    let options = ReviewOptions {
        include_graph: false,
        include_analysis: true,
    };

    match NetlensCore::review_project(dir, options) {
        Ok(results) => {
            output_results(&results, &format);
            if let Some(severity) = fail_on {
                for result in &results {
                    if should_fail(result, &severity) {
                        return 1;
                    }
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn should_fail(result: &ReviewResult, severity: &FailOnSeverity) -> bool {
    match severity {
        FailOnSeverity::Errors => result.has_errors(),
        FailOnSeverity::Warnings => result.total_issues() > 0,
    }
}

fn output_results(results: &[ReviewResult], format: &OutputFormat) {
    match format {
        OutputFormat::Human => output_human(results),
        OutputFormat::Json => output_json(results),
        OutputFormat::Github => output_github(results),
        OutputFormat::Gitlab => output_gitlab(results),
    }
}

fn display_file(result: &ReviewResult) -> String {
    result
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}

fn output_human(results: &[ReviewResult]) {
    for result in results {
        println!("\nFile: {}", display_file(result));
        println!("{}", "─".repeat(60));

        if result.total_issues() == 0 {
            println!("  No issues found");
        } else {
            let errors: Vec<&Issue> = result
                .issues
                .iter()
                .filter(|i| matches!(i.severity, Severity::Error))
                .collect();
            let warnings: Vec<&Issue> = result
                .issues
                .iter()
                .filter(|i| matches!(i.severity, Severity::Warning))
                .collect();

            if !errors.is_empty() {
                println!("\n  ERRORS:");
                for issue in errors {
                    println!("    - {}", issue.message);
                    if let Some(ref comp) = issue.component {
                        println!("      Component: {}", comp);
                    }
                }
            }
            if !warnings.is_empty() {
                println!("\n  WARNINGS:");
                for issue in warnings {
                    println!("    - {}", issue.message);
                    if let Some(ref comp) = issue.component {
                        println!("      Component: {}", comp);
                    }
                }
            }

            println!("\n  Summary:");
            println!("    Errors:   {}", result.stats.errors);
            println!("    Warnings: {}", result.stats.warnings);
        }

        if let Some(ref analysis) = result.analysis {
            println!(
                "  Circuit: {} components, {} nets, {} connections, complexity {:.1}",
                analysis.component_count,
                analysis.net_count,
                analysis.connection_count,
                analysis.complexity_score
            );
        }
    }
}

fn output_json(results: &[ReviewResult]) {
    let output = serde_json::json!({
        "results": results,
        "summary": {
            "total_files": results.len(),
            "total_issues": results.iter().map(|r| r.total_issues()).sum::<usize>(),
            "errors": results.iter().map(|r| r.stats.errors).sum::<usize>(),
            "warnings": results.iter().map(|r| r.stats.warnings).sum::<usize>(),
        }
    });
    match serde_json::to_string_pretty(&output) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn severity_to_github(issue: &Issue) -> &'static str {
    match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

fn output_github(results: &[ReviewResult]) {
    for result in results {
        for issue in &result.issues {
            let level = severity_to_github(issue);
            println!(
                "::{} file={}::{}",
                level,
                display_file(result),
                issue.message.replace('\n', " ")
            );
        }
    }
}

fn severity_to_gitlab(issue: &Issue) -> &'static str {
    match issue.severity {
        Severity::Error => "major",
        Severity::Warning => "minor",
    }
}

fn output_gitlab(results: &[ReviewResult]) {
    let mut reports = Vec::new();
    for result in results {
        for issue in &result.issues {
            reports.push(serde_json::json!({
                "description": issue.message,
                "severity": severity_to_gitlab(issue),
                "location": {
                    "path": display_file(result),
                }
            }));
        }
    }
    match serde_json::to_string_pretty(&reports) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn handle_rules(verbose: bool) {
    println!("Available validation rules:\n");

    let rules = [
        (
            "component_integrity",
            "Component integrity",
            "Requires a name, a type, and at least one pin per component",
        ),
        (
            "duplicate_names",
            "Duplicate component names",
            "Flags component names used more than once",
        ),
        (
            "net_connectivity",
            "Net connectivity",
            "Requires named nets with 2+ connections resolving to real component pins",
        ),
        (
            "ground_distribution",
            "Ground distribution",
            "Requires a ground net and checks non-exempt components are on it",
        ),
        (
            "power_distribution",
            "Power distribution",
            "Requires at least one power net",
        ),
    ];

    for (name, short, long) in &rules {
        println!("  {}", name);
        println!("    {}", short);
        if verbose {
            println!("    {}", long);
        }
        println!();
    }
}

use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use super_manager_paths::{
    is_valid_hook_event, matches_secret_pattern, ConfigPaths, ProcessEnv, DEFAULT_CONFIG_REPO,
    SECRET_PATTERNS, VALID_HOOK_EVENTS,
};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize JSON output")?;
    print_stdout(&text)
}

#[derive(Parser)]
#[command(name = "super-manager-paths")]
#[command(about = "Inspect the super-manager path registry", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Base directory to derive paths from (defaults to HOME, then USERPROFILE)
    #[arg(long, global = true)]
    home: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every named path
    List(JsonArgs),

    /// Print a single named path
    Get(GetArgs),

    /// Locate servers.yaml (exit code 1 when no candidate exists)
    #[command(name = "servers-yaml")]
    ServersYaml(ServersYamlArgs),

    /// List valid hook event names
    Events(CheckArgs),

    /// List secret-detection patterns
    #[command(name = "secret-patterns")]
    SecretPatterns(CheckArgs),

    /// Print the bootstrap config repository
    #[command(name = "default-repo")]
    DefaultRepo,
}

#[derive(Args)]
struct JsonArgs {
    /// Emit JSON instead of tab-separated text
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

#[derive(Args)]
struct GetArgs {
    /// Path name as shown by `list` (e.g. hooks_dir)
    name: String,
}

#[derive(Args)]
struct ServersYamlArgs {
    /// Print the full search list instead of the first hit
    #[arg(long)]
    candidates: bool,

    #[command(flatten)]
    output: JsonArgs,
}

#[derive(Args)]
struct CheckArgs {
    /// Check a single token instead of listing (case-sensitive)
    #[arg(long)]
    check: Option<String>,
}

#[derive(Serialize)]
struct ServersYamlOutput<'a> {
    found: Option<PathBuf>,
    candidates: &'a [PathBuf],
}

pub fn main_entry() -> Result<ExitCode> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::List(args) => args.json,
        Commands::ServersYaml(args) => args.output.json,
        _ => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let paths = resolve_paths(cli.home.as_deref());
    log::debug!("registry home: {}", paths.home.display());

    match cli.command {
        Commands::List(args) => run_list(&paths, &args),
        Commands::Get(args) => run_get(&paths, &args),
        Commands::ServersYaml(args) => run_servers_yaml(&paths, &args),
        Commands::Events(args) => run_events(&args),
        Commands::SecretPatterns(args) => run_secret_patterns(&args),
        Commands::DefaultRepo => {
            print_stdout(DEFAULT_CONFIG_REPO)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_paths(home: Option<&Path>) -> ConfigPaths {
    match home {
        Some(home) => ConfigPaths::from_env_with_home(&ProcessEnv, home),
        None => ConfigPaths::global().clone(),
    }
}

fn run_list(paths: &ConfigPaths, args: &JsonArgs) -> Result<ExitCode> {
    if args.json {
        print_json(paths, args.pretty)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut out = String::new();
    for (name, path) in paths.entries() {
        out.push_str(&format!("{name}\t{}\n", path.display()));
    }
    for (idx, candidate) in paths.mcp_servers_yaml_paths.iter().enumerate() {
        out.push_str(&format!("servers_yaml[{idx}]\t{}\n", candidate.display()));
    }
    for file in &paths.known_env_files {
        out.push_str(&format!("env_file[{}]\t{}\n", file.service, file.path.display()));
    }
    print_stdout(out.trim_end())?;
    Ok(ExitCode::SUCCESS)
}

fn run_get(paths: &ConfigPaths, args: &GetArgs) -> Result<ExitCode> {
    let path = paths
        .get(&args.name)
        .with_context(|| format!("No path named `{}` (see `list`)", args.name))?;
    print_stdout(&path.display().to_string())?;
    Ok(ExitCode::SUCCESS)
}

fn run_servers_yaml(paths: &ConfigPaths, args: &ServersYamlArgs) -> Result<ExitCode> {
    let candidates = paths.mcp_servers_yaml_paths.candidates();
    let found = paths.find_servers_yaml();

    if args.output.json {
        let output = ServersYamlOutput {
            found: found.clone(),
            candidates,
        };
        print_json(&output, args.output.pretty)?;
    } else if args.candidates {
        let lines: Vec<String> = candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect();
        print_stdout(&lines.join("\n"))?;
        return Ok(ExitCode::SUCCESS);
    } else if let Some(path) = &found {
        print_stdout(&path.display().to_string())?;
    }

    if found.is_none() {
        log::warn!(
            "servers.yaml not found (searched {} candidates)",
            candidates.len()
        );
        if !args.output.json {
            eprintln!("servers.yaml not found; searched:");
            for candidate in candidates {
                eprintln!("  {}", candidate.display());
            }
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_events(args: &CheckArgs) -> Result<ExitCode> {
    match &args.check {
        Some(name) => report_check(name, is_valid_hook_event(name), "valid hook event"),
        None => {
            print_stdout(&VALID_HOOK_EVENTS.join("\n"))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_secret_patterns(args: &CheckArgs) -> Result<ExitCode> {
    match &args.check {
        Some(name) => report_check(name, matches_secret_pattern(name), "secret-like key"),
        None => {
            print_stdout(&SECRET_PATTERNS.join("\n"))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_check(name: &str, ok: bool, what: &str) -> Result<ExitCode> {
    if ok {
        print_stdout(&format!("{name}: {what}"))?;
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{name}: not a {what}");
        Ok(ExitCode::FAILURE)
    }
}

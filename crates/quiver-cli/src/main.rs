//! quiver CLI: run YAML pipelines of curried list/object operations over JSON.

use clap::{Parser, Subcommand};
use quiver_core::config::QuiverConfig;
use quiver_core::Value;
use quiver_ops::{Curried, Registry};
use quiver_pipeline::input::read_json_file;
use quiver_pipeline::{parse_yaml_pipeline, PipelineConfig, Runner};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiver")]
#[command(about = "Run pipelines of curried list/object operations over JSON data", long_about = None)]
struct Cli {
    /// Log filter directive (overrides QUIVER_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a pipeline from a YAML file
    Run {
        /// Path to the pipeline YAML file
        #[arg(short, long)]
        pipeline: PathBuf,

        /// JSON document fed to the first step (defaults to null)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Bind a JSON file to a `$ref` name, as NAME=FILE (repeatable)
        #[arg(long = "bind", value_parser = parse_bind)]
        binds: Vec<(String, PathBuf)>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON result (overrides config)
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a pipeline YAML file (syntax and operation names)
    Validate {
        /// Path to the pipeline YAML file
        #[arg(short, long)]
        pipeline: PathBuf,
    },

    /// Show each step of a pipeline with its operation's arity
    Explain {
        /// Path to the pipeline YAML file
        #[arg(short, long)]
        pipeline: PathBuf,
    },

    /// List the available operations
    Ops,
}

fn main() {
    let cli = Cli::parse();
    let env_cfg = QuiverConfig::from_env();
    init_logging(cli.log.as_deref().unwrap_or(&env_cfg.log_filter));

    match cli.command {
        Commands::Run {
            pipeline,
            input,
            binds,
            output,
            pretty,
        } => {
            if let Err(e) = run_pipeline(env_cfg, &pipeline, input, &binds, output, pretty) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { pipeline } => {
            if let Err(e) = validate_pipeline(&pipeline) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Pipeline is valid");
        }
        Commands::Explain { pipeline } => {
            if let Err(e) = explain_pipeline(&pipeline) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Ops => list_ops(&Registry::new()),
    }
}

fn init_logging(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_pipeline(
    env_cfg: QuiverConfig,
    pipeline_path: &Path,
    input: Option<PathBuf>,
    binds: &[(String, PathBuf)],
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(pipeline_path)?;
    let parsed = parse_yaml_pipeline(&yaml_content)?;

    let config = resolve_config(env_cfg, &parsed.config, pretty);
    config.validate()?;
    debug!(?config, "resolved configuration");

    let mut runner = Runner::new();
    for (name, path) in binds {
        runner.bind(name.clone(), read_json_file(path, config.input_cap_bytes)?);
    }
    let data = match input {
        Some(path) => read_json_file(&path, config.input_cap_bytes)?,
        None => Value::Null,
    };

    let result = runner.run(&parsed, data)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match output {
        Some(path) => fs::write(path, rendered + "\n")?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn validate_pipeline(pipeline_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(pipeline_path)?;
    let parsed = parse_yaml_pipeline(&yaml_content)?;
    parsed.validate(&Registry::new())?;
    Ok(())
}

fn explain_pipeline(pipeline_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(pipeline_path)?;
    let parsed = parse_yaml_pipeline(&yaml_content)?;
    let registry = Registry::new();
    parsed.validate(&registry)?;

    println!("Pipeline Execution Plan");
    println!("=======================");
    println!();
    for (i, step) in parsed.steps.iter().enumerate() {
        let Some(op) = registry.get(&step.op) else {
            continue;
        };
        let feeds = if step.args.len() >= op.arity() {
            "source"
        } else {
            "data last"
        };
        println!(
            "  {}. {} (arity {}, {} arg(s), {})",
            i + 1,
            step.op,
            arity_label(op),
            step.args.len(),
            feeds
        );
    }
    let refs = parsed.references();
    if !refs.is_empty() {
        println!();
        println!("References: {}", refs.join(", "));
    }
    Ok(())
}

fn list_ops(registry: &Registry) {
    for op in registry.iter() {
        println!("{:<10} {}", op.name(), arity_label(op));
    }
}

fn arity_label(op: &Curried) -> String {
    if op.max_arity() > op.arity() {
        format!("{}..{}", op.arity(), op.max_arity())
    } else {
        op.arity().to_string()
    }
}

/// Environment (already in `base`) < pipeline `config:` < CLI flags.
fn resolve_config(base: QuiverConfig, doc: &PipelineConfig, pretty_flag: bool) -> QuiverConfig {
    let mut cfg = base;
    doc.apply_to(&mut cfg);
    if pretty_flag {
        cfg.pretty = true;
    }
    cfg
}

fn parse_bind(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=FILE, got `{}`", s)),
    }
}

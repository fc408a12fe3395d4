use clap::{Parser, Subcommand};
use pitchgen::config::{self, Layout, ToolConfig};
use pitchgen::git::{self, GitCli, PublishOptions};
use pitchgen::{output, pipeline, scan};
use std::path::PathBuf;

/// Flags that override `config.toml` for a build.
#[derive(clap::Args, Clone)]
struct BuildArgs {
    /// Do not perform any git operations after generating the files
    #[arg(long, conflicts_with = "push")]
    no_git: bool,

    /// Push after generating and committing the changes
    #[arg(long)]
    push: bool,

    /// Commit message (without one, `git commit` opens your editor)
    #[arg(short, long)]
    message: Option<String>,

    /// Index layout
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Keep non-ASCII letters in presentation directory names
    #[arg(long)]
    allow_unicode: bool,
}

#[derive(Parser)]
#[command(name = "pitchgen")]
#[command(about = "Generate groups of related GitPitch presentations")]
#[command(long_about = "\
Generate groups of related GitPitch presentations

Markdown files under the source directory become presentation directories
in the output directory, each with a PITCHME.md (and PITCHME.yaml when
metadata exists). A top-level PITCHME.md index links to every presentation.

Source structure:

  assets/src/
  ├── config.toml          # Tool configuration (optional)
  ├── common.yaml          # Metadata for talks without their own (optional)
  ├── index.yaml           # Metadata for the index slide (optional)
  ├── Intro to Rust.md     # → intro-to-rust/PITCHME.md
  ├── Intro to Rust.yaml   # → intro-to-rust/PITCHME.yaml
  └── advanced/
      └── Async Rust.md    # → async-rust/PITCHME.md (+ common.yaml)

Images and CSS belong under assets/ as GitPitch expects; pitchgen leaves
them alone. Directories of removed presentations are not deleted.

Run 'pitchgen gen-config' to print a documented config.toml.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Directory containing Markdown and YAML sources
    #[arg(long, default_value = "assets/src", global = true)]
    src_dir: PathBuf,

    /// Top-level directory for the index and presentation directories
    #[arg(long, default_value = ".", global = true)]
    output_dir: PathBuf,

    #[command(flatten)]
    build: BuildArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the presentation directories and index, then commit (default)
    Build(BuildArgs),
    /// List the presentations that would be generated
    Scan {
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,

        /// Keep non-ASCII letters in presentation directory names
        #[arg(long)]
        allow_unicode: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build(cli.build)) {
        Command::Build(args) => {
            let mut config = config::load_config(&cli.src_dir)?;
            apply_overrides(&mut config, &args);
            config.validate()?;

            println!("==> Building {} → {}", cli.src_dir.display(), cli.output_dir.display());
            let report = pipeline::build(&cli.src_dir, &cli.output_dir, &config)?;
            output::print_build_output(&report, &cli.src_dir, &cli.output_dir);

            let outcome = if config.git.enabled {
                println!("==> Committing changes in {}", cli.output_dir.display());
                let options = PublishOptions {
                    push: config.git.push,
                    commit_message: config.git.commit_message.clone(),
                };
                let outcome = git::publish(&GitCli::new(&cli.output_dir), &options);
                output::print_publish_outcome(&outcome);
                Some(outcome)
            } else {
                None
            };
            output::print_finish(outcome.as_ref());
        }
        Command::Scan {
            json,
            allow_unicode,
        } => {
            let mut config = config::load_config(&cli.src_dir)?;
            apply_unicode_override(&mut config, allow_unicode);
            let result = scan::scan(&cli.src_dir, config.slug.allow_unicode)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::print_scan_output(&result, &cli.src_dir);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Command-line flags win over `config.toml`.
fn apply_overrides(config: &mut ToolConfig, args: &BuildArgs) {
    if args.no_git {
        config.git.enabled = false;
    }
    if args.push {
        config.git.push = true;
    }
    if let Some(message) = &args.message {
        config.git.commit_message = Some(message.clone());
    }
    if let Some(layout) = args.layout {
        config.index.layout = layout;
    }
    apply_unicode_override(config, args.allow_unicode);
}

fn apply_unicode_override(config: &mut ToolConfig, allow_unicode: bool) {
    if allow_unicode {
        config.slug.allow_unicode = true;
    }
}

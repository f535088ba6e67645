use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vbump::cli::{self, BumpArgs, CurrentArgs, InitArgs};
use vbump::domain::BumpKind;
use vbump::ui;

#[derive(Parser)]
#[command(
    name = "vbump",
    version,
    about = "Bump the package.json version, commit, tag, push and merge into release branches"
)]
struct Args {
    #[arg(short = 'C', long, global = true, default_value = ".", help = "Project root")]
    cwd: PathBuf,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump the version and run the release workflow
    #[command(group(ArgGroup::new("kind").args(["major", "minor", "patch"])))]
    Bump {
        #[arg(long, help = "Increment the major version (X.0.0)")]
        major: bool,

        #[arg(long, help = "Increment the minor version (x.Y.0)")]
        minor: bool,

        #[arg(long, help = "Increment the patch version (x.y.Z)")]
        patch: bool,

        #[arg(short, long, help = "Commit message (overrides the template)")]
        message: Option<String>,

        #[arg(short, long, help = "Branch to commit and tag on")]
        source: Option<String>,

        #[arg(short, long, help = "Comma-separated branches to merge the release into")]
        targets: Option<String>,

        #[arg(long, help = "Do not push anything")]
        skip_push: bool,

        #[arg(long, help = "Do not merge into target branches")]
        skip_merge: bool,

        #[arg(short, long, help = "Path to the manifest file")]
        package: Option<PathBuf>,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,

        #[arg(long, overrides_with = "no_tag", help = "Create a git tag")]
        tag: bool,

        #[arg(long, overrides_with = "tag", help = "Do not create a git tag")]
        no_tag: bool,

        #[arg(long, help = "Prefix for the tag name")]
        tag_prefix: Option<String>,
    },

    /// Print the current manifest version
    Current {
        #[arg(short, long, help = "Path to the manifest file")]
        package: Option<PathBuf>,
    },

    /// Create a vbump.json configuration file
    Init {
        #[arg(short, long, help = "Accept all defaults without prompting")]
        yes: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn bump_kind(major: bool, minor: bool, patch: bool) -> Option<BumpKind> {
    if major {
        Some(BumpKind::Major)
    } else if minor {
        Some(BumpKind::Minor)
    } else if patch {
        Some(BumpKind::Patch)
    } else {
        None
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Bump {
            major,
            minor,
            patch,
            message,
            source,
            targets,
            skip_push,
            skip_merge,
            package,
            dry_run,
            tag,
            no_tag,
            tag_prefix,
        } => {
            let tag = match (tag, no_tag) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            cli::run_bump(&BumpArgs {
                root: args.cwd,
                config_path: args.config,
                bump_kind: bump_kind(major, minor, patch),
                message,
                source,
                targets,
                skip_push,
                skip_merge,
                package,
                dry_run,
                tag,
                tag_prefix,
            })?;
        }
        Command::Current { package } => {
            cli::run_current(&CurrentArgs {
                root: args.cwd,
                config_path: args.config,
                package,
            })?;
        }
        Command::Init { yes } => {
            cli::run_init(&InitArgs {
                root: args.cwd,
                config_path: args.config,
                yes,
            })?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

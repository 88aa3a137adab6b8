use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use mister_bump::cli::{execute_bump, BumpArgs};
use mister_bump::config;
use mister_bump::domain::SuffixStyle;
use mister_bump::git::{Git2Repository, Repository};
use mister_bump::ui;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum StyleArg {
    #[value(name = "rc")]
    Rc,
    #[value(name = ".dev")]
    Dev,
}

impl From<StyleArg> for SuffixStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Rc => SuffixStyle::ReleaseCandidate,
            StyleArg::Dev => SuffixStyle::DevRelease,
        }
    }
}

#[derive(clap::Parser)]
#[command(
    name = "mister-bump",
    version,
    about = "Get appropriate project version number based on Git status"
)]
struct Args {
    #[arg(
        value_name = "OVERRIDE",
        help = "Override version number. Must be in the format \"release-0.0.0-000-aaaaaa\""
    )]
    override_version: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(short, long, value_enum, help = "Style of suffix")]
    style: Option<StyleArg>,

    #[arg(short, long, help = "Do not increment version number")]
    no_increment: bool,

    #[arg(
        short,
        long,
        help = "Prefix expected before the \"release-X.X.X\" tag, e.g. \"fred/\" for \"fred/release-0.1.0\""
    )]
    prefix: Option<String>,

    #[arg(short, long, help = "Branch name to apply, instead of detecting it")]
    branch: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Remote to fetch tags from")]
    remote: Option<String>,

    #[arg(long, help = "Do not fetch tags from the remote first")]
    no_fetch: bool,
}

impl Args {
    fn into_bump_args(self, config: &config::Config) -> BumpArgs {
        let mut bump = BumpArgs::from_config(config);

        bump.override_descriptor = self.override_version;
        bump.branch = self.branch;
        if let Some(style) = self.style {
            bump.style = style.into();
        }
        if self.no_increment {
            bump.increment = false;
        }
        if let Some(prefix) = self.prefix {
            bump.prefix = prefix;
        }
        if let Some(remote) = self.remote {
            bump.remote = remote;
        }
        if self.no_fetch {
            bump.fetch = false;
        }

        bump
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<String> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let bump_args = args.into_bump_args(&config);

    let repo = match Git2Repository::open(".") {
        Ok(repo) => Some(repo),
        Err(e) if bump_args.override_descriptor.is_some() => {
            log::debug!("Continuing without a repository: {}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = execute_bump(repo.as_ref().map(|r| r as &dyn Repository), &bump_args)?;
    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    Ok(outcome.version)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(version) => ui::display_version(&version),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    RenderOptions, SiteBuild, build_site, extract_title, io, render_markdown_document_with,
};
use std::{
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "markdown-sitegen", version, about = "Static site generator for markdown")]
struct Cli {
    /// Log at debug level instead of info
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy the static tree and generate every page into the output directory
    Build(BuildArgs),

    /// Print the HTML fragment for a single markdown file
    Render {
        file: PathBuf,

        /// Escape text and attribute values
        #[arg(long)]
        escape_html: bool,
    },

    /// Print the title of a single markdown file
    Title { file: PathBuf },

    /// Write a default sitegen.toml in the current directory
    Init,
}

#[derive(Args)]
struct BuildArgs {
    /// Config file [default: ./sitegen.toml, skipped when absent]
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long = "content")]
    content_dir: Option<PathBuf>,

    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Deleted and recreated on every build
    #[arg(long = "output")]
    output_dir: Option<PathBuf>,

    #[arg(long = "template")]
    template_path: Option<PathBuf>,

    #[arg(long)]
    escape_html: bool,
}

impl BuildArgs {
    /// Flags win over the config file, which wins over defaults.
    fn resolve(self, config: Config) -> SiteBuild {
        SiteBuild {
            content_dir: self.content_dir.unwrap_or(config.content_dir),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            output_dir: self.output_dir.unwrap_or(config.output_dir),
            template_path: self.template_path.unwrap_or(config.template_path),
            render: RenderOptions {
                escape_html: self.escape_html || config.escape_html,
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build(args),
        Command::Render { file, escape_html } => {
            let markdown = read_markdown(&file)?;
            let html = render_markdown_document_with(&markdown, &RenderOptions { escape_html })
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{html}");
            Ok(())
        }
        Command::Title { file } => {
            let markdown = read_markdown(&file)?;
            let title = extract_title(&markdown)
                .with_context(|| format!("Failed to read title of {}", file.display()))?;
            println!("{title}");
            Ok(())
        }
        Command::Init => init(),
    }
}

fn init() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    Config::default()
        .save()
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("wrote {}", config_path.display());
    Ok(())
}

/// Explicit path if given, otherwise `./sitegen.toml`. A missing file means
/// defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    Ok(match loaded {
        Some(config) => {
            log::info!("Config path: {}", config_path.display());
            config
        }
        None => {
            log::debug!("no config at {}, using defaults", config_path.display());
            Config::default()
        }
    })
}

fn build(args: BuildArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let site = args.resolve(config);
    let report = build_site(&site).with_context(|| {
        format!(
            "Failed to build {} into {}",
            site.content_dir.display(),
            site.output_dir.display()
        )
    })?;

    log::info!(
        "done: {} pages, {} static files",
        report.pages.len(),
        report.static_files
    );
    Ok(())
}

fn read_markdown(file: &Path) -> Result<String> {
    io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))
}

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use article_md::{Block, Config, Error};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "article-md.toml";

#[derive(Parser)]
#[command(name = "article-md")]
#[command(about = "Render article markdown into display blocks")]
struct Cli {
    /// Input Markdown file ("-" reads stdin)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (defaults to ./article-md.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Escape HTML in paragraph text before inline formatting
    #[arg(long)]
    escape_html: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = resolve_config(cli, Path::new(LOCAL_CONFIG))?;

    let markdown = read_input(&cli.input, io::stdin())?;
    let blocks = article_md::render_with_config(&markdown, &config);
    tracing::info!(blocks = blocks.len(), "rendered {}", cli.input.display());

    let rendered = render_output(&blocks, cli.format, &config)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!("created {}", path.display());
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| Error::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?,
    }

    Ok(())
}

/// An explicit `--config` must load; otherwise `local` is used when present.
fn resolve_config(cli: &Cli, local: &Path) -> Result<Config, Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(local)?,
    };
    if cli.escape_html {
        config.safety.escape_html = true;
    }
    Ok(config)
}

fn read_input(input: &Path, stdin: impl Read) -> Result<String, Error> {
    let result = if input == Path::new("-") {
        io::read_to_string(stdin)
    } else {
        fs::read_to_string(input)
    };
    result.map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })
}

fn render_output(blocks: &[Block], format: Format, config: &Config) -> Result<String, Error> {
    Ok(match format {
        Format::Html => article_md::blocks_to_html(blocks, config),
        Format::Json => article_md::blocks_to_json(blocks)? + "\n",
        Format::Text => article_md::to_plain_text(blocks) + "\n",
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("article-md").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn dash_reads_stdin() {
        let markdown = read_input(Path::new("-"), "## From stdin".as_bytes()).unwrap();
        assert_eq!(markdown, "## From stdin");
    }

    #[test]
    fn reads_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.md");
        fs::write(&path, "- a").unwrap();
        assert_eq!(read_input(&path, io::empty()).unwrap(), "- a");
    }

    #[test]
    fn missing_input_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.md"), io::empty()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn defaults() {
        let cli = cli(&["article.md"]);
        assert_eq!(cli.format, Format::Html);
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.escape_html);
    }

    #[test]
    fn local_config_used_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG);
        fs::write(&local, "[classes]\nparagraph = \"lead\"\n").unwrap();

        let config = resolve_config(&cli(&["-"]), &local).unwrap();
        assert_eq!(config.classes.paragraph, "lead");
    }

    #[test]
    fn missing_local_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config(&cli(&["-"]), &dir.path().join(LOCAL_CONFIG)).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn explicit_config_wins_and_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG);
        let explicit = dir.path().join("site.toml");
        fs::write(&local, "[classes]\nparagraph = \"local\"\n").unwrap();
        fs::write(&explicit, "[classes]\nparagraph = \"site\"\n").unwrap();

        let args = cli(&["-", "-c", explicit.to_str().unwrap()]);
        assert_eq!(resolve_config(&args, &local).unwrap().classes.paragraph, "site");

        let missing = dir.path().join("missing.toml");
        let args = cli(&["-", "--config", missing.to_str().unwrap()]);
        let err = resolve_config(&args, &local).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn escape_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(LOCAL_CONFIG);
        fs::write(&local, "[safety]\nescape_html = false\n").unwrap();

        let config = resolve_config(&cli(&["-", "--escape-html"]), &local).unwrap();
        assert!(config.safety.escape_html);

        let blocks = article_md::render_with_config("<b>hi</b>", &config);
        assert_eq!(
            render_output(&blocks, Format::Html, &config).unwrap(),
            "<p>&lt;b&gt;hi&lt;/b&gt;</p>\n"
        );
    }

    #[test]
    fn json_output() {
        let args = cli(&["-", "-f", "json"]);
        assert_eq!(args.format, Format::Json);

        let config = Config::default();
        let blocks = article_md::render_with_config("## A\n1. b", &config);
        let out = render_output(&blocks, args.format, &config).unwrap();
        assert!(out.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "type": "heading2", "text": "A" },
                { "type": "ordered_list", "items": ["b"] }
            ])
        );
    }

    #[test]
    fn text_output() {
        let args = cli(&["-", "--format", "text"]);
        assert_eq!(args.format, Format::Text);

        let config = Config::default();
        let blocks = article_md::render_with_config("## A\n---\nSee **this**.", &config);
        assert_eq!(
            render_output(&blocks, args.format, &config).unwrap(),
            "A\nSee this.\n"
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["article-md", "-", "-f", "pdf"]).is_err());
    }
}

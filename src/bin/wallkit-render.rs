use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use wallkit::{parse_document, RenderConfig, Renderer, Theme, WallkitDocument, WallkitError};

#[derive(Parser)]
#[command(name = "wallkit-render", version, about = "Render WallKit component documents to HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render documents to HTML on stdout
    Render {
        /// YAML documents to render
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Wrap the output in a complete HTML page
        #[arg(long)]
        page: bool,
        /// Render config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Skip syntax highlighting
        #[arg(long)]
        no_highlight: bool,
    },
    /// Check that documents parse and every component validates
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check that a stylesheet defines every required design token
    CheckTheme {
        /// Stylesheet to check; the bundled theme when omitted
        file: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Command::Render {
            files,
            page,
            config,
            no_highlight,
        } => render_files(&files, page, config.as_deref(), no_highlight),
        Command::Validate { files } => validate_files(&files),
        Command::CheckTheme { file } => check_theme(file.as_deref()),
    };
    process::exit(exit_code);
}

fn render_files(files: &[PathBuf], page: bool, config: Option<&Path>, no_highlight: bool) -> i32 {
    let mut config = match config.map(RenderConfig::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("✗ invalid config:");
            print_error(&e);
            return 1;
        }
    };
    if no_highlight {
        config.highlight = false;
    }
    let renderer = Renderer::new(config);

    let mut exit_code = 0;
    for path in files {
        match load_document(path) {
            Ok(doc) => {
                if page {
                    print!("{}", renderer.render_document(&doc));
                } else {
                    println!("{}", renderer.render_all(doc.components()));
                }
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                exit_code = 1;
            }
        }
    }
    exit_code
}

fn validate_files(files: &[PathBuf]) -> i32 {
    let mut exit_code = 0;
    for path in files {
        match load_document(path) {
            Ok(doc) => {
                println!(
                    "✓ {} is valid ({} components)",
                    path.display(),
                    doc.components().len()
                );
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", path.display());
                print_error(&e);
                exit_code = 1;
            }
        }
    }
    exit_code
}

fn check_theme(path: Option<&Path>) -> i32 {
    let (label, theme) = match path {
        Some(path) => match fs::read_to_string(path) {
            Ok(css) => (path.display().to_string(), Theme::from_css(&css)),
            Err(e) => {
                eprintln!("✗ failed to read {}: {}", path.display(), e);
                return 1;
            }
        },
        None => ("bundled theme".to_string(), Theme::bundled()),
    };
    match theme.check() {
        Ok(()) => {
            println!("✓ {} defines all {} tokens", label, wallkit::theme::REQUIRED_TOKENS.len());
            0
        }
        Err(e) => {
            eprintln!("✗ {} is incomplete:", label);
            print_error(&e);
            1
        }
    }
}

fn load_document(path: &Path) -> Result<WallkitDocument, WallkitError> {
    let content = fs::read_to_string(path).map_err(|e| WallkitError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_document(&content)
}

fn print_error(error: &WallkitError) {
    match error {
        WallkitError::MissingProperty {
            component,
            property,
        } => {
            eprintln!(
                "  Missing required property '{}' for component '{}'",
                property, component
            );
        }
        WallkitError::InvalidProperty {
            component,
            property,
            reason,
        } => {
            eprintln!("  Invalid property '{}' for component '{}':", property, component);
            eprintln!("    {}", reason);
        }
        WallkitError::ValueOutOfRange {
            property,
            value,
            range,
        } => {
            eprintln!("  Value out of range for '{}':", property);
            eprintln!("    Value: {}", value);
            eprintln!("    Expected range: {}", range);
        }
        WallkitError::DeserializationError(msg) => {
            eprintln!("  Deserialization error:");
            eprintln!("    {}", msg);
        }
        WallkitError::MissingThemeTokens { missing } => {
            eprintln!("  Missing design tokens:");
            for token in missing {
                eprintln!("    {}", token);
            }
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}

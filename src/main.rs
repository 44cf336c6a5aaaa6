// pi2mcrl2: build mCRL2 models from pi-calculus declarations

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pi2mcrl2::converter::{self, ConvertOptions};
use pi2mcrl2::errors::Errors;
use pi2mcrl2::template::{self, Template, DEFAULT_TEMPLATE_PATH};

#[derive(Parser, Debug)]
#[command(name = "pi2mcrl2")]
#[command(author, version, about = "Build mCRL2 models from pi-calculus expressions", long_about = None)]
struct Cli {
    /// Input pi-calculus file
    input: PathBuf,

    /// Write the mCRL2 specification to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the parsed module and debug logs to standard error
    #[arg(long)]
    verbose: bool,

    /// Only print the generated term, not a full mCRL2 specification
    #[arg(long)]
    raw_output: bool,

    /// mCRL2 specification the generated term is appended to
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,

    /// Spaces per nesting level in the generated term
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent_width: usize,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(errors) = err.downcast_ref::<Errors>() {
                eprintln!("{}", errors);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let module = pi2mcrl2::parse_source(&source)?;
    if cli.verbose {
        eprintln!("[verbose] module: {}", module);
    }

    let options = ConvertOptions::default().with_indent_width(cli.indent_width);
    let fragment = converter::convert_module_with(&module, &options)?;

    let template = if cli.raw_output {
        None
    } else {
        let template = Template::load(&cli.template).with_context(|| {
            format!("Failed to read template {}", cli.template.display())
        })?;
        Some(template)
    };
    let output = template::render(fragment, template.as_ref());

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

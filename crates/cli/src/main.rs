//! CLI tool for generating DOCX documents.

mod documents;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docgen_core::{parse_sections, Document, ParagraphSegmenter, SectionKind, Sections};
use docgen_docx::DocxWriter;
use documents::parecer::{Parecer, ParecerMeta};
use documents::{ibge, parecer, sample};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Generate Word (.docx) documents: a sample, a parecer técnico, or the IBGE research.
#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample document with formatted text, a bullet list, and a table
    Sample {
        /// Output file
        #[arg(short, long, default_value = sample::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Parecer técnico from built-in text, flags, or labelled stdin sections
    Parecer(ParecerArgs),

    /// Research document on IBGE and the APM exam
    Ibge {
        /// Output file
        #[arg(short, long, default_value = ibge::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Split text into paragraphs and print them
    Segment {
        /// Input file (default: standard input)
        input: Option<PathBuf>,

        /// Print a JSON array with each paragraph's list marker
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ParecerArgs {
    /// Output file
    #[arg(short, long, default_value = parecer::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Read labelled sections (EMENTA, RELATÓRIO, FUNDAMENTAÇÃO, CONCLUSÃO) from standard input
    #[arg(long)]
    stdin: bool,

    /// EMENTA text
    #[arg(long)]
    ementa: Option<String>,

    /// RELATÓRIO text
    #[arg(long)]
    relatorio: Option<String>,

    /// FUNDAMENTAÇÃO text
    #[arg(long)]
    fundamentacao: Option<String>,

    /// CONCLUSÃO text
    #[arg(long)]
    conclusao: Option<String>,

    /// Parecer number, e.g. 001/2025
    #[arg(long)]
    numero: Option<String>,

    /// Interested party
    #[arg(long)]
    interessado: Option<String>,

    /// Subject line
    #[arg(long)]
    assunto: Option<String>,

    /// Signatory name
    #[arg(long)]
    autor: Option<String>,

    /// Signatory position
    #[arg(long)]
    cargo: Option<String>,

    /// Place for the closing line
    #[arg(long)]
    local: Option<String>,

    /// Date for the closing line, as free text
    #[arg(long)]
    data: Option<String>,
}

impl ParecerArgs {
    fn section_flags(&self) -> Sections {
        let mut sections = Sections::default();
        for (kind, text) in [
            (SectionKind::Ementa, &self.ementa),
            (SectionKind::Relatorio, &self.relatorio),
            (SectionKind::Fundamentacao, &self.fundamentacao),
            (SectionKind::Conclusao, &self.conclusao),
        ] {
            if let Some(text) = text {
                sections.set(kind, text.as_str());
            }
        }
        sections
    }

    fn meta(&self) -> ParecerMeta {
        ParecerMeta {
            numero: self.numero.clone(),
            interessado: self.interessado.clone(),
            assunto: self.assunto.clone(),
            autor: self.autor.clone(),
            cargo: self.cargo.clone(),
            local: self.local.clone(),
            data: self.data.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ Error: {:#}", e);
            if e.chain().any(|cause| cause.downcast_ref::<std::io::Error>().is_some()) {
                eprintln!("  Check that the output directory exists and is writable,");
                eprintln!("  that the file is not open in another program, and that there is free disk space.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sample { output } => generate(&sample::build(), &output),
        Command::Ibge { output } => generate(&ibge::build(), &output),
        Command::Parecer(args) => {
            let stdin_text = if args.stdin {
                Some(read_input(None)?)
            } else {
                None
            };
            let parecer = resolve_parecer(&args, stdin_text.as_deref())?;
            generate(&parecer::build(&parecer), &args.output)
        }
        Command::Segment { input, json } => {
            let text = read_input(input.as_deref())?;
            print!("{}", render_segments(&text, json)?);
            Ok(())
        }
    }
}

/// Decide which text a parecer is built from.
///
/// Stdin sections come first, flags override them, and the built-in example
/// is used only when neither supplies any section.
fn resolve_parecer(args: &ParecerArgs, stdin_text: Option<&str>) -> Result<Parecer> {
    let flags = args.section_flags();

    let mut parecer = match stdin_text {
        Some(text) => {
            let mut sections = match parse_sections(text) {
                Ok(sections) => sections,
                Err(e) if !flags.is_empty() => {
                    log::warn!("{}; using section flags only", e);
                    Sections::default()
                }
                Err(e) => return Err(e).context("Failed to read parecer sections from standard input"),
            };
            sections.merge_from(flags);
            Parecer {
                meta: ParecerMeta::default(),
                sections,
            }
        }
        None if !flags.is_empty() => Parecer {
            meta: ParecerMeta::default(),
            sections: flags,
        },
        None => {
            log::info!("No section text supplied; using the built-in example");
            Parecer::example()
        }
    };

    parecer.meta.merge_from(args.meta());
    Ok(parecer)
}

/// Write `document` to `output` and report the path.
fn generate(document: &Document, output: &Path) -> Result<()> {
    log::debug!(
        "Built document with {} block(s)",
        document.blocks.len()
    );
    DocxWriter::new()
        .save(document, output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    println!("✓ Document \"{}\" created", output.display());
    Ok(())
}

/// Read a file, or standard input when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Paragraphs one per line, or a JSON array of segments.
fn render_segments(text: &str, json: bool) -> Result<String> {
    let segmenter = ParagraphSegmenter::new();
    if json {
        let segments = segmenter.segment_with_markers(text);
        let mut out = serde_json::to_string_pretty(&segments).context("Failed to encode JSON")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(segmenter
            .segment(text)
            .into_iter()
            .map(|p| format!("{}\n", p))
            .collect())
    }
}

//! u2l - Unicode ↔ LaTeX transliteration CLI

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use unicode2latex::{
    format_diagnostics, format_diagnostics_in, latex_to_unicode_with_options,
    unicode_to_latex_with_options, AccentMode, ConversionOutput, L2UOptions, U2LOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "u2l")]
#[command(version)]
#[command(about = "Transliterate between Unicode text and LaTeX commands", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Convert this text instead of reading a file
    #[arg(short = 't', long, conflicts_with = "input_file")]
    text: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Conversion direction
    #[arg(short, long, value_enum, default_value_t = Direction::ToLatex)]
    direction: Direction,

    /// Leave combining marks and precomposed letters unconverted
    #[arg(long)]
    no_accents: bool,

    /// Leave mathematical styled letters unwrapped
    #[arg(long)]
    no_fonts: bool,

    /// Emit unicode-math glyph commands (\mbfA) and prefer math symbols
    #[arg(short = 'P', long)]
    prefer_unicode_math: bool,

    /// Accent command family: text, math or auto
    #[arg(long, default_value = "text")]
    accent_mode: AccentMode,

    /// Convert curly quotes to `` and ''
    #[arg(long)]
    convert_quotes: bool,

    /// Convert en dashes to -- and no-break spaces to ~
    #[arg(long)]
    convert_dashes: bool,

    /// Only convert Greek commands when going to Unicode
    #[arg(short = 'G', long)]
    greek_only: bool,

    /// Only convert math commands when going to Unicode
    #[arg(short = 'M', long, conflicts_with = "greek_only")]
    math_only: bool,

    /// Emit Greek letters from the Mathematical Italic block
    #[arg(long)]
    italic_greek: bool,

    /// Strict mode: exit with error if any diagnostic is reported
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress diagnostic output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    /// Unicode to LaTeX
    ToLatex,
    /// LaTeX to Unicode
    ToUnicode,
}

#[cfg(feature = "cli")]
impl Cli {
    fn u2l_options(&self) -> U2LOptions {
        U2LOptions {
            convert_accents: !self.no_accents,
            add_font_modifiers: !self.no_fonts,
            prefer_unicode_math: self.prefer_unicode_math,
            accent_mode: self.accent_mode,
            convert_quotes: self.convert_quotes,
            convert_dashes: self.convert_dashes,
        }
    }

    fn l2u_options(&self) -> L2UOptions {
        L2UOptions {
            convert_greek: !self.math_only,
            convert_math: !self.greek_only,
            italic_greek: self.italic_greek,
        }
    }

    fn read_input(&self) -> io::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        match self.input_file {
            Some(ref path) => fs::read_to_string(path),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
#[cfg(feature = "cli")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Info) = cli.command {
        print_info();
        return Ok(());
    }

    let input = cli.read_input()?;

    let result = match cli.direction {
        Direction::ToLatex => {
            let ConversionOutput {
                content,
                diagnostics,
            } = unicode_to_latex_with_options(&input, &cli.u2l_options());

            if !cli.quiet && !diagnostics.is_empty() {
                let report = match cli.input_file {
                    Some(ref path) => format_diagnostics_in(&diagnostics, path, !cli.no_color),
                    None => format_diagnostics(&diagnostics, !cli.no_color),
                };
                eprintln!("{}", report);
            }
            if cli.strict && !diagnostics.is_empty() {
                eprintln!(
                    "Error: {} diagnostic(s) in strict mode",
                    diagnostics.len()
                );
                std::process::exit(1);
            }
            content
        }
        Direction::ToUnicode => match latex_to_unicode_with_options(&input, &cli.l2u_options()) {
            Ok(content) => content,
            Err(err) => {
                match cli.input_file {
                    Some(ref path) => eprintln!("Error in {}: {}", path, err),
                    None => eprintln!("Error: {}", err),
                }
                std::process::exit(1);
            }
        },
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(result.as_bytes())?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            if !result.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_info() {
    let tables = unicode2latex::MappingTables::builtin();
    println!("u2l - Unicode ↔ LaTeX transliteration");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Tables:");
    println!(
        "  Greek letters: {} forward, {} reverse",
        tables.greek().forward_len(),
        tables.greek().reverse_len()
    );
    println!(
        "  Math symbols:  {} forward, {} reverse",
        tables.math().forward_len(),
        tables.math().reverse_len()
    );
    println!(
        "  Accents:       {}",
        unicode2latex::data::ACCENTS.len()
    );
    println!();
    println!("Unicode → LaTeX:");
    println!("  ✓ Accents, stacked in encounter order");
    println!("  ✓ Mathematical alphanumerics (\\symbf{{...}} or \\mbfA)");
    println!("  ✓ Super/subscript runs, vulgar fractions, ligatures");
    println!("  ✓ Diagnostics with line and column");
    println!();
    println!("LaTeX → Unicode:");
    println!("  ✓ Greek letter and math symbol commands");
    println!("  ✓ Everything else echoed unchanged");
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install unicode2latex --features cli");
    eprintln!("  u2l [OPTIONS] [INPUT_FILE]");
}

//! xmltext - XML text normalizer for line-based diffing

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use xmltext::{EntityTable, convert_file, convert_stream};

#[derive(Parser)]
#[command(name = "xmltext")]
#[command(version, about = "Rewrite the text of an XML document as diff-friendly plain text", long_about = None)]
#[command(after_help = "EXAMPLES:
    xmltext chapter.xml              Write normalized text to chapter.txt
    xmltext chapter.xml out.txt      Write normalized text to out.txt
    xmltext < chapter.xml            Read stdin, write stdout")]
struct Cli {
    /// Input XML file (standard input when omitted)
    #[arg(value_name = "INFILE")]
    input: Option<PathBuf>,

    /// Output text file (INFILE with a .txt extension when omitted)
    #[arg(value_name = "OUTFILE")]
    output: Option<PathBuf>,

    /// Suppress the completion message
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> xmltext::Result<()> {
    let entities = EntityTable::default();

    match &cli.input {
        None => convert_stream(io::stdin().lock(), &mut io::stdout().lock(), &entities),
        Some(input) => {
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| input.with_extension("txt"));
            convert_file(input, &output, &entities)?;
            if !cli.quiet {
                println!("{} -> {}", input.display(), output.display());
            }
            Ok(())
        }
    }
}

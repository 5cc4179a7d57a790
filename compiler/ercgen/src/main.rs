//! ercgen CLI
//!
//! Reads a JSON result-code specification and writes the C header.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ercgen::tracing_setup::init_tracing;
use ercgen::{generate, EmitConfig, GenerateOptions};
use ercgen_ir::erc;

#[derive(Parser, Debug)]
#[command(name = "ercgen", version)]
#[command(about = "Generate extended result code definitions from a JSON specification")]
struct Cli {
    /// JSON specification of facilities, components and results
    #[arg(short = 'j', long, value_name = "PATH")]
    json_file_path: PathBuf,

    /// Header file to write
    #[arg(short = 'r', long, value_name = "PATH")]
    result_file_path: PathBuf,

    /// Include guard macro for the generated header
    #[arg(long, value_name = "NAME", default_value = "ADUC_RESULT_H")]
    include_guard: String,

    /// Emit only the four definition sections, without the header wrapper
    #[arg(long)]
    sections_only: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(self) -> GenerateOptions {
        let options = GenerateOptions::new(self.json_file_path, self.result_file_path);
        let emit = EmitConfig {
            include_guard: self.include_guard,
            wrap_in_header: !self.sections_only,
            ..options.emit.clone()
        };
        options.with_emit_config(emit)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match generate(&cli.options()) {
        Ok(report) => {
            println!(
                "wrote {} ({} facilities, {} components, {} results)",
                report.output.display(),
                report.facilities,
                report.components,
                report.results
            );
            if report.masked_values > 0 {
                eprintln!(
                    "warning: {} result value(s) did not fit in {} bits and were masked",
                    report.masked_values,
                    erc::VALUE_BITS
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

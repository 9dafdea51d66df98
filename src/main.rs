use std::fs;

use clap::Parser;

use cdm_guard::checker::validate_message;
use cdm_guard::cli::{Cli, Commands, ValidateArgs};
use cdm_guard::loader::{load_message, load_rules};
use cdm_guard::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use cdm_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> cdm_guard::Result<i32> {
    let msg = load_message(&args.path)?;
    let rules = load_rules(args.rules.as_deref())?;

    let report = validate_message(&msg, &rules)?;

    let formatter: Box<dyn ReportFormatter> = match args.format {
        OutputFormat::Text => Box::new(TextFormatter::new().with_verbose(cli.verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };
    let rendered = formatter.format(&report)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        if !cli.quiet {
            println!("Report written to {}", output_path.display());
        }
    } else if !cli.quiet || !report.ok {
        print!("{rendered}");
    }

    // `ok` is the canonical downstream signal.
    Ok(if report.ok {
        EXIT_SUCCESS
    } else {
        EXIT_VALIDATION_FAILED
    })
}

use clap::Parser;
use edt_parser::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    commands::setup_logging(&args);

    match commands::run(&args) {
        Ok(summary) => {
            if args.show_summary() {
                if let Err(error) = commands::generate_final_report(&args, &summary) {
                    process::exit(commands::report_failure(&error));
                }
            }
            process::exit(0);
        }
        Err(error) => process::exit(commands::report_failure(&error)),
    }
}

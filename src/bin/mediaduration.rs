use mediaduration::cli;
use mediaduration::{measure_directory, DurationFormat, ScanOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let opts = cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(opts.log_filter()))
        .init();

    let options = ScanOptions {
        recursive: opts.recursive,
        policy: opts.failure_policy(),
        strategy: opts.scan.into(),
    };

    let report = match measure_directory(&opts.dir, options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.render(DurationFormat::from(opts.format)));
    }

    ExitCode::SUCCESS
}

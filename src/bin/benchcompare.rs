use std::{env, ffi::OsString, process};

use benchcompare::{BenchCompareError, CommandLineConfig, TokenExtractor, run_comparison};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &[OsString]) -> Result<(), BenchCompareError> {
    let extractor = TokenExtractor::new()?;
    let config = CommandLineConfig::from_args(args)?;
    let comparison = run_comparison(&extractor, &config.old, &config.new)?;
    print!("{comparison}");
    Ok(())
}

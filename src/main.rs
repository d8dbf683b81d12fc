use clap::error::ErrorKind;
use clap::Parser;
use resource_allocator::utils::error::ErrorSeverity;
use resource_allocator::utils::{logger, validation::Validate};
use resource_allocator::{AllocationEngine, CliConfig, LocalStorage};
use std::io;

fn main() {
    // 參數錯誤一律以 1 結束，help/version 則為 0
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let exit_code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(exit_code);
        }
    };

    logger::init_cli_logger(config.verbose, config.quiet);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Usage: resource-allocator <projects-file> <resources-file>");
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.base_dir.clone());
    let engine = AllocationEngine::new(storage, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = engine.run(&mut stdin.lock(), &mut stdout.lock(), &mut io::stderr());

    match result {
        Ok(outcome) => tracing::debug!("Session finished: {:?}", outcome),
        Err(e) => {
            tracing::error!(
                "Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());

            if e.severity() > ErrorSeverity::Low {
                std::process::exit(1);
            }
        }
    }
}

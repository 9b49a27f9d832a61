use clap::Parser;
use fault_demo::utils::error::ErrorSeverity;
use fault_demo::utils::{logger, validation::Validate};
use fault_demo::{CliConfig, DemoError, DemoRunner, StdoutConsole, TracingSink};

fn main() {
    let config = CliConfig::parse();

    match config.log_format.as_str() {
        "json" => logger::init_json_logger(config.verbose),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    let scenario = match config.validate().and_then(|_| config.load_scenario()) {
        Ok(scenario) => scenario,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Scenario: {:?}", scenario);

    // Every failure is contained inside its own demonstration.
    let report = DemoRunner::new(StdoutConsole, TracingSink, scenario).run();
    tracing::debug!("Report: {:?}", report);
}

fn exit_with(e: &DemoError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

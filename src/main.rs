use clap::Parser;
use iss_flyover::domain::ports::{ConfigProvider, OutputFormat};
use iss_flyover::utils::error::ErrorSeverity;
use iss_flyover::utils::{format, logger};
use iss_flyover::{CliConfig, FlyoverError, HttpFlyoverEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => report_and_exit(&e),
    };

    let engine = match HttpFlyoverEngine::from_config(&settings) {
        Ok(engine) => engine,
        Err(e) => report_and_exit(&e),
    };

    let passes = match engine.run().await {
        Ok(passes) => passes,
        Err(e) => report_and_exit(&e),
    };

    let shown = format::take_next(&passes, settings.pass_limit());
    tracing::info!("Showing {} of {} predicted passes", shown.len(), passes.len());

    match settings.output_format() {
        OutputFormat::Text => {
            if shown.is_empty() {
                println!("No upcoming passes were predicted for this location.");
            } else {
                println!("{}", format::render_text(shown));
            }
        }
        OutputFormat::Json => println!("{}", format::render_json(shown)?),
    }

    Ok(())
}

fn report_and_exit(e: &FlyoverError) -> ! {
    tracing::error!(
        "❌ Lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("It didn't work! {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}

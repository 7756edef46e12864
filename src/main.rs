use anyhow::Context;
use clap::Parser;
use rent_split::core::statement::{render, write_statement};
use rent_split::utils::logger;
use rent_split::{BillError, BillingEngine, CliConfig, CsvTenantSource};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting rent-split");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        match e.chain().find_map(|cause| cause.downcast_ref::<BillError>()) {
            Some(bill_error) => {
                tracing::error!(
                    "❌ Bill split failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    bill_error.category(),
                    bill_error.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", bill_error.recovery_suggestion());

                eprintln!("❌ {}", bill_error.user_friendly_message());
                eprintln!("💡 {}", bill_error.recovery_suggestion());
                std::process::exit(bill_error.exit_code());
            }
            None => {
                tracing::error!("❌ Bill split failed: {:#}", e);
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let file = cli.load_file().with_context(|| {
        format!(
            "Failed to load config file '{}'",
            cli.config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;
    let config = cli.resolve(&file)?;
    tracing::info!("✅ Configuration resolved");
    tracing::debug!("Run config: {:?}", config);

    let source = CsvTenantSource::new(config.tenants_path.clone());
    let tenant_file = source.path().display().to_string();
    let engine = BillingEngine::new(source, config.settings.clone());

    // Nothing reaches stdout until the statement is fully reconciled.
    let statement = engine
        .run()
        .with_context(|| format!("Tenant file: {}", tenant_file))?;
    let rendered = render(&statement, config.format)?;
    write_statement(&rendered, config.output_path.as_deref())?;

    tracing::info!("✅ Statement produced for {} tenants", statement.entries.len());
    Ok(())
}

use clap::Parser;
use customer_import::core::report;
use customer_import::utils::{logger, validation::Validate};
use customer_import::{CliConfig, CustomerImportPipeline, ImportEngine, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting customer-import CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let pipeline = CustomerImportPipeline::new(LocalStorage::default(), config);
    let engine = ImportEngine::new(pipeline);

    match engine.run() {
        Ok(import_report) => {
            println!("{}", report::render(&import_report));
            if let Some(path) = &import_report.output_path {
                tracing::info!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}

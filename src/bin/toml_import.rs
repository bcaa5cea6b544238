use clap::Parser;
use customer_import::config::toml_config::TomlConfig;
use customer_import::core::report;
use customer_import::core::ConfigProvider;
use customer_import::utils::{logger, validation::Validate};
use customer_import::{CustomerImportPipeline, ImportEngine, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-import")]
#[command(about = "Customer import driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "import-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Validate the configuration and show what would be processed
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the input file is not read");
        return Ok(());
    }

    let pipeline = CustomerImportPipeline::new(LocalStorage::default(), config);
    let engine = ImportEngine::new(pipeline);

    match engine.run() {
        Ok(import_report) => {
            println!("{}", report::render(&import_report));
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Import configuration:");
    tracing::info!("   Input: {}", config.input_path());
    tracing::info!("   Preview count: {}", config.preview_count());
    match config.output_path() {
        Some(path) => tracing::info!("   Output: {}", path),
        None => tracing::info!("   Output: (none)"),
    }
}

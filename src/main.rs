use clap::Parser;
use file_compare::config::{Command, CompareArgs};
use file_compare::core::ConfigProvider;
use file_compare::utils::error::{CompareError, ErrorSeverity};
use file_compare::utils::logger;
use file_compare::{
    server, CliConfig, CompareEngine, CompareOutcome, ComparePipeline, CompareRequest,
    LocalStorage, ServiceConfig, SortMode,
};
use std::path::Path;

async fn read_input(field: &str, path: &Path) -> Result<Vec<u8>, CompareError> {
    tokio::fs::read(path).await.map_err(|e| {
        CompareError::invalid_input(field, format!("cannot read {}: {}", path.display(), e))
    })
}

async fn run_compare(args: &CompareArgs, config: ServiceConfig) -> Result<(), CompareError> {
    let sort_mode: SortMode = args.sort_order.parse()?;
    let (file_a, file_b) = tokio::try_join!(
        read_input("file1", &args.file1),
        read_input("file2", &args.file2)
    )?;

    let output_root = config.output_path().to_string();
    let storage = LocalStorage::new(output_root.clone());
    let engine = CompareEngine::new(ComparePipeline::new(storage, config));

    match engine.run(CompareRequest::new(file_a, file_b, sort_mode)).await? {
        CompareOutcome::Identical => {
            tracing::info!("✅ Files are identical");
            println!("✅ No differences found: the files contain the same lines.");
        }
        CompareOutcome::Differences {
            output_a,
            output_b,
            unique_to_a_count,
            unique_to_b_count,
            ..
        } => {
            let path_a = Path::new(&output_root).join(&output_a);
            let path_b = Path::new(&output_root).join(&output_b);
            tracing::info!("📁 Output saved to: {}, {}", path_a.display(), path_b.display());
            println!(
                "📄 {} lines unique to file1: {}",
                unique_to_a_count,
                path_a.display()
            );
            println!(
                "📄 {} lines unique to file2: {}",
                unique_to_b_count,
                path_b.display()
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.service_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.logging.format, cli.verbose, config.log_level());

    tracing::info!("Starting file-compare {}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.command {
        Command::Serve(_) => server::serve(config).await,
        Command::Compare(args) => run_compare(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ file-compare failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

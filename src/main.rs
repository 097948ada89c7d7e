use clap::Parser;
use flames::adapters::renderer_for;
use flames::config::cli::{BatchArgs, CheckArgs, Command, DescribeArgs};
use flames::core::batch::BatchFormat;
use flames::utils::{logger, validation::Validate};
use flames::{BatchScorer, CliConfig, FlamesEngine, FlamesError, FlamesRunner, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if cli.log_json || file_config.log_json() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = cli.validate().and_then(|_| file_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let result = match &cli.command {
        Command::Check(args) => run_check(args, file_config),
        Command::Describe(args) => run_describe(args),
        Command::Batch(args) => run_batch(args, &file_config),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            if e.is_validation() {
                tracing::warn!("Input rejected: {}", e);
            } else {
                tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
            }
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run_check(args: &CheckArgs, mut config: TomlConfig) -> Result<String, FlamesError> {
    // 應用命令列覆蓋設定
    if let Some(format) = &args.format {
        config.output.format = Some(format.clone());
    }
    if args.plain {
        config.output.strike = Some(false);
    }
    if args.compact {
        config.output.pretty = Some(false);
    }

    let runner = FlamesRunner::new(renderer_for(&config)?);
    runner.run(&args.name1, &args.name2)
}

fn run_describe(args: &DescribeArgs) -> Result<String, FlamesError> {
    let (label, description) = FlamesEngine::new().describe_code(&args.code)?;
    Ok(format!("{} - {}\n{}", label.code(), description.display, description.advice))
}

fn run_batch(args: &BatchArgs, config: &TomlConfig) -> Result<String, FlamesError> {
    let format = match &args.format {
        Some(format) => format.parse::<BatchFormat>()?,
        None => config.batch_format()?,
    };
    let continue_on_error = !args.fail_fast && config.continue_on_error();

    let scorer = BatchScorer::new(continue_on_error);
    let stdout = std::io::stdout();
    let summary = scorer.run_file(&args.input, format, stdout.lock())?;

    tracing::info!(
        "✅ Batch complete: {} scored, {} no score, {} invalid",
        summary.scored,
        summary.no_score,
        summary.invalid
    );
    Ok(String::new())
}

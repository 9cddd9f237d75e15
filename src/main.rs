use anyhow::Context;
use clap::Parser;
use reco_schema::core::ConfigProvider;
use reco_schema::utils::{logger, validation::Validate};
use reco_schema::{
    request_json_schema, CliConfig, FilePayload, RecommendationRequest, RequestIntake,
    SchemaError, SchemaValidator, StdinPayload, TomlConfig, ValidatorOptions,
};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入並驗證設定檔
    let file_config = match load_file_config(&config) {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if file_config.json_logging() {
        logger::init_json_logger(&file_config.logging.level, config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting reco-schema");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("File config: {:?}", file_config);
    }

    let pretty = config.pretty_output() || file_config.pretty_output();

    if config.schema {
        println!("{}", to_json(&request_json_schema(), pretty)?);
        return Ok(());
    }

    if config.example {
        println!("{}", to_json(&RecommendationRequest::example(), pretty)?);
        return Ok(());
    }

    let validator = SchemaValidator::new(ValidatorOptions {
        strict_dates: config.strict_dates() || file_config.strict_dates(),
    });

    let outcome = if config.reads_stdin() {
        RequestIntake::new(StdinPayload, validator).run().await
    } else {
        let path = config.input.clone().unwrap_or_default();
        RequestIntake::new(FilePayload::new(path), validator).run().await
    };

    match outcome {
        Ok(request) => {
            println!("{}", to_json(&request, pretty)?);
        }
        Err(e) => {
            tracing::error!(
                "Request rejected: {} (Category: {:?})",
                e,
                e.category()
            );

            // 驗證失敗時輸出完整錯誤清單
            if let SchemaError::Validation(validation) = &e {
                println!("{}", to_json(&validation.report(), pretty)?);
            }

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn load_file_config(config: &CliConfig) -> reco_schema::Result<TomlConfig> {
    let Some(path) = &config.config else {
        return Ok(TomlConfig::default());
    };

    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.context("Failed to serialize output")
}

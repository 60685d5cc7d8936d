use clap::Parser;
use plant_doctor::{cli, client, config, diagnose, error, image_file};
use plant_doctor_common::{DiseaseCatalog, DiseaseRecord, Phase, UploadSession};
use cli::{Cli, Commands};
use config::Config;
use error::{PlantDoctorError, Result};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plant_doctor={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Diagnose { image, endpoint, timeout, json } => {
            let config = Config::load()?;
            let upload = image_file::load_image(&image)?;
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            let timeout = Duration::from_secs(timeout.unwrap_or(config.timeout_seconds));
            let classifier = client::HttpClassifier::new(&endpoint, timeout)?;

            let mut session = UploadSession::new();
            let file_name = upload.file_name.clone();
            session.select_image(upload, file_name);

            if !json {
                println!("🌿 plant-doctor - 診断中... ({})", classifier.upload_url());
            }
            tracing::info!(image = %image.display(), "diagnosing");

            match diagnose::diagnose(&mut session, &classifier).await? {
                Phase::Result(diagnosis) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&diagnosis)?);
                    } else {
                        println!("\n{}\n", diagnosis.headline());
                        print_details(diagnosis.description(), diagnosis.treatment(), diagnosis.prevention());
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Phase::Error(message) => {
                    eprintln!("{}", message);
                    Ok(ExitCode::FAILURE)
                }
                Phase::Idle | Phase::Submitting { .. } => Ok(ExitCode::FAILURE),
            }
        }

        Commands::Diseases { name } => {
            match name {
                Some(name) => {
                    let record = DiseaseCatalog::lookup(&name)
                        .ok_or(PlantDoctorError::UnknownDisease(name))?;
                    print_record(record);
                }
                None => {
                    println!("病害カタログ ({}件):", DiseaseCatalog::len());
                    for record in DiseaseCatalog::records() {
                        println!("  - {}", record.name);
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let changed = set_endpoint.is_some() || set_timeout.is_some();
            let mut config = if changed { Config::load_for_update()? } else { Config::load()? };

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(env) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  ({} = {} で上書き中)", config::ENDPOINT_ENV, env);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_record(record: &DiseaseRecord) {
    println!("{}\n", plant_doctor_common::capitalize_first(record.name));
    print_details(record.description, record.treatment, record.prevention);
}

fn print_details(description: &str, treatment: &str, prevention: &str) {
    println!("Description:\n{}\n", description);
    println!("Treatment:\n{}\n", treatment);
    println!("Prevention Tip:\n{}", prevention);
}

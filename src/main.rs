use imaginesdk::{
    logger::{self, LogLevel, LoggerConfig},
    GenerationsRequest, GenerationsStyle, Imagine, ImagineConfig,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::development().with_level(LogLevel::Debug))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = ImagineConfig::from_env();
    logger::log_config_info(&config);

    let client = match Imagine::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Failed to initialize Imagine client: {}", e);
            log::warn!("💡 Set IMAGINE_API_TOKEN in your environment or .env file");
            return Err(e.into());
        }
    };

    log::info!("🖼️  Available generation styles:");
    for style in GenerationsStyle::all() {
        log::info!("  {}", style);
    }

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "a lighthouse on a cliff at sunset".to_string());
    let output = env::args().nth(2).unwrap_or_else(|| "output.png".to_string());

    log::info!("🔄 Generating: {}", prompt);
    let request = GenerationsRequest::new(prompt).with_style(GenerationsStyle::ImagineV5);
    let response = client.generations(&request).await?;

    match response.data() {
        Some(image) => {
            let path = image.as_file(&output)?;
            log::info!("✅ Saved {} bytes to {}", image.len(), path.display());
        }
        None => {
            log::error!("❌ Generation failed with status {}", response.status());
        }
    }

    Ok(())
}

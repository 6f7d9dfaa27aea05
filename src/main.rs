use anyhow::{Context, Result};
use bilingual_reader::orchestrator::{App, ConversionStats};
use bilingual_reader::{logger, AppResult, Config};

const CONFIG_FILE: &str = "reader.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load(CONFIG_FILE).context("加载配置失败")?;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 出错时以非零状态退出
    if let Err(e) = generate(config).await {
        tracing::error!("❌ Error generating files: {}", e);
        return Err(e).context("文章生成失败");
    }

    Ok(())
}

async fn generate(config: Config) -> AppResult<ConversionStats> {
    App::initialize(config).await?.run().await
}

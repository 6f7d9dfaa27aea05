//! 批量文章转换器 - 编排层
//!
//! ## 职责
//!
//! 1. **扫描**：列出源目录中的所有 TXT 文件
//! 2. **并发转换**：最多同时转换 `max_concurrent_files` 个文件，结果保持扫描顺序
//! 3. **汇总**：写出包含全部文章的汇总 JSON
//! 4. **统计**：输出最终统计信息
//!
//! 任何文件读写失败都会中止整个任务，不做清理和重试。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{list_txt_files, Article};
use crate::orchestrator::article_converter::{convert_file, write_json};
use crate::utils::logging::{log_files_found, log_startup, print_final_stats};
use futures::{stream, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// 批量转换应用
pub struct App {
    config: Config,
}

/// 转换统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub articles: usize,
    pub paragraphs: usize,
}

impl App {
    /// 初始化应用，确保输出目录存在
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(
            &config.txt_folder,
            &config.output_folder,
            config.max_concurrent_files,
        );

        fs::create_dir_all(&config.output_folder)
            .await
            .map_err(|e| AppError::file_write_failed(config.output_folder.clone(), e))?;

        Ok(Self { config })
    }

    /// 运行转换主逻辑
    pub async fn run(&self) -> AppResult<ConversionStats> {
        info!("\n📁 正在扫描待转换的文章...");
        let txt_files = list_txt_files(Path::new(&self.config.txt_folder)).await?;

        if txt_files.is_empty() {
            warn!("⚠️ 没有找到待转换的TXT文件，只生成空的汇总文件");
        }
        log_files_found(txt_files.len());

        let articles = self.convert_all(txt_files).await?;

        let aggregate_path = self.aggregate_path();
        write_json(&aggregate_path, &articles).await?;

        let stats = ConversionStats {
            articles: articles.len(),
            paragraphs: articles.iter().map(|a| a.paragraphs.len()).sum(),
        };
        print_final_stats(
            stats.articles,
            stats.paragraphs,
            &aggregate_path.display().to_string(),
        );

        Ok(stats)
    }

    /// 汇总文件路径
    pub fn aggregate_path(&self) -> PathBuf {
        Path::new(&self.config.output_folder).join(&self.config.aggregate_file_name)
    }

    async fn convert_all(&self, txt_files: Vec<PathBuf>) -> AppResult<Vec<Article>> {
        let output_folder = Path::new(&self.config.output_folder);
        let concurrency = self.config.max_concurrent_files.max(1);

        // buffered 保证输出顺序与输入顺序一致
        stream::iter(txt_files)
            .map(|path| async move { convert_file(&path, output_folder).await })
            .buffered(concurrency)
            .try_collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(txt: &Path, out: &Path) -> Config {
        Config {
            txt_folder: txt.display().to_string(),
            output_folder: out.display().to_string(),
            max_concurrent_files: 2,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_run_writes_aggregate_in_discovery_order() {
        let txt = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        for (name, title) in [("2.txt", "Two"), ("1.txt", "One"), ("3.txt", "Three")] {
            std::fs::write(txt.path().join(name), format!("{title}\n标题\n\nA\n甲\n")).unwrap();
        }

        let app = App::initialize(config_for(txt.path(), out.path())).await.unwrap();
        let stats = app.run().await.unwrap();

        assert_eq!(stats, ConversionStats { articles: 3, paragraphs: 3 });
        let aggregate: Vec<Article> =
            serde_json::from_str(&std::fs::read_to_string(app.aggregate_path()).unwrap()).unwrap();
        let ids: Vec<_> = aggregate.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_initialize_creates_nested_output_folder() {
        let txt = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let nested = out.path().join("public").join("data");

        App::initialize(config_for(txt.path(), &nested)).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_missing_txt_folder_fails() {
        let out = tempfile::tempdir().unwrap();
        let app = App::initialize(config_for(&out.path().join("missing"), out.path()))
            .await
            .unwrap();

        assert!(app.run().await.is_err());
    }
}

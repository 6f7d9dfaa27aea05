//! 单个文章转换器 - 编排层
//!
//! 读取一个 TXT 源文件，解析为文章并写出对应的 JSON 文件。

use crate::error::{AppError, AppResult};
use crate::models::{article_id_from_file_name, read_source_file, Article};
use crate::parser::parse_article_with_report;
use crate::utils::logging::{log_file_generated, log_file_start};
use chrono::Utc;
use std::path::Path;
use tokio::fs;
use tracing::warn;

/// 转换单个源文件并写出 `<id>.json`
///
/// # 参数
/// - `source_path`: TXT 源文件路径
/// - `output_folder`: JSON 输出目录
///
/// # 返回
/// 返回解析得到的文章
pub async fn convert_file(source_path: &Path, output_folder: &Path) -> AppResult<Article> {
    let file_name = source_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    log_file_start(&file_name);

    let content = read_source_file(source_path).await?;
    let id = article_id_from_file_name(&file_name);
    let (article, report) = parse_article_with_report(id, &content, Utc::now());

    if !report.discarded_lines.is_empty() {
        warn!(
            "⚠️ {} 中有 {} 行超出段落块的两行限制，已忽略: {:?}",
            file_name,
            report.discarded_lines.len(),
            report.discarded_lines
        );
    }

    let output_path = output_folder.join(format!("{}.json", article.id));
    write_json(&output_path, &article).await?;
    log_file_generated(
        &output_path.display().to_string(),
        &article.title,
        article.paragraphs.len(),
    );

    Ok(article)
}

/// 以两空格缩进写出 JSON
pub async fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let display = path.display().to_string();
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::json_failed(&display, e))?;
    fs::write(path, json)
        .await
        .map_err(|e| AppError::file_write_failed(display, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_file_writes_json_named_after_source() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let source = src.path().join("fox.txt");
        std::fs::write(&source, "The Fox\n狐狸\n\nThe *fox*(狐狸) jumped.\n那只狐狸跳了。\n").unwrap();

        let article = convert_file(&source, out.path()).await.unwrap();

        assert_eq!(article.id, "fox");
        let written = std::fs::read_to_string(out.path().join("fox.json")).unwrap();
        assert!(written.contains("\n  \"titleCN\": \"狐狸\""));
        let back: Article = serde_json::from_str(&written).unwrap();
        assert_eq!(back, article);
    }

    #[tokio::test]
    async fn test_missing_output_folder_fails() {
        let src = tempfile::tempdir().unwrap();
        let source = src.path().join("a.txt");
        std::fs::write(&source, "A\n甲").unwrap();

        let result = convert_file(&source, &src.path().join("nope")).await;
        assert!(matches!(result, Err(AppError::File(_))));
    }
}

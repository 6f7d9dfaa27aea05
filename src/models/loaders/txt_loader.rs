use crate::error::{AppError, AppResult, FileError};
use std::path::{Path, PathBuf};
use tokio::fs;

const TXT_EXTENSION: &str = ".txt";

/// 由源文件名得到文章 id（去掉 `.txt` 扩展名）
pub fn article_id_from_file_name(file_name: &str) -> String {
    file_name
        .strip_suffix(TXT_EXTENSION)
        .unwrap_or(file_name)
        .to_string()
}

/// 扫描文件夹中所有 `.txt` 文件，按文件名排序返回
pub async fn list_txt_files(folder_path: &Path) -> AppResult<Vec<PathBuf>> {
    if !fs::try_exists(folder_path).await.unwrap_or(false) {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.display().to_string(),
        }
        .into());
    }

    let mut entries = fs::read_dir(folder_path)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path.display().to_string(), e))?;

    let mut txt_files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path.display().to_string(), e))?
    {
        let path = entry.path();
        let is_txt = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name.ends_with(TXT_EXTENSION));
        if !is_txt {
            continue;
        }

        let file_type = entry
            .file_type()
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        if file_type.is_file() {
            txt_files.push(path);
        }
    }

    txt_files.sort();
    Ok(txt_files)
}

/// 读取 UTF-8 源文件
pub async fn read_source_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_id_strips_extension() {
        assert_eq!(article_id_from_file_name("1.txt"), "1");
        assert_eq!(article_id_from_file_name("the-fox.txt"), "the-fox");
        assert_eq!(article_id_from_file_name("notes"), "notes");
    }

    #[tokio::test]
    async fn test_list_txt_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "readme.md", "c.txt.bak"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = list_txt_files(dir.path()).await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_txt_files(&dir.path().join("missing")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::File(FileError::DirectoryNotFound { .. })
        ));
    }
}

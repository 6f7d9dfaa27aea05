use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一篇双语文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// 由源文件名去掉扩展名得到
    pub id: String,
    pub title: String,
    #[serde(rename = "titleCN")]
    pub title_cn: String,
    #[serde(rename = "createdAt", with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub paragraphs: Vec<Paragraph>,
}

/// 原文与译文组成的段落对
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub original: String,
    pub translation: String,
}

impl Paragraph {
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.translation.is_empty()
    }
}

impl Article {
    /// 在一组文章中按 id 查找
    pub fn find<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
        articles.iter().find(|a| a.id == id)
    }
}

/// `createdAt` 使用 UTC 毫秒精度的 ISO-8601 格式，如 `2024-05-01T08:30:00.123Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Article {
        Article {
            id: "fox".to_string(),
            title: "The Fox".to_string(),
            title_cn: "狐狸".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap(),
            paragraphs: vec![Paragraph {
                original: "The *fox*(狐狸) jumped.".to_string(),
                translation: "那只狐狸跳了。".to_string(),
            }],
        }
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["titleCN"], "狐狸");
        assert_eq!(value["createdAt"], "2024-05-01T08:30:00.000Z");
        assert_eq!(value["paragraphs"][0]["translation"], "那只狐狸跳了。");
        assert!(value.get("title_cn").is_none());
    }

    #[test]
    fn test_reads_documents_written_elsewhere() {
        let json = r#"{
            "id": "fox",
            "title": "The Fox",
            "titleCN": "狐狸",
            "createdAt": "2024-05-01T08:30:00.000Z",
            "paragraphs": [{ "original": "The *fox*(狐狸) jumped.", "translation": "那只狐狸跳了。" }]
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article, sample());
    }

    #[test]
    fn test_find_by_id() {
        let articles = vec![sample()];
        assert!(Article::find(&articles, "fox").is_some());
        assert!(Article::find(&articles, "cat").is_none());
    }
}

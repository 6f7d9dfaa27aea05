use bilingual_reader::client::{
    load_article, render_article, ArticleView, DirSource, HomeView, ReaderSession,
    ThemePreferences,
};
use bilingual_reader::orchestrator::App;
use bilingual_reader::{logger, Article, Config, Paragraph, Segment};
use pretty_assertions::assert_eq;
use std::path::Path;

const FOX: &str = "The Fox\n狐狸\n\nThe *fox*(狐狸) jumped.\n那只狐狸跳了。\n";
const CATS: &str = "Cats\n猫\n\nI *love*(喜欢) cats.\n我喜欢猫。\n\n\n\nThey sleep a lot.\n它们睡得很多。";

fn write_sources(dir: &Path) {
    std::fs::write(dir.join("fox.txt"), FOX).unwrap();
    std::fs::write(dir.join("cats.txt"), CATS).unwrap();
    std::fs::write(dir.join("notes.md"), "ignored").unwrap();
}

async fn generate(txt: &Path, out: &Path) {
    logger::init(false);
    let config = Config {
        txt_folder: txt.display().to_string(),
        output_folder: out.display().to_string(),
        ..Config::default()
    };
    App::initialize(config).await.unwrap().run().await.unwrap();
}

#[tokio::test]
async fn test_generate_then_read_back() {
    let txt = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_sources(txt.path());

    generate(txt.path(), out.path()).await;

    // 每个源文件一个 JSON，加上汇总文件
    let mut written: Vec<_> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    written.sort();
    assert_eq!(written, vec!["articles.json", "cats.json", "fox.json"]);

    let aggregate: Vec<Article> =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("articles.json")).unwrap())
            .unwrap();
    assert_eq!(aggregate.len(), 2);
    assert_eq!(aggregate[0].id, "cats");
    assert_eq!(
        aggregate[0].paragraphs,
        vec![
            Paragraph {
                original: "I *love*(喜欢) cats.".to_string(),
                translation: "我喜欢猫。".to_string(),
            },
            Paragraph {
                original: "They sleep a lot.".to_string(),
                translation: "它们睡得很多。".to_string(),
            },
        ]
    );

    let source = DirSource::new(out.path());
    let ArticleView::Loaded(fox) = load_article(&source, "fox").await else {
        panic!("fox 应该可以加载");
    };
    assert_eq!(fox.title, "The Fox");
    assert_eq!(fox.title_cn, "狐狸");

    let rendered = render_article(&fox);
    assert_eq!(
        rendered.paragraphs[0].segments,
        vec![
            Segment::Text { text: "The " },
            Segment::Gloss { word: "fox", definition: "狐狸" },
            Segment::Text { text: " jumped." },
        ]
    );
}

#[tokio::test]
async fn test_fallback_after_single_document_removed() {
    let txt = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_sources(txt.path());
    generate(txt.path(), out.path()).await;

    std::fs::remove_file(out.path().join("fox.json")).unwrap();

    let source = DirSource::new(out.path());
    match load_article(&source, "fox").await {
        ArticleView::Loaded(article) => assert_eq!(article.id, "fox"),
        ArticleView::NotFound => panic!("应该从汇总文件中找到"),
    }
}

#[tokio::test]
async fn test_session_over_generated_output() {
    let txt = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_sources(txt.path());
    generate(txt.path(), out.path()).await;

    let prefs_path = out.path().join("theme.json");
    let mut session = ReaderSession::new(
        DirSource::new(out.path()),
        ThemePreferences::load(&prefs_path).unwrap(),
        &prefs_path,
        1,
    );

    match session.home("狐狸", 1).await {
        HomeView::Listing(page) => {
            assert_eq!(page.total_items, 1);
            assert_eq!(page.items[0].id, "fox");
        }
        HomeView::LoadFailed => panic!("应该加载成功"),
    }

    session.set_font("Times").unwrap();
    assert_eq!(
        ThemePreferences::load(&prefs_path).unwrap().current_font,
        "Times New Roman, serif"
    );
}

#[tokio::test]
async fn test_regenerating_changes_only_timestamps() {
    let txt = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_sources(txt.path());

    generate(txt.path(), out.path()).await;
    let first: Article =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("fox.json")).unwrap())
            .unwrap();

    generate(txt.path(), out.path()).await;
    let second: Article =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("fox.json")).unwrap())
            .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.paragraphs, second.paragraphs);
    assert!(second.created_at >= first.created_at);
}

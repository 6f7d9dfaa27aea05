//! 终端阅读器
//!
//! 读取批量任务生成的 JSON（本地目录或 HTTP），在终端中浏览文章。
//! 生词显示为 `word⟨definition⟩`。

use anyhow::{Context, Result};
use bilingual_reader::client::{
    render_article, ArticleSource, ArticleView, BackgroundRotation, DirSource, HomeView,
    HttpSource, ReaderSession, ThemePreferences, ROTATION_INTERVAL,
};
use bilingual_reader::{logger, Config, Segment};
use clap::{Parser, Subcommand};

const CONFIG_FILE: &str = "reader.toml";

#[derive(Parser)]
#[command(name = "reader", version, about = "Browse bilingual articles in the terminal")]
struct Cli {
    /// Fetch documents over HTTP from `data_base_url` instead of the output folder
    #[arg(long, global = true)]
    http: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List articles, optionally filtered by a search query
    List {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },
    /// Show one article
    Show { id: String },
    /// Switch between dark and light mode
    Theme {
        #[arg(value_parser = ["dark", "light", "toggle"], default_value = "toggle")]
        mode: String,
    },
    /// Set the reading font by name (Arial, Times, Georgia, Verdana, Courier)
    Font { name: String },
    /// Set the paper color
    Paper { color: String },
    /// Cycle through the background images, one every 30 seconds
    Background {
        /// Number of images to show before exiting
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(CONFIG_FILE).context("加载配置失败")?;
    logger::init(config.verbose_logging);

    let preferences =
        ThemePreferences::load(&config.preferences_file).context("加载阅读偏好失败")?;

    if cli.http {
        let source = HttpSource::new(&config)?;
        run(cli.command, session(source, preferences, &config)).await
    } else {
        let source = DirSource::from_config(&config);
        run(cli.command, session(source, preferences, &config)).await
    }
}

fn session<S: ArticleSource>(
    source: S,
    preferences: ThemePreferences,
    config: &Config,
) -> ReaderSession<S> {
    ReaderSession::new(
        source,
        preferences,
        &config.preferences_file,
        config.page_size,
    )
}

async fn run<S: ArticleSource>(command: Command, mut session: ReaderSession<S>) -> Result<()> {
    match command {
        Command::List { query, page } => match session.home(&query, page).await {
            HomeView::Listing(page) => {
                if page.items.is_empty() {
                    println!("No articles available yet. Please add some TXT files to the system.");
                }
                for article in &page.items {
                    println!(
                        "{:<12} {}  ({})",
                        article.id,
                        article.title,
                        article.created_at.format("%Y-%m-%d")
                    );
                }
                println!("-- page {}/{} --", page.page, page.total_pages);
            }
            HomeView::LoadFailed => println!("Loading failed."),
        },
        Command::Show { id } => match session.open(&id).await {
            ArticleView::Loaded(article) => print_article(&article),
            ArticleView::NotFound => println!("Article Not Found"),
        },
        Command::Theme { mode } => {
            match mode.as_str() {
                "dark" => session.set_theme(true)?,
                "light" => session.set_theme(false)?,
                _ => session.toggle_theme()?,
            }
            println!("theme: {}", session.preferences().theme_class());
        }
        Command::Font { name } => {
            session.set_font(&name)?;
            println!("font: {}", session.preferences().current_font);
        }
        Command::Paper { color } => {
            session.set_paper_color(&color)?;
            println!("paper: {}", session.preferences().current_paper_color);
        }
        Command::Background { count } => rotate_backgrounds(count).await,
    }
    Ok(())
}

async fn rotate_backgrounds(count: usize) {
    let mut rotation = BackgroundRotation::with_defaults(&mut rand::thread_rng());
    rotation
        .rotate(count, ROTATION_INTERVAL, |image| println!("background: {}", image))
        .await;
}

fn print_article(article: &bilingual_reader::Article) {
    let rendered = render_article(article);

    println!("{}", rendered.title);
    if let Some(title_cn) = rendered.title_cn {
        println!("{}", title_cn);
    }

    for paragraph in &rendered.paragraphs {
        println!();
        let original: String = paragraph
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => text.to_string(),
                Segment::Gloss { word, definition } => format!("{word}⟨{definition}⟩"),
            })
            .collect();
        println!("{}", original);
        println!("{}", paragraph.translation);
    }
}

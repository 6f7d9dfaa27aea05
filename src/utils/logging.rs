/// 日志工具模块
///
/// 提供批量转换过程中的日志格式化和输出辅助函数
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `txt_folder`: 源文件目录
/// - `output_folder`: 输出目录
/// - `max_concurrent`: 最大并发数
pub fn log_startup(txt_folder: &str, output_folder: &str, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文章批量转换模式");
    info!("📂 源目录: {}", txt_folder);
    info!("📦 输出目录: {}", output_folder);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录源文件扫描结果
pub fn log_files_found(total: usize) {
    info!("✓ 找到 {} 个待转换的TXT文件", total);
}

/// 记录单个文件处理开始
pub fn log_file_start(file_name: &str) {
    info!("Processing file: {}", file_name);
}

/// 记录单个文件生成完成
///
/// # 参数
/// - `output_path`: 生成的 JSON 文件路径
/// - `title`: 文章标题
/// - `paragraphs`: 段落数量
pub fn log_file_generated(output_path: &str, title: &str, paragraphs: usize) {
    info!(
        "Generated: {} [{}] ({} 段)",
        output_path,
        truncate_text(title, 40),
        paragraphs
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `articles`: 文章数量
/// - `paragraphs`: 段落总数
/// - `aggregate_path`: 汇总文件路径
pub fn print_final_stats(articles: usize, paragraphs: usize, aggregate_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部转换完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 文章: {}", articles);
    info!("📝 段落: {}", paragraphs);
    info!("{}", "=".repeat(60));
    info!("Generated: {}", aggregate_path);
    info!("\n✅ All files generated successfully!");
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-album")]
#[command(about = "根据 CSV 商品列表批量生成图册图片（800×1000，附品牌/名称/型号表格）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 商品列表 CSV（第一行为标题行）
    #[arg(long, default_value = "list.csv")]
    pub csv: PathBuf,

    /// 基础文件名所在目录（默认: 当前目录）
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// 表格文字使用的字体（.ttf/.ttc/.otf）
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// 同时保存 800×800 主图
    #[arg(long)]
    pub main_image: bool,

    /// 以 JSON 保存处理结果
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// 退出前不等待按键
    #[arg(long)]
    pub no_pause: bool,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 查看/修改配置
    Config {
        /// 设置字体路径
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// 是否同时保存主图 (true/false)
        #[arg(long)]
        set_main_image: Option<bool>,

        /// 显示配置
        #[arg(long)]
        show: bool,
    },
}

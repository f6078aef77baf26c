use anyhow::Context;
use catalog_album::cli::{Cli, Commands};
use catalog_album::common::layout::TableLayout;
use catalog_album::composer::{self, Composer};
use catalog_album::config::Config;
use catalog_album::pipeline::{self, RunOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("警告：无法读取配置（{}），使用默认配置。", e);
        Config::default()
    });

    if let Some(Commands::Config { set_font, set_main_image, show }) = &cli.command {
        return match run_config(config, set_font.clone(), *set_main_image, *show) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("错误：{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    let pause = config.pause_on_exit && !cli.no_pause;
    let code = run_batch(&cli, &config);
    if pause {
        wait_for_key();
    }
    code
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run_batch(cli: &Cli, config: &Config) -> ExitCode {
    println!("🖼  catalog-album - 图册生成\n");

    // 1. フォント
    let explicit_font = cli.font.clone().or_else(|| config.get_font_path());
    let font = match composer::load_font(explicit_font.as_deref()) {
        Ok(font) => {
            println!("✔ 字体: {}", font.describe());
            if !font.covers_labels() {
                eprintln!("警告：未找到字体 'msyh.ttc' 或其他中文字体，表格标签（品牌/名称/型号）将无法正常显示。可用 --font 指定字体。");
            }
            Some(font)
        }
        Err(e) => {
            eprintln!("警告：无法加载字体（{}），表格中将不绘制文字。", e);
            None
        }
    };

    let layout = TableLayout {
        font_size: config.font_size,
        ..TableLayout::default()
    };
    let composer = Composer::new(layout, font);

    // 2. 一括処理
    let options = RunOptions {
        csv_path: cli.csv.clone(),
        input_dir: cli.input_dir.clone().unwrap_or_default(),
        output_dir: cli.output.clone(),
        save_main_image: cli.main_image || config.save_main_image,
    };

    let summary = match pipeline::run(&options, &composer) {
        Ok(summary) => summary,
        Err(e) if e.is_fatal() => {
            eprintln!("错误：{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("读取或处理 CSV 文件时发生严重错误: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 3. サマリー
    println!("{}", summary.render());

    if let Some(report) = &cli.report {
        match pipeline::write_report(report, &summary) {
            Ok(()) => println!("\n✔ 报告已保存: {}", report.display()),
            Err(e) => eprintln!("警告：无法保存报告: {}", e),
        }
    }

    ExitCode::SUCCESS
}

fn run_config(
    mut config: Config,
    set_font: Option<PathBuf>,
    set_main_image: Option<bool>,
    show: bool,
) -> anyhow::Result<()> {
    if let Some(path) = set_font {
        config
            .set_font_path(path)
            .context("无法设置字体路径")?;
        println!("✔ 已设置字体");
    }

    if let Some(enabled) = set_main_image {
        config.save_main_image = enabled;
        config.save().context("无法保存配置")?;
        println!("✔ 已{}主图保存", if enabled { "启用" } else { "禁用" });
    }

    if show {
        println!("配置:");
        println!("  路径: {}", Config::config_path()?.display());
        println!(
            "  字体: {}",
            config
                .get_font_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "未设置（自动查找）".to_string())
        );
        println!("  字号: {}", config.font_size);
        println!("  保存主图: {}", if config.save_main_image { "是" } else { "否" });
        println!("  退出前等待按键: {}", if config.pause_on_exit { "是" } else { "否" });
    }

    Ok(())
}

fn wait_for_key() {
    println!("按任意键退出.");
    // 標準入力が端末でない場合は即座に戻る
    if let Err(e) = console::Term::stdout().read_key() {
        log::debug!("キー入力待ちに失敗: {}", e);
    }
}

//! 一括処理パイプライン
//!
//! CSVを1行ずつ読み、行ごとに 探索 → 合成 → 保存 を順に行う。
//! 行単位のエラーはここで捕まえてサマリーに記録し、次の行へ進む。
//! 実行全体を止めるのは CSV を開けない・データ行が無い場合だけ。

use crate::composer::Composer;
use crate::error::{AlbumError, Result};
use crate::resolver::resolve_image;
use crate::writer::OutputWriter;
use catalog_album_common::parser::{parse_row, strip_bom};
use catalog_album_common::{CatalogRow, RunSummary};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 実行オプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub csv_path: PathBuf,
    /// 基準ファイル名の起点（空ならカレント）
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub save_main_image: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("list.csv"),
            input_dir: PathBuf::new(),
            output_dir: PathBuf::from("output"),
            save_main_image: false,
        }
    }
}

/// CSV全体を処理してサマリーを返す
///
/// # Returns
/// * `Ok(RunSummary)` - 行単位の失敗や読み込み途中の中断があっても Ok
/// * `Err(AlbumError::CsvOpen)` - CSVを開けない
/// * `Err(AlbumError::EmptyCsv)` - ヘッダー行しかない（または空）
/// * `Err(AlbumError::CsvRead)` - ヘッダー行が読めない
pub fn run(options: &RunOptions, composer: &Composer) -> Result<RunSummary> {
    let file = File::open(&options.csv_path).map_err(|source| AlbumError::CsvOpen {
        path: options.csv_path.clone(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines().peekable();

    // ヘッダー行を読み飛ばす
    match lines.next() {
        None => return Err(AlbumError::EmptyCsv(options.csv_path.clone())),
        Some(Err(e)) => return Err(AlbumError::CsvRead(e)),
        Some(Ok(header)) => log::debug!("ヘッダー: {}", strip_bom(&header)),
    }
    if lines.peek().is_none() {
        return Err(AlbumError::EmptyCsv(options.csv_path.clone()));
    }

    let writer = OutputWriter::new(&options.output_dir);
    let mut summary = RunSummary::new();
    let mut line_number = 1;

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("读取或处理 CSV 文件时发生严重错误: {}", e);
                summary.record_abort(e.to_string());
                break;
            }
        };
        line_number += 1;
        summary.record_line();

        process_line(line_number, &line, options, composer, &writer, &mut summary);
    }

    Ok(summary)
}

/// 1行を処理する。エラーは `summary` に記録し、呼び出し元へは返さない
fn process_line(
    line_number: usize,
    line: &str,
    options: &RunOptions,
    composer: &Composer,
    writer: &OutputWriter,
    summary: &mut RunSummary,
) {
    let row = match parse_row(line) {
        Ok(row) => row,
        Err(e) => {
            eprintln!("警告：第 {} 行数据不完整（{}），跳过。行内容：{}", line_number, e, line);
            summary.record_malformed(line_number, line);
            return;
        }
    };

    let Some(source) = resolve_image(&options.input_dir, &row.base_filename) else {
        eprintln!("警告：未找到与 '{}' 相关的文件. 跳过此行.", row.base_filename);
        summary.record_not_found(&row.base_filename);
        return;
    };

    if let Err(e) = process_image(&row, &source, options, composer, writer) {
        eprintln!("处理文件 '{}' 时发生错误: {}. 跳过此文件.", source.display(), e);
        summary.record_processing_error(&row.base_filename, e.to_string());
    }
}

fn process_image(
    row: &CatalogRow,
    source: &Path,
    options: &RunOptions,
    composer: &Composer,
    writer: &OutputWriter,
) -> Result<PathBuf> {
    let composition = composer.compose_file(source, row)?;

    if composition.was_downscaled() {
        let (w, h) = composition.original_size;
        let (nw, nh) = composition.placed_size;
        println!("信息：文件 '{}' 尺寸 ({}x{}) 大于 800x800，已按比例缩小至 {}x{}。", source.display(), w, h, nw, nh);
    }

    if options.save_main_image {
        match writer.write_main_image(&row.base_filename, source, &composition.main) {
            Ok(path) => println!("信息：已保存主图到 '{}'", path.display()),
            Err(e) => eprintln!("警告：保存主图时出错: {}", e),
        }
    }

    println!("处理文件 {} -> {}", source.display(), OutputWriter::album_file_name(source));
    writer.write_album(source, &composition.album)
}

/// JSONレポート
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport<'a> {
    finished_at: String,
    succeeded: usize,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// サマリーをJSONで保存
pub fn write_report(path: &Path, summary: &RunSummary) -> Result<()> {
    let report = RunReport {
        finished_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        succeeded: summary.succeeded(),
        summary,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, json)?;
    Ok(())
}

//! ファイル名の規則
//!
//! - 入力画像の探索候補: `{基準名}{バリアント}{拡張子}`
//! - 出力画像: `{ステム（.主图 を除去）}.图册{拡張子}`
//! - 主図（800×800）: `{基準名}.主图{拡張子}`

/// 探索するバリアント（外側ループ）
pub const VARIANTS: &[&str] = &["", MAIN_IMAGE_MARKER];

/// 探索する拡張子（内側ループ）
pub const EXTENSIONS: &[&str] = &[".jpeg", ".png", ".jpg"];

/// 主図を示すマーカー
pub const MAIN_IMAGE_MARKER: &str = ".主图";

/// 出力ファイル名に付けるサフィックス
pub const ALBUM_SUFFIX: &str = ".图册";

/// 探索候補のファイル名を優先順に返す
///
/// バリアントが外側、拡張子が内側のループ順。
pub fn candidate_names(base_filename: &str) -> Vec<String> {
    VARIANTS
        .iter()
        .flat_map(|variant| {
            EXTENSIONS
                .iter()
                .map(move |ext| format!("{}{}{}", base_filename, variant, ext))
        })
        .collect()
}

/// 出力ファイル名を生成
///
/// `stem` は見つかったファイルの拡張子なしのファイル名、`extension` は
/// ドットなしの元の拡張子（大文字小文字はそのまま）。
pub fn output_file_name(stem: &str, extension: Option<&str>) -> String {
    let stem = stem.replace(MAIN_IMAGE_MARKER, "");
    format!("{}{}{}", stem, ALBUM_SUFFIX, dotted(extension))
}

/// 主図（800×800）の保存ファイル名を生成
pub fn main_image_file_name(base_name: &str, extension: Option<&str>) -> String {
    format!("{}{}{}", base_name, MAIN_IMAGE_MARKER, dotted(extension))
}

fn dotted(extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() => format!(".{}", ext),
        _ => String::new(),
    }
}

//! 入力画像の探索
//!
//! CSVの基準ファイル名に バリアント（"" / ".主图"）と拡張子（.jpeg/.png/.jpg）
//! を付けた候補を優先順に調べ、最初に存在したものを返す。

use catalog_album_common::candidate_names;
use std::path::{Path, PathBuf};

/// 基準ファイル名に対応する画像を探す
///
/// `base_dir` が空のパスの場合はカレントディレクトリ基準。
/// 見つからなければ `None`（行単位の失敗であり、実行は続行する）。
pub fn resolve_image(base_dir: &Path, base_filename: &str) -> Option<PathBuf> {
    for name in candidate_names(base_filename) {
        let candidate = base_dir.join(&name);
        if candidate.exists() {
            log::debug!("画像を発見: {}", candidate.display());
            return Some(candidate);
        }
        log::debug!("候補なし: {}", candidate.display());
    }

    None
}

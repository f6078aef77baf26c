//! 表の文字に使うフォント
//!
//! 探索順:
//! 1. 明示指定（CLI / 環境変数 / 設定ファイル）
//! 2. カレントディレクトリの msyh.ttc
//! 3. %WINDIR%\Fonts\msyh.ttc
//! 4. Linux / macOS の代表的なCJKフォント
//! 5. 同梱の DejaVu Sans（CJKグリフなし。ラベルは豆腐になる）

use crate::error::{AlbumError, Result};
use ab_glyph::{Font, FontVec};
use catalog_album_common::LABEL_FIELDS;
use std::path::{Path, PathBuf};

const DEFAULT_FONT_FILE: &str = "msyh.ttc";

static FALLBACK_FONT_DATA: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const FALLBACK_FONT_NAME: &str = "DejaVu Sans（同梱）";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wqy-microhei/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
];

/// 読み込み済みのフォント
pub struct LabelFont {
    font: FontVec,
    /// 同梱フォントの場合は `None`
    path: Option<PathBuf>,
}

impl LabelFont {
    /// フォントファイルを読み込む（.ttc はコレクションの先頭を使う）
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| AlbumError::Font(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            font,
            path: Some(path.to_path_buf()),
        })
    }

    /// 同梱のフォールバックフォント
    pub fn embedded() -> Result<Self> {
        let font = FontVec::try_from_vec(FALLBACK_FONT_DATA.to_vec())
            .map_err(|e| AlbumError::Font(format!("{}: {}", FALLBACK_FONT_NAME, e)))?;
        Ok(Self { font, path: None })
    }

    pub fn font(&self) -> &FontVec {
        &self.font
    }

    pub fn is_embedded(&self) -> bool {
        self.path.is_none()
    }

    /// 表示用の名前（パスまたは同梱フォント名）
    pub fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => FALLBACK_FONT_NAME.to_string(),
        }
    }

    /// 文字にグリフがあるか（.notdef 以外に対応付くか）
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.glyph_id(ch).0 != 0
    }

    /// 表のラベル（品牌/名称/型号）をすべて描けるか
    pub fn covers_labels(&self) -> bool {
        LABEL_FIELDS
            .iter()
            .flat_map(|f| f.label.chars())
            .all(|ch| self.has_glyph(ch))
    }
}

/// 探索候補を優先順に返す（同梱フォントは含まない）
pub fn font_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }

    candidates.push(PathBuf::from(DEFAULT_FONT_FILE));

    let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
    candidates.push(PathBuf::from(windir).join("Fonts").join(DEFAULT_FONT_FILE));

    candidates.extend(SYSTEM_FONTS.iter().map(PathBuf::from));
    candidates
}

/// 最初に読み込めたフォントを返す。どれも無ければ同梱フォント
pub fn load_font(explicit: Option<&Path>) -> Result<LabelFont> {
    for path in font_candidates(explicit) {
        if !path.exists() {
            continue;
        }
        match LabelFont::from_path(&path) {
            Ok(font) => {
                log::debug!("フォント: {}", path.display());
                return Ok(font);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    log::debug!("フォント: {}", FALLBACK_FONT_NAME);
    LabelFont::embedded()
}

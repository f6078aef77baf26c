//! 出力の保存
//!
//! 出力名は見つかった入力ファイル名から作る（`naming` を参照）。
//! 同名ファイルは黙って上書きする。

use crate::error::{AlbumError, Result};
use catalog_album_common::{main_image_file_name, output_file_name};
use image::RgbImage;
use std::path::{Path, PathBuf};

pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 出力フォルダを作成（既にあれば何もしない）
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// 図册画像のファイル名（フォルダ部分は含まない）
    pub fn album_file_name(source: &Path) -> String {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = source.extension().map(|e| e.to_string_lossy().to_string());
        output_file_name(&stem, extension.as_deref())
    }

    pub fn album_path(&self, source: &Path) -> PathBuf {
        self.output_dir.join(Self::album_file_name(source))
    }

    /// 主図のパス（CSVの基準ファイル名のファイル名部分 + 元の拡張子）
    pub fn main_image_path(&self, base_filename: &str, source: &Path) -> PathBuf {
        let base_name = Path::new(base_filename)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| base_filename.to_string());
        let extension = source.extension().map(|e| e.to_string_lossy().to_string());
        self.output_dir
            .join(main_image_file_name(&base_name, extension.as_deref()))
    }

    /// 図册画像を保存して保存先を返す
    pub fn write_album(&self, source: &Path, image: &RgbImage) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.album_path(source);
        image.save(&path).map_err(AlbumError::ImageSave)?;
        Ok(path)
    }

    /// 主図を保存して保存先を返す
    pub fn write_main_image(&self, base_filename: &str, source: &Path, image: &RgbImage) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.main_image_path(base_filename, source);
        image.save(&path).map_err(AlbumError::ImageSave)?;
        Ok(path)
    }
}

//! 図册画像の合成
//!
//! 読み込み → RGB正規化 → （必要なら）縮小 → 800×800 中央配置
//! → 800×1000 へ拡張 → 表の描画

mod channels;
mod fit;
mod font;
mod table;

pub use channels::to_rgb;
pub use fit::{center_on_square, downscale_to_fit, extend_canvas, fit_dimensions};
pub use font::{font_candidates, load_font, LabelFont};
pub use table::draw_table;

use crate::error::{AlbumError, Result};
use catalog_album_common::layout::{TableLayout, IMAGE_SIZE};
use catalog_album_common::CatalogRow;
use image::{ImageReader, RgbImage};
use std::path::Path;

/// 合成結果
pub struct Composition {
    /// 800×800 の中間画像（主図）
    pub main: RgbImage,
    /// 800×1000 の最終画像
    pub album: RgbImage,
    pub original_size: (u32, u32),
    pub placed_size: (u32, u32),
}

impl Composition {
    pub fn was_downscaled(&self) -> bool {
        self.original_size != self.placed_size
    }
}

pub struct Composer {
    layout: TableLayout,
    font: Option<LabelFont>,
}

impl Composer {
    pub fn new(layout: TableLayout, font: Option<LabelFont>) -> Self {
        Self { layout, font }
    }

    /// 画像ファイルを読み込んで合成する
    pub fn compose_file(&self, path: &Path, row: &CatalogRow) -> Result<Composition> {
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(AlbumError::ImageLoad)?;
        self.compose(to_rgb(image)?, row)
    }

    /// RGB画像から合成する
    pub fn compose(&self, image: RgbImage, row: &CatalogRow) -> Result<Composition> {
        let original_size = image.dimensions();
        let placed = downscale_to_fit(image);
        let placed_size = placed.dimensions();
        debug_assert!(placed_size.0 <= IMAGE_SIZE && placed_size.1 <= IMAGE_SIZE);

        let main = center_on_square(&placed);
        let mut album = extend_canvas(&main);
        draw_table(&mut album, &self.layout, row, self.font.as_ref());

        Ok(Composition {
            main,
            album,
            original_size,
            placed_size,
        })
    }
}

//! チャンネル数の正規化
//!
//! どの入力も 3チャンネル RGB に揃える:
//! - 4ch: 先頭3chを残し、アルファは捨てる（合成はしない）
//! - 3ch: そのまま
//! - 2ch: 輝度1chにしてから3chに複製
//! - 1ch: 3chに複製
//!
//! 16bit・浮動小数の画像は先に 8bit に落としてから扱う。

use crate::error::{AlbumError, Result};
use image::{DynamicImage, Rgb, RgbImage};

pub fn to_rgb(image: DynamicImage) -> Result<RgbImage> {
    match image.color().channel_count() {
        4 => {
            let rgba = image.into_rgba8();
            Ok(RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                let p = rgba.get_pixel(x, y);
                Rgb([p[0], p[1], p[2]])
            }))
        }
        3 => Ok(image.into_rgb8()),
        2 => {
            let gray_alpha = image.into_luma_alpha8();
            Ok(RgbImage::from_fn(gray_alpha.width(), gray_alpha.height(), |x, y| {
                let v = gray_alpha.get_pixel(x, y)[0];
                Rgb([v, v, v])
            }))
        }
        1 => {
            let gray = image.into_luma8();
            Ok(RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
                let v = gray.get_pixel(x, y)[0];
                Rgb([v, v, v])
            }))
        }
        n => Err(AlbumError::UnsupportedChannels(n)),
    }
}

//! 縮小・中央配置・キャンバス拡張

use catalog_album_common::layout::{center_offset, CANVAS_HEIGHT, CANVAS_WIDTH, IMAGE_SIZE, WHITE};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// 最大辺 `max` に収まる縮小後サイズ
///
/// どちらの辺も `max` 以下ならそのまま返す。比率は
/// `min(max/w, max/h)`、各辺は四捨五入して `1..=max` に収める。
pub fn fit_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let ratio = f64::min(max as f64 / width as f64, max as f64 / height as f64);
    let scale = |v: u32| ((v as f64 * ratio).round() as u32).clamp(1, max);
    (scale(width), scale(height))
}

/// 800×800 を超える画像を Lanczos で縮小する。収まる画像はそのまま返す。
pub fn downscale_to_fit(image: RgbImage) -> RgbImage {
    let (w, h) = image.dimensions();
    let (new_w, new_h) = fit_dimensions(w, h, IMAGE_SIZE);
    if (new_w, new_h) == (w, h) {
        return image;
    }

    imageops::resize(&image, new_w, new_h, FilterType::Lanczos3)
}

/// 白い 800×800 キャンバスの中央に貼り付ける
pub fn center_on_square(image: &RgbImage) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, Rgb(WHITE));
    let (x, y) = center_offset(image.width(), image.height());
    imageops::replace(&mut canvas, image, x as i64, y as i64);
    canvas
}

/// 800×800 を白い 800×1000 キャンバスの上端に貼り付ける
pub fn extend_canvas(square: &RgbImage) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb(WHITE));
    imageops::replace(&mut canvas, square, 0, 0);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_small_unchanged() {
        assert_eq!(fit_dimensions(300, 200, 800), (300, 200));
        assert_eq!(fit_dimensions(800, 800, 800), (800, 800));
    }

    #[test]
    fn test_fit_landscape() {
        assert_eq!(fit_dimensions(1600, 1200, 800), (800, 600));
    }

    #[test]
    fn test_fit_rounds() {
        // 1000 * (800/3000) = 266.67
        assert_eq!(fit_dimensions(1000, 3000, 800), (267, 800));
    }

    #[test]
    fn test_fit_extreme_ratio_clamped() {
        assert_eq!(fit_dimensions(10000, 2, 800), (800, 1));
    }

    #[test]
    fn test_fit_preserves_aspect() {
        for &(w, h) in &[(1024, 768), (801, 600), (3000, 4000), (1920, 1080), (900, 901)] {
            let (nw, nh) = fit_dimensions(w, h, 800);
            assert!(nw <= 800 && nh <= 800, "{}x{} -> {}x{}", w, h, nw, nh);
            let diff = (nw as f64 / nh as f64 - w as f64 / h as f64).abs();
            assert!(diff < 0.01, "{}x{} -> {}x{} (diff {})", w, h, nw, nh, diff);
        }
    }

    #[test]
    fn test_downscale_large_image() {
        let src = RgbImage::from_pixel(1600, 1000, Rgb([10, 200, 10]));
        let out = downscale_to_fit(src);
        assert_eq!(out.dimensions(), (800, 500));
    }

    #[test]
    fn test_small_image_not_resampled() {
        let src = RgbImage::from_fn(5, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 50, 7]));
        let out = downscale_to_fit(src.clone());
        assert_eq!(out, src);
    }

    #[test]
    fn test_center_on_square() {
        let src = RgbImage::from_pixel(300, 200, Rgb([255, 0, 0]));
        let square = center_on_square(&src);
        assert_eq!(square.dimensions(), (800, 800));
        assert_eq!(square.get_pixel(250, 300), &Rgb([255, 0, 0]));
        assert_eq!(square.get_pixel(549, 499), &Rgb([255, 0, 0]));
        assert_eq!(square.get_pixel(249, 300), &Rgb(WHITE));
        assert_eq!(square.get_pixel(550, 499), &Rgb(WHITE));
        assert_eq!(square.get_pixel(250, 500), &Rgb(WHITE));
    }

    #[test]
    fn test_center_odd_remainder_biases_top_left() {
        let src = RgbImage::from_pixel(799, 799, Rgb([0, 0, 255]));
        let square = center_on_square(&src);
        assert_eq!(square.get_pixel(0, 0), &Rgb([0, 0, 255]));
        assert_eq!(square.get_pixel(799, 799), &Rgb(WHITE));
    }

    #[test]
    fn test_extend_canvas() {
        let square = RgbImage::from_pixel(800, 800, Rgb([1, 2, 3]));
        let canvas = extend_canvas(&square);
        assert_eq!(canvas.dimensions(), (800, 1000));
        assert_eq!(canvas.get_pixel(0, 799), &Rgb([1, 2, 3]));
        assert_eq!(canvas.get_pixel(0, 800), &Rgb(WHITE));
        assert_eq!(canvas.get_pixel(799, 999), &Rgb(WHITE));
    }
}

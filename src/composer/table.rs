//! 下部の帯に 品牌/名称/型号 の表を描く

use super::font::LabelFont;
use catalog_album_common::layout::{TableLayout, LABEL_FIELDS, TABLE_BACKGROUND, TABLE_FOREGROUND};
use catalog_album_common::CatalogRow;
use ab_glyph::PxScale;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;

/// 表を描画する
///
/// 枠は `[x, x+width] × [y, y+height]` の両端を含む。値は折り返しも
/// 切り詰めもせず、そのまま描く（はみ出しは許容）。
/// フォントが無い場合は線と塗りだけ描く。
pub fn draw_table(canvas: &mut RgbImage, layout: &TableLayout, row: &CatalogRow, font: Option<&LabelFont>) {
    let background = Rgb(TABLE_BACKGROUND);
    let foreground = Rgb(TABLE_FOREGROUND);

    let bounds = Rect::at(layout.x as i32, layout.y as i32).of_size(layout.width + 1, layout.height + 1);
    draw_filled_rect_mut(canvas, bounds, background);
    draw_hollow_rect_mut(canvas, bounds, foreground);

    let (left, right) = (layout.x as f32, layout.right() as f32);
    for y in layout.divider_ys() {
        draw_line_segment_mut(canvas, (left, y as f32), (right, y as f32), foreground);
    }

    let column_x = layout.column_divider_x() as f32;
    draw_line_segment_mut(
        canvas,
        (column_x, layout.y as f32),
        (column_x, layout.bottom() as f32),
        foreground,
    );

    let Some(font) = font else {
        return;
    };

    let scale = PxScale::from(layout.font_size);
    for (i, (field, value)) in LABEL_FIELDS.iter().zip(row.table_values()).enumerate() {
        let y = layout.text_y(i) as i32;
        draw_text_mut(canvas, foreground, layout.label_x() as i32, y, scale, font.font(), field.label);
        if !value.is_empty() {
            draw_text_mut(canvas, foreground, layout.value_x() as i32, y, scale, font.font(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_album_common::layout::WHITE;

    fn blank_canvas() -> RgbImage {
        RgbImage::from_pixel(800, 1000, Rgb(WHITE))
    }

    #[test]
    fn test_table_fill_and_border() {
        let mut canvas = blank_canvas();
        draw_table(&mut canvas, &TableLayout::default(), &CatalogRow::default(), None);

        let black = Rgb(TABLE_FOREGROUND);
        let blue = Rgb(TABLE_BACKGROUND);

        // 枠線
        assert_eq!(canvas.get_pixel(50, 880), &black);
        assert_eq!(canvas.get_pixel(750, 880), &black);
        assert_eq!(canvas.get_pixel(400, 820), &black);
        assert_eq!(canvas.get_pixel(400, 940), &black);

        // 塗り
        assert_eq!(canvas.get_pixel(400, 830), &blue);
        assert_eq!(canvas.get_pixel(740, 930), &blue);

        // 表の外は白のまま
        assert_eq!(canvas.get_pixel(400, 810), &Rgb(WHITE));
        assert_eq!(canvas.get_pixel(400, 960), &Rgb(WHITE));
        assert_eq!(canvas.get_pixel(20, 880), &Rgb(WHITE));
        assert_eq!(canvas.get_pixel(760, 880), &Rgb(WHITE));
    }

    #[test]
    fn test_table_dividers() {
        let mut canvas = blank_canvas();
        draw_table(&mut canvas, &TableLayout::default(), &CatalogRow::default(), None);

        let black = Rgb(TABLE_FOREGROUND);
        assert_eq!(canvas.get_pixel(400, 860), &black);
        assert_eq!(canvas.get_pixel(400, 900), &black);
        assert_eq!(canvas.get_pixel(130, 830), &black);
        assert_eq!(canvas.get_pixel(130, 930), &black);
        assert_ne!(canvas.get_pixel(400, 861), &black);
    }

    #[test]
    fn test_image_area_untouched() {
        let mut canvas = blank_canvas();
        draw_table(&mut canvas, &TableLayout::default(), &CatalogRow::default(), None);
        assert!((0..800).all(|y| canvas.get_pixel(400, y) == &Rgb(WHITE)));
    }
}

//! レイアウト設定モジュール
//!
//! px基準の固定レイアウト定義。
//! 元画像のサイズに関係なく、出力は常に 800×1000 で、
//! 下部200pxの帯に 品牌/名称/型号 の3行表を描画する。

// ============================================
// キャンバス
// ============================================

/// 商品画像領域（正方形）の一辺
pub const IMAGE_SIZE: u32 = 800;

/// 最終出力のサイズ
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1000;

/// 背景色
pub const WHITE: [u8; 3] = [255, 255, 255];

// ============================================
// 表
// ============================================

pub const TABLE_X: u32 = 50;
pub const TABLE_Y: u32 = 820;
pub const TABLE_WIDTH: u32 = CANVAS_WIDTH - TABLE_X * 2; // 700px
pub const TABLE_HEIGHT: u32 = 120;

/// 1行の高さ
pub const ROW_HEIGHT: u32 = 40;

/// ラベル列の幅（縦線の位置）
pub const LABEL_COLUMN_WIDTH: u32 = 80;

/// 文字の余白（セル左上からのオフセット）
pub const LABEL_PADDING_X: u32 = 20;
pub const VALUE_PADDING_X: u32 = 100;
pub const TEXT_PADDING_Y: u32 = 5;

pub const FONT_SIZE: f32 = 20.0;

/// 表の塗り（水色）
pub const TABLE_BACKGROUND: [u8; 3] = [204, 229, 255];
/// 枠線・文字色
pub const TABLE_FOREGROUND: [u8; 3] = [0, 0, 0];

// ============================================
// フィールド定義
// ============================================

/// 表に表示するフィールド
#[derive(Debug, Clone, Copy)]
pub struct LabelField {
    pub label: &'static str,
}

/// 表の行（上から順）
pub const LABEL_FIELDS: &[LabelField] = &[
    LabelField { label: "品牌" },
    LabelField { label: "名称" },
    LabelField { label: "型号" },
];

// ============================================
// レイアウト構造体
// ============================================

/// 表の幾何情報（すべて 800×1000 キャンバス上の座標）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub row_height: u32,
    pub label_column_width: u32,
    pub font_size: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            x: TABLE_X,
            y: TABLE_Y,
            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
            row_height: ROW_HEIGHT,
            label_column_width: LABEL_COLUMN_WIDTH,
            font_size: FONT_SIZE,
        }
    }
}

impl TableLayout {
    /// 右端のx座標（枠線を含む）
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// 下端のy座標（枠線を含む）
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// 横の区切り線のy座標（行数-1本）
    pub fn divider_ys(&self) -> Vec<u32> {
        (1..LABEL_FIELDS.len() as u32)
            .map(|i| self.y + self.row_height * i)
            .collect()
    }

    /// ラベル列と値列を分ける縦線のx座標
    pub fn column_divider_x(&self) -> u32 {
        self.x + self.label_column_width
    }

    /// 行iのテキスト描画y座標
    pub fn text_y(&self, row: usize) -> u32 {
        self.y + self.row_height * row as u32 + TEXT_PADDING_Y
    }

    pub fn label_x(&self) -> u32 {
        self.x + LABEL_PADDING_X
    }

    pub fn value_x(&self) -> u32 {
        self.x + VALUE_PADDING_X
    }
}

/// 縮小後の画像を 800×800 の中央に置くときの左上座標
///
/// 整数除算のため、余りが奇数の場合は左上寄りになる。
pub fn center_offset(width: u32, height: u32) -> (u32, u32) {
    (
        IMAGE_SIZE.saturating_sub(width) / 2,
        IMAGE_SIZE.saturating_sub(height) / 2,
    )
}

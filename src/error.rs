use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("无法打开 CSV 文件 '{path}': {source}")]
    CsvOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 文件 '{0}' 为空或只有标题行")]
    EmptyCsv(PathBuf),

    #[error("读取 CSV 文件出错: {0}")]
    CsvRead(std::io::Error),

    #[error("图像读取错误: {0}")]
    ImageLoad(#[source] image::ImageError),

    #[error("图像保存错误: {0}")]
    ImageSave(#[source] image::ImageError),

    #[error("不支持的图像通道数: {0}")]
    UnsupportedChannels(u8),

    #[error("字体加载错误: {0}")]
    Font(String),

    #[error("JSON 解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AlbumError {
    /// 実行全体を中止するエラーか（CSVそのものの問題）
    ///
    /// それ以外は行単位のエラーで、サマリーに記録して次の行へ進む。
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AlbumError::CsvOpen { .. } | AlbumError::EmptyCsv(_) | AlbumError::CsvRead(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AlbumError>;

//! 编码与落盘模块
//!
//! # 设计思路
//!
//! 输出目录不存在时自动 `create_dir_all`，避免上层判断；
//! PNG 先编码进内存缓冲再一次性 `fs::write`，写盘失败（权限、磁盘满）
//! 不会被缓冲层吞掉。同名文件直接覆盖，目录中无关文件不做任何处理。

use std::fs;
use std::path::PathBuf;

use image::codecs::png::{FilterType as PngFilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 确保输出目录存在（含中间目录，幂等）。
    pub(super) fn ensure_output_dir(&self) -> Result<(), IconError> {
        let dir = &self.config.output_dir;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// 将图标编码为 PNG 并写入输出目录，覆盖同名文件。
    pub(super) fn write_png(&self, icon: &RgbaImage, filename: &str) -> Result<PathBuf, IconError> {
        let path = self.config.output_dir.join(filename);

        let mut encoded = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut encoded,
            self.config.png_compression,
            PngFilterType::Adaptive,
        );
        encoder
            .write_image(
                icon.as_raw(),
                icon.width(),
                icon.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| IconError::Encode(format!("PNG 编码失败（{}）：{}", filename, e)))?;

        fs::write(&path, &encoded).map_err(|e| {
            IconError::FileSystem(format!("写入图标文件 '{}' 失败：{}", path.display(), e))
        })?;

        Ok(path)
    }
}

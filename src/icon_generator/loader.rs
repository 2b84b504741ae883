//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：存在性 → metadata 体积上限 → 读取 → 签名识别。
//! 目标是尽快失败，减少不必要的内存与 CPU 消耗；
//! 任何一步失败都会在产生任何输出文件之前中止整个运行。

use std::fs;

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 读取源图原始字节。
    pub(super) fn load_source_bytes(&self) -> Result<Vec<u8>, IconError> {
        let path = &self.config.source_path;
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::SourceNotFound(path.display().to_string()));
        }

        let metadata = fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "源图过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取源图文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(bytes)
    }

    /// 通过魔数识别内容是否为图片，在完整解码前拒绝明显的非图片输入。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("源图内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| IconError::InvalidFormat("无法识别源图类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{GeneratorConfig, IconError, IconGenerator};

    #[test]
    fn missing_source_maps_to_source_not_found() {
        let config = GeneratorConfig {
            source_path: "definitely/not/here.png".into(),
            ..GeneratorConfig::default()
        };
        let generator = IconGenerator::new(config);

        let result = generator.load_source_bytes();
        assert!(matches!(result, Err(IconError::SourceNotFound(_))));
    }

    #[test]
    fn signature_check_rejects_non_image_bytes() {
        let result = IconGenerator::validate_image_signature(b"%PDF-1.7 not an image");
        assert!(matches!(result, Err(IconError::InvalidFormat(_))));
    }

    #[test]
    fn signature_check_rejects_empty_bytes() {
        let result = IconGenerator::validate_image_signature(&[]);
        assert!(matches!(result, Err(IconError::InvalidFormat(_))));
    }

    #[test]
    fn signature_check_accepts_png_magic() {
        // 最小 PNG 头：签名 + IHDR 起始，足以被 infer 判定为 image/png
        let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&[0, 0, 0, 13, b'I', b'H', b'D', b'R']);

        IconGenerator::validate_image_signature(&bytes).expect("png magic should pass");
    }
}

//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA → 目标尺寸”的过程集中管理，并在关键节点增加资源上限控制。
//! 源图在任何缩放发生之前统一归一化为 RGBA：无 alpha 通道的输入会被补全为完全不透明，
//! 保证降采样不会因缺失通道引入伪影。
//!
//! ## 实现思路
//!
//! 1. 完整解码并按像素上限校验
//! 2. 转换 RGBA，并校验字节长度一致性
//! 3. 缩放优先走 fast_image_resize 卷积，失败时回退 image::resize_exact

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 将原始字节解码为归一化的 RGBA 源图。
    pub(super) fn decode_and_normalize(&self, bytes: &[u8]) -> Result<RgbaImage, IconError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| IconError::Decode(format!("源图解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        self.validate_pixel_limits(width, height)?;

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| IconError::ResourceLimit("源图尺寸导致内存溢出风险".to_string()))?;

        // 非 RGBA 输入（灰度、RGB、调色板）在此统一补全不透明 alpha 通道
        let rgba = decoded.to_rgba8();

        if rgba.as_raw().len() != expected_len {
            return Err(IconError::Decode("解码后像素数据长度异常".to_string()));
        }

        log::info!(
            "✅ 源图解码成功 - 尺寸: {}x{} 原始格式: {:?}",
            width,
            height,
            decoded.color()
        );

        Ok(rgba)
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("源图像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    /// 将源图缩放到精确的目标像素尺寸。
    ///
    /// 同一套路径既服务放大（1024 营销图）也服务缩小（20pt 槽位）。
    pub(super) fn resample(
        &self,
        source: &RgbaImage,
        target_width: u32,
        target_height: u32,
    ) -> Result<RgbaImage, IconError> {
        match Self::resize_with_fast_image_resize(
            source,
            target_width,
            target_height,
            self.config.resize_filter,
        ) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}", err);
                let fallback = DynamicImage::ImageRgba8(source.clone()).resize_exact(
                    target_width,
                    target_height,
                    self.config.resize_filter,
                );
                Ok(fallback.to_rgba8())
            }
        }
    }

    fn resize_with_fast_image_resize(
        source: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = source.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            source.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_generator::GeneratorConfig;
    use image::ImageFormat;
    use std::io::Cursor;

    fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            let r = (x % 255) as u8;
            let g = (y % 255) as u8;
            let b = ((x + y) % 255) as u8;
            Rgba([r, g, b, 255])
        });

        let dyn_img = DynamicImage::ImageRgba8(img);
        let mut cursor = Cursor::new(Vec::new());
        dyn_img
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    fn create_rgb_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgb([(x % 255) as u8, (y % 255) as u8, 128u8])
        });

        let dyn_img = DynamicImage::ImageRgb8(img);
        let mut cursor = Cursor::new(Vec::new());
        dyn_img
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    #[test]
    fn decode_normalizes_rgb_input_to_opaque_rgba() {
        let generator = IconGenerator::new(GeneratorConfig::default());
        let png = create_rgb_png_bytes(64, 64);

        let rgba = generator
            .decode_and_normalize(&png)
            .expect("decode pipeline should succeed");

        assert_eq!(rgba.dimensions(), (64, 64));
        assert!(rgba.pixels().all(|px| px.0[3] == 255));
    }

    #[test]
    fn decode_preserves_rgba_buffer_length() {
        let generator = IconGenerator::new(GeneratorConfig::default());
        let png = create_png_bytes(33, 17);

        let rgba = generator
            .decode_and_normalize(&png)
            .expect("decode pipeline should succeed");

        assert_eq!(rgba.as_raw().len(), 33 * 17 * 4);
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        let generator = IconGenerator::new(GeneratorConfig::default());

        let result = generator.decode_and_normalize(b"not an image at all");
        assert!(matches!(result, Err(IconError::Decode(_))));
    }

    #[test]
    fn stress_rejects_too_many_pixels() {
        let config = GeneratorConfig {
            max_decoded_pixels: 1_000_000,
            ..GeneratorConfig::default()
        };
        let generator = IconGenerator::new(config);
        let png = create_png_bytes(2000, 2000);

        let result = generator.decode_and_normalize(&png);
        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }

    #[test]
    fn resample_upscales_to_exact_dimensions() {
        let generator = IconGenerator::new(GeneratorConfig::default());
        let png = create_png_bytes(512, 512);
        let source = generator.decode_and_normalize(&png).expect("decode failed");

        let icon = generator
            .resample(&source, 1024, 1024)
            .expect("upscale should succeed");
        assert_eq!(icon.dimensions(), (1024, 1024));
    }

    #[test]
    fn resample_downscales_to_fractional_slot_dimensions() {
        let generator = IconGenerator::new(GeneratorConfig::default());
        let png = create_png_bytes(512, 512);
        let source = generator.decode_and_normalize(&png).expect("decode failed");

        let icon = generator
            .resample(&source, 167, 167)
            .expect("downscale should succeed");
        assert_eq!(icon.dimensions(), (167, 167));
        assert_eq!(icon.as_raw().len(), 167 * 167 * 4);
    }
}

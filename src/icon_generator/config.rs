//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `GeneratorConfig`，保证运行时行为可观测、可测试。
//! 源图路径与输出目录是固定常量：生成器不接受命令行参数，也不读取环境变量，
//! 测试通过构造非默认配置把路径指向临时目录。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产配置：固定路径 + Lanczos3 缩放 + 最高档 PNG 压缩。
//! - 体积与像素上限沿用解码前置校验的思路，在完整解码前尽快拒绝异常输入。

use std::path::PathBuf;

use image::codecs::png::CompressionType;
use image::imageops::FilterType;

/// 默认源图路径（相对项目根目录）。
const DEFAULT_SOURCE_PATH: &str = "assets/images/app_icon.png";

/// 默认输出目录：iOS 工程的 AppIcon 资源目录。
const DEFAULT_OUTPUT_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// 图标生成配置。
///
/// 字段覆盖了读取、解码、缩放与编码四个阶段。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源图路径（固定常量，运行时不接受外部参数）。
    pub source_path: PathBuf,
    /// 图标输出目录（不存在时自动创建，含中间目录）。
    pub output_dir: PathBuf,
    /// 读取源图原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 缩放滤镜策略。
    ///
    /// 图标目标尺寸跨度大（20px 到 1024px，既有放大也有缩小），
    /// 默认 Lanczos3 卷积以避免小尺寸下的锯齿。
    pub resize_filter: FilterType,
    /// PNG 编码压缩档位。
    pub png_compression: CompressionType,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
        }
    }
}

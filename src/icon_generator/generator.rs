//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排与配置持有，处理链路固定为：
//! 1. 读取源图字节
//! 2. 解码并归一化为 RGBA
//! 3. 确保输出目录存在（在源图成功解码之后，源图缺失不会留下空目录）
//! 4. 按表序逐槽缩放落盘，按文件名去重
//!
//! ## 实现思路
//!
//! - 单线程同步执行，每个槽位完整走完“缩放 + 编码 + 写盘 + 日志”再进入下一个。
//! - `GeneratedSet` 用 `HashSet` 记录本次运行已写出的文件名，首次出现者生效。
//! - 记录 `load/decode/render/total` 阶段耗时，便于性能诊断。

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use super::table::ICON_TABLE;
use super::{GeneratorConfig, IconError};

/// 单个已生成图标的记录。
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    /// 输出文件名。
    pub filename: &'static str,
    /// 实际像素宽度。
    pub width: u32,
    /// 实际像素高度。
    pub height: u32,
    /// 写出的完整路径。
    pub path: PathBuf,
}

/// 一次运行的汇总结果。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// 按写出顺序排列的图标记录（去重后）。
    pub icons: Vec<GeneratedIcon>,
    /// 输出目录。
    pub output_dir: PathBuf,
}

/// 图标生成器。
///
/// 持有配置并编排各子模块实现完整流程。
pub struct IconGenerator {
    pub(super) config: GeneratorConfig,
}

impl IconGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use ios_icon_gen::icon_generator::{GeneratorConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(GeneratorConfig::default());
    /// let _report = generator.generate()?;
    /// # Ok::<(), ios_icon_gen::icon_generator::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 处理主入口：生成表中全部图标文件。
    ///
    /// 表中每个文件名恰好被写出一次；重复槽位跳过，不产生第二次写盘。
    /// 任一阶段失败立即返回错误，已写出的文件保留在磁盘上。
    pub fn generate(&self) -> Result<GenerationReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let bytes = self.load_source_bytes()?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let source = self.decode_and_normalize(&bytes)?;
        let decode_elapsed = decode_start.elapsed();

        self.ensure_output_dir()?;

        let render_start = Instant::now();
        let mut generated: HashSet<&'static str> = HashSet::new();
        let mut icons = Vec::new();

        for spec in ICON_TABLE {
            if generated.contains(spec.filename) {
                log::debug!(
                    "⏭️ 跳过重复槽位：{}（{} @{}x）",
                    spec.filename,
                    spec.size_label,
                    spec.scale
                );
                continue;
            }

            let (width, height) = spec.pixel_dimensions();
            let icon = self.resample(&source, width, height)?;
            let path = self.write_png(&icon, spec.filename)?;
            generated.insert(spec.filename);

            log::info!("🖼️ 已生成图标：{}（{}x{}）", spec.filename, width, height);
            icons.push(GeneratedIcon {
                filename: spec.filename,
                width,
                height,
                path,
            });
        }
        let render_elapsed = render_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 共生成 {} 个图标文件，输出目录：{}",
            icons.len(),
            self.config.output_dir.display()
        );
        log::info!(
            "⏱️ 阶段耗时 - load={}ms decode={}ms render={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            render_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(GenerationReport {
            icons,
            output_dir: self.config.output_dir.clone(),
        })
    }
}

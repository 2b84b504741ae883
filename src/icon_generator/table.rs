//! # 图标槽位表模块
//!
//! ## 设计思路
//!
//! 将 iOS `AppIcon.appiconset` 所需的全部槽位固化为编译期静态表，
//! 逐条对应 `Contents.json` 的每一个逻辑槽位。iPhone 与 iPad 在相同
//! 点数/倍率下共享同一个物理文件，因此表内允许重复文件名；
//! 生成阶段按文件名去重，首次出现者生效，后续重复槽位为空操作。
//!
//! ## 实现思路
//!
//! - 名义尺寸以“点”为单位存 `f64`（存在一个小数槽位 83.5）。
//! - 实际像素尺寸 = `round(名义尺寸 × 倍率)`，按轴独立计算。
//! - 文件名为 `&'static str`，同时充当去重键。

/// 单个图标输出规格。
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    /// 逻辑尺寸标签（仅用于日志与诊断）。
    pub size_label: &'static str,
    /// 名义宽度（点）。
    pub width: f64,
    /// 名义高度（点）。
    pub height: f64,
    /// 倍率（1x / 2x / 3x）。
    pub scale: u32,
    /// 输出文件名，同时是去重键。
    pub filename: &'static str,
}

impl IconSpec {
    /// 计算实际像素尺寸：`round(名义尺寸 × 倍率)`。
    ///
    /// 四舍五入对唯一的小数名义尺寸 83.5 至关重要：83.5 × 2 必须得到 167。
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        let width = (self.width * self.scale as f64).round() as u32;
        let height = (self.height * self.scale as f64).round() as u32;
        (width, height)
    }
}

/// iOS 图标槽位全表（iPhone / iPad / App Store），与 `Contents.json` 槽位一一对应。
///
/// 表内的重复文件名是刻意保留的：去重行为由生成器承担，而不是在表里提前合并。
pub const ICON_TABLE: &[IconSpec] = &[
    // iPhone
    IconSpec { size_label: "20x20", width: 20.0, height: 20.0, scale: 2, filename: "Icon-App-20x20@2x.png" },
    IconSpec { size_label: "20x20", width: 20.0, height: 20.0, scale: 3, filename: "Icon-App-20x20@3x.png" },
    IconSpec { size_label: "29x29", width: 29.0, height: 29.0, scale: 1, filename: "Icon-App-29x29@1x.png" },
    IconSpec { size_label: "29x29", width: 29.0, height: 29.0, scale: 2, filename: "Icon-App-29x29@2x.png" },
    IconSpec { size_label: "29x29", width: 29.0, height: 29.0, scale: 3, filename: "Icon-App-29x29@3x.png" },
    IconSpec { size_label: "40x40", width: 40.0, height: 40.0, scale: 2, filename: "Icon-App-40x40@2x.png" },
    IconSpec { size_label: "40x40", width: 40.0, height: 40.0, scale: 3, filename: "Icon-App-40x40@3x.png" },
    IconSpec { size_label: "60x60", width: 60.0, height: 60.0, scale: 2, filename: "Icon-App-60x60@2x.png" },
    IconSpec { size_label: "60x60", width: 60.0, height: 60.0, scale: 3, filename: "Icon-App-60x60@3x.png" },
    // iPad（与 iPhone 重合的槽位共享同一物理文件）
    IconSpec { size_label: "20x20", width: 20.0, height: 20.0, scale: 1, filename: "Icon-App-20x20@1x.png" },
    IconSpec { size_label: "20x20", width: 20.0, height: 20.0, scale: 2, filename: "Icon-App-20x20@2x.png" },
    IconSpec { size_label: "29x29", width: 29.0, height: 29.0, scale: 1, filename: "Icon-App-29x29@1x.png" },
    IconSpec { size_label: "29x29", width: 29.0, height: 29.0, scale: 2, filename: "Icon-App-29x29@2x.png" },
    IconSpec { size_label: "40x40", width: 40.0, height: 40.0, scale: 1, filename: "Icon-App-40x40@1x.png" },
    IconSpec { size_label: "40x40", width: 40.0, height: 40.0, scale: 2, filename: "Icon-App-40x40@2x.png" },
    IconSpec { size_label: "76x76", width: 76.0, height: 76.0, scale: 1, filename: "Icon-App-76x76@1x.png" },
    IconSpec { size_label: "76x76", width: 76.0, height: 76.0, scale: 2, filename: "Icon-App-76x76@2x.png" },
    IconSpec { size_label: "83.5x83.5", width: 83.5, height: 83.5, scale: 2, filename: "Icon-App-83.5x83.5@2x.png" },
    // App Store
    IconSpec { size_label: "1024x1024", width: 1024.0, height: 1024.0, scale: 1, filename: "Icon-App-1024x1024@1x.png" },
];

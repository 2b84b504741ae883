//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“槽位表定义 → 源图加载校验 → 解码归一化 → 逐槽缩放落盘”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `table`：iOS 图标槽位静态表与像素尺寸计算
//! - `config`：固定路径与缩放/编码策略
//! - `loader`：负责源图读取与签名校验
//! - `pipeline`：负责解码、像素限制、RGBA 归一化与缩放
//! - `writer`：负责输出目录创建与 PNG 编码落盘
//! - `generator`：编排整条流水线，按文件名去重
//! - `error`：错误模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 整条链路同步、单线程、严格按表序执行，任一阶段失败立即中止，
//! 不做重试，也不回滚已写出的文件。
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! generator.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（源图读取 + 签名/体积校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + RGBA 归一化 + 缩放）
//!    └─ writer.rs（目录创建 + PNG 编码 + 落盘）
//!    ↓
//! 返回 GenerationReport / IconError
//! ```

mod config;
mod error;
mod generator;
mod loader;
mod pipeline;
mod table;
mod writer;

pub use config::GeneratorConfig;
pub use error::IconError;
pub use generator::{GeneratedIcon, GenerationReport, IconGenerator};
pub use table::{ICON_TABLE, IconSpec};

//! # iOS 图标集生成器 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     main.rs (入口)                        │
//! │        日志初始化 → 运行生成器 → 失败时非零退出           │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            库 (Rust)                             │
//! │                                                          │
//! │  ┌─ error ──────── AppError (统一错误类型)                │
//! │  │                                                       │
//! │  └─ icon_generator 图标生成流水线                         │
//! │      ├─ table      静态图标槽位表 (iPhone/iPad/App Store) │
//! │      ├─ loader     源图读取 + 签名校验                    │
//! │      ├─ pipeline   解码 · RGBA 归一化 · 高质量缩放        │
//! │      ├─ writer     目录创建 · PNG 编码 · 落盘             │
//! │      └─ generator  编排 + 按文件名去重 + 进度日志         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口层的返回类型 |
//! | [`icon_generator`] | 从单张源图生成全部 iOS 图标文件 |

pub mod error;
pub mod icon_generator;

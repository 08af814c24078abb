//! Wonder - 知识地图服务
//!
//! 学习者记录概念与先修关系，服务端在依赖图上计算最短学习路径、
//! 生成测验，并按兴趣重合度推荐协作者分享。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;

//! 请求处理器模块

pub mod concept_handler;
pub mod learning_handler;
pub mod manifest_handler;
pub mod quiz_handler;
pub mod share_handler;

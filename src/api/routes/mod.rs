//! 路由模块

pub mod concept_routes;
pub mod learning_routes;
pub mod quiz_routes;
pub mod share_routes;

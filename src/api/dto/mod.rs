//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod concept_dto;
pub mod learning_dto;
pub mod quiz_dto;
pub mod share_dto;

pub use concept_dto::*;
pub use learning_dto::*;
pub use quiz_dto::*;
pub use share_dto::*;

use validator::ValidationError;

/// 去掉首尾空白后不能为空
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

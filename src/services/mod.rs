//! 服务模块
//!
//! 知识图谱核心：概念存储、学习路径、分享注册表、亲和度、测验，
//! 以及会话/大纲等外围 CRUD。

pub mod affinity;
pub mod concept_store;
pub mod learning;
pub mod path_finder;
pub mod quiz;
pub mod seed;
pub mod share_registry;

pub use affinity::{HandleComparison, ShareMatch};
pub use concept_store::{ConceptGraph, ConceptStore};
pub use learning::{CurriculumDraft, LearningPlanner, SessionDraft, SessionUpdate};
pub use path_finder::find_path;
pub use quiz::QuizGenerator;
pub use share_registry::ShareRegistry;

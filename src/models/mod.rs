//! 数据模型模块

pub mod concept;
pub mod learning;
pub mod quiz;
pub mod share;
pub mod tags;

pub use concept::{Concept, ConceptDraft, Relationship, UpsertOutcome};
pub use learning::{Curriculum, LearningSession, SessionStatus};
pub use quiz::{Choice, Difficulty, QuizOutcome, QuizQuestion};
pub use share::{Share, ShareDraft, Visibility};
pub use tags::{ListInput, TagSet};

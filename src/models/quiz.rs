//! 测验题目

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

/// 难度，决定每道题的选项数
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// 每道题的选项总数（含正确答案）
    pub fn option_count(&self) -> usize {
        match self {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 4,
            Difficulty::Advanced => 5,
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "" | "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            other => Err(AppError::Validation(format!(
                "difficulty must be beginner, intermediate, or advanced (got '{}')",
                other
            ))),
        }
    }
}

/// 生成的选择题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub id: String,
    pub concept: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> &str {
        &self.choices[self.correct_index]
    }
}

/// 作答：按下标或按选项文本
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Index(usize),
    Text(String),
}

/// 判分结果
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub question_id: String,
    pub correct: bool,
    pub concept: String,
    pub prompt: String,
    pub correct_answer: String,
    pub explanation: String,
}

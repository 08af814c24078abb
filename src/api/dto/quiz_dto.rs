//! 测验 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::quiz::{Choice, Difficulty, QuizOutcome, QuizQuestion};

fn default_count() -> usize {
    3
}

/// 生成测验请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    /// 概念名称
    #[serde(alias = "concept_name")]
    #[validate(length(min = 1, message = "concept is required"))]
    pub concept: String,

    /// beginner | intermediate | advanced
    #[serde(default)]
    pub difficulty: Option<String>,

    /// 题目数
    #[serde(default = "default_count", alias = "question_count")]
    #[validate(range(min = 1, max = 10))]
    pub count: usize,
}

/// 题目响应（不含正确答案）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestionResponse {
    pub id: String,
    pub concept: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub difficulty: Difficulty,
}

impl From<QuizQuestion> for QuizQuestionResponse {
    fn from(question: QuizQuestion) -> Self {
        Self {
            id: question.id,
            concept: question.concept,
            prompt: question.prompt,
            choices: question.choices,
            difficulty: question.difficulty,
        }
    }
}

/// 生成测验响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestionResponse>,
}

/// 作答请求；`selected_index` 与 `choice` 二选一
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizAttemptRequest {
    #[validate(length(min = 1, message = "question_id is required"))]
    pub question_id: String,

    #[serde(default)]
    pub selected_index: Option<usize>,

    #[serde(default, alias = "chosen_option")]
    pub choice: Option<String>,
}

impl QuizAttemptRequest {
    /// 下标优先
    pub fn choice(&self) -> Option<Choice> {
        match (self.selected_index, &self.choice) {
            (Some(index), _) => Some(Choice::Index(index)),
            (None, Some(text)) => Some(Choice::Text(text.clone())),
            (None, None) => None,
        }
    }
}

/// 作答响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttemptResponse {
    pub question_id: String,
    pub correct: bool,
    pub concept: String,
    pub prompt: String,
    pub correct_answer: String,
    pub explanation: String,
}

impl From<QuizOutcome> for QuizAttemptResponse {
    fn from(outcome: QuizOutcome) -> Self {
        Self {
            question_id: outcome.question_id,
            correct: outcome.correct,
            concept: outcome.concept,
            prompt: outcome.prompt,
            correct_answer: outcome.correct_answer,
            explanation: outcome.explanation,
        }
    }
}

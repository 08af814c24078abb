//! 测验生成器
//!
//! 根据概念的描述、先修、后继和标签出选择题。每题恰有一个正确选项，
//! 干扰项取自图中其它概念；图太小时用通用干扰项补齐。

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::concept::Concept;
use crate::models::quiz::{Choice, Difficulty, QuizOutcome, QuizQuestion};
use crate::models::tags::TagSet;
use crate::services::concept_store::ConceptGraph;

const GENERIC_DISTRACTORS: &[&str] = &[
    "None of the above",
    "An unrelated topic outside this map",
    "General study habits",
    "A concept from a different field",
    "Memorising syntax without practice",
    "Something you have not added yet",
];

const CORRECT_NOTE: &str = "Great job! Keep exploring related concepts to reinforce the link.";
const INCORRECT_NOTE: &str = "Review the concept description and prerequisites, then try again.";

/// 题目模板：题干、正确答案、候选干扰项
struct Blueprint {
    prompt: String,
    correct: String,
    pool: Vec<String>,
}

/// 测验生成器与题库
pub struct QuizGenerator {
    bank: RwLock<HashMap<String, QuizQuestion>>,
    rng: Mutex<StdRng>,
    max_questions: usize,
}

impl std::fmt::Debug for QuizGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizGenerator")
            .field("bank_size", &self.bank.read().len())
            .field("max_questions", &self.max_questions)
            .finish()
    }
}

impl QuizGenerator {
    pub fn new(max_questions: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), max_questions)
    }

    /// 固定种子，便于测试复现
    pub fn with_seed(seed: u64, max_questions: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), max_questions)
    }

    fn with_rng(rng: StdRng, max_questions: usize) -> Self {
        Self {
            bank: RwLock::new(HashMap::new()),
            rng: Mutex::new(rng),
            max_questions,
        }
    }

    /// 为 `concept_name` 生成恰好 `count` 道题并存入题库
    pub fn generate(
        &self,
        graph: &ConceptGraph,
        concept_name: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        if count == 0 || count > self.max_questions {
            return Err(AppError::Validation(format!(
                "question count must be between 1 and {}",
                self.max_questions
            )));
        }
        let target = graph
            .get(concept_name)
            .ok_or_else(|| AppError::NotFound(format!("Unknown concept: {}", concept_name)))?;

        let blueprints = blueprints(graph, target)?;
        let mut rng = self.rng.lock();
        let questions: Vec<QuizQuestion> = blueprints
            .iter()
            .cycle()
            .take(count)
            .map(|blueprint| build_question(&mut *rng, target, blueprint, difficulty))
            .collect();
        drop(rng);

        let mut bank = self.bank.write();
        for question in &questions {
            bank.insert(question.id.clone(), question.clone());
        }
        info!(
            concept = %target.name,
            ?difficulty,
            count = questions.len(),
            "Generated quiz"
        );
        Ok(questions)
    }

    pub fn get(&self, question_id: &str) -> Result<QuizQuestion> {
        self.bank
            .read()
            .get(question_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown quiz question: {}", question_id)))
    }

    /// 判分
    pub fn attempt(&self, question_id: &str, choice: Choice) -> Result<QuizOutcome> {
        let question = self.get(question_id)?;
        let selected = match choice {
            Choice::Index(index) if index < question.choices.len() => index,
            Choice::Index(index) => {
                return Err(AppError::Validation(format!(
                    "Selected answer {} is out of range (0..{})",
                    index,
                    question.choices.len()
                )));
            }
            Choice::Text(text) => question
                .choices
                .iter()
                .position(|option| option == text.trim())
                .ok_or_else(|| {
                    AppError::Validation(format!("'{}' is not one of the options", text))
                })?,
        };

        let correct = selected == question.correct_index;
        debug!(question_id = %question.id, correct, "Graded quiz attempt");
        Ok(QuizOutcome {
            question_id: question.id.clone(),
            correct,
            concept: question.concept.clone(),
            prompt: question.prompt.clone(),
            correct_answer: question.correct_answer().to_string(),
            explanation: if correct { CORRECT_NOTE } else { INCORRECT_NOTE }.to_string(),
        })
    }
}

fn blueprints(graph: &ConceptGraph, target: &Concept) -> Result<Vec<Blueprint>> {
    let others: Vec<&Concept> = graph.iter().filter(|c| c.name != target.name).collect();
    let mut blueprints = Vec::new();

    if !target.description.is_empty() {
        blueprints.push(Blueprint {
            prompt: format!("Which description best matches {}?", target.name),
            correct: target.description.clone(),
            pool: others
                .iter()
                .map(|c| c.description.clone())
                .filter(|d| !d.is_empty())
                .collect(),
        });
    }

    // 干扰项必须排除整条传递链，否则间接先修/后继也是正确答案
    let upstream: TagSet = graph.prerequisite_chain(&target.name)?.into_iter().collect();
    for prerequisite in &target.prerequisites {
        blueprints.push(Blueprint {
            prompt: format!(
                "Which concept should you study before tackling {}?",
                target.name
            ),
            correct: prerequisite.clone(),
            pool: names_excluding(&others, &upstream),
        });
    }

    let downstream: TagSet = graph.dependent_chain(&target.name)?.into_iter().collect();
    for dependent in graph.dependents(&target.name)? {
        blueprints.push(Blueprint {
            prompt: format!("Which concept builds on {}?", target.name),
            correct: dependent,
            pool: names_excluding(&others, &downstream),
        });
    }

    for tag in &target.tags {
        blueprints.push(Blueprint {
            prompt: format!("Which tag is associated with {}?", target.name),
            correct: tag.clone(),
            pool: others
                .iter()
                .flat_map(|c| c.tags.iter())
                .filter(|t| !target.tags.contains(*t))
                .cloned()
                .collect(),
        });
    }

    blueprints.push(Blueprint {
        prompt: if target.description.is_empty() {
            "Which concept is currently in your review queue?".to_string()
        } else {
            format!("Which concept is described as \"{}\"?", target.description)
        },
        correct: target.name.clone(),
        pool: others.iter().map(|c| c.name.clone()).collect(),
    });

    Ok(blueprints)
}

fn names_excluding(concepts: &[&Concept], excluded: &TagSet) -> Vec<String> {
    concepts
        .iter()
        .filter(|c| !excluded.contains(&c.name))
        .map(|c| c.name.clone())
        .collect()
}

fn build_question(
    rng: &mut StdRng,
    target: &Concept,
    blueprint: &Blueprint,
    difficulty: Difficulty,
) -> QuizQuestion {
    let mut pool = blueprint.pool.clone();
    pool.shuffle(rng);

    let mut choices = vec![blueprint.correct.clone()];
    let wanted = difficulty.option_count();
    let candidates = pool
        .into_iter()
        .chain(GENERIC_DISTRACTORS.iter().map(|s| s.to_string()));
    for candidate in candidates {
        if choices.len() == wanted {
            break;
        }
        if !choices.contains(&candidate) {
            choices.push(candidate);
        }
    }

    choices.shuffle(rng);
    let correct_index = choices
        .iter()
        .position(|choice| *choice == blueprint.correct)
        .unwrap_or_default();

    QuizQuestion {
        id: Uuid::new_v4().to_string(),
        concept: target.name.clone(),
        prompt: blueprint.prompt.clone(),
        choices,
        correct_index,
        difficulty,
        created_at: Utc::now(),
    }
}

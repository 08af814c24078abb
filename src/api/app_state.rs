use crate::config::{AppConfig, GraphConfig};
use crate::observability::AppMetrics;
use crate::services::{ConceptStore, LearningPlanner, QuizGenerator, ShareRegistry};
use std::sync::Arc;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Concept nodes and prerequisite edges
    pub concepts: Arc<ConceptStore>,
    /// Published idea shares
    pub shares: Arc<ShareRegistry>,
    /// Quiz generator and question bank
    pub quizzes: Arc<QuizGenerator>,
    /// Learning sessions and curricula
    pub learning: Arc<LearningPlanner>,
    /// Request and domain counters
    pub metrics: Arc<AppMetrics>,
    /// Graph tuning knobs
    pub graph_config: Arc<GraphConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("concepts", &self.concepts.read().len())
            .field("shares", &self.shares.read().shares().len())
            .field("quizzes", &self.quizzes)
            .field("learning", &"Arc<LearningPlanner>")
            .field("graph_config", &self.graph_config)
            .finish()
    }
}

impl AppState {
    /// Create new application state with empty stores
    pub fn new(config: &AppConfig, metrics: Arc<AppMetrics>) -> Self {
        Self {
            concepts: Arc::new(ConceptStore::new()),
            shares: Arc::new(ShareRegistry::new()),
            quizzes: Arc::new(QuizGenerator::new(config.graph.max_quiz_questions)),
            learning: Arc::new(LearningPlanner::new()),
            metrics,
            graph_config: Arc::new(config.graph.clone()),
        }
    }

    /// Create development application state with fresh metrics
    pub fn development() -> Self {
        Self::new(&AppConfig::development(), Arc::new(AppMetrics::default()))
    }
}

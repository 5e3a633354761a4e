use std::{fs, path::Path};

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::{
    error::TreeError, ids::NodeId, process::DecisionProcess, search_tree::Tree, session::Session,
};

const DEFAULT_SEARCH_CONFIG_YAML: &str = include_str!("../../config/search.default.yaml");

/// Search configuration for a batch of episodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub episodes: usize,
    pub exploration: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            episodes: 10_000,
            exploration: 1.414,
        }
    }
}

impl SearchConfig {
    /// Parse a search config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SearchConfigError> {
        let config: SearchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a search config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SearchConfigError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SEARCH_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SearchConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Same config with a different exploration constant.
    pub fn with_exploration(&self, exploration: f64) -> Self {
        SearchConfig {
            exploration,
            ..self.clone()
        }
    }

    /// Non-positive exploration is accepted: it only turns the bonus term off.
    pub fn validate(&self) -> Result<(), SearchConfigError> {
        if self.episodes == 0 {
            return Err(SearchConfigError::Invalid(
                "episodes must be greater than 0".to_string(),
            ));
        }
        if !self.exploration.is_finite() {
            return Err(SearchConfigError::Invalid(
                "exploration must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `SearchConfig`.
#[derive(Debug, Error)]
pub enum SearchConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid search config: {0}")]
    Invalid(String),
}

/// Metrics for one finished episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeMetrics {
    /// Deepest tracked node the episode reached.
    pub leaf: NodeId,
    /// Nodes that received the outcome, root included.
    pub path_len: usize,
    pub rollout_steps: usize,
    pub outcome: f64,
}

/// Aggregate metrics for a complete search run.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub episodes_requested: usize,
    pub episodes_completed: usize,
    pub outcome_sum: f64,
    pub average_outcome: f64,
    pub last_outcome: Option<f64>,
}

impl RunMetrics {
    fn new(episodes_requested: usize) -> Self {
        RunMetrics {
            episodes_requested,
            episodes_completed: 0,
            outcome_sum: 0.0,
            average_outcome: 0.0,
            last_outcome: None,
        }
    }

    fn record(&mut self, metrics: &EpisodeMetrics) {
        self.episodes_completed += 1;
        self.outcome_sum += metrics.outcome;
        self.average_outcome = self.outcome_sum / self.episodes_completed as f64;
        self.last_outcome = Some(metrics.outcome);
    }
}

impl<A: Ord + Clone> Tree<A> {
    /// Play one episode of `process` against this tree.
    ///
    /// Keeps asking for a choice until the process reports no legal choices,
    /// then terminates the session with the process outcome.
    pub fn play_episode<P, R>(
        &mut self,
        process: &mut P,
        exploration: f64,
        rng: &mut R,
    ) -> Result<EpisodeMetrics, TreeError>
    where
        P: DecisionProcess<Choice = A> + ?Sized,
        R: Rng + ?Sized,
    {
        let mut session = Session::new(self, exploration, rng);

        loop {
            let choices = process.legal_choices();
            if choices.is_empty() {
                break;
            }
            let choice = session.choose(&choices)?;
            process.apply(&choice);
        }

        session.terminate(process.outcome())
    }

    /// Run `config.episodes` episodes, each on a fresh process from `new_process`.
    pub fn run<P, F, R>(
        &mut self,
        config: &SearchConfig,
        new_process: F,
        rng: &mut R,
    ) -> Result<RunMetrics, TreeError>
    where
        P: DecisionProcess<Choice = A>,
        F: FnMut() -> P,
        R: Rng + ?Sized,
    {
        self.run_with_hook(config, new_process, rng, |_| {})
    }

    /// Run episodes and invoke a callback after each completed one.
    pub fn run_with_hook<P, F, R, FHook>(
        &mut self,
        config: &SearchConfig,
        mut new_process: F,
        rng: &mut R,
        mut on_episode: FHook,
    ) -> Result<RunMetrics, TreeError>
    where
        P: DecisionProcess<Choice = A>,
        F: FnMut() -> P,
        R: Rng + ?Sized,
        FHook: FnMut(&EpisodeMetrics),
    {
        let mut metrics = RunMetrics::new(config.episodes);

        for _ in 0..config.episodes {
            let mut process = new_process();
            let episode = self.play_episode(&mut process, config.exploration, rng)?;

            on_episode(&episode);
            metrics.record(&episode);
        }

        debug!(
            "search finished: {} episodes, {} nodes, average outcome {:.6}",
            metrics.episodes_completed,
            self.node_count(),
            metrics.average_outcome
        );

        Ok(metrics)
    }
}

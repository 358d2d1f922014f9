//! Application config: Telegram, pipeline and solver settings, all loaded from env.

use anyhow::Result;
use answer_pipeline::PipelineConfig;
use answer_solvers::SolverContext;
use answer_telegram::TelegramConfig;

/// Full config for `answer-bot run`.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub pipeline: PipelineConfig,
    pub solvers: SolverContext,
}

impl BotConfig {
    /// Load from environment. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            pipeline: PipelineConfig::from_env()?,
            solvers: SolverContext::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.pipeline.validate()?;
        Ok(())
    }
}

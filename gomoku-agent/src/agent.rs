//! Agent implementation - resolves one move per turn through the LLM

use crate::fallback::{self, Stage};
use crate::game::{GameState, Move, Player};
use crate::parse::parse_response;
use crate::prompt::{PromptBuilder, PromptStyle};
use gomoku_error::{Error, Result};
use gomoku_llm::{
    ChatMessage, CompletionRequest, LlmProvider, OpenAIProvider, ProviderConfig, DEFAULT_MODEL,
};
use tracing::{debug, info, instrument, warn};

/// Configuration for the agent
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier sent with every request
    pub model: String,
    /// Bearer token; omitted from requests when unset
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API (e.g. `https://host/v1`)
    pub endpoint: Option<String>,
    /// Prompt, parse and fallback policy
    pub style: PromptStyle,
    pub temperature: Option<f32>,
    pub max_tokens: Option<usize>,
    /// HTTP request timeout
    pub timeout_secs: Option<u64>,
    /// Extra HTTP headers sent with every request (gateway attribution etc.)
    pub headers: Vec<(String, String)>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            endpoint: None,
            style: PromptStyle::Strict,
            temperature: None,
            max_tokens: None,
            timeout_secs: None,
            headers: Vec::new(),
        }
    }
}

impl AgentConfig {
    /// Load `.env` if present, then read `PROF_API_KEY` / `PROF_BASE_URL`
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            debug!(error = %e, "no .env file loaded");
        }

        let provider = ProviderConfig::from_env();
        Self {
            api_key: provider.api_key,
            endpoint: provider.base_url,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Translate into the transport configuration
    pub fn provider_config(&self) -> Result<ProviderConfig> {
        if self.model.trim().is_empty() {
            return Err(Error::config_invalid("model must not be empty")
                .with_operation("agent::provider_config"));
        }

        let mut config = ProviderConfig::openai("").with_model(self.model.clone());
        if let Some(endpoint) = &self.endpoint {
            config = config.with_base_url(endpoint.clone());
        }
        config.api_key = self.api_key.clone().filter(|k| !k.is_empty());
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(secs);
        }
        for (key, value) in &self.headers {
            config = config.with_header(key.clone(), value.clone());
        }
        Ok(config)
    }
}

/// The move chosen for a turn and the stage that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub mv: Move,
    pub stage: Stage,
}

/// What the host framework calls once per turn.
#[allow(async_fn_in_trait)]
pub trait Agent {
    fn player(&self) -> Player;

    /// Choose a move for `state`. Only transport failures are errors.
    async fn get_move<G: GameState + ?Sized>(&self, state: &G) -> Result<Move>;
}

/// LLM-backed agent - prompt, complete, parse, validate, fall back
pub struct LlmAgent<P> {
    player: Player,
    provider: P,
    prompts: PromptBuilder,
    config: AgentConfig,
}

impl LlmAgent<OpenAIProvider> {
    /// Build the agent and its HTTP client from `config`
    pub fn new(player: Player, config: AgentConfig) -> Result<Self> {
        let provider = OpenAIProvider::new(config.provider_config()?)
            .map_err(|e| e.with_operation("agent::new"))?;
        info!(
            player = %player,
            style = config.style.as_str(),
            model = %config.model,
            "agent ready"
        );
        Ok(Self::with_provider(player, provider, config))
    }
}

impl<P: LlmProvider> LlmAgent<P> {
    /// Use an already-built completion backend
    pub fn with_provider(player: Player, provider: P, config: AgentConfig) -> Self {
        Self {
            player,
            provider,
            prompts: PromptBuilder::new(config.style, player),
            config,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run the full first-attempt / repair / default sequence
    #[instrument(skip_all, fields(player = %self.player, style = self.config.style.as_str()))]
    pub async fn resolve<G: GameState + ?Sized>(&self, state: &G) -> Result<Resolution> {
        let board_size = state.board_size();
        let legal = state.legal_moves();
        debug!(board_size, legal = legal.len(), "resolving move");

        let messages = self.prompts.messages(state, &legal);
        let content = self.ask(messages, Stage::FirstAttempt).await?;
        if let Some(mv) = self.accept(&content, state, &legal, Stage::FirstAttempt) {
            return Ok(Resolution { mv, stage: Stage::FirstAttempt });
        }

        if let Some(messages) = self.prompts.repair_messages(board_size, &legal) {
            let content = self.ask(messages, Stage::Repair).await?;
            if let Some(mv) = self.accept(&content, state, &legal, Stage::Repair) {
                return Ok(Resolution { mv, stage: Stage::Repair });
            }
        }

        let mv = self.fallback(state, &legal)?;
        info!(%mv, "model gave no usable move, using fallback");
        Ok(Resolution { mv, stage: Stage::Default })
    }

    async fn ask(&self, messages: Vec<ChatMessage>, stage: Stage) -> Result<String> {
        let mut request = CompletionRequest::new(messages).with_model(self.config.model.as_str());
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = self.provider.complete(request).await.map_err(|e| {
            e.into_error("agent::get_move")
                .with_context("provider", self.provider.name())
                .with_context("stage", stage.as_str())
        })?;

        let content = response.content.unwrap_or_default();
        debug!(
            %stage,
            chars = content.len(),
            total_tokens = response.usage.total_tokens,
            "completion received"
        );
        Ok(content)
    }

    /// Parse and validate; `None` means move on to the next stage
    fn accept<G: GameState + ?Sized>(
        &self,
        content: &str,
        state: &G,
        legal: &[Move],
        stage: Stage,
    ) -> Option<Move> {
        let Some(mv) = parse_response(self.config.style, content) else {
            warn!(%stage, "no move found in response");
            return None;
        };

        let listed = match self.config.style {
            PromptStyle::Strict => legal.contains(&mv),
            PromptStyle::Casual => true,
        };
        if !listed || !state.is_valid_move(mv.row, mv.col) {
            warn!(%stage, %mv, listed, "model picked an illegal move");
            return None;
        }

        debug!(%stage, %mv, "accepted model move");
        Some(mv)
    }

    fn fallback<G: GameState + ?Sized>(&self, state: &G, legal: &[Move]) -> Result<Move> {
        let chosen = match self.config.style {
            PromptStyle::Strict if legal.is_empty() => {
                fallback::first_legal(&state.legal_moves())
            }
            PromptStyle::Strict => fallback::center_nearest(legal, state.board_size()),
            PromptStyle::Casual => fallback::first_legal(legal),
        };

        chosen.ok_or_else(|| {
            Error::no_legal_moves(state.board_size())
                .with_operation("agent::get_move")
                .with_context("style", self.config.style.as_str())
        })
    }
}

impl<P: LlmProvider> Agent for LlmAgent<P> {
    fn player(&self) -> Player {
        self.player
    }

    async fn get_move<G: GameState + ?Sized>(&self, state: &G) -> Result<Move> {
        Ok(self.resolve(state).await?.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_llm::DEFAULT_BASE_URL;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.style, PromptStyle::Strict);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_provider_config_with_endpoint() {
        let config = AgentConfig::default()
            .with_model("gemma2-9b-it")
            .with_api_key("sk-test")
            .with_endpoint("http://localhost:8000/v1")
            .with_header("X-Title", "gomoku")
            .provider_config()
            .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000/v1"));
        assert_eq!(config.default_model.as_deref(), Some("gemma2-9b-it"));
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.headers.get("X-Title").map(String::as_str), Some("gomoku"));
    }

    #[test]
    fn test_provider_config_defaults_to_openai() {
        let config = AgentConfig::default().provider_config().unwrap();

        assert_eq!(config.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let err = AgentConfig::default().with_model(" ").provider_config().unwrap_err();
        assert_eq!(err.kind(), gomoku_error::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_new_builds_openai_agent() {
        let config = AgentConfig::default().with_style(PromptStyle::Casual);
        let agent = LlmAgent::new(Player::White, config).unwrap();
        assert_eq!(agent.player(), Player::White);
        assert_eq!(agent.provider().name(), "openai");
        assert_eq!(agent.config().style, PromptStyle::Casual);
        assert_eq!(agent.prompts.style(), PromptStyle::Casual);
    }
}

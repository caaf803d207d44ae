//! Grounded answer generation.
//!
//! One generation call per request, temperature zero, with the refusal
//! string as the universal soft-failure value. The optional critic pass
//! re-audits the draft against the room text; a non-empty critic reply
//! unconditionally replaces the draft.

use std::sync::Arc;

use docent_core::config::{GenerationConfig, LlmConfig};
use docent_core::models::truncate_chars;
use docent_core::traits::IChatModel;
use docent_core::Language;
use tracing::{debug, warn};

use crate::prompts;

/// Generation temperature: deterministic.
const GENERATION_TEMPERATURE: f32 = 0.0;

pub struct Generator {
    chat: Arc<dyn IChatModel>,
    chat_model: String,
    critic_model: String,
    critic_enabled: bool,
    max_context_chars: usize,
}

impl Generator {
    pub fn new(chat: Arc<dyn IChatModel>, llm: &LlmConfig, generation: &GenerationConfig) -> Self {
        Self {
            chat,
            chat_model: llm.chat_model.clone(),
            critic_model: llm.critic_model().to_string(),
            critic_enabled: generation.critic_enabled,
            max_context_chars: generation.max_context_chars,
        }
    }

    /// Produce a grounded answer for the question against the room text.
    ///
    /// Never returns an empty string and never surfaces an upstream error:
    /// transport or empty-reply failure yields exactly the refusal string
    /// for the target language.
    pub async fn answer(
        &self,
        room_text: &str,
        question: &str,
        lang: Language,
        history_block: Option<&str>,
    ) -> String {
        let context = truncate_chars(room_text.trim(), self.max_context_chars);
        let system = prompts::system_prompt(lang);
        let user = prompts::user_message(&context, history_block, question, lang);

        let mut answer = match self
            .chat
            .chat(&self.chat_model, &system, &user, GENERATION_TEMPERATURE)
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "generation call failed, substituting refusal");
                return lang.refusal().to_string();
            }
        };

        if self.critic_enabled {
            answer = self.run_critic(&context, question, answer, lang).await;
        }

        // A model-produced refusal gets the contact/referral suffix so the
        // visitor always has somewhere to go next.
        if answer.contains(lang.refusal()) {
            answer.push_str(lang.contact_suffix());
        }
        answer
    }

    /// Critic pass: audit the draft against the room text. Failure keeps
    /// the draft; any non-empty reply replaces it.
    async fn run_critic(
        &self,
        context: &str,
        question: &str,
        draft: String,
        lang: Language,
    ) -> String {
        let (system, user) = prompts::critic_prompts(context, question, &draft, lang);
        match self
            .chat
            .chat(&self.critic_model, &system, &user, GENERATION_TEMPERATURE)
            .await
        {
            Ok(reply) => {
                debug!("critic replaced draft answer");
                reply
            }
            Err(e) => {
                warn!(error = %e, "critic call failed, keeping draft");
                draft
            }
        }
    }
}

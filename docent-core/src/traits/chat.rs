use crate::errors::DocentResult;

/// Generative chat model endpoint.
///
/// Used for both room classification and grounded answer generation. One
/// system + user exchange per call; callers interpret any error as a soft
/// failure per the degradation policy.
#[async_trait::async_trait]
pub trait IChatModel: Send + Sync {
    /// Run one chat completion and return the reply text.
    ///
    /// `model` selects between the main and critic models on a shared
    /// endpoint. Returns an error on transport failure, non-success status,
    /// malformed output, or an empty reply — never an empty `Ok`.
    async fn chat(
        &self,
        model: &str,
        system_prompt: &str,
        user_msg: &str,
        temperature: f32,
    ) -> DocentResult<String>;
}

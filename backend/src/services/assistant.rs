//! Conversational advisory assistant
//!
//! Wraps the generative assistant collaborator with a farming advisor persona
//! and per-user conversation memory held in process.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::external::AssistantClient;

/// Exchanges kept per user before the oldest is evicted.
const HISTORY_CAP: usize = 10;
/// Exchanges replayed into the prompt as conversation context.
const CONTEXT_EXCHANGES: usize = 3;

const ADVISOR_CONTEXT: &str = "You are an expert agricultural advisor and fertilizer specialist \
with 20+ years of experience in Indian farming conditions. You provide practical, actionable \
farming advice to farmers worldwide, with special focus on Indian agriculture.\n\
\n\
Your expertise includes:\n\
- Soil analysis and nutrient management for Indian soil types\n\
- Crop selection and rotation strategies suitable for Indian climate\n\
- Fertilizer recommendations (both organic and synthetic) available in India\n\
- Pest and disease management for tropical/subtropical conditions\n\
- Weather-based farming decisions for monsoon patterns\n\
- Sustainable agriculture practices for small and medium farms\n\
- Water management and irrigation techniques\n\
\n\
Communication style:\n\
- Be friendly, encouraging, and professional like a caring agricultural officer\n\
- Use simple Hindi-English mixed language that Indian farmers understand\n\
- Provide specific, actionable advice with exact quantities\n\
- Consider monsoon seasons, Rabi/Kharif crop cycles\n\
- Always prioritize sustainable and organic practices when possible\n";

const RESPONSE_GUIDANCE: &str = "Please provide detailed, practical advice in simple language. \
Include what to do, when to do it (timing based on Indian seasons), how much to use (exact \
quantities in kg/acre), approximate costs in Indian Rupees, and cheaper alternatives where \
available. Keep your response helpful and encouraging. Aim for 250-400 words.";

/// One completed question/answer pair in a user's conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub user: String,
    pub assistant: String,
}

/// Shared per-user conversation memory.
pub type ConversationStore = Arc<RwLock<HashMap<String, VecDeque<Exchange>>>>;

/// Create an empty conversation store.
pub fn new_conversation_store() -> ConversationStore {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Assistant service
#[derive(Clone)]
pub struct AssistantService {
    client: AssistantClient,
    store: ConversationStore,
}

impl AssistantService {
    /// Create a new AssistantService instance
    pub fn new(client: AssistantClient, store: ConversationStore) -> Self {
        Self { client, store }
    }

    /// Answer a farmer's question, threading in recent conversation context.
    pub async fn chat(&self, user_id: &str, message: &str) -> AppResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation {
                field: "message".to_string(),
                message: "Message is required".to_string(),
            });
        }

        let recent = self.recent(user_id, CONTEXT_EXCHANGES).await;
        let prompt = build_prompt(message, &recent);

        let reply = self.client.generate(&prompt).await?;
        self.append(user_id, message, &reply).await;

        Ok(reply)
    }

    /// Suggested starter questions for the chat interface.
    pub fn suggestions(&self) -> Vec<&'static str> {
        vec![
            "मेरे टमाटर के लिए कौन सा खाद अच्छा है?",
            "What fertilizer should I use for tomatoes?",
            "How to improve soil pH naturally?",
            "Best time to apply nitrogen fertilizer?",
            "धान की फसल के लिए कब पानी दें?",
            "Organic pest control methods for vegetables",
            "How to increase crop yield sustainably?",
            "मिट्टी में पोषक तत्वों की कमी के लक्षण",
            "Signs of nutrient deficiency in plants",
            "Crop rotation strategies for small farms",
            "सूखे के दौरान पानी का प्रबंधन कैसे करें?",
            "Water management during drought",
            "Choosing the right fertilizer NPK ratio",
            "अगले सीजन के लिए मिट्टी की तैयारी",
            "Soil preparation for the next season",
        ]
    }

    /// Whether the generative collaborator is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }

    /// Most recent `count` exchanges for a user, oldest first.
    pub async fn recent(&self, user_id: &str, count: usize) -> Vec<Exchange> {
        let store = self.store.read().await;
        match store.get(user_id) {
            Some(history) => {
                let skip = history.len().saturating_sub(count);
                history.iter().skip(skip).cloned().collect()
            }
            None => Vec::new(),
        }
    }

    /// Record a completed exchange, evicting the oldest beyond the cap.
    pub async fn append(&self, user_id: &str, user: &str, assistant: &str) {
        let mut store = self.store.write().await;
        let history = store.entry(user_id.to_string()).or_default();
        history.push_back(Exchange {
            user: user.to_string(),
            assistant: assistant.to_string(),
        });
        while history.len() > HISTORY_CAP {
            history.pop_front();
        }
    }
}

fn build_prompt(message: &str, recent: &[Exchange]) -> String {
    let mut prompt = String::from(ADVISOR_CONTEXT);

    if !recent.is_empty() {
        prompt.push_str("\nRecent conversation with this farmer:\n");
        for exchange in recent {
            prompt.push_str(&format!(
                "Farmer: {}\nAdvisor: {}\n",
                exchange.user, exchange.assistant
            ));
        }
    }

    prompt.push_str(&format!("\nCurrent farmer question: {}\n\n", message));
    prompt.push_str(RESPONSE_GUIDANCE);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_question_and_context() {
        let recent = vec![Exchange {
            user: "Which crop suits clay soil?".to_string(),
            assistant: "Paddy does well in clay soil.".to_string(),
        }];
        let prompt = build_prompt("When should I sow?", &recent);
        assert!(prompt.contains("Farmer: Which crop suits clay soil?"));
        assert!(prompt.contains("Advisor: Paddy does well in clay soil."));
        assert!(prompt.contains("Current farmer question: When should I sow?"));
    }

    #[test]
    fn prompt_without_history_omits_context_block() {
        let prompt = build_prompt("When should I sow?", &[]);
        assert!(!prompt.contains("Recent conversation"));
    }

    fn service() -> AssistantService {
        let client = AssistantClient::new(
            "http://localhost:9".to_string(),
            "test-key".to_string(),
            "test-model".to_string(),
        );
        AssistantService::new(client, new_conversation_store())
    }

    #[tokio::test]
    async fn history_evicts_oldest_beyond_cap() {
        let service = service();
        for i in 0..12 {
            service
                .append("farmer-1", &format!("question {}", i), "answer")
                .await;
        }

        let all = service.recent("farmer-1", usize::MAX).await;
        assert_eq!(all.len(), HISTORY_CAP);
        assert_eq!(all[0].user, "question 2");
        assert_eq!(all[9].user, "question 11");
    }

    #[tokio::test]
    async fn recent_returns_newest_exchanges_oldest_first() {
        let service = service();
        for i in 0..5 {
            service
                .append("farmer-1", &format!("question {}", i), "answer")
                .await;
        }

        let recent = service.recent("farmer-1", 3).await;
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].user, "question 2");
        assert_eq!(recent[2].user, "question 4");
    }

    #[tokio::test]
    async fn histories_are_isolated_per_user() {
        let service = service();
        service.append("farmer-1", "about wheat", "reply").await;

        assert!(service.recent("farmer-2", 3).await.is_empty());
        assert_eq!(service.recent("farmer-1", 3).await.len(), 1);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let service = service();
        let result = service.chat("farmer-1", "   ").await;
        assert!(matches!(
            result,
            Err(AppError::Validation { field, .. }) if field == "message"
        ));
    }
}

//! Finance assistant chat: canned keyword replies delivered after a fixed delay

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::{CoreError, CoreResult};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

pub const GREETING: &str = "Hello! I'm your AI finance assistant. I can help you analyze your spending patterns, create budgets, and answer questions about your financial data. What would you like to know?";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "Show my spending this month",
    "How can I save more money?",
    "What's my biggest expense category?",
    "Create a budget for next month",
    "Find all restaurant transactions",
];

const SPENDING_REPLY: &str = "Based on your recent transactions, your top spending categories are:\n\n1. **Food & Dining**: $1,200 (38%)\n2. **Transportation**: $800 (25%)\n3. **Shopping**: $600 (19%)\n4. **Entertainment**: $400 (13%)\n5. **Bills & Utilities**: $200 (6%)\n\nWould you like me to analyze any specific category or time period?";

const BUDGET_REPLY: &str = "Great question about budgeting! Based on your income of $4,200/month and expenses of $3,150/month, you're saving about 25% of your income.\n\n**Budget Recommendations:**\n- Food: $1,000 (currently $1,200) - Try meal planning\n- Transportation: $700 (currently $800) - Consider carpooling\n- Entertainment: $300 (currently $400) - Look for free activities\n\nThis could increase your savings rate to 30%. Would you like specific tips for any category?";

const INCOME_REPLY: &str = "Your income analysis:\n\n**Monthly Income**: $4,200\n**Income Sources:**\n- Primary Salary: $3,800 (90%)\n- Side Projects: $300 (7%)\n- Investments: $100 (3%)\n\n**Growth**: +5.2% compared to last month\n\nYour income is quite stable! Would you like suggestions on increasing your side income?";

const FALLBACK_REPLY: &str = "I understand you're asking about your finances. I can help you with:\n\n• **Spending Analysis** - Track where your money goes\n• **Budget Planning** - Create and manage budgets\n• **Savings Goals** - Set and monitor financial targets\n• **Transaction Search** - Find specific purchases\n• **Financial Insights** - Get personalized recommendations\n\nWhat specific area would you like to explore?";

/// Keywords checked in order; the first group with a hit picks the reply
const REPLY_TABLE: [(&[&str], &str); 3] = [
    (&["spending", "expense"], SPENDING_REPLY),
    (&["budget", "save"], BUDGET_REPLY),
    (&["income", "salary"], INCOME_REPLY),
];

/// Pick the assistant's answer for `input`
pub fn generate_reply(input: &str) -> &'static str {
    let input = input.to_lowercase();
    REPLY_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| input.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// One conversation with the assistant
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending_replies: usize,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A session opened with the assistant's greeting
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            pending_replies: 0,
            next_id: 1,
        };
        session.append(ChatRole::Bot, GREETING.to_string());
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while at least one reply is still on its way
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    fn append(&mut self, role: ChatRole, content: String) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Record a user message and mark a reply as pending.
    ///
    /// Blank input is rejected and leaves the session untouched.
    pub fn push_user(&mut self, text: &str) -> CoreResult<ChatMessage> {
        if text.trim().is_empty() {
            return Err(CoreError::EmptyMessage);
        }
        self.pending_replies += 1;
        Ok(self.append(ChatRole::User, text.to_string()))
    }

    /// Deliver one pending reply
    pub fn push_bot(&mut self, text: &str) -> ChatMessage {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.append(ChatRole::Bot, text.to_string())
    }

    /// Forget one pending reply without delivering it
    pub fn reply_cancelled(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

pub type SharedChatSession = Arc<RwLock<ChatSession>>;

/// A bot reply scheduled to land in a session after a fixed delay.
///
/// Dropping the task aborts it; use [`ReplyTask::cancel`] on teardown so the
/// session's typing indicator is also settled.
pub struct ReplyTask {
    handle: Option<JoinHandle<()>>,
    session: SharedChatSession,
}

impl ReplyTask {
    /// Spawn the reply for `input` on the current tokio runtime
    pub fn schedule(session: SharedChatSession, input: &str, delay: Duration) -> Self {
        let reply = generate_reply(input);
        let target = session.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let message = target.write().await.push_bot(reply);
            log::debug!("Delivered chat reply {}", message.id);
        });
        Self {
            handle: Some(handle),
            session,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Wait for the reply to be delivered
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                log::warn!("Chat reply task failed: {}", e);
            }
        }
    }

    /// Stop the reply if it has not been delivered yet.
    ///
    /// A reply that already landed is left in place.
    pub async fn cancel(mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.abort();
        match handle.await {
            Err(e) if e.is_cancelled() => {
                self.session.write().await.reply_cancelled();
                log::debug!("Cancelled pending chat reply");
            }
            Err(e) => log::warn!("Chat reply task failed: {}", e),
            Ok(()) => {}
        }
    }
}

impl Drop for ReplyTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

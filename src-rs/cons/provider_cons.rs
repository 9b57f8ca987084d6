use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatProvider {
    OpenAI,
    MiniMax,
    ZhiPuAI,
    Qwen,
    Moonshot,
    Anthropic,
    Mistral,
    DeepSeek,
    Yi,
}

impl ChatProvider {
    /// Returns the canonical lowercase identifier handed to the backend
    /// when a model selection is submitted (e.g., "openai", "anthropic")
    pub fn provider_name(&self) -> &'static str {
        match self {
            ChatProvider::OpenAI => "openai",
            ChatProvider::MiniMax => "minimax",
            ChatProvider::ZhiPuAI => "zhipuai",
            ChatProvider::Qwen => "qwen",
            ChatProvider::Moonshot => "moonshot",
            ChatProvider::Anthropic => "anthropic",
            ChatProvider::Mistral => "mistral",
            ChatProvider::DeepSeek => "deepseek",
            ChatProvider::Yi => "yi",
        }
    }

    /// Display string used by the catalog; doubles as the namespace
    /// prefix in composite model keys.
    pub fn catalog_label(&self) -> &'static str {
        match self {
            ChatProvider::OpenAI => "OpenAI",
            ChatProvider::MiniMax => "MiniMax",
            ChatProvider::ZhiPuAI => "ZhiPuAI",
            ChatProvider::Qwen => "Qwen",
            ChatProvider::Moonshot => "Moonshot",
            ChatProvider::Anthropic => "Anthropic",
            ChatProvider::Mistral => "Mistral",
            ChatProvider::DeepSeek => "DeepSeek",
            ChatProvider::Yi => "Yi",
        }
    }

    /// Helper to parse from a string (handles aliases)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(ChatProvider::OpenAI),
            "minimax" => Some(ChatProvider::MiniMax),
            "zhipuai" | "zhipu" => Some(ChatProvider::ZhiPuAI),
            "qwen" => Some(ChatProvider::Qwen),
            "moonshot" | "kimi" => Some(ChatProvider::Moonshot),
            "anthropic" | "claude" => Some(ChatProvider::Anthropic),
            "mistral" => Some(ChatProvider::Mistral),
            "deepseek" => Some(ChatProvider::DeepSeek),
            "yi" => Some(ChatProvider::Yi),
            _ => None,
        }
    }
}

// Ensure Display trait matches provider_name for convenience
impl std::fmt::Display for ChatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_name())
    }
}

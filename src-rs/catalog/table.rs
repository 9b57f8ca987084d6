// The compiled-in catalog table. Hand-maintained; the provider's display
// string doubles as its namespace value.

use crate::cons::provider_cons::ChatProvider;

use super::{ModelEntry, ProviderGroup};

fn group(provider: ChatProvider, children: &[(&str, &str)]) -> ProviderGroup {
    let name = provider.catalog_label();
    ProviderGroup {
        label: name.to_string(),
        value: name.to_string(),
        children: children
            .iter()
            .map(|(label, value)| ModelEntry {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub(super) fn chat_model_groups() -> Vec<ProviderGroup> {
    vec![
        group(
            ChatProvider::OpenAI,
            &[
                ("gpt-35-turbo", "gpt-35-turbo"),
                ("gpt-4", "gpt-4"),
                ("gpt-4o", "gpt-4o"),
            ],
        ),
        group(
            ChatProvider::MiniMax,
            &[
                ("abab5.5-chat", "abab5.5-chat"),
                ("abab6-chat", "abab6-chat"),
                ("abab6.5s-chat", "abab6.5s-chat"),
            ],
        ),
        group(
            ChatProvider::ZhiPuAI,
            &[
                ("glm-3-turbo", "glm-3-turbo"),
                ("glm-4", "glm-4"),
                ("glm-4-0520", "glm-4-0520"),
                ("glm-4-air", "glm-4-air"),
                ("glm-4-airx", "glm-4-airx"),
                ("glm-4-flash", "glm-4-flash"),
            ],
        ),
        group(
            ChatProvider::Qwen,
            &[
                ("qwen1.5-7b-chat", "qwen1.5-7b-chat"),
                ("qwen1.5-14b-chat", "qwen1.5-14b-chat"),
                ("qwen1.5-32b-chat", "qwen1.5-32b-chat"),
                ("qwen1.5-72b-chat", "qwen1.5-72b-chat"),
                ("qwen1.5-110b-chat", "qwen1.5-110b-chat"),
                ("qwen2-72b-instruct", "qwen2-72b-instruct"),
            ],
        ),
        group(
            ChatProvider::Moonshot,
            &[
                ("moonshot-v1-8k", "moonshot-v1-8k"),
                ("moonshot-v1-32k", "moonshot-v1-32k"),
                ("moonshot-v1-128k", "moonshot-v1-128k"),
            ],
        ),
        group(
            ChatProvider::Anthropic,
            &[
                ("claude-3-haiku", "claude-3-haiku-20240307"),
                ("claude-3-sonnet", "claude-3-sonnet-20240229"),
                ("claude-3-opus", "claude-3-opus-20240229"),
                ("claude-3-5-sonnet", "claude-3-5-sonnet-20240620"),
            ],
        ),
        group(
            ChatProvider::Mistral,
            &[
                ("mixtral-8x7b", "mixtral-8x7b"),
                ("mistral-small", "mistral-small"),
                ("mistral-medium", "mistral-medium"),
                ("mistral-large", "mistral-large"),
            ],
        ),
        group(
            ChatProvider::DeepSeek,
            &[
                ("deepseek-chat", "deepseek-chat"),
                ("deepseek-coder", "deepseek-coder"),
            ],
        ),
        group(
            ChatProvider::Yi,
            &[
                ("yi-large", "yi-large"),
                ("yi-large-turbo", "yi-large-turbo"),
                ("yi-medium", "yi-medium"),
                ("yi-medium-200k", "yi-medium-200k"),
                ("yi-spark", "yi-spark"),
            ],
        ),
    ]
}

use crate::catalog::{
    flatten_model_options, flatten_model_options_with, provider_of_model, split_model_key,
    ModelEntry, ModelOption, ProviderGroup, CHAT_MODEL_OPTIONS, FLATTENED_CHAT_MODEL_OPTIONS,
};

fn entry(label: &str, value: &str) -> ModelEntry {
    ModelEntry {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn group(name: &str, children: Vec<ModelEntry>) -> ProviderGroup {
    ProviderGroup {
        label: name.to_string(),
        value: name.to_string(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_flattens_to_nothing() {
        assert_eq!(flatten_model_options(&[]), Vec::<ModelOption>::new());
    }

    #[test]
    fn group_without_children_contributes_nothing() {
        let groups = vec![group("P", vec![])];
        assert_eq!(flatten_model_options(&groups), Vec::<ModelOption>::new());
    }

    #[test]
    fn composes_label_and_value_with_provider_prefix() {
        let groups = vec![group("OpenAI", vec![entry("gpt-4", "gpt-4")])];
        let flattened = flatten_model_options(&groups);
        assert_eq!(
            flattened,
            vec![ModelOption {
                label: "OpenAI/gpt-4".to_string(),
                value: "OpenAI/gpt-4".to_string(),
            }]
        );
    }

    #[test]
    fn passes_children_verbatim_without_provider_prefix() {
        let groups = vec![group("OpenAI", vec![entry("gpt-4", "gpt-4")])];
        let flattened = flatten_model_options_with(&groups, false);
        assert_eq!(
            flattened,
            vec![ModelOption {
                label: "gpt-4".to_string(),
                value: "gpt-4".to_string(),
            }]
        );
    }

    #[test]
    fn dated_revision_composes_into_value_only() {
        let groups = vec![group(
            "Anthropic",
            vec![entry("claude-3-opus", "claude-3-opus-20240229")],
        )];
        let flattened = flatten_model_options(&groups);
        assert_eq!(flattened[0].label, "Anthropic/claude-3-opus");
        assert_eq!(flattened[0].value, "Anthropic/claude-3-opus-20240229");
    }

    #[test]
    fn output_length_is_total_child_count() {
        let groups = vec![
            group("A", vec![entry("a1", "a1"), entry("a2", "a2")]),
            group("B", vec![]),
            group("C", vec![entry("c1", "c1")]),
        ];
        for show_provider in [true, false] {
            let flattened = flatten_model_options_with(&groups, show_provider);
            let expected: usize = groups.iter().map(|g| g.children.len()).sum();
            assert_eq!(flattened.len(), expected);
        }
    }

    #[test]
    fn preserves_group_major_child_minor_order() {
        let groups = vec![
            group("A", vec![entry("a1", "a1"), entry("a2", "a2")]),
            group("B", vec![entry("b1", "b1"), entry("b2", "b2")]),
        ];
        let flattened = flatten_model_options(&groups);
        let values: Vec<&str> = flattened.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["A/a1", "A/a2", "B/b1", "B/b2"]);
    }

    #[test]
    fn keeps_duplicates_from_the_source() {
        let groups = vec![group("A", vec![entry("m", "m"), entry("m", "m")])];
        let flattened = flatten_model_options(&groups);
        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened[0], flattened[1]);
    }

    #[test]
    fn embedded_slash_passes_through_unescaped() {
        let groups = vec![group("Meta/Llama", vec![entry("llama-3", "llama-3")])];
        let flattened = flatten_model_options(&groups);
        assert_eq!(flattened[0].value, "Meta/Llama/llama-3");
        // The composed key is ambiguous to parse back: the split stops at
        // the first separator.
        let (provider, model) = split_model_key(&flattened[0].value);
        assert_eq!(provider, Some("Meta"));
        assert_eq!(model, "Llama/llama-3");
    }

    #[test]
    fn repeated_calls_yield_equal_sequences() {
        let groups = vec![
            group("A", vec![entry("a1", "a1")]),
            group("B", vec![entry("b1", "b1")]),
        ];
        let first = flatten_model_options(&groups);
        let second = flatten_model_options(&groups);
        assert_eq!(first, second);
    }

    #[test]
    fn compiled_catalog_flattens_with_provider_prefix() {
        let expected: usize = CHAT_MODEL_OPTIONS.iter().map(|g| g.children.len()).sum();
        assert_eq!(FLATTENED_CHAT_MODEL_OPTIONS.len(), expected);
        assert_eq!(FLATTENED_CHAT_MODEL_OPTIONS[0].value, "OpenAI/gpt-35-turbo");
        for option in FLATTENED_CHAT_MODEL_OPTIONS.iter() {
            assert!(
                option.value.contains('/'),
                "flattened value should carry the provider prefix: {}",
                option.value
            );
        }
    }

    #[test]
    fn compiled_catalog_keeps_dated_anthropic_revisions() {
        let opus = FLATTENED_CHAT_MODEL_OPTIONS
            .iter()
            .find(|o| o.label == "Anthropic/claude-3-opus")
            .expect("claude-3-opus should be in the catalog");
        assert_eq!(opus.value, "Anthropic/claude-3-opus-20240229");
    }

    #[test]
    fn split_model_key_splits_on_first_slash() {
        assert_eq!(
            split_model_key("Anthropic/claude-3-opus-20240229"),
            (Some("Anthropic"), "claude-3-opus-20240229")
        );
        assert_eq!(split_model_key("gpt-4o"), (None, "gpt-4o"));
    }

    #[test]
    fn provider_of_model_finds_owning_group() {
        let owner = provider_of_model("claude-3-opus-20240229").expect("owner");
        assert_eq!(owner.value, "Anthropic");
        assert!(provider_of_model("not-a-model").is_none());
    }
}

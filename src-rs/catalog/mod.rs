// Chat model catalog: the compiled-in provider/model table and the
// flattening helper that feeds single-level selection widgets.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

mod table;

/// One selectable model under a provider. `value` is the identifier sent
/// to the backend and may differ from `label` (e.g. a dated API revision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub label: String,
    pub value: String,
}

/// A provider and its models. Insertion order determines display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderGroup {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub children: Vec<ModelEntry>,
}

/// A single-level dropdown option derived from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub label: String,
    pub value: String,
}

lazy_static! {
    /// The compiled-in chat model catalog, providers in display order.
    pub static ref CHAT_MODEL_OPTIONS: Vec<ProviderGroup> = table::chat_model_groups();

    /// `CHAT_MODEL_OPTIONS` flattened with the default presentation.
    pub static ref FLATTENED_CHAT_MODEL_OPTIONS: Vec<ModelOption> =
        flatten_model_options(&CHAT_MODEL_OPTIONS);
}

/// Flattens the nested catalog with the provider prefix shown (the
/// default presentation).
pub fn flatten_model_options(options: &[ProviderGroup]) -> Vec<ModelOption> {
    flatten_model_options_with(options, true)
}

/// Flattens provider groups into flat dropdown options: one option per
/// `(group, child)` pair, in catalog order. Groups without children
/// contribute nothing.
///
/// With `show_provider`, label and value are composed as
/// `"{group}/{child}"`. Embedded `/` characters in the source strings are
/// passed through unescaped, so a composed value containing one does not
/// split back unambiguously.
pub fn flatten_model_options_with(
    options: &[ProviderGroup],
    show_provider: bool,
) -> Vec<ModelOption> {
    let mut flattened = Vec::new();

    for option in options {
        for child in &option.children {
            flattened.push(ModelOption {
                label: if show_provider {
                    format!("{}/{}", option.label, child.label)
                } else {
                    child.label.clone()
                },
                value: if show_provider {
                    format!("{}/{}", option.value, child.value)
                } else {
                    child.value.clone()
                },
            });
        }
    }

    flattened
}

/// Splits a composite model key on the first `/`. A bare model id comes
/// back with no provider part.
pub fn split_model_key(key: &str) -> (Option<&str>, &str) {
    match key.split_once('/') {
        Some((provider, model)) => (Some(provider), model),
        None => (None, key),
    }
}

/// Finds the catalog group that owns `model_value`, if any.
pub fn provider_of_model(model_value: &str) -> Option<&'static ProviderGroup> {
    CHAT_MODEL_OPTIONS
        .iter()
        .find(|group| group.children.iter().any(|child| child.value == model_value))
}

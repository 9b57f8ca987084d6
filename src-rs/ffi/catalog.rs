use napi_derive::napi;

use crate::catalog::{self, ModelEntry, ModelOption, ProviderGroup};
use crate::cons::provider_cons::ChatProvider;

#[napi(object)]
pub struct CoreModelOption {
    pub label: String,
    pub value: String,
}

impl From<&ModelOption> for CoreModelOption {
    fn from(option: &ModelOption) -> Self {
        Self {
            label: option.label.clone(),
            value: option.value.clone(),
        }
    }
}

#[napi(object)]
pub struct CoreModelEntry {
    pub label: String,
    pub value: String,
}

#[napi(object)]
pub struct CoreProviderGroup {
    pub label: String,
    pub value: String,
    pub children: Vec<CoreModelEntry>,
}

impl From<&ProviderGroup> for CoreProviderGroup {
    fn from(group: &ProviderGroup) -> Self {
        Self {
            label: group.label.clone(),
            value: group.value.clone(),
            children: group.children.iter().map(CoreModelEntry::from).collect(),
        }
    }
}

impl From<&ModelEntry> for CoreModelEntry {
    fn from(entry: &ModelEntry) -> Self {
        Self {
            label: entry.label.clone(),
            value: entry.value.clone(),
        }
    }
}

/// The nested catalog, for cascader-style pickers.
#[napi]
pub fn list_chat_model_groups() -> Vec<CoreProviderGroup> {
    catalog::CHAT_MODEL_OPTIONS
        .iter()
        .map(CoreProviderGroup::from)
        .collect()
}

/// The flattened catalog, for single-level dropdowns. `show_provider`
/// defaults to true.
#[napi]
pub fn list_chat_model_options(show_provider: Option<bool>) -> Vec<CoreModelOption> {
    match show_provider {
        None | Some(true) => catalog::FLATTENED_CHAT_MODEL_OPTIONS
            .iter()
            .map(CoreModelOption::from)
            .collect(),
        Some(false) => {
            catalog::flatten_model_options_with(&catalog::CHAT_MODEL_OPTIONS, false)
                .iter()
                .map(CoreModelOption::from)
                .collect()
        }
    }
}

/// Canonical lowercase provider id for a catalog value or alias, or None
/// when the name is unknown.
#[napi]
pub fn canonical_provider_name(name: String) -> Option<String> {
    ChatProvider::from_name(&name).map(|p| p.provider_name().to_string())
}

use std::collections::BTreeMap;

/// Script and stylesheet served for one frontend plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PluginAsset {
    pub(crate) key: String,
    pub(crate) script: String,
    pub(crate) stylesheet: String,
}

impl PluginAsset {
    fn for_key(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            script: format!("/plugins/{key}.js"),
            stylesheet: format!("/plugins/{key}.css"),
        }
    }
}

/// Resolve asset locations for every configured plugin, ordered by key.
pub(crate) fn resolve_plugin_assets(
    plugins: &BTreeMap<String, serde_json::Value>,
) -> Vec<PluginAsset> {
    plugins
        .keys()
        .map(|key| {
            let asset = PluginAsset::for_key(key);
            log::info!(
                "plugin {}: script {} stylesheet {}",
                asset.key,
                asset.script,
                asset.stylesheet
            );
            asset
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::resolve_plugin_assets;

    #[test]
    fn given_plugins_when_resolved_then_assets_follow_key_order() {
        let mut plugins = BTreeMap::new();
        plugins.insert(String::from("waterfall_view"), serde_json::json!({}));
        plugins.insert(String::from("console_view"), serde_json::Value::Null);

        let assets = resolve_plugin_assets(&plugins);

        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].key, "console_view");
        assert_eq!(assets[0].script, "/plugins/console_view.js");
        assert_eq!(assets[1].stylesheet, "/plugins/waterfall_view.css");
    }

    #[test]
    fn given_no_plugins_when_resolved_then_nothing_is_returned() {
        assert!(resolve_plugin_assets(&BTreeMap::new()).is_empty());
    }
}

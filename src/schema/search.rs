//! Case-insensitive name search over a provider schema.

use super::model::ProviderSchema;

impl ProviderSchema {
    /// All entry names: sorted resources, followed by sorted data sources
    /// when `include_data` is set.
    pub fn all_names(&self, include_data: bool) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        if include_data {
            names.extend(self.data_sources.keys().map(String::as_str));
        }
        names
    }

    /// Names containing `query` as a case-insensitive substring, in the same
    /// order as [`ProviderSchema::all_names`].
    pub fn filter_names(&self, query: &str, include_data: bool) -> Vec<&str> {
        let query = query.to_lowercase();
        self.all_names(include_data)
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&query))
            .collect()
    }
}

use super::field_extractor::{fields, FieldExtractor};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Builds an extractor from the token's argument and max length. No token
/// consumes either today; they stay in the signature so the template syntax
/// can carry them.
type ProviderFn = fn(Option<&str>, Option<usize>) -> FieldExtractor;
type ProviderTable = FxHashMap<&'static str, ProviderFn>;

/// Token name → extractor factory for the DNS access log.
///
/// Owned by whoever renders log lines and shared by reference. The table is
/// built on first lookup, exactly once even when several threads race on
/// it, and never changes afterwards.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    table: OnceLock<ProviderTable>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup. `None` means the token is not part of
    /// the vocabulary, which is different from a value being absent.
    pub fn parse(
        &self,
        token: &str,
        arg: Option<&str>,
        max_length: Option<usize>,
    ) -> Option<FieldExtractor> {
        self.table()
            .get(token)
            .map(|provider| provider(arg, max_length))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.table().contains_key(token)
    }

    /// Every recognised token, sorted.
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self.table().keys().copied().collect();
        tokens.sort_unstable();
        tokens
    }

    fn table(&self) -> &ProviderTable {
        self.table.get_or_init(build_provider_table)
    }
}

fn build_provider_table() -> ProviderTable {
    let providers: [(&'static str, ProviderFn); 11] = [
        ("QUERY_NAME", |_, _| {
            FieldExtractor::question("QUERY_NAME", fields::query_name)
        }),
        ("QUERY_TYPE", |_, _| {
            FieldExtractor::question("QUERY_TYPE", fields::query_type)
        }),
        ("QUERY_CLASS", |_, _| {
            FieldExtractor::question("QUERY_CLASS", fields::query_class)
        }),
        ("ANSWER_COUNT", |_, _| {
            FieldExtractor::context("ANSWER_COUNT", fields::answer_count)
        }),
        ("RESPONSE_CODE", |_, _| {
            FieldExtractor::context("RESPONSE_CODE", fields::response_code)
        }),
        ("PARSE_STATUS", |_, _| {
            FieldExtractor::context("PARSE_STATUS", fields::parse_status)
        }),
        ("LOCAL_IP", |_, _| {
            FieldExtractor::context("LOCAL_IP", fields::local_ip)
        }),
        ("PEER_IP", |_, _| {
            FieldExtractor::context("PEER_IP", fields::peer_ip)
        }),
        ("RESOLUTION_STATUS", |_, _| {
            FieldExtractor::context("RESOLUTION_STATUS", fields::resolution_status)
        }),
        ("RETRY_COUNT", |_, _| {
            FieldExtractor::context("RETRY_COUNT", fields::retry_count)
        }),
        ("DNS_ANSWERS", |_, _| {
            FieldExtractor::context("DNS_ANSWERS", fields::dns_answers)
        }),
    ];

    debug!(tokens = providers.len(), "Built DNS access log token table");
    providers.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_built_once() {
        let registry = TokenRegistry::new();
        let first = registry.table() as *const ProviderTable;
        let second = registry.table() as *const ProviderTable;
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_ignores_arg_and_max_length() {
        let registry = TokenRegistry::new();
        let plain = registry.parse("QUERY_NAME", None, None).unwrap();
        let with_arg = registry.parse("QUERY_NAME", Some("x"), Some(3)).unwrap();
        assert_eq!(plain.token(), with_arg.token());
    }
}

//! `search`: full-text search

use std::io::Write;

use anyhow::Result;
use dnscli_pdns::SearchApi;

use crate::cli::SearchArgs;
use crate::output::{self, OutputType};

pub async fn run(
    args: &SearchArgs,
    api: &dyn SearchApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    let results = api.search(&args.query, args.max, args.object_type).await?;
    log::debug!("search '{}' returned {} results", args.query, results.len());

    match output {
        // JSON keeps the order the API returned
        OutputType::Json => output::print_json(out, &results)?,
        OutputType::Text => output::print_search_results(out, &results)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dnscli_pdns::{ObjectType, SearchResult};

    use super::*;
    use crate::test_utils::MockSearchApi;

    fn result(content: &str, name: &str) -> SearchResult {
        SearchResult {
            content: content.to_string(),
            disabled: false,
            name: name.to_string(),
            object_type: ObjectType::Record,
            zone_id: "example.com.".to_string(),
            zone: "example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 60,
        }
    }

    fn args(object_type: ObjectType) -> SearchArgs {
        SearchArgs {
            query: "host*".to_string(),
            max: 100,
            object_type,
        }
    }

    #[tokio::test]
    async fn passes_query_through() {
        let api = MockSearchApi::new(Vec::new());
        let mut out = Vec::new();

        run(&args(ObjectType::Zone), &api, OutputType::Json, &mut out)
            .await
            .unwrap();

        assert_eq!(
            api.queries().await,
            [("host*".to_string(), 100, ObjectType::Zone)]
        );
        assert_eq!(out, b"[]\n");
    }

    #[tokio::test]
    async fn text_sorted_json_unsorted() {
        let api = MockSearchApi::new(vec![
            result("b", "host-b.example.com."),
            result("a", "host-a.example.com."),
        ]);

        let mut text = Vec::new();
        run(&args(ObjectType::All), &api, OutputType::Text, &mut text)
            .await
            .unwrap();
        let text = String::from_utf8(text).unwrap();
        let a = text.find("host-a.example.com").unwrap();
        let b = text.find("host-b.example.com").unwrap();
        assert!(a < b);
        assert!(!text.contains("example.com."));

        let mut json = Vec::new();
        run(&args(ObjectType::All), &api, OutputType::Json, &mut json)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value[0]["content"], "b");
        assert_eq!(value[1]["content"], "a");
    }
}

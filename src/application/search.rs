//! # Catalog Search
//!
//! Linear scans over the spreadsheet: by drink name across every tab, or by tab
//! title for category browsing. Data is read fresh from the catalog on each call.

use anyhow::Result;
use std::sync::Arc;

use crate::application::normalize::{normalize, normalize_cell};
use crate::domain::traits::CatalogSource;
use crate::domain::types::{SearchResult, Sheet};

/// Every row, in any tab, whose normalized name contains the normalized `query`.
pub async fn find_matches(catalog: &dyn CatalogSource, query: &str) -> Result<Vec<SearchResult>> {
    let needle = normalize(query);
    let mut results = Vec::new();
    for title in catalog.sheet_titles().await? {
        let sheet = catalog.sheet(&title).await?;
        collect_rows(&sheet, |name| name.contains(&needle), &mut results);
    }
    tracing::debug!("find_matches('{}') -> {} result(s)", query, results.len());
    Ok(results)
}

/// Every named row of the tabs whose normalized title contains `title_query`.
/// Tabs that do not match are not fetched.
pub async fn list_by_sheet(
    catalog: &dyn CatalogSource,
    title_query: &str,
) -> Result<Vec<SearchResult>> {
    let needle = normalize(title_query);
    let mut results = Vec::new();
    for title in catalog.sheet_titles().await? {
        if !normalize(&title).contains(&needle) {
            continue;
        }
        let sheet = catalog.sheet(&title).await?;
        collect_rows(&sheet, |_| true, &mut results);
    }
    tracing::debug!("list_by_sheet('{}') -> {} result(s)", title_query, results.len());
    Ok(results)
}

fn collect_rows<F>(sheet: &Sheet, accept: F, out: &mut Vec<SearchResult>)
where
    F: Fn(&str) -> bool,
{
    let Some((headers, data)) = sheet.split_header() else {
        return;
    };
    let headers = Arc::new(headers.to_vec());
    for row in data.iter().filter(|r| !r.is_empty()) {
        let name = normalize_cell(row.first().map(String::as_str));
        if name.is_empty() || !accept(&name) {
            continue;
        }
        out.push(SearchResult {
            sheet_title: sheet.title.clone(),
            headers: headers.clone(),
            row: row.clone(),
            normalized_name: name,
        });
    }
}

/// First result whose normalized name equals the normalized `query`.
pub fn exact_match<'a>(results: &'a [SearchResult], query: &str) -> Option<&'a SearchResult> {
    let needle = normalize(query);
    results.iter().find(|r| r.normalized_name == needle)
}

/// Orders results for display: exact name matches first, then by item name.
pub fn sort_exact_first(results: &mut [SearchResult], query: &str) {
    let needle = normalize(query);
    results.sort_by(|a, b| {
        (a.normalized_name != needle, a.name()).cmp(&(b.normalized_name != needle, b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryCatalog;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            (
                "Классика",
                vec![
                    vec!["Название", "МОЛОКО"],
                    vec!["Латте", "200"],
                    vec!["Латте Ваниль", "180"],
                    vec![],
                    vec!["", "50"],
                    vec!["Капучино", "150"],
                ],
            ),
            (
                "Авторские",
                vec![vec!["Название", "СИРОП"], vec!["Раф «Латте-арт»", "Ваниль"]],
            ),
            ("Пустая", vec![]),
        ])
    }

    #[tokio::test]
    async fn test_find_matches_across_tabs() {
        let catalog = catalog();
        let results = find_matches(&catalog, "ЛАТТЕ").await.unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Латте", "Латте Ваниль", "Раф «Латте-арт»"]);
        assert_eq!(results[2].sheet_title, "Авторские");
        assert_eq!(results[2].normalized_name, "раф латтеарт");
        assert_eq!(results[0].headers.as_slice(), ["Название", "МОЛОКО"]);
    }

    #[tokio::test]
    async fn test_find_matches_none() {
        let catalog = catalog();
        assert!(find_matches(&catalog, "мохито").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_sheet_only_fetches_matching_tabs() {
        let catalog = catalog();
        let results = list_by_sheet(&catalog, "класс").await.unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.sheet_title == "Классика"));
        assert_eq!(catalog.fetched(), vec!["Классика".to_string()]);
    }

    #[tokio::test]
    async fn test_list_by_sheet_unknown_category() {
        let catalog = catalog();
        assert!(list_by_sheet(&catalog, "Зима").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exact_match_and_sort() {
        let catalog = catalog();
        let mut results = find_matches(&catalog, "латте").await.unwrap();
        assert_eq!(exact_match(&results, "Латте!").unwrap().name(), "Латте");
        assert!(exact_match(&results, "латт").is_none());

        results.reverse();
        sort_exact_first(&mut results, "латте ваниль");
        let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Латте Ваниль", "Латте", "Раф «Латте-арт»"]);
    }
}

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::Deserialize;

use super::Enricher;
use crate::config::{
    Config, ENRICHMENT_PREFIX, MAX_SEARCH_SNIPPETS, SEARCH_RESULT_SELECTOR,
};
use crate::error_handling::CapabilityError;

/// Instant-answer API response; only the abstract is used.
#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Abstract", default)]
    abstract_text: String,
}

/// DuckDuckGo instant answers plus HTML search scraping.
#[derive(Debug, Clone)]
pub struct DuckDuckGoEnricher {
    client: reqwest::Client,
    abstract_url: String,
    search_url: String,
}

impl DuckDuckGoEnricher {
    pub fn new(
        client: reqwest::Client,
        abstract_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            abstract_url: abstract_url.into(),
            search_url: search_url.into(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, &config.abstract_url, &config.search_url)
    }

    async fn get_text(&self, base: &str, params: &[(&str, &str)]) -> Result<String, CapabilityError> {
        let url = url::Url::parse_with_params(base, params)
            .map_err(|e| CapabilityError::Decode(format!("bad endpoint {base}: {e}")))?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CapabilityError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl Enricher for DuckDuckGoEnricher {
    async fn fetch_abstract(&self, query: &str) -> Result<String, CapabilityError> {
        let body = self
            .get_text(&self.abstract_url, &[("q", query), ("format", "json")])
            .await?;
        let answer: InstantAnswer =
            serde_json::from_str(&body).map_err(|e| CapabilityError::Decode(e.to_string()))?;
        log::debug!(
            "Abstract for {query}: {} chars",
            answer.abstract_text.trim().len()
        );
        Ok(answer.abstract_text.trim().to_string())
    }

    async fn scrape_search_results(&self, query: &str) -> Result<String, CapabilityError> {
        let body = self.get_text(&self.search_url, &[("q", query)]).await?;
        // Html is not Send, so parse only after the last await
        let snippets = extract_snippets(&body)?;
        log::debug!("Scraped {} search snippets for {query}", snippets.len());
        Ok(format_snippets(&snippets))
    }
}

/// Text of the first few search results, whitespace collapsed.
fn extract_snippets(html: &str) -> Result<Vec<String>, CapabilityError> {
    let selector = Selector::parse(SEARCH_RESULT_SELECTOR)
        .map_err(|e| CapabilityError::Decode(format!("invalid selector: {e}")))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .take(MAX_SEARCH_SNIPPETS)
        .collect())
}

/// Formats snippets as the enrichment block sent to the model.
///
/// No snippets means no enrichment, so the result is empty.
pub fn format_snippets<S: AsRef<str>>(snippets: &[S]) -> String {
    if snippets.is_empty() {
        return String::new();
    }
    let body = snippets
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n* ");
    format!("{ENRICHMENT_PREFIX}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn enricher(server: &Server) -> DuckDuckGoEnricher {
        DuckDuckGoEnricher::new(
            reqwest::Client::new(),
            server.url_str("/api/"),
            server.url_str("/html/"),
        )
    }

    fn results_page(count: usize) -> String {
        let mut page = String::from("<html><body><div id=\"links\">");
        for i in 0..count {
            page.push_str(&format!(
                "<div class=\"result results_links\"><div class=\"result__body\">\
                 <h2 class=\"result__title\">Result {i}</h2>\n  \
                 <a class=\"result__snippet\">Snippet   number {i}</a></div></div>"
            ));
        }
        page.push_str("</div></body></html>");
        page
    }

    #[test]
    fn test_format_snippets() {
        assert_eq!(format_snippets::<&str>(&[]), "");
        assert_eq!(
            format_snippets(&["one", "two"]),
            "Enrichment details:\n\n* one\n* two"
        );
    }

    #[test]
    fn test_extract_snippets_limits_and_collapses_whitespace() {
        let snippets = extract_snippets(&results_page(8)).unwrap();
        assert_eq!(snippets.len(), 5);
        assert_eq!(snippets[0], "Result 0 Snippet number 0");
        assert_eq!(snippets[4], "Result 4 Snippet number 4");
    }

    #[test]
    fn test_extract_snippets_without_results() {
        assert!(extract_snippets("<html><body>No results.</body></html>")
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_fetch_abstract_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/"),
                request::query(url_decoded(contains(("q", "lseg.com")))),
                request::query(url_decoded(contains(("format", "json")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "Abstract": " London Stock Exchange Group is a financial markets company. ",
                "AbstractURL": "https://en.wikipedia.org/wiki/LSEG",
            }))),
        );

        let text = enricher(&server).fetch_abstract("lseg.com").await.unwrap();
        assert_eq!(
            text,
            "London Stock Exchange Group is a financial markets company."
        );
    }

    #[tokio::test]
    async fn test_fetch_abstract_missing_field_is_empty() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/"))
                .respond_with(status_code(200).body(r#"{"Heading": ""}"#)),
        );

        let text = enricher(&server).fetch_abstract("kmsec.uk").await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_abstract_http_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/"))
                .respond_with(status_code(503)),
        );

        let err = enricher(&server).fetch_abstract("kmsec.uk").await.unwrap_err();
        assert!(matches!(err, CapabilityError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_abstract_malformed_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/"))
                .respond_with(status_code(200).body("<html>rate limited</html>")),
        );

        let err = enricher(&server).fetch_abstract("kmsec.uk").await.unwrap_err();
        assert!(matches!(err, CapabilityError::Decode(_)));
    }

    #[tokio::test]
    async fn test_scrape_search_results() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/html/"),
                request::query(url_decoded(contains(("q", "kmsec.uk")))),
            ])
            .respond_with(status_code(200).body(results_page(2))),
        );

        let text = enricher(&server)
            .scrape_search_results("kmsec.uk")
            .await
            .unwrap();
        assert_eq!(
            text,
            "Enrichment details:\n\n* Result 0 Snippet number 0\n* Result 1 Snippet number 1"
        );
    }

    #[tokio::test]
    async fn test_scrape_search_results_empty_page() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/html/"))
                .respond_with(status_code(200).body("<html><body></body></html>")),
        );

        let text = enricher(&server)
            .scrape_search_results("nothing.example")
            .await
            .unwrap();
        assert_eq!(text, "");
    }
}

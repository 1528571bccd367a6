// Latest AI prompt/response pair
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub prompt: Option<String>,
    pub response: Option<String>,
    /// Response with code fences removed and JSON pretty-printed.
    pub formatted_response: Option<String>,
}

impl AiAnalysis {
    /// `None` when there is nothing to show.
    pub fn new(prompt: Option<String>, response: Option<String>) -> Option<Self> {
        if prompt.is_none() && response.is_none() {
            return None;
        }
        let formatted_response = response.as_deref().map(format_response);
        Some(Self {
            prompt,
            response,
            formatted_response,
        })
    }
}

/// Model replies often arrive wrapped in ```json fences. Strip those and
/// pretty-print if what remains parses; otherwise return it as-is.
pub fn format_response(raw: &str) -> String {
    let text = strip_code_fences(raw);
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if text.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("```json")) {
        text = &text[7..];
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pair_has_no_analysis() {
        assert!(AiAnalysis::new(None, None).is_none());
    }

    #[test]
    fn test_fenced_json_is_pretty_printed() {
        let raw = "```json\n{\"disease\":\"Blight\",\"confidence\":0.9}\n```";
        let formatted = format_response(raw);
        assert!(formatted.starts_with("{\n"));
        assert!(formatted.contains("\"disease\": \"Blight\""));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(format_response("  looks healthy  "), "looks healthy");
        assert_eq!(format_response("```\nnot json\n```"), "not json");
    }

    #[test]
    fn test_prompt_only() {
        let analysis = AiAnalysis::new(Some("p1".into()), None).unwrap();
        assert_eq!(analysis.prompt.as_deref(), Some("p1"));
        assert!(analysis.formatted_response.is_none());
    }
}

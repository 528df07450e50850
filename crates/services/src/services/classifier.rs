//! Keyword intent classifier.
//!
//! An ordered rule table evaluated top-down: the first rule with any keyword contained in
//! the lowercased input wins. There is no scoring, so overlapping keywords resolve purely
//! by position in [`RULES`].

use models::models::template::{Classification, TemplateCategory};

use super::catalog::{self, FALLBACK_RESPONSE};

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: TemplateCategory,
    pub keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const RULES: [Rule; 5] = [
    Rule {
        category: TemplateCategory::CompetitorIntelligence,
        keywords: &["competitor", "monitor"],
    },
    Rule {
        category: TemplateCategory::ContentRepurposing,
        keywords: &["social media", "content"],
    },
    Rule {
        category: TemplateCategory::Recruitment,
        keywords: &["job", "recruit", "candidate"],
    },
    Rule {
        category: TemplateCategory::LeadGeneration,
        keywords: &["lead", "linkedin", "sales"],
    },
    Rule {
        category: TemplateCategory::FeedbackAnalysis,
        keywords: &["feedback", "customer", "sentiment"],
    },
];

/// Category of the first matching rule, if any.
pub fn match_category(input: &str) -> Option<TemplateCategory> {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
}

/// Map free text to a canned response and crew. Callers reject blank input beforehand.
pub fn classify(input: &str) -> Classification {
    match match_category(input) {
        Some(category) => {
            let template = catalog::template(category);
            tracing::debug!(%category, "Classified input");
            Classification {
                category: Some(category),
                response: template.response.to_string(),
                crew: template.crew(),
            }
        }
        None => {
            tracing::debug!("No template matched, asking for details");
            Classification {
                category: None,
                response: FALLBACK_RESPONSE.to_string(),
                crew: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::EXAMPLE_PROMPTS;

    #[test]
    fn test_competitor_prompt_end_to_end() {
        let result = classify("Monitor my competitors and send me weekly reports");

        assert_eq!(result.category, Some(TemplateCategory::CompetitorIntelligence));
        assert!(result.response.starts_with("Excellent choice!"));
        let names: Vec<_> = result.crew.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Research Scout", "Strategic Analyst", "Report Compiler"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        for input in ["COMPETITOR pricing", "Competitor pricing", "cOmPeTiToR"] {
            assert_eq!(
                match_category(input),
                Some(TemplateCategory::CompetitorIntelligence),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_priority_order_wins_over_later_rules() {
        // rule 1 + rule 3
        assert_eq!(
            match_category("find a candidate to watch each competitor"),
            Some(TemplateCategory::CompetitorIntelligence)
        );
        // rule 1 + rule 4
        assert_eq!(
            match_category("competitor sales figures"),
            Some(TemplateCategory::CompetitorIntelligence)
        );
        // rule 2 + rule 5
        assert_eq!(
            match_category("customer content"),
            Some(TemplateCategory::ContentRepurposing)
        );
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "monitoring" contains "monitor"; "jobs" contains "job"
        assert_eq!(
            match_category("dashboard monitoring"),
            Some(TemplateCategory::CompetitorIntelligence)
        );
        assert_eq!(
            match_category("post jobs"),
            Some(TemplateCategory::Recruitment)
        );
        // "social" alone is not "social media"
        assert_eq!(match_category("social posts"), None);
    }

    #[test]
    fn test_example_prompts_each_hit_their_template() {
        let expected = [
            TemplateCategory::CompetitorIntelligence,
            TemplateCategory::ContentRepurposing,
            TemplateCategory::Recruitment,
            TemplateCategory::LeadGeneration,
            TemplateCategory::FeedbackAnalysis,
        ];
        for (prompt, category) in EXAMPLE_PROMPTS.iter().zip(expected) {
            assert_eq!(match_category(prompt), Some(category), "prompt {prompt:?}");
        }
    }

    #[test]
    fn test_unmatched_input_falls_back_with_empty_crew() {
        let result = classify("Help me plan a birthday party");

        assert!(result.is_fallback());
        assert!(result.crew.is_empty());
        assert_eq!(result.response, FALLBACK_RESPONSE);
    }
}

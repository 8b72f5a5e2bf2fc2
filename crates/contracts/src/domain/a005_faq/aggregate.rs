use crate::shared::{contains_ci, Searchable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question/answer pair shown on the manuals page and maintained from the
/// admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Faq {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Both fields are required by the admin form.
    pub fn is_valid(question: &str, answer: &str) -> bool {
        !question.trim().is_empty() && !answer.trim().is_empty()
    }
}

impl Searchable for Faq {
    fn matches_query(&self, query: &str) -> bool {
        contains_ci(&self.question, query) || contains_ci(&self.answer, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_search_matches_question_or_answer() {
        let faqs = crate::seed::faqs();
        let wreath = &faqs[0];
        assert!(wreath.matches_query("화환"));
        assert!(wreath.matches_query("2영업일"));
        assert!(!wreath.matches_query("명함"));
    }

    #[test]
    fn validation_rejects_blank_fields() {
        assert!(Faq::is_valid("질문", "답변"));
        assert!(!Faq::is_valid("", "답변"));
        assert!(!Faq::is_valid("질문", "   "));
    }
}

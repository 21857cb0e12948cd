use crate::extract::{element_text, require_first};
use crate::{Extractor, ScrapeError};
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use std::fmt;

const E: &str = "Invalid selector";
lazy_static! {
    static ref DESCRIPTION: Selector =
        Selector::parse(r#"p[class="super-lead left-align-mobile"]"#).expect(E);
    static ref FEATURES: Selector = Selector::parse(r#"section[class="wide-features"]"#).expect(E);
    static ref QUESTION: Selector = Selector::parse("h4").expect(E);
    static ref ANSWER: Selector = Selector::parse("p").expect(E);
}

#[derive(Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectsPage {
    pub description: String,
    pub faqs: Vec<FaqEntry>,
}

impl fmt::Display for ProjectsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "FAQs:")?;
        for faq in &self.faqs {
            writeln!(f, "{}", faq.question)?;
            writeln!(f, "{}", faq.answer)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pair questions and answers by index. The page carries no structural link
/// between a question and its answer, so the lengths must agree; a mismatch
/// fails the whole page rather than truncating or padding.
pub fn zip_pairs(questions: Vec<String>, answers: Vec<String>) -> Result<Vec<FaqEntry>, ScrapeError> {
    if questions.len() != answers.len() {
        return Err(ScrapeError::PairMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }
    Ok(questions
        .into_iter()
        .zip(answers)
        .map(|(question, answer)| FaqEntry {
            question,
            answer: answer.trim().to_string(),
        })
        .collect())
}

#[derive(Debug)]
pub struct ProjectsExtractor;

impl Extractor for ProjectsExtractor {
    type Page = ProjectsPage;

    fn extract(&self, doc: &Html) -> Result<ProjectsPage, ScrapeError> {
        let description = element_text(require_first(doc, &DESCRIPTION, "projects description")?)
            .trim()
            .to_string();

        let sections: Vec<_> = doc.select(&FEATURES).collect();

        // Questions and answers are accumulated in two separate passes over
        // the same sections; only the position in these two lists relates a
        // question to an answer.
        let mut questions = Vec::new();
        for section in &sections {
            for question in section.select(&QUESTION) {
                questions.push(element_text(question));
            }
        }
        let mut answers = Vec::new();
        for section in &sections {
            for answer in section.select(&ANSWER) {
                answers.push(element_text(answer));
            }
        }

        let faqs = zip_pairs(questions, answers)?;
        Ok(ProjectsPage { description, faqs })
    }
}

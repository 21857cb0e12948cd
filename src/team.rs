use crate::extract::{element_text, first_in, require_first};
use crate::{Extractor, ScrapeError};
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use std::fmt;

const E: &str = "Invalid selector";
lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").expect(E);
    static ref HEADER: Selector = Selector::parse("strong").expect(E);
    static ref HEADER_REST: Selector = Selector::parse(r#"div[class="contrast-white"]"#).expect(E);
    static ref DESCRIPTION: Selector =
        Selector::parse(r#"p[class="lead contrast-white-p"]"#).expect(E);
    static ref OFFICER: Selector =
        Selector::parse(r#"div[class="col-md-3 col-sm-4 project team-2 officers"]"#).expect(E);
    static ref NAME: Selector = Selector::parse("h3").expect(E);
    static ref POSITION: Selector = Selector::parse("span").expect(E);
    static ref LINK: Selector = Selector::parse("a").expect(E);
}

#[derive(Debug, PartialEq, Eq)]
pub struct Officer {
    pub name: String,
    pub position: String,
    pub link: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TeamPage {
    pub title: String,
    pub header: String,
    pub header_rest: String,
    pub description: String,
    pub officers: Vec<Officer>,
}

impl fmt::Display for TeamPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page Title: {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.header_rest)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "Officers:")?;
        for officer in &self.officers {
            writeln!(f, "Name: {}", officer.name)?;
            writeln!(f, "Position: {}", officer.position)?;
            if let Some(link) = officer.link.as_ref() {
                writeln!(f, "Link: {}", link)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct TeamExtractor;

impl Extractor for TeamExtractor {
    type Page = TeamPage;

    fn extract(&self, doc: &Html) -> Result<TeamPage, ScrapeError> {
        let title = element_text(require_first(doc, &TITLE, "page title")?);

        // The page header is split across two elements. The first half is
        // printed as-is; the second is formatted with surrounding
        // whitespace and gets trimmed.
        let header = element_text(require_first(doc, &HEADER, "page header")?);
        let header_rest = element_text(require_first(doc, &HEADER_REST, "page header rest")?)
            .trim()
            .to_string();

        let description = element_text(require_first(doc, &DESCRIPTION, "team description")?)
            .trim()
            .to_string();

        let mut officers = Vec::new();
        for card in doc.select(&OFFICER) {
            let name = first_in(card, &NAME)
                .map(element_text)
                .ok_or(ScrapeError::MissingElement("officer name"))?;
            let position = first_in(card, &POSITION)
                .map(element_text)
                .ok_or(ScrapeError::MissingElement("officer position"))?;
            // Not every card carries a profile link.
            let link = first_in(card, &LINK)
                .and_then(|a| a.value().attr("href"))
                .map(ToString::to_string);
            officers.push(Officer {
                name,
                position,
                link,
            });
        }

        Ok(TeamPage {
            title,
            header,
            header_rest,
            description,
            officers,
        })
    }
}

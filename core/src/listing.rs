use std::collections::BTreeSet;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::page::{FILES_PANEL_CLASS, PARENTDIR_ROW_CLASS, SUBDIR_ROW_CLASS};

/// Raised when a page contract selector does not parse.
#[derive(Debug, Clone, Error)]
pub enum ListingError {
    #[error("Invalid selector `{0}`: {1}")]
    Selector(String, String),
}

/// Names visible in the currently displayed remote folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteListing {
    pub files: BTreeSet<String>,
    pub folders: BTreeSet<String>,
}

impl RemoteListing {
    pub fn from_html(html: &str) -> Result<Self, ListingError> {
        let document = Html::parse_document(html);
        let rows = selector(&format!("table.{} > tbody > tr", FILES_PANEL_CLASS))?;
        let cell = selector("td")?;
        let link = selector("a")?;

        let mut listing = Self::default();
        for row in document.select(&rows) {
            if has_class(&row, PARENTDIR_ROW_CLASS) {
                continue;
            }
            let name = match row
                .select(&cell)
                .next()
                .and_then(|first_cell| first_cell.select(&link).next())
            {
                Some(anchor) => anchor.text().collect::<String>(),
                None => continue,
            };
            if name.is_empty() {
                continue;
            }

            if has_class(&row, SUBDIR_ROW_CLASS) {
                listing.folders.insert(name);
            } else {
                listing.files.insert(name);
            }
        }

        Ok(listing)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    pub fn has_folder(&self, name: &str) -> bool {
        self.folders.contains(name)
    }
}

fn selector(value: &str) -> Result<Selector, ListingError> {
    Selector::parse(value).map_err(|error| ListingError::Selector(value.to_string(), error.to_string()))
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().any(|value| value == class))
        .unwrap_or(false)
}

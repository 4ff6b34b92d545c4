use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Only the fields given are matched; with neither, every book matches.
#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn by_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: None,
        }
    }

    pub fn by_author(author: &str) -> Self {
        Self {
            title: None,
            author: Some(author.to_string()),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match (&req.title, &req.author) {
            (Some(title), None) => self.catalog_service.search_by_title(title.as_str())?,
            (None, Some(author)) => self.catalog_service.search_by_author(author.as_str())?,
            (Some(title), Some(author)) => {
                let by_author: HashSet<String> = self.catalog_service.search_by_author(author.as_str())?
                    .into_iter().map(|b| b.isbn).collect();
                self.catalog_service.search_by_title(title.as_str())?
                    .into_iter().filter(|b| by_author.contains(b.isbn.as_str())).collect()
            }
            (None, None) => self.catalog_service.list_books()?,
        };
        Ok(SearchBooksCommandResponse::new(books))
    }
}

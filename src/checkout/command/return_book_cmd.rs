use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::PatronDto;

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub patron_id: String,
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
    pub patron: PatronDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto, patron: PatronDto) -> Self {
        Self {
            book,
            patron,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let book = self.catalog_service.return_book(req.patron_id.as_str(), req.isbn.as_str())?;
        let patron = self.catalog_service.get_patron(req.patron_id.as_str())?;
        Ok(ReturnBookCommandResponse::new(book, patron))
    }
}

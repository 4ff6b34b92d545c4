use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::PatronDto;

pub struct BorrowBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub patron_id: String,
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
    pub patron: PatronDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto, patron: PatronDto) -> Self {
        Self {
            book,
            patron,
        }
    }
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let book = self.catalog_service.borrow_book(req.patron_id.as_str(), req.isbn.as_str())?;
        let patron = self.catalog_service.get_patron(req.patron_id.as_str())?;
        Ok(BorrowBookCommandResponse::new(book, patron))
    }
}

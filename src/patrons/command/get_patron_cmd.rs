use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::PatronDto;

pub struct GetPatronCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> GetPatronCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronCommandRequest {
    pub patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}


// The patron together with the books they currently hold
#[derive(Debug, Serialize)]
pub struct GetPatronCommandResponse {
    pub patron: PatronDto,
    pub books: Vec<BookDto>,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto, books: Vec<BookDto>) -> Self {
        Self {
            patron,
            books,
        }
    }
}

impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand<'_> {
    fn execute(&mut self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        let patron = self.catalog_service.get_patron(req.patron_id.as_str())?;
        let books = self.catalog_service.borrowed_by(req.patron_id.as_str())?;
        Ok(GetPatronCommandResponse::new(patron, books))
    }
}

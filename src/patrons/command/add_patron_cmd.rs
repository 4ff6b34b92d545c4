use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::patrons::dto::PatronDto;

pub struct AddPatronCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddPatronCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub patron_id: String,
    pub name: String,
}

impl AddPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
        }
    }
    pub fn build_patron(&self) -> PatronDto {
        PatronDto::new(self.patron_id.as_str(), self.name.as_str())
    }
}


#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub patron: PatronDto,
}

impl AddPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand<'_> {
    fn execute(&mut self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        self.catalog_service.add_patron(&req.build_patron()).map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}

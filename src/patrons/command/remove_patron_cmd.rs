use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemovePatronCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemovePatronCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemovePatronCommandRequest {
    pub patron_id: String,
}

impl RemovePatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemovePatronCommandResponse {
    pub patron_id: String,
}

impl RemovePatronCommandResponse {
    pub fn new(patron_id: String) -> Self {
        Self {
            patron_id,
        }
    }
}

impl Command<RemovePatronCommandRequest, RemovePatronCommandResponse> for RemovePatronCommand<'_> {
    fn execute(&mut self, req: RemovePatronCommandRequest) -> Result<RemovePatronCommandResponse, CommandError> {
        self.catalog_service.remove_patron(req.patron_id.as_str())
            .map_err(CommandError::from).map(|_| RemovePatronCommandResponse::new(req.patron_id))
    }
}

use crate::books::factory::create_book_repository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::patrons::factory::create_patron_repository;

pub fn create_catalog_service(config: &Configuration, via: GatewayPublisherVia) -> Box<dyn CatalogService> {
    let book_repo = create_book_repository();
    let patron_repo = create_patron_repository();
    let publisher = create_publisher(via);
    Box::new(CatalogServiceImpl::new(config, book_repo, patron_repo, publisher))
}

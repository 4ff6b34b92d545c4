pub mod events;
pub mod factory;
pub mod logs {
    pub mod publisher;
}
pub mod memory {
    pub mod publisher;
}

// GatewayPublisherVia selects where catalog events go
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

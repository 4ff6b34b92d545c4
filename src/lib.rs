//! In-memory library catalog: books, patrons and the loans between them.

pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command;
    pub mod domain;
    pub mod factory;
    pub mod listing;
    pub mod shared;
}

pub mod checkout;
pub mod gateway;
pub mod patrons;

pub mod utils {
    pub mod date;
    pub mod logs;
}

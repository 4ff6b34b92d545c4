use crate::core::domain::Identifiable;

pub mod model;

// Book is the read view shared by stored books and the copies handed to callers
pub trait Book: Identifiable {
    fn isbn(&self) -> &str;
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn is_available(&self) -> bool;
}

//! Представления состояния для слоя отображения.
//!
//! - DTO (dto.rs) – сериализуемые снимки рук, игрока и дилера;
//! - запросы (queries.rs) – только чтение, собирают DTO из доменных объектов.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;

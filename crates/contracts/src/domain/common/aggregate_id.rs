use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> uuid::Uuid;

    fn from_uuid(value: uuid::Uuid) -> Self;

    fn new_v4() -> Self {
        Self::from_uuid(uuid::Uuid::new_v4())
    }

    /// Преобразовать ID в строку (так он хранится в БД)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self::from_uuid)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Declares a `Uuid` newtype id implementing [`AggregateId`].
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> uuid::Uuid {
                self.0
            }

            fn from_uuid(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

//! Core data model for the backoffice console.
//!
//! This crate defines the identifier newtypes and the generic record shape
//! shared by the collection view engine and the access resolver:
//! - [`RoleId`], [`ProjectId`], [`FieldName`]: validated string identifiers
//! - [`Record`], [`FieldValue`]: an opaque key/value row as delivered by the
//!   REST backend, with lenient text coercion for search

pub mod error;
pub mod ids;
pub mod record;

pub use error::{ModelError, Result};
pub use ids::{FieldName, ProjectId, RoleId};
pub use record::{FieldValue, Record};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_id_rejects_blank() {
        assert!(RoleId::new("   ").is_err());
        assert!(RoleId::new("").is_err());
    }

    #[test]
    fn role_id_trims_whitespace() {
        let role = RoleId::new(" ADMIN ").expect("valid role id");
        assert_eq!(role.as_str(), "ADMIN");
    }

    #[test]
    fn record_search_text_treats_missing_as_empty() {
        let record = Record::new();
        let field = FieldName::new("nombre").expect("valid field name");
        assert_eq!(record.search_text(&field), "");
    }
}

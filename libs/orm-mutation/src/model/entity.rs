// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::attribute::AttributeMapping;

/// Persistence-side view of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPersister {
    entity_name: String,
    has_collections: bool,
}

impl EntityPersister {
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Whether any attribute of the entity is collection-valued
    pub fn has_collections(&self) -> bool {
        self.has_collections
    }
}

/// Runtime descriptor of a persistent entity. Built once while creating the mapping model and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMappingType {
    entity_name: String,
    table_name: String,
    identifier_columns: Vec<String>,
    /// In declaration order
    attribute_mappings: Vec<AttributeMapping>,
    persister: EntityPersister,
}

impl EntityMappingType {
    pub fn new(
        entity_name: impl Into<String>,
        table_name: impl Into<String>,
        identifier_columns: Vec<String>,
        attribute_mappings: Vec<AttributeMapping>,
    ) -> Self {
        let entity_name = entity_name.into();
        let persister = EntityPersister {
            entity_name: entity_name.clone(),
            has_collections: attribute_mappings
                .iter()
                .any(|attribute| matches!(attribute, AttributeMapping::Plural(_))),
        };

        Self {
            entity_name,
            table_name: table_name.into(),
            identifier_columns,
            attribute_mappings,
            persister,
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// The root table of the entity (the table holding the identifier)
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn identifier_columns(&self) -> &[String] {
        &self.identifier_columns
    }

    pub fn entity_persister(&self) -> &EntityPersister {
        &self.persister
    }

    pub fn attribute_mappings(&self) -> &[AttributeMapping] {
        &self.attribute_mappings
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{BasicAttributeMapping, PluralAttributeMapping};

    use super::*;

    #[test]
    fn persister_reports_collections() {
        let street = AttributeMapping::Basic(BasicAttributeMapping {
            name: "street".into(),
            column: "street".into(),
        });
        let address = EntityMappingType::new("Address", "addresses", vec!["id".into()], vec![
            street.clone(),
        ]);
        let person = EntityMappingType::new("Person", "people", vec!["id".into()], vec![
            street,
            AttributeMapping::Plural(PluralAttributeMapping::one_to_many(
                "orders",
                vec!["person_id".into()],
            )),
        ]);

        assert!(!address.entity_persister().has_collections());
        assert!(person.entity_persister().has_collections());
        assert_eq!(person.entity_persister().entity_name(), "Person");
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// One persistent attribute of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMapping {
    Basic(BasicAttributeMapping),
    Embedded(EmbeddedAttributeMapping),
    ToOne(ToOneAttributeMapping),
    Plural(PluralAttributeMapping),
}

impl AttributeMapping {
    pub fn name(&self) -> &str {
        match self {
            AttributeMapping::Basic(attribute) => &attribute.name,
            AttributeMapping::Embedded(attribute) => &attribute.name,
            AttributeMapping::ToOne(attribute) => &attribute.name,
            AttributeMapping::Plural(attribute) => attribute.name(),
        }
    }

    pub fn as_plural(&self) -> Option<&PluralAttributeMapping> {
        match self {
            AttributeMapping::Plural(attribute) => Some(attribute),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicAttributeMapping {
    pub name: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedAttributeMapping {
    pub name: String,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToOneAttributeMapping {
    pub name: String,
    pub target_entity: String,
    pub foreign_key_columns: Vec<String>,
}

/// How the rows of a collection are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionNature {
    /// Values (basic or embeddable) in a table of their own
    ElementCollection,
    /// Links to other entities through a join table
    ManyToMany,
    /// Other entities pointing back at the owner through a foreign key in their own table
    OneToMany,
}

/// A collection-valued attribute.
///
/// The constructors keep the separate collection table consistent with the collection's nature:
/// element collections and many-to-many associations always have one, one-to-many associations
/// never do.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralAttributeMapping {
    name: String,
    nature: CollectionNature,
    separate_collection_table: Option<String>,
    /// Columns referring to the owner's identifier. They live in the collection table when there
    /// is one, and in the associated entity's table for one-to-many.
    key_columns: Vec<String>,
}

impl PluralAttributeMapping {
    pub fn element_collection(
        name: impl Into<String>,
        collection_table: impl Into<String>,
        key_columns: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            nature: CollectionNature::ElementCollection,
            separate_collection_table: Some(collection_table.into()),
            key_columns,
        }
    }

    pub fn many_to_many(
        name: impl Into<String>,
        join_table: impl Into<String>,
        key_columns: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            nature: CollectionNature::ManyToMany,
            separate_collection_table: Some(join_table.into()),
            key_columns,
        }
    }

    pub fn one_to_many(name: impl Into<String>, foreign_key_columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            nature: CollectionNature::OneToMany,
            separate_collection_table: None,
            key_columns: foreign_key_columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nature(&self) -> CollectionNature {
        self.nature
    }

    pub fn separate_collection_table(&self) -> Option<&str> {
        self.separate_collection_table.as_deref()
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }
}

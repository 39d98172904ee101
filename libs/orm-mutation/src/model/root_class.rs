// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Bootstrap descriptor of the root class of an entity hierarchy, as read from the mapping
/// sources before the runtime model exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootClass {
    entity_name: String,
    table_name: String,
    subclass_names: Vec<String>,
}

impl RootClass {
    pub fn new(entity_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            table_name: table_name.into(),
            subclass_names: vec![],
        }
    }

    pub fn with_subclass(mut self, subclass_name: impl Into<String>) -> Self {
        self.subclass_names.push(subclass_name.into());
        self
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn subclass_names(&self) -> &[String] {
        &self.subclass_names
    }
}

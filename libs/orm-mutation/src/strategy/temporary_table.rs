// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    model::EntityMappingType,
    sql::{
        column::Column, parameter::Parameter, predicate::ConcretePredicate, select::Select,
        table_reference::TableReference,
    },
};

use super::{MultiTableMutationStrategy, MutationStrategyKind};

pub const DEFAULT_ID_TABLE_PREFIX: &str = "ht_";

/// Collects the identifiers of matched owners into a temporary table named after the root table
/// of the hierarchy (`ht_people` for `people` with the default prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryTableStrategy {
    id_table_prefix: String,
}

impl TemporaryTableStrategy {
    pub fn new(id_table_prefix: impl Into<String>) -> Self {
        Self {
            id_table_prefix: id_table_prefix.into(),
        }
    }

    pub fn id_table_name(&self, entity: &EntityMappingType) -> String {
        format!("{}{}", self.id_table_prefix, entity.table_name())
    }
}

impl Default for TemporaryTableStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_ID_TABLE_PREFIX)
    }
}

impl MultiTableMutationStrategy for TemporaryTableStrategy {
    fn kind(&self) -> MutationStrategyKind {
        MutationStrategyKind::TemporaryTable
    }

    fn matching_owner_ids(
        &self,
        entity: &EntityMappingType,
        _id_parameters: &[Parameter],
    ) -> Column {
        let id_table = TableReference::new(self.id_table_name(entity), None, false);

        Column::SubSelect(Box::new(Select::new(
            entity
                .identifier_columns()
                .iter()
                .map(|column| id_table.column(column.as_str()))
                .collect(),
            id_table,
            ConcretePredicate::True,
        )))
    }
}

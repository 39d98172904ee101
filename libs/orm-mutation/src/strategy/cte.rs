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

pub const DEFAULT_CTE_PREFIX: &str = "cte_";

/// Selects the matched owners in a common table expression prepended to each statement of the
/// mutation. Statements refer to the CTE by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CteStrategy {
    cte_prefix: String,
}

impl CteStrategy {
    pub fn new(cte_prefix: impl Into<String>) -> Self {
        Self {
            cte_prefix: cte_prefix.into(),
        }
    }

    pub fn cte_name(&self, entity: &EntityMappingType) -> String {
        format!("{}{}", self.cte_prefix, entity.table_name())
    }
}

impl Default for CteStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_CTE_PREFIX)
    }
}

impl MultiTableMutationStrategy for CteStrategy {
    fn kind(&self) -> MutationStrategyKind {
        MutationStrategyKind::Cte
    }

    fn matching_owner_ids(
        &self,
        entity: &EntityMappingType,
        _id_parameters: &[Parameter],
    ) -> Column {
        let cte = TableReference::new(self.cte_name(entity), None, false);

        Column::SubSelect(Box::new(Select::new(
            entity
                .identifier_columns()
                .iter()
                .map(|column| cte.column(column.as_str()))
                .collect(),
            cte,
            ConcretePredicate::True,
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::sql::ExpressionBuilder;

    use super::*;

    #[test]
    fn selects_composite_ids_from_cte() {
        let entity = EntityMappingType::new(
            "Order",
            "orders",
            vec!["region".into(), "number".into()],
            vec![],
        );

        assert_binding!(
            CteStrategy::default().matching_owner_ids(&entity, &[]).to_sql(),
            r#"(SELECT "cte_orders"."region", "cte_orders"."number" FROM "cte_orders")"#
        );
    }
}

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
    sql::{column::Column, parameter::Parameter},
};

use super::{MultiTableMutationStrategy, MutationStrategyKind};

/// Lists the identifiers of matched owners directly in each statement. Needs no temporary tables
/// or CTE support, at the cost of one placeholder per identifier column per owner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InlineStrategy;

impl MultiTableMutationStrategy for InlineStrategy {
    fn kind(&self) -> MutationStrategyKind {
        MutationStrategyKind::Inline
    }

    /// Groups `id_parameters` by identifier width, so `[a1, b1, a2, b2]` becomes
    /// `((a1, b1), (a2, b2))` for a two-column identifier. `id_parameters` must hold whole
    /// identifiers; [`owner_key_restriction`](super::owner_key_restriction) rejects anything else.
    fn matching_owner_ids(&self, entity: &EntityMappingType, id_parameters: &[Parameter]) -> Column {
        let width = entity.identifier_columns().len().max(1);

        Column::List(
            id_parameters
                .chunks_exact(width)
                .map(|id| Column::tuple(id.iter().copied().map(Column::Param).collect()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::sql::ExpressionBuilder;

    use super::*;

    #[test]
    fn lists_single_column_ids() {
        let entity = EntityMappingType::new("Person", "people", vec!["id".into()], vec![]);
        let (p1, p2) = (Parameter::new(), Parameter::new());

        assert_binding!(
            InlineStrategy.matching_owner_ids(&entity, &[p1, p2]).to_sql(),
            "($1, $2)",
            p1,
            p2
        );
    }

    #[test]
    fn groups_composite_ids() {
        let entity = EntityMappingType::new(
            "Order",
            "orders",
            vec!["region".into(), "number".into()],
            vec![],
        );
        let params: Vec<_> = (0..4).map(|_| Parameter::new()).collect();

        assert_binding!(
            InlineStrategy.matching_owner_ids(&entity, &params).to_sql(),
            "(($1, $2), ($3, $4))",
            params[0],
            params[1],
            params[2],
            params[3]
        );
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Algorithms for executing a delete (or update) whose target spans more than one table.
//!
//! A strategy is chosen once per entity hierarchy (see
//! [`resolve_strategy`](crate::resolve_strategy)) and lives as long as the session factory. Its
//! role here is to describe which owners a running mutation matched, so that auxiliary rows
//! (such as collection tables) can be restricted to those owners.

mod cte;
mod inline;
mod restriction;
mod temporary_table;

use std::{fmt::Display, str::FromStr, sync::Arc};

pub use cte::{CteStrategy, DEFAULT_CTE_PREFIX};
pub use inline::InlineStrategy;
pub use restriction::owner_key_restriction;
pub use temporary_table::{DEFAULT_ID_TABLE_PREFIX, TemporaryTableStrategy};

use crate::{model::EntityMappingType, sql::column::Column, sql::parameter::Parameter};

pub trait MultiTableMutationStrategy: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> MutationStrategyKind;

    /// An expression yielding the identifiers of the owners matched by the running mutation, to be
    /// used as the right-hand side of an `IN`.
    ///
    /// `id_parameters` are placeholders bound to the matched identifiers (one per identifier
    /// column per owner). Only strategies that restrict inline consult them.
    fn matching_owner_ids(
        &self,
        entity: &EntityMappingType,
        id_parameters: &[Parameter],
    ) -> Column;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStrategyKind {
    /// Matched identifiers are collected into a temporary id table
    TemporaryTable,
    /// Matched identifiers are selected by a common table expression
    Cte,
    /// Matched identifiers are listed in the statements themselves
    Inline,
}

impl MutationStrategyKind {
    /// Create the built-in strategy of this kind. The prefix only applies to temporary tables.
    pub fn create(self, id_table_prefix: &str) -> Arc<dyn MultiTableMutationStrategy> {
        match self {
            MutationStrategyKind::TemporaryTable => {
                Arc::new(TemporaryTableStrategy::new(id_table_prefix))
            }
            MutationStrategyKind::Cte => Arc::new(CteStrategy::default()),
            MutationStrategyKind::Inline => Arc::new(InlineStrategy),
        }
    }
}

impl FromStr for MutationStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temp-table" | "temporary-table" | "temp_table" => {
                Ok(MutationStrategyKind::TemporaryTable)
            }
            "cte" => Ok(MutationStrategyKind::Cte),
            "inline" => Ok(MutationStrategyKind::Inline),
            _ => Err(format!(
                "unknown mutation strategy '{s}' (expected one of temp-table, cte, inline)"
            )),
        }
    }
}

impl Display for MutationStrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationStrategyKind::TemporaryTable => "temp-table",
            MutationStrategyKind::Cte => "cte",
            MutationStrategyKind::Inline => "inline",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_names() {
        assert_eq!(
            "Temp-Table".parse::<MutationStrategyKind>(),
            Ok(MutationStrategyKind::TemporaryTable)
        );
        assert_eq!("cte".parse::<MutationStrategyKind>(), Ok(MutationStrategyKind::Cte));
        assert_eq!("inline".parse::<MutationStrategyKind>(), Ok(MutationStrategyKind::Inline));
        assert!("subselect".parse::<MutationStrategyKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in [
            MutationStrategyKind::TemporaryTable,
            MutationStrategyKind::Cte,
            MutationStrategyKind::Inline,
        ] {
            assert_eq!(kind.to_string().parse::<MutationStrategyKind>(), Ok(kind));
            assert_eq!(kind.create("ht_").kind(), kind);
        }
    }
}

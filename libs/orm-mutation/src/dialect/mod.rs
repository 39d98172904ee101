// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Database-capability descriptors.

mod postgres;
mod standard;

use std::sync::Arc;

use tracing::debug;

pub use postgres::PostgresDialect;
pub use standard::StandardDialect;

use crate::{
    model::EntityMappingType,
    runtime::RuntimeModelCreationContext,
    strategy::{MultiTableMutationStrategy, MutationStrategyKind},
    translate::{SqlAstTranslatorFactory, StandardSqlAstTranslatorFactory},
};

/// What a database can do that matters to multi-table mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialectCapabilities {
    /// Session-local temporary tables can be created and queried
    pub temporary_tables: bool,
    /// Data-modifying statements are allowed inside `WITH`
    pub mutating_ctes: bool,
    /// `(a, b) IN (SELECT x, y ...)` is supported
    pub row_value_constructors: bool,
}

pub trait Dialect: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> DialectCapabilities;

    /// The strategy to use for a hierarchy when none was configured explicitly. Never absent: a
    /// dialect must always be able to fall back to something.
    fn fallback_mutation_strategy(
        &self,
        root_entity_descriptor: &EntityMappingType,
        creation_context: &RuntimeModelCreationContext,
    ) -> Arc<dyn MultiTableMutationStrategy> {
        capability_based_strategy(
            self.capabilities(),
            root_entity_descriptor,
            creation_context,
        )
    }

    fn sql_ast_translator_factory(&self) -> Arc<dyn SqlAstTranslatorFactory> {
        Arc::new(StandardSqlAstTranslatorFactory)
    }
}

/// Pick the cheapest strategy the capabilities allow: a CTE when mutating CTEs are available (and
/// composite identifiers can be compared as row values), then a temporary id table, and inline
/// identifier lists as the last resort.
pub fn capability_based_strategy(
    capabilities: DialectCapabilities,
    root_entity_descriptor: &EntityMappingType,
    creation_context: &RuntimeModelCreationContext,
) -> Arc<dyn MultiTableMutationStrategy> {
    let composite_id = root_entity_descriptor.identifier_columns().len() > 1;

    let kind = if capabilities.mutating_ctes && (!composite_id || capabilities.row_value_constructors)
    {
        MutationStrategyKind::Cte
    } else if capabilities.temporary_tables {
        MutationStrategyKind::TemporaryTable
    } else {
        MutationStrategyKind::Inline
    };

    debug!(
        "Falling back to the {kind} mutation strategy for {}",
        root_entity_descriptor.entity_name()
    );

    kind.create(
        creation_context
            .session_factory()
            .options()
            .id_table_prefix(),
    )
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    model::{EntityMappingType, RootClass},
    runtime::MappingModelCreationProcess,
    strategy::MultiTableMutationStrategy,
};

/// Resolve the strategy used for multi-table mutations against the hierarchy rooted at
/// `root_entity_descriptor`.
///
/// An explicitly configured strategy always wins. Otherwise the dialect supplies its fallback,
/// after inspecting its own capabilities and the shape of the root entity. The resolver neither
/// validates the choice nor touches the database.
///
/// The boot descriptor is accepted so that a strategy can later be selected per hierarchy; it is
/// not consulted yet.
#[instrument(
    name = "resolve_strategy"
    skip_all
    fields(entity = root_entity_descriptor.entity_name())
    )]
pub fn resolve_strategy(
    entity_boot_descriptor: &RootClass,
    root_entity_descriptor: &EntityMappingType,
    creation_process: &MappingModelCreationProcess,
) -> Arc<dyn MultiTableMutationStrategy> {
    let creation_context = creation_process.creation_context();
    let session_factory = creation_context.session_factory();

    if let Some(specified_strategy) = session_factory.options().multi_table_mutation_strategy() {
        debug!(
            "Using configured {} strategy for hierarchy {} rooted at {} ({} subclasses)",
            specified_strategy.kind(),
            entity_boot_descriptor.entity_name(),
            entity_boot_descriptor.table_name(),
            entity_boot_descriptor.subclass_names().len()
        );
        return specified_strategy.clone();
    }

    let dialect = session_factory
        .service_registry()
        .sql_services()
        .environment()
        .dialect();

    let strategy = dialect.fallback_mutation_strategy(root_entity_descriptor, creation_context);
    debug!(
        "Dialect {} chose the {} strategy",
        dialect.name(),
        strategy.kind()
    );

    strategy
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{debug, instrument, warn};

use crate::{
    model::{AttributeMapping, EntityMappingType, PluralAttributeMapping},
    mutation_error::{MutationError, WithContext},
    runtime::ExecutionContext,
    sql::{
        delete::DeleteStatement, parameter::ParameterBindings, predicate::ConcretePredicate,
        table_reference::TableReference,
    },
};

/// Delete the collection-table rows owned by the entities a mutation is removing.
///
/// `restriction_producer` yields, for a collection table and the attribute it backs, the predicate
/// selecting exactly the rows whose owner is being deleted. Its shape depends on the enclosing
/// strategy (a join against an id table, a CTE reference, an inline id list), which keeps this
/// function strategy-agnostic; see [`owner_key_restriction`](crate::owner_key_restriction).
///
/// Collections are visited in declaration order and cleaned one statement at a time on the
/// session's connection, within its current transaction. The first failure is returned and later
/// collections are left untouched. Row counts are not reported: they carry no meaning for the
/// mutation as a whole.
///
/// One-to-many collections (no collection table) are currently skipped, see
/// [`null_out_one_to_many_keys`].
#[instrument(
    name = "clean_up_collection_tables"
    skip_all
    fields(entity = entity_descriptor.entity_name())
    )]
pub fn clean_up_collection_tables<F>(
    entity_descriptor: &EntityMappingType,
    restriction_producer: F,
    parameter_bindings: &ParameterBindings,
    execution_context: &ExecutionContext,
) -> Result<(), MutationError>
where
    F: Fn(&TableReference, &PluralAttributeMapping) -> ConcretePredicate,
{
    if !entity_descriptor.entity_persister().has_collections() {
        // none to clean-up
        return Ok(());
    }

    for plural_attribute in entity_descriptor
        .attribute_mappings()
        .iter()
        .filter_map(AttributeMapping::as_plural)
    {
        clean_up_collection_table(
            plural_attribute,
            entity_descriptor,
            &restriction_producer,
            parameter_bindings,
            execution_context,
        )?;
    }

    Ok(())
}

fn clean_up_collection_table<F>(
    attribute_mapping: &PluralAttributeMapping,
    entity_descriptor: &EntityMappingType,
    restriction_producer: &F,
    parameter_bindings: &ParameterBindings,
    execution_context: &ExecutionContext,
) -> Result<(), MutationError>
where
    F: Fn(&TableReference, &PluralAttributeMapping) -> ConcretePredicate,
{
    let Some(separate_collection_table) = attribute_mapping.separate_collection_table() else {
        null_out_one_to_many_keys(attribute_mapping, entity_descriptor);
        return Ok(());
    };

    // element-collection or many-to-many: delete the collection-table rows
    let session = execution_context.session();
    let sql_services = session.factory().sql_services();

    let table_reference = TableReference::new(separate_collection_table, None, true);
    let restriction = restriction_producer(&table_reference, attribute_mapping);
    let sql_ast_delete = DeleteStatement::new(table_reference, restriction);

    let operation = sql_services
        .environment()
        .sql_ast_translator_factory()
        .build_delete_translator()
        .translate(&sql_ast_delete)?;

    debug!(
        "Cleaning up {}.{} in {separate_collection_table}",
        entity_descriptor.entity_name(),
        attribute_mapping.name()
    );

    let statement_preparer = session.connection_coordinator().statement_preparer();

    sql_services
        .mutation_executor()
        .execute(
            &operation,
            parameter_bindings,
            &|sql: &str| statement_preparer.prepare_statement(sql),
            &|_: u64, _: &str| {},
            execution_context,
        )
        .with_context(format!(
            "Failed to clean up collection table {separate_collection_table} of {}.{}:",
            entity_descriptor.entity_name(),
            attribute_mapping.name()
        ))?;

    Ok(())
}

/// Extension point for one-to-many collections, whose rows live in the associated entity's own
/// table. Cleaning those up means setting the foreign key columns to null (an `UPDATE` restricted
/// like the deletes above, adapted to the associated table). That is not implemented: no SQL is
/// issued, so callers relying on the keys being nulled out must do it themselves.
fn null_out_one_to_many_keys(
    attribute_mapping: &PluralAttributeMapping,
    entity_descriptor: &EntityMappingType,
) {
    warn!(
        "Not nulling out foreign keys {:?} of one-to-many collection {}.{}: unsupported",
        attribute_mapping.key_columns(),
        entity_descriptor.entity_name(),
        attribute_mapping.name()
    );
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{
    model::{AttributeMapping, EntityMappingType, PluralAttributeMapping},
    mutation_error::MutationError,
    sql::{
        column::Column, parameter::Parameter, predicate::ConcretePredicate,
        table_reference::TableReference,
    },
};

use super::MultiTableMutationStrategy;

/// A restriction producer for
/// [`clean_up_collection_tables`](crate::clean_up_collection_tables) that confines each cleanup
/// delete to the owners the strategy matched:
///
/// ```sql
/// "person_roles"."person_id" IN (SELECT "ht_people"."id" FROM "ht_people")
/// ```
///
/// Composite keys are compared as row values. An inline strategy with no matched owners yields
/// `FALSE`, so nothing is deleted.
///
/// Fails with [`MutationError::Config`] when the entity has no identifier columns, when
/// `id_parameters` does not hold whole identifiers, or when a collection table's key columns do
/// not line up with the identifier columns.
pub fn owner_key_restriction<'a>(
    strategy: &'a dyn MultiTableMutationStrategy,
    entity: &'a EntityMappingType,
    id_parameters: &'a [Parameter],
) -> Result<impl Fn(&TableReference, &PluralAttributeMapping) -> ConcretePredicate + 'a, MutationError>
{
    let id_width = entity.identifier_columns().len();

    if id_width == 0 {
        return Err(MutationError::Config(format!(
            "Entity {} has no identifier columns",
            entity.entity_name()
        )));
    }

    if id_parameters.len() % id_width != 0 {
        return Err(MutationError::Config(format!(
            "Expected whole identifiers of {id_width} column(s) for {}, got {} parameter(s)",
            entity.entity_name(),
            id_parameters.len()
        )));
    }

    for attribute in entity
        .attribute_mappings()
        .iter()
        .filter_map(AttributeMapping::as_plural)
        .filter(|attribute| attribute.separate_collection_table().is_some())
    {
        let key_width = attribute.key_columns().len();

        if key_width != id_width {
            return Err(MutationError::Config(format!(
                "Collection {}.{} has {key_width} key column(s) but the owner's identifier has {id_width}",
                entity.entity_name(),
                attribute.name()
            )));
        }
    }

    Ok(
        move |table_reference: &TableReference, attribute: &PluralAttributeMapping| {
            let matching_owner_ids = strategy.matching_owner_ids(entity, id_parameters);

            if matches!(&matching_owner_ids, Column::List(ids) if ids.is_empty()) {
                return ConcretePredicate::False;
            }

            let key = Column::tuple(
                attribute
                    .key_columns()
                    .iter()
                    .map(|column| table_reference.column(column.as_str()))
                    .collect(),
            );

            ConcretePredicate::In(key, matching_owner_ids)
        },
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        sql::ExpressionBuilder,
        strategy::{CteStrategy, InlineStrategy, TemporaryTableStrategy},
    };

    use super::*;

    fn person() -> EntityMappingType {
        EntityMappingType::new("Person", "people", vec!["id".into()], vec![])
    }

    fn roles() -> PluralAttributeMapping {
        PluralAttributeMapping::many_to_many("roles", "person_roles", vec!["person_id".into()])
    }

    fn order_with_lines(key_columns: Vec<String>) -> EntityMappingType {
        EntityMappingType::new(
            "Order",
            "orders",
            vec!["region".into(), "number".into()],
            vec![AttributeMapping::Plural(
                PluralAttributeMapping::element_collection("lines", "order_lines", key_columns),
            )],
        )
    }

    #[test]
    fn temporary_table_restriction() {
        let entity = person();
        let strategy = TemporaryTableStrategy::default();
        let producer = owner_key_restriction(&strategy, &entity, &[]).unwrap();
        let table = TableReference::new("person_roles", None, true);

        assert_binding!(
            producer(&table, &roles()).to_sql(),
            r#""person_roles"."person_id" IN (SELECT "ht_people"."id" FROM "ht_people")"#
        );
    }

    #[test]
    fn cte_restriction_with_composite_key() {
        let entity = order_with_lines(vec!["order_region".into(), "order_number".into()]);
        let lines = PluralAttributeMapping::element_collection(
            "lines",
            "order_lines",
            vec!["order_region".into(), "order_number".into()],
        );
        let strategy = CteStrategy::default();
        let producer = owner_key_restriction(&strategy, &entity, &[]).unwrap();
        let table = TableReference::new("order_lines", None, true);

        assert_binding!(
            producer(&table, &lines).to_sql(),
            r#"("order_lines"."order_region", "order_lines"."order_number") IN (SELECT "cte_orders"."region", "cte_orders"."number" FROM "cte_orders")"#
        );
    }

    #[test]
    fn inline_restriction() {
        let entity = person();
        let ids = [Parameter::new(), Parameter::new()];
        let producer = owner_key_restriction(&InlineStrategy, &entity, &ids).unwrap();
        let table = TableReference::new("person_roles", None, true);

        assert_binding!(
            producer(&table, &roles()).to_sql(),
            r#""person_roles"."person_id" IN ($1, $2)"#,
            ids[0],
            ids[1]
        );
    }

    #[test]
    fn inline_restriction_without_owners_matches_nothing() {
        let entity = person();
        let producer = owner_key_restriction(&InlineStrategy, &entity, &[]).unwrap();
        let table = TableReference::new("person_roles", None, true);

        assert_eq!(producer(&table, &roles()), ConcretePredicate::False);
    }

    #[test]
    fn partial_composite_identifier_is_rejected() {
        let entity = order_with_lines(vec!["order_region".into(), "order_number".into()]);
        let ids = [Parameter::new(), Parameter::new(), Parameter::new()];

        assert!(matches!(
            owner_key_restriction(&InlineStrategy, &entity, &ids),
            Err(MutationError::Config(_))
        ));
    }

    #[test]
    fn collection_without_key_columns_is_rejected() {
        let entity = EntityMappingType::new("Person", "people", vec!["id".into()], vec![
            AttributeMapping::Plural(PluralAttributeMapping::many_to_many(
                "roles",
                "person_roles",
                vec![],
            )),
        ]);
        let strategy = TemporaryTableStrategy::default();

        match owner_key_restriction(&strategy, &entity, &[]) {
            Err(MutationError::Config(message)) => assert!(message.contains("Person.roles")),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn key_narrower_than_composite_identifier_is_rejected() {
        let entity = order_with_lines(vec!["order_id".into()]);
        let strategy = TemporaryTableStrategy::default();

        assert!(matches!(
            owner_key_restriction(&strategy, &entity, &[]),
            Err(MutationError::Config(_))
        ));
    }

    #[test]
    fn one_to_many_keys_are_not_checked() {
        let entity = EntityMappingType::new("Person", "people", vec!["id".into()], vec![
            AttributeMapping::Plural(PluralAttributeMapping::one_to_many("orders", vec![])),
        ]);

        assert!(owner_key_restriction(&InlineStrategy, &entity, &[]).is_ok());
    }

    #[test]
    fn entity_without_identifier_is_rejected() {
        let entity = EntityMappingType::new("Audit", "audits", vec![], vec![]);

        assert!(matches!(
            owner_key_restriction(&InlineStrategy, &entity, &[]),
            Err(MutationError::Config(_))
        ));
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![cfg(test)]

use std::sync::{Arc, Mutex};

use tokio_postgres::types::ToSql;

use crate::{
    dialect::{Dialect, PostgresDialect},
    model::{
        AttributeMapping, BasicAttributeMapping, EmbeddedAttributeMapping, EntityMappingType,
        PluralAttributeMapping, ToOneAttributeMapping,
    },
    mutation_error::MutationError,
    runtime::{
        MappingModelCreationProcess, PreparedStatement, ServiceRegistry, Session, SessionFactory,
        SessionFactoryOptions, SqlEnvironment, SqlServices, StandardMutationExecutor,
        StatementPreparer,
    },
};

pub struct TestSetup {
    /// `people`: a name, an embedded contact, an address, and three collections (nicknames as an
    /// element collection, roles as many-to-many, orders as one-to-many), in that order
    pub person: EntityMappingType,
    /// `addresses`: no collections
    pub address: EntityMappingType,
    /// `orders`: composite identifier with an element collection of lines
    pub order: EntityMappingType,

    pub preparer: Arc<RecordingStatementPreparer>,
    pub session_factory: Arc<SessionFactory>,
    pub creation_process: MappingModelCreationProcess,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with(SessionFactoryOptions::default(), Arc::new(PostgresDialect))
    }

    pub fn with(options: SessionFactoryOptions, dialect: Arc<dyn Dialect>) -> Self {
        let sql_services = SqlServices::new(
            SqlEnvironment::new(dialect),
            Arc::new(StandardMutationExecutor),
        );
        let session_factory = Arc::new(SessionFactory::new(
            options,
            ServiceRegistry::new(sql_services),
        ));

        Self {
            person: person(),
            address: address(),
            order: order(),
            preparer: Arc::new(RecordingStatementPreparer::default()),
            creation_process: MappingModelCreationProcess::new(session_factory.clone()),
            session_factory,
        }
    }

    pub fn open_session(&self) -> Session {
        self.session_factory.open_session(self.preparer.clone())
    }
}

fn basic(name: &str) -> AttributeMapping {
    AttributeMapping::Basic(BasicAttributeMapping {
        name: name.into(),
        column: name.into(),
    })
}

fn person() -> EntityMappingType {
    EntityMappingType::new(
        "Person",
        "people",
        vec!["id".into()],
        vec![
            basic("name"),
            AttributeMapping::Embedded(EmbeddedAttributeMapping {
                name: "contact".into(),
                columns: vec!["email".into(), "phone".into()],
            }),
            AttributeMapping::ToOne(ToOneAttributeMapping {
                name: "address".into(),
                target_entity: "Address".into(),
                foreign_key_columns: vec!["address_id".into()],
            }),
            AttributeMapping::Plural(PluralAttributeMapping::element_collection(
                "nicknames",
                "person_nicknames",
                vec!["person_id".into()],
            )),
            AttributeMapping::Plural(PluralAttributeMapping::many_to_many(
                "roles",
                "person_roles",
                vec!["person_id".into()],
            )),
            AttributeMapping::Plural(PluralAttributeMapping::one_to_many(
                "orders",
                vec!["person_id".into()],
            )),
        ],
    )
}

fn address() -> EntityMappingType {
    EntityMappingType::new(
        "Address",
        "addresses",
        vec!["id".into()],
        vec![basic("street"), basic("city")],
    )
}

fn order() -> EntityMappingType {
    EntityMappingType::new(
        "Order",
        "orders",
        vec!["region".into(), "number".into()],
        vec![
            basic("placed_at"),
            AttributeMapping::Plural(PluralAttributeMapping::element_collection(
                "lines",
                "order_lines",
                vec!["order_region".into(), "order_number".into()],
            )),
        ],
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    pub sql: String,
    /// Debug rendering of each bound value
    pub params: Vec<String>,
}

/// Stands in for a connection: records every executed statement and reports a fixed row count.
#[derive(Default)]
pub struct RecordingStatementPreparer {
    executed: Mutex<Vec<ExecutedStatement>>,
    failing_table: Mutex<Option<String>>,
}

impl RecordingStatementPreparer {
    pub const ROWS_PER_STATEMENT: u64 = 3;

    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.executed.lock().unwrap().clone()
    }

    pub fn executed_sql(&self) -> Vec<String> {
        self.executed().into_iter().map(|s| s.sql).collect()
    }

    /// Make statements touching `table` fail as a constraint violation would.
    pub fn fail_on(&self, table: &str) {
        *self.failing_table.lock().unwrap() = Some(table.to_string());
    }
}

impl StatementPreparer for RecordingStatementPreparer {
    fn prepare_statement(
        &self,
        sql: &str,
    ) -> Result<Box<dyn PreparedStatement + '_>, MutationError> {
        Ok(Box::new(RecordingPreparedStatement {
            preparer: self,
            sql: sql.to_string(),
        }))
    }
}

struct RecordingPreparedStatement<'a> {
    preparer: &'a RecordingStatementPreparer,
    sql: String,
}

impl PreparedStatement for RecordingPreparedStatement<'_> {
    fn execute_update(&mut self, params: &[&(dyn ToSql + Sync)]) -> Result<u64, MutationError> {
        if let Some(table) = self.preparer.failing_table.lock().unwrap().as_deref()
            && self.sql.contains(&format!(r#""{table}""#))
        {
            return Err(MutationError::Execution(format!(
                "update or delete on table \"{table}\" violates a foreign key constraint"
            )));
        }

        self.preparer
            .executed
            .lock()
            .unwrap()
            .push(ExecutedStatement {
                sql: self.sql.clone(),
                params: params.iter().map(|p| format!("{p:?}")).collect(),
            });

        Ok(RecordingStatementPreparer::ROWS_PER_STATEMENT)
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio_postgres::types::ToSql;
use tracing::{debug, error, instrument};

use crate::{
    mutation_error::{MutationError, WithContext},
    sql::{
        SQLParamContainer,
        parameter::{ParameterBindings, StatementParameter},
    },
    translate::MutationOperation,
};

use super::session::ExecutionContext;

/// A statement prepared on a connection, ready to be executed with positional parameters.
pub trait PreparedStatement {
    /// Execute the statement and return the number of affected rows.
    fn execute_update(&mut self, params: &[&(dyn ToSql + Sync)]) -> Result<u64, MutationError>;
}

pub trait StatementPreparer: Send + Sync {
    fn prepare_statement(
        &self,
        sql: &str,
    ) -> Result<Box<dyn PreparedStatement + '_>, MutationError>;
}

/// Executes translated mutations.
pub trait MutationExecutor: Send + Sync {
    /// Bind `parameter_bindings` to the operation's placeholders, prepare the statement through
    /// `statement_creator`, execute it, and report the affected row count to `result_handler`
    /// before returning it.
    fn execute<'c>(
        &self,
        operation: &MutationOperation,
        parameter_bindings: &ParameterBindings,
        statement_creator: &dyn Fn(&str) -> Result<Box<dyn PreparedStatement + 'c>, MutationError>,
        result_handler: &dyn Fn(u64, &str),
        execution_context: &ExecutionContext,
    ) -> Result<u64, MutationError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMutationExecutor;

impl MutationExecutor for StandardMutationExecutor {
    #[instrument(
        name = "StandardMutationExecutor::execute"
        level = "debug"
        skip_all
        fields(
            session = execution_context.session().id(),
            tables = ?operation.affected_tables()
            )
        )]
    fn execute<'c>(
        &self,
        operation: &MutationOperation,
        parameter_bindings: &ParameterBindings,
        statement_creator: &dyn Fn(&str) -> Result<Box<dyn PreparedStatement + 'c>, MutationError>,
        result_handler: &dyn Fn(u64, &str),
        execution_context: &ExecutionContext,
    ) -> Result<u64, MutationError> {
        let values = operation
            .parameters()
            .iter()
            .map(|parameter| match parameter {
                StatementParameter::Placeholder(placeholder) => parameter_bindings
                    .get(placeholder)
                    .ok_or_else(|| MutationError::MissingBinding(placeholder.to_string())),
                StatementParameter::Literal(value) => Ok(value),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let params: Vec<&(dyn ToSql + Sync)> = values
            .iter()
            .map(|value| SQLParamContainer::as_pg(value))
            .collect();

        debug!("Executing SQL operation: {}", operation.sql());

        let mut statement = statement_creator(operation.sql())?;
        let row_count = statement
            .execute_update(&params)
            .inspect_err(|e| error!("Failed to execute mutation: {e:?}"))
            .with_context("Database operation failed".into())?;

        result_handler(row_count, operation.sql());

        Ok(row_count)
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Mutex, MutexGuard};

use postgres::{Client, Statement};
use tokio_postgres::types::ToSql;

use crate::mutation_error::MutationError;

use super::executor::{PreparedStatement, StatementPreparer};

/// Prepares statements on a blocking Postgres connection. Statements are executed in whatever
/// transaction the connection currently has open.
pub struct PostgresStatementPreparer {
    client: Mutex<Client>,
}

impl PostgresStatementPreparer {
    pub fn new(client: Client) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }
}

struct PostgresPreparedStatement<'a> {
    client: MutexGuard<'a, Client>,
    statement: Statement,
}

impl StatementPreparer for PostgresStatementPreparer {
    fn prepare_statement(
        &self,
        sql: &str,
    ) -> Result<Box<dyn PreparedStatement + '_>, MutationError> {
        let mut client = self
            .client
            .lock()
            .map_err(|_| MutationError::Execution("Connection lock poisoned".into()))?;
        let statement = client.prepare(sql)?;

        Ok(Box::new(PostgresPreparedStatement { client, statement }))
    }
}

impl PreparedStatement for PostgresPreparedStatement<'_> {
    fn execute_update(&mut self, params: &[&(dyn ToSql + Sync)]) -> Result<u64, MutationError> {
        Ok(self.client.execute(&self.statement, params)?)
    }
}

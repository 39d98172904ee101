// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Translation of SQL AST statements into executable operations.

mod standard;

pub use standard::{StandardDeleteTranslator, StandardSqlAstTranslatorFactory};

use crate::{
    mutation_error::MutationError,
    sql::{delete::DeleteStatement, parameter::StatementParameter},
};

/// Produces translators for a particular dialect.
pub trait SqlAstTranslatorFactory: Send + Sync {
    fn build_delete_translator(&self) -> Box<dyn DeleteTranslator>;
}

pub trait DeleteTranslator {
    fn translate(&self, statement: &DeleteStatement) -> Result<MutationOperation, MutationError>;
}

/// A rendered mutation, ready to be handed to a
/// [`MutationExecutor`](crate::runtime::MutationExecutor).
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOperation {
    sql: String,
    parameters: Vec<StatementParameter>,
    affected_tables: Vec<String>,
}

impl MutationOperation {
    pub fn new(
        sql: String,
        parameters: Vec<StatementParameter>,
        affected_tables: Vec<String>,
    ) -> Self {
        Self {
            sql,
            parameters,
            affected_tables,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters in placeholder order (`$1` first)
    pub fn parameters(&self) -> &[StatementParameter] {
        &self.parameters
    }

    pub fn affected_tables(&self) -> &[String] {
        &self.affected_tables
    }
}

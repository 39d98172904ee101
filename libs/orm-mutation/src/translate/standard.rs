// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::trace;

use crate::{
    mutation_error::MutationError,
    sql::{delete::DeleteStatement, ExpressionBuilder},
};

use super::{DeleteTranslator, MutationOperation, SqlAstTranslatorFactory};

/// Translator factory for dialects that accept the standard rendering (double-quoted identifiers,
/// `$n` placeholders).
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardSqlAstTranslatorFactory;

impl SqlAstTranslatorFactory for StandardSqlAstTranslatorFactory {
    fn build_delete_translator(&self) -> Box<dyn DeleteTranslator> {
        Box::new(StandardDeleteTranslator)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDeleteTranslator;

impl DeleteTranslator for StandardDeleteTranslator {
    fn translate(&self, statement: &DeleteStatement) -> Result<MutationOperation, MutationError> {
        let table_expression = statement.target().table_expression();

        if table_expression.trim().is_empty() {
            return Err(MutationError::Translation(
                "Delete statement has no target table".into(),
            ));
        }

        let (sql, parameters) = statement.to_sql();
        trace!("Translated delete: {sql}");

        Ok(MutationOperation::new(
            sql,
            parameters,
            vec![table_expression.to_string()],
        ))
    }
}

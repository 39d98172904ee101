// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{column::Column, ExpressionBuilder, SQLBuilder};

/// A single physical table as it appears in a statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TableReference {
    table_expression: String,
    identification_variable: Option<String>,
    optional: bool,
}

impl TableReference {
    pub fn new(
        table_expression: impl Into<String>,
        identification_variable: Option<String>,
        optional: bool,
    ) -> Self {
        Self {
            table_expression: table_expression.into(),
            identification_variable,
            optional,
        }
    }

    pub fn table_expression(&self) -> &str {
        &self.table_expression
    }

    pub fn identification_variable(&self) -> Option<&str> {
        self.identification_variable.as_deref()
    }

    /// Whether the referenced table may legitimately have no row for a given owner (as is the
    /// case for collection tables).
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// A column of this table, qualified by the identification variable if there is one and by
    /// the table expression otherwise.
    pub fn column(&self, name: impl Into<String>) -> Column {
        Column::physical(
            self.identification_variable()
                .unwrap_or(&self.table_expression),
            name,
        )
    }
}

impl ExpressionBuilder for TableReference {
    fn build(&self, builder: &mut SQLBuilder) {
        builder.push_identifier(&self.table_expression);

        if let Some(identification_variable) = &self.identification_variable {
            builder.push_str(" AS ");
            builder.push_identifier(identification_variable);
        }
    }
}

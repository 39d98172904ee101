// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    parameter::{Parameter, StatementParameter},
    predicate::ParamEquality,
    select::Select,
    ExpressionBuilder, SQLBuilder, SQLParamContainer,
};

/// A column-like concept covering any usage where a table column could be used: the operands
/// of a predicate, the projection of a sub-select, the members of a row-value constructor.
#[derive(Debug, PartialEq, Clone)]
pub enum Column {
    /// A physical column, qualified by the table (or qualifier) it is read from
    Physical { table: String, name: String },
    /// A placeholder whose value comes from the parameter bindings at execution time
    Param(Parameter),
    /// A literal value carried by the statement (still rendered as a placeholder)
    Literal(SQLParamContainer),
    Null,
    /// A row-value constructor `(a, b)`. A single-member tuple renders as its member.
    Tuple(Vec<Column>),
    /// A parenthesized value list `(a, b, c)`, typically the right side of `IN`
    List(Vec<Column>),
    /// A parenthesized sub-select
    SubSelect(Box<Select>),
}

impl Column {
    pub fn physical(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Physical {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Build a row-value constructor, collapsing the single-column case.
    pub fn tuple(mut columns: Vec<Column>) -> Self {
        if columns.len() == 1 {
            columns.remove(0)
        } else {
            Self::Tuple(columns)
        }
    }
}

impl ExpressionBuilder for Column {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Column::Physical { table, name } => builder.push_column(table, name),
            Column::Param(parameter) => builder.push_param(StatementParameter::from(*parameter)),
            Column::Literal(value) => builder.push_param(StatementParameter::from(value.clone())),
            Column::Null => builder.push_str("NULL"),
            Column::Tuple(columns) if columns.len() == 1 => columns[0].build(builder),
            Column::Tuple(columns) | Column::List(columns) => {
                builder.push('(');
                builder.push_elems(columns, ", ");
                builder.push(')');
            }
            Column::SubSelect(select) => {
                builder.push('(');
                select.build(builder);
                builder.push(')');
            }
        }
    }
}

impl ParamEquality for Column {
    fn param_eq(&self, other: &Self) -> Option<bool> {
        match (self, other) {
            (Column::Literal(v1), Column::Literal(v2)) => Some(v1 == v2),
            _ => None,
        }
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    column::Column, predicate::ConcretePredicate, table_reference::TableReference,
    ExpressionBuilder, SQLBuilder,
};

/// A plain `SELECT <columns> FROM <table> [WHERE <predicate>]`, used to express the set of
/// owners matched by a mutation (for example, the rows of an id table).
#[derive(Debug, PartialEq, Clone)]
pub struct Select {
    pub columns: Vec<Column>,
    pub from: TableReference,
    pub predicate: ConcretePredicate,
}

impl Select {
    pub fn new(columns: Vec<Column>, from: TableReference, predicate: ConcretePredicate) -> Self {
        Self {
            columns,
            from,
            predicate,
        }
    }
}

impl ExpressionBuilder for Select {
    /// Build `SELECT <columns> FROM <table> WHERE <predicate>`, omitting the `WHERE` clause when
    /// the predicate is `true`.
    fn build(&self, builder: &mut SQLBuilder) {
        builder.push_str("SELECT ");
        builder.push_elems(&self.columns, ", ");
        builder.push_str(" FROM ");
        self.from.build(builder);

        if self.predicate != ConcretePredicate::True {
            builder.push_str(" WHERE ");
            self.predicate.build(builder);
        }
    }
}

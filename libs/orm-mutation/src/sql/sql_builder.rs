// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{parameter::StatementParameter, ExpressionBuilder};

pub struct SQLBuilder {
    /// The SQL being built with placeholders for each parameter
    sql: String,
    /// Parameters in the order their placeholders appear in `sql`
    params: Vec<StatementParameter>,
}

impl Default for SQLBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SQLBuilder {
    pub fn new() -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a string
    pub fn push_str<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push_str(s.as_ref());
    }

    /// Push a character
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Push a string surrounded by double quotes. Embedded quotes are doubled so that the
    /// identifier survives verbatim.
    pub fn push_identifier<T: AsRef<str>>(&mut self, s: T) {
        self.sql.push('"');
        self.sql.push_str(&s.as_ref().replace('"', "\"\""));
        self.sql.push('"');
    }

    /// Push `"<table>"."<column>"`
    pub fn push_column<T: AsRef<str>>(&mut self, table_name: T, column_name: T) {
        self.push_identifier(table_name);
        self.push('.');
        self.push_identifier(column_name);
    }

    pub fn push_space(&mut self) {
        self.sql.push(' ');
    }

    /// Push a parameter, rendered as a positional placeholder (`$1`, `$2`, ...). The parameter
    /// itself is recorded so that the executor can bind a value at the same position.
    pub fn push_param(&mut self, param: StatementParameter) {
        self.params.push(param);
        self.push('$');
        self.push_str(self.params.len().to_string());
    }

    /// Push elements of an iterator, separated by `sep`. The `push_elem` function provides
    /// the flexibility to map the elements (compared to [`SQLBuilder::push_elems`], which assumes
    /// that the elements implement [`ExpressionBuilder`]).
    pub fn push_iter<T>(
        &mut self,
        iter: impl ExactSizeIterator<Item = T>,
        sep: &str,
        push_elem: impl Fn(&mut Self, T),
    ) {
        let len = iter.len();
        for (i, item) in iter.enumerate() {
            push_elem(self, item);

            if i + 1 < len {
                self.sql.push_str(sep);
            }
        }
    }

    /// Push elements of a slice, separated by `sep`.
    pub fn push_elems<T: ExpressionBuilder>(&mut self, elems: &[T], sep: &str) {
        self.push_iter(elems.iter(), sep, |builder, elem| {
            elem.build(builder);
        });
    }

    /// Get the SQL string and the list of parameters. This is the final step in building an SQL
    /// expression, and thus this builder consumes `self`.
    pub fn into_sql(self) -> (String, Vec<StatementParameter>) {
        (self.sql, self.params)
    }
}

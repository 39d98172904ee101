// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{
    predicate::ConcretePredicate, table_reference::TableReference, ExpressionBuilder, SQLBuilder,
};

/// A delete operation against a single table.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    /// The table to delete from.
    target: TableReference,
    /// The predicate to filter rows by.
    restriction: ConcretePredicate,
}

impl DeleteStatement {
    pub fn new(target: TableReference, restriction: ConcretePredicate) -> Self {
        Self {
            target,
            restriction,
        }
    }

    pub fn target(&self) -> &TableReference {
        &self.target
    }

    pub fn restriction(&self) -> &ConcretePredicate {
        &self.restriction
    }
}

impl ExpressionBuilder for DeleteStatement {
    /// Build a delete operation for the `DELETE FROM <table> WHERE <predicate>`. The `WHERE`
    /// clause is omitted if the predicate is `true`.
    fn build(&self, builder: &mut SQLBuilder) {
        builder.push_str("DELETE FROM ");
        self.target.build(builder);

        if self.restriction != ConcretePredicate::True {
            builder.push_str(" WHERE ");
            self.restriction.build(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sql::{column::Column, parameter::Parameter};

    use super::*;

    #[test]
    fn delete_all() {
        let delete = DeleteStatement::new(
            TableReference::new("person_roles", None, true),
            ConcretePredicate::True,
        );

        assert_binding!(delete.to_sql(), r#"DELETE FROM "person_roles""#);
    }

    #[test]
    fn delete_restricted_by_owner() {
        let owner = Parameter::new();
        let table = TableReference::new("person_roles", None, true);
        let delete = DeleteStatement::new(
            table.clone(),
            ConcretePredicate::eq(table.column("person_id"), Column::Param(owner)),
        );

        assert_binding!(
            delete.to_sql(),
            r#"DELETE FROM "person_roles" WHERE "person_roles"."person_id" = $1"#,
            owner
        );
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![cfg(test)]

//! Test assertion to check SQL statements and parameters.

/// Assert that a `(sql, parameters)` pair matches the expected statement and parameters.
///
/// Each expected parameter may be anything convertible into a
/// [`StatementParameter`](crate::sql::parameter::StatementParameter): a
/// [`Parameter`](crate::sql::parameter::Parameter) placeholder or an
/// [`SQLParamContainer`](crate::sql::SQLParamContainer) literal.
///
/// # Example:
/// ```no_run
/// assert_binding!(delete.to_sql(), r#"DELETE FROM "t" WHERE "t"."id" = $1"#, id_parameter);
/// ```
macro_rules! assert_binding {
    ($actual:expr, $expected_stmt:expr) => {
        let (actual_stmt, actual_params) = $actual;
        assert_eq!(actual_stmt, $expected_stmt);
        assert!(actual_params.is_empty(), "Extra actual parameters: {:?}", actual_params);
    };
    ($actual:expr, $expected_stmt:expr, $($expected_param:expr), +) => {
        let (actual_stmt, actual_params) = $actual;
        assert_eq!(actual_stmt, $expected_stmt);
        let expected_params: Vec<$crate::sql::parameter::StatementParameter> =
            vec![$($crate::sql::parameter::StatementParameter::from($expected_param)), +];
        assert_eq!(actual_params, expected_params, "Parameter mismatch");
    };
}

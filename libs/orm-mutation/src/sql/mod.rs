// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#[macro_use]
#[cfg(test)]
mod test_util;

pub(crate) mod column;
pub(crate) mod delete;
mod expression_builder;
pub(crate) mod parameter;
pub(crate) mod predicate;
pub(crate) mod select;
mod sql_builder;
mod sql_param;
pub(crate) mod table_reference;

pub use expression_builder::ExpressionBuilder;
pub use sql_builder::SQLBuilder;
pub use sql_param::{SQLParam, SQLParamContainer};

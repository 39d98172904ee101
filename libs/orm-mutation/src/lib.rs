// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Multi-table mutation support for the ORM.
//!
//! Two operations live here:
//! - [`resolve_strategy`] picks, once per entity hierarchy while the mapping model is built, the
//!   algorithm used to run deletes (and updates) spanning several tables: the one configured in
//!   [`SessionFactoryOptions`](runtime::SessionFactoryOptions) or else the dialect's fallback.
//! - [`clean_up_collection_tables`] removes, while such a mutation runs, the rows of the
//!   collection tables (element collections and many-to-many link tables) owned by the entities
//!   being deleted.

#[macro_use]
mod sql;

pub mod dialect;
pub mod model;
mod mutation;
pub mod mutation_error;
pub mod runtime;
pub mod strategy;
pub mod translate;

#[cfg(test)]
mod test_util;

pub use mutation::{clean_up_collection_tables, resolve_strategy};
pub use mutation_error::{MutationError, WithContext};
pub use sql::{
    ExpressionBuilder, SQLBuilder, SQLParam, SQLParamContainer,
    column::Column,
    delete::DeleteStatement,
    parameter::{Parameter, ParameterBindings, StatementParameter},
    predicate::{ConcretePredicate, ParamEquality, Predicate},
    select::Select,
    table_reference::TableReference,
};
pub use strategy::{MultiTableMutationStrategy, MutationStrategyKind, owner_key_restriction};

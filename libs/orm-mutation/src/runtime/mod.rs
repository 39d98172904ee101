// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The runtime collaborators the mutation helpers consult: configuration, services, sessions and
//! statement execution.

mod executor;
mod options;
#[cfg(feature = "postgres")]
mod postgres;
mod services;
mod session;
mod session_factory;

pub use executor::{MutationExecutor, PreparedStatement, StandardMutationExecutor, StatementPreparer};
pub use options::{ID_TABLE_PREFIX_ENV, MUTATION_STRATEGY_ENV, SessionFactoryOptions};
#[cfg(feature = "postgres")]
pub use postgres::PostgresStatementPreparer;
pub use services::{ServiceRegistry, SqlEnvironment, SqlServices};
pub use session::{ConnectionCoordinator, ExecutionContext, Session};
pub use session_factory::{
    MappingModelCreationProcess, RuntimeModelCreationContext, SessionFactory,
};

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use orm_env::EnvError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to translate SQL AST: {0}")]
    Translation(String),

    #[error("No value bound for parameter {0}")]
    MissingBinding(String),

    #[error("Failed to execute statement: {0}")]
    Execution(String),

    #[error("Environment: {0}")]
    Env(#[from] EnvError),

    #[error("Delegate: {0}")]
    Delegate(#[from] tokio_postgres::Error),

    #[error("{0} {1}")]
    WithContext(String, #[source] Box<MutationError>),
}

impl MutationError {
    pub fn with_context(self, context: String) -> MutationError {
        MutationError::WithContext(context, Box::new(self))
    }
}

pub trait WithContext {
    fn with_context(self, context: String) -> Self;
}

impl<T> WithContext for Result<T, MutationError> {
    fn with_context(self, context: String) -> Result<T, MutationError> {
        self.map_err(|e| e.with_context(context))
    }
}

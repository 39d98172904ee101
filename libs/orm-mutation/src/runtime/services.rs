// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crate::{dialect::Dialect, translate::SqlAstTranslatorFactory};

use super::executor::MutationExecutor;

/// The dialect in use, along with the translators it provides.
pub struct SqlEnvironment {
    dialect: Arc<dyn Dialect>,
    translator_factory: Arc<dyn SqlAstTranslatorFactory>,
}

impl SqlEnvironment {
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        let translator_factory = dialect.sql_ast_translator_factory();

        Self {
            dialect,
            translator_factory,
        }
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn sql_ast_translator_factory(&self) -> &dyn SqlAstTranslatorFactory {
        self.translator_factory.as_ref()
    }
}

pub struct SqlServices {
    environment: SqlEnvironment,
    mutation_executor: Arc<dyn MutationExecutor>,
}

impl SqlServices {
    pub fn new(environment: SqlEnvironment, mutation_executor: Arc<dyn MutationExecutor>) -> Self {
        Self {
            environment,
            mutation_executor,
        }
    }

    pub fn environment(&self) -> &SqlEnvironment {
        &self.environment
    }

    pub fn mutation_executor(&self) -> &dyn MutationExecutor {
        self.mutation_executor.as_ref()
    }
}

/// Services shared by everything created from one session factory.
pub struct ServiceRegistry {
    sql_services: SqlServices,
}

impl ServiceRegistry {
    pub fn new(sql_services: SqlServices) -> Self {
        Self { sql_services }
    }

    pub fn sql_services(&self) -> &SqlServices {
        &self.sql_services
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use orm_env::Environment;
use tracing::debug;

use crate::{
    mutation_error::MutationError,
    strategy::{DEFAULT_ID_TABLE_PREFIX, MultiTableMutationStrategy, MutationStrategyKind},
};

/// Names the strategy every hierarchy should use (`temp-table`, `cte` or `inline`). When unset,
/// each hierarchy gets its dialect's fallback.
pub const MUTATION_STRATEGY_ENV: &str = "ORM_MUTATION_STRATEGY";
/// Prefix of temporary id table names (`ht_` by default)
pub const ID_TABLE_PREFIX_ENV: &str = "ORM_MUTATION_ID_TABLE_PREFIX";

/// Session-factory wide settings relevant to multi-table mutations.
#[derive(Debug, Clone)]
pub struct SessionFactoryOptions {
    multi_table_mutation_strategy: Option<Arc<dyn MultiTableMutationStrategy>>,
    id_table_prefix: String,
}

impl Default for SessionFactoryOptions {
    fn default() -> Self {
        Self {
            multi_table_mutation_strategy: None,
            id_table_prefix: DEFAULT_ID_TABLE_PREFIX.to_string(),
        }
    }
}

impl SessionFactoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multi_table_mutation_strategy(
        mut self,
        strategy: Arc<dyn MultiTableMutationStrategy>,
    ) -> Self {
        self.multi_table_mutation_strategy = Some(strategy);
        self
    }

    pub fn with_id_table_prefix(mut self, id_table_prefix: impl Into<String>) -> Self {
        self.id_table_prefix = id_table_prefix.into();
        self
    }

    /// The strategy the user asked for, if any
    pub fn multi_table_mutation_strategy(&self) -> Option<&Arc<dyn MultiTableMutationStrategy>> {
        self.multi_table_mutation_strategy.as_ref()
    }

    pub fn id_table_prefix(&self) -> &str {
        &self.id_table_prefix
    }

    pub fn from_env<E: Environment>(env: &E) -> Result<Self, MutationError> {
        let id_table_prefix = env.get_or_else(ID_TABLE_PREFIX_ENV, DEFAULT_ID_TABLE_PREFIX);

        if id_table_prefix.trim().is_empty() {
            return Err(MutationError::Config(format!(
                "{ID_TABLE_PREFIX_ENV} must not be empty"
            )));
        }

        let multi_table_mutation_strategy = env
            .get_parsed::<MutationStrategyKind>(MUTATION_STRATEGY_ENV)?
            .map(|kind| {
                debug!("Using the {kind} mutation strategy from {MUTATION_STRATEGY_ENV}");
                kind.create(&id_table_prefix)
            });

        Ok(Self {
            multi_table_mutation_strategy,
            id_table_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use orm_env::{EnvError, MapEnvironment};

    use super::*;

    #[test]
    fn defaults_without_settings() {
        let options = SessionFactoryOptions::from_env(&MapEnvironment::new()).unwrap();

        assert!(options.multi_table_mutation_strategy().is_none());
        assert_eq!(options.id_table_prefix(), DEFAULT_ID_TABLE_PREFIX);
    }

    #[test]
    fn reads_strategy_and_prefix() {
        let env = MapEnvironment::from([
            (MUTATION_STRATEGY_ENV, "temp-table"),
            (ID_TABLE_PREFIX_ENV, "tmp_"),
        ]);
        let options = SessionFactoryOptions::from_env(&env).unwrap();

        assert_eq!(
            options.multi_table_mutation_strategy().map(|s| s.kind()),
            Some(MutationStrategyKind::TemporaryTable)
        );
        assert_eq!(options.id_table_prefix(), "tmp_");
    }

    #[test]
    fn rejects_unknown_strategy() {
        let env = MapEnvironment::from([(MUTATION_STRATEGY_ENV, "subselect")]);

        assert!(matches!(
            SessionFactoryOptions::from_env(&env),
            Err(MutationError::Env(EnvError::InvalidEnum { .. }))
        ));
    }

    #[test]
    fn rejects_blank_prefix() {
        let env = MapEnvironment::from([(ID_TABLE_PREFIX_ENV, " ")]);

        assert!(matches!(
            SessionFactoryOptions::from_env(&env),
            Err(MutationError::Config(_))
        ));
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{collections::HashMap, sync::Arc};

use crate::Environment;

/// Settings held in memory, for tests and embedders that configure the ORM programmatically.
/// Keys not set here are looked up in the layered environment, if any.
#[derive(Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
    layered_over: Option<Arc<dyn Environment>>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consult `base` for keys missing from this map (typically a [`SystemEnvironment`](crate::SystemEnvironment)).
    pub fn layered_over(mut self, base: Arc<dyn Environment>) -> Self {
        self.layered_over = Some(base);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(value) => Some(value.clone()),
            None => self.layered_over.as_deref().and_then(|base| base.get(key)),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        let mut env = Self::new();
        for (key, value) in values {
            env.set(key, value);
        }
        env
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{Dialect, DialectCapabilities};

/// A dialect described only by its capabilities. Useful for databases without dedicated support
/// and for exercising each fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDialect {
    capabilities: DialectCapabilities,
}

impl StandardDialect {
    pub fn new(capabilities: DialectCapabilities) -> Self {
        Self { capabilities }
    }
}

impl Dialect for StandardDialect {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn capabilities(&self) -> DialectCapabilities {
        self.capabilities
    }
}

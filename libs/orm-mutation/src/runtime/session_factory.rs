// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use super::{
    executor::StatementPreparer, options::SessionFactoryOptions, services::ServiceRegistry,
    services::SqlServices, session::Session,
};

pub struct SessionFactory {
    options: SessionFactoryOptions,
    service_registry: ServiceRegistry,
}

impl SessionFactory {
    pub fn new(options: SessionFactoryOptions, service_registry: ServiceRegistry) -> Self {
        Self {
            options,
            service_registry,
        }
    }

    pub fn options(&self) -> &SessionFactoryOptions {
        &self.options
    }

    pub fn service_registry(&self) -> &ServiceRegistry {
        &self.service_registry
    }

    pub fn sql_services(&self) -> &SqlServices {
        self.service_registry.sql_services()
    }

    /// Open a session whose statements are prepared on the given connection.
    pub fn open_session(self: &Arc<Self>, statement_preparer: Arc<dyn StatementPreparer>) -> Session {
        Session::new(self.clone(), statement_preparer)
    }
}

/// What building the runtime mapping model has access to.
#[derive(Clone)]
pub struct RuntimeModelCreationContext {
    session_factory: Arc<SessionFactory>,
}

impl RuntimeModelCreationContext {
    pub fn new(session_factory: Arc<SessionFactory>) -> Self {
        Self { session_factory }
    }

    pub fn session_factory(&self) -> &SessionFactory {
        &self.session_factory
    }
}

/// Handle on the ongoing creation of the runtime mapping model.
pub struct MappingModelCreationProcess {
    creation_context: RuntimeModelCreationContext,
}

impl MappingModelCreationProcess {
    pub fn new(session_factory: Arc<SessionFactory>) -> Self {
        Self {
            creation_context: RuntimeModelCreationContext::new(session_factory),
        }
    }

    pub fn creation_context(&self) -> &RuntimeModelCreationContext {
        &self.creation_context
    }
}

// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use super::{executor::StatementPreparer, session_factory::SessionFactory};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Owns access to the session's connection. All statements of a session, including every
/// cleanup statement of a mutation, are prepared through the same preparer and therefore run in
/// the session's current transaction.
pub struct ConnectionCoordinator {
    statement_preparer: Arc<dyn StatementPreparer>,
}

impl ConnectionCoordinator {
    pub fn new(statement_preparer: Arc<dyn StatementPreparer>) -> Self {
        Self { statement_preparer }
    }

    pub fn statement_preparer(&self) -> &dyn StatementPreparer {
        self.statement_preparer.as_ref()
    }
}

pub struct Session {
    id: u64,
    factory: Arc<SessionFactory>,
    connection_coordinator: ConnectionCoordinator,
}

impl Session {
    pub fn new(factory: Arc<SessionFactory>, statement_preparer: Arc<dyn StatementPreparer>) -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            factory,
            connection_coordinator: ConnectionCoordinator::new(statement_preparer),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn factory(&self) -> &SessionFactory {
        &self.factory
    }

    pub fn connection_coordinator(&self) -> &ConnectionCoordinator {
        &self.connection_coordinator
    }
}

/// Per-call bundle handed to everything that executes statements on behalf of a session.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'s> {
    session: &'s Session,
}

impl<'s> ExecutionContext<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &'s Session {
        self.session
    }
}

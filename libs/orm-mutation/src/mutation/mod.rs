// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Coordination between multi-table mutation strategies, the dialect, and statement execution.
//!
//! Both operations are stateless free functions: [`resolve_strategy`] runs once per entity
//! hierarchy while the mapping model is built, [`clean_up_collection_tables`] runs once per
//! executed mutation.

mod cleanup;
mod resolve;

pub use cleanup::clean_up_collection_tables;
pub use resolve::resolve_strategy;

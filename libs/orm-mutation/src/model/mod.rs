// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Runtime descriptors of mapped entities, as far as multi-table mutations need them.

mod attribute;
mod entity;
mod root_class;

pub use attribute::{
    AttributeMapping, BasicAttributeMapping, CollectionNature, EmbeddedAttributeMapping,
    PluralAttributeMapping, ToOneAttributeMapping,
};
pub use entity::{EntityMappingType, EntityPersister};
pub use root_class::RootClass;

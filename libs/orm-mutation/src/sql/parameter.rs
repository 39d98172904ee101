// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::SQLParamContainer;

static NEXT_PARAMETER_ID: AtomicUsize = AtomicUsize::new(1);

/// A placeholder in a statement whose value is supplied at execution time through
/// [`ParameterBindings`]. Each call to [`Parameter::new`] yields a distinct placeholder, so a
/// statement may refer to the same parameter more than once and receive the same value each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(usize);

impl Parameter {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_PARAMETER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// What the translator records for each positional placeholder of a rendered statement.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementParameter {
    /// Bound later from [`ParameterBindings`]
    Placeholder(Parameter),
    /// A literal value carried by the SQL AST itself
    Literal(SQLParamContainer),
}

impl From<Parameter> for StatementParameter {
    fn from(parameter: Parameter) -> Self {
        StatementParameter::Placeholder(parameter)
    }
}

impl From<SQLParamContainer> for StatementParameter {
    fn from(value: SQLParamContainer) -> Self {
        StatementParameter::Literal(value)
    }
}

/// Values for the [`Parameter`]s of the statements executed for one mutation.
#[derive(Debug, Clone, Default)]
pub struct ParameterBindings {
    bindings: HashMap<Parameter, SQLParamContainer>,
}

impl ParameterBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, replacing any previous binding of the same parameter.
    pub fn bind(&mut self, parameter: Parameter, value: SQLParamContainer) {
        self.bindings.insert(parameter, value);
    }

    pub fn get(&self, parameter: &Parameter) -> Option<&SQLParamContainer> {
        self.bindings.get(parameter)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_distinct() {
        let p1 = Parameter::new();
        let p2 = Parameter::new();

        assert_ne!(p1, p2);
        assert_eq!(p1.to_string(), format!("?{}", p1.0));
    }

    #[test]
    fn rebinding_replaces_value() {
        let parameter = Parameter::new();
        let mut bindings = ParameterBindings::new();
        assert!(bindings.is_empty());

        bindings.bind(parameter, SQLParamContainer::new(1i64));
        bindings.bind(parameter, SQLParamContainer::new(2i64));

        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings.get(&parameter),
            Some(&SQLParamContainer::new(2i64))
        );
        assert_eq!(bindings.get(&Parameter::new()), None);
    }
}

//! Enum column registration.
//!
//! [`EnumColumnBinder::register_enum`] validates an enum declaration, checks
//! every name it is about to generate against the model's method tables, and
//! only then installs:
//!
//! - a class accessor under the pluralized column name returning the mapping
//! - an instance getter (`column`) translating the stored code to a key
//! - an instance setter (`column=`) translating a key to its code
//! - one predicate (`key?`) per member
//! - the `enums` registry entry for the column
//!
//! Registration is all-or-nothing: a rejected declaration leaves the model
//! untouched.

use crate::accessor::EnumAccessor;
use crate::config::{ConflictCheck, EnumConfig};
use crate::definition::{is_identifier, EnumDefinition, IntoEnumSpec};
use crate::error::{ConflictKind, EnumError};
use crate::inflection::pluralize;
use crate::model::{ClassMethod, Method, ModelType};
use crate::schema::ColumnProbe;
use std::sync::Arc;

/// Registers enum columns on model types
#[derive(Debug, Clone, Default)]
pub struct EnumColumnBinder {
    config: EnumConfig,
}

impl EnumColumnBinder {
    pub fn new(config: EnumConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnumConfig {
        &self.config
    }

    /// Declare `column` on `model` as an enum over `values`
    ///
    /// # Arguments
    ///
    /// * `model` - The model type to extend
    /// * `column` - The integer storage attribute backing the enum
    /// * `values` - Either names in order (codes `0, 1, 2, …`) or explicit
    ///   `(name, code)` pairs
    ///
    /// # Returns
    ///
    /// A typed [`EnumAccessor`] for the column. The same behaviour is also
    /// reachable dynamically through [`ModelType::send`].
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if the declaration is malformed
    /// or `column` is not an identifier, `EnumError::Conflict` if a generated
    /// method name is already taken, and `EnumError::Schema` if a column
    /// probe fails while `mask_probe_failures` is off.
    pub fn register_enum<S: IntoEnumSpec>(
        &self,
        model: &mut ModelType,
        column: &str,
        values: S,
    ) -> Result<EnumAccessor, EnumError> {
        if !is_identifier(column) {
            return Err(EnumError::InvalidArgument(format!(
                "enum column should be an identifier, {column:?} provided"
            )));
        }
        let definition = EnumDefinition::from_spec(values.into_enum_spec()?)?;
        let mapping_name = pluralize(column);

        self.detect_conflicts(model, column, &mapping_name)?;

        let definition = Arc::new(definition);
        model.insert_class_method(
            mapping_name.clone(),
            ClassMethod::EnumMapping {
                column: column.to_string(),
            },
        );
        model.insert_instance_method(
            format!("{column}="),
            Method::EnumSetter {
                column: column.to_string(),
            },
        );
        model.insert_instance_method(
            column.to_string(),
            Method::EnumGetter {
                column: column.to_string(),
            },
        );
        for key in definition.keys() {
            let predicate = key.predicate_name();
            let previous = model.insert_instance_method(
                predicate.clone(),
                Method::EnumPredicate {
                    column: column.to_string(),
                    key: key.clone(),
                },
            );
            if let Some(previous) = previous {
                log::debug!(
                    "Model \"{}\": predicate {} for enum \"{}\" replaces {:?}",
                    model.name(),
                    predicate,
                    column,
                    previous
                );
            }
        }
        model.insert_enum(column.to_string(), Arc::clone(&definition));

        log::debug!(
            "Model \"{}\": registered enum \"{}\" with {} value(s), class accessor {}",
            model.name(),
            column,
            definition.len(),
            mapping_name
        );

        Ok(EnumAccessor::new(
            column.to_string(),
            mapping_name,
            definition,
        ))
    }

    fn detect_conflicts(
        &self,
        model: &ModelType,
        column: &str,
        mapping_name: &str,
    ) -> Result<(), EnumError> {
        if model.has_class_method(mapping_name) {
            return Err(conflict(model, column, ConflictKind::Class, mapping_name));
        }

        if self.config.conflict_check == ConflictCheck::ClassOnly {
            return Ok(());
        }

        // Probed at most once, and only if an instance name is taken
        let mut is_column: Option<bool> = None;
        for method in [column.to_string(), format!("{column}=")] {
            if !model.has_instance_method(&method) {
                continue;
            }
            let storage = match is_column {
                Some(known) => known,
                None => {
                    let known = self.is_storage_column(model, column)?;
                    is_column = Some(known);
                    known
                }
            };
            if !storage {
                return Err(conflict(model, column, ConflictKind::Instance, &method));
            }
        }
        Ok(())
    }

    /// Whether `column` is a live storage column of `model`
    ///
    /// A probe that fails is reported as "not a column" while
    /// `mask_probe_failures` is on. That matches long-standing behaviour but
    /// can hide a genuine backend outage behind a conflict error, so it is
    /// logged.
    fn is_storage_column(&self, model: &ModelType, column: &str) -> Result<bool, EnumError> {
        match model.probe_column(column) {
            ColumnProbe::Present => Ok(true),
            ColumnProbe::Absent => Ok(false),
            ColumnProbe::Failed(e) if self.config.mask_probe_failures => {
                log::warn!(
                    "Model \"{}\": probing column \"{}\" failed, treating it as not a column: {}",
                    model.name(),
                    column,
                    e
                );
                Ok(false)
            }
            ColumnProbe::Failed(e) => Err(e.into()),
        }
    }
}

fn conflict(model: &ModelType, column: &str, kind: ConflictKind, method: &str) -> EnumError {
    EnumError::Conflict {
        model: model.name().to_string(),
        enum_name: column.to_string(),
        kind,
        method: method.to_string(),
    }
}

//! Model type descriptor: table binding, method tables and enum registry.

use super::method::{ClassMethod, HostFn, Method};
use super::record::{Record, Row};
use crate::accessor;
use crate::binder::EnumColumnBinder;
use crate::definition::{EnumDefinition, IntoEnumSpec};
use crate::error::EnumError;
use crate::inflection::tableize;
use crate::schema::{ColumnProbe, StorageSchema};
use crate::value::{null_code, symbol_value};
use crate::EnumAccessor;
use indexmap::IndexMap;
use sea_query::Value;
use std::sync::Arc;

/// Descriptor of a model type the host ORM defines
///
/// A `ModelType` owns everything enum registration needs to know about the
/// type: its storage columns, its class and instance method tables, and the
/// `enums` reflection registry. Descriptors are built and extended through
/// `&mut self`, then shared as `Arc<ModelType>`. Subtypes hold an `Arc` of
/// their parent and resolve methods and enums through it.
///
/// # Example
///
/// ```
/// use lifeguard_enum::{ModelType, Row};
/// use lifeguard_enum::schema::StaticSchema;
/// use std::sync::Arc;
///
/// let schema = Arc::new(StaticSchema::new().table("items", ["id", "condition"]));
/// let mut item = ModelType::with_table("Item", "items", schema)?;
/// item.register_enum("condition", ["mint", "very_good", "good", "poor"])?;
///
/// let row = item.new_record([("condition", "good")])?;
/// assert_eq!(item.send_get(&row, "condition")?, sea_query::Value::String(Some("good".into())));
/// assert_eq!(item.class_mapping("conditions").map(|d| d.len()), Some(4));
/// # Ok::<(), lifeguard_enum::EnumError>(())
/// ```
#[derive(Debug)]
pub struct ModelType {
    name: String,
    table: Option<String>,
    schema: Option<Arc<dyn StorageSchema>>,
    require_valid_table: bool,
    parent: Option<Arc<ModelType>>,
    columns: Vec<String>,
    class_methods: IndexMap<String, ClassMethod>,
    instance_methods: IndexMap<String, Method>,
    enums: IndexMap<String, Arc<EnumDefinition>>,
}

impl ModelType {
    /// A model with no table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            schema: None,
            require_valid_table: true,
            parent: None,
            columns: Vec::new(),
            class_methods: IndexMap::new(),
            instance_methods: IndexMap::new(),
            enums: IndexMap::new(),
        }
    }

    /// A model bound to `table`, with column accessors for every column
    ///
    /// # Errors
    ///
    /// Returns `EnumError::Schema` if the schema cannot describe `table`.
    pub fn with_table(
        name: impl Into<String>,
        table: impl Into<String>,
        schema: Arc<dyn StorageSchema>,
    ) -> Result<Self, EnumError> {
        let mut model = Self::new(name);
        model.set_table(table, schema)?;
        Ok(model)
    }

    /// A table-less base type meant only to be subclassed
    ///
    /// Subtypes inherit `schema` and do not require their implied table to
    /// exist.
    pub fn abstract_model(name: impl Into<String>, schema: Arc<dyn StorageSchema>) -> Self {
        let mut model = Self::new(name).require_valid_table(false);
        model.schema = Some(schema);
        model
    }

    /// Whether a table that cannot be described is an error (the default)
    /// or only a warning
    #[must_use]
    pub fn require_valid_table(mut self, required: bool) -> Self {
        self.require_valid_table = required;
        self
    }

    /// Bind the model to `table` and define its column accessors
    ///
    /// # Errors
    ///
    /// Returns `EnumError::Schema` if the table cannot be described and this
    /// model requires a valid table.
    pub fn set_table(
        &mut self,
        table: impl Into<String>,
        schema: Arc<dyn StorageSchema>,
    ) -> Result<(), EnumError> {
        let table = table.into();
        let columns = match schema.columns(&table) {
            Ok(columns) => columns,
            Err(e) if !self.require_valid_table => {
                log::warn!(
                    "Model \"{}\": could not load columns for table \"{}\": {}",
                    self.name,
                    table,
                    e
                );
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        for column in &columns {
            self.instance_methods.insert(
                column.clone(),
                Method::ColumnGetter {
                    column: column.clone(),
                },
            );
            self.instance_methods.insert(
                format!("{column}="),
                Method::ColumnSetter {
                    column: column.clone(),
                },
            );
        }

        self.table = Some(table);
        self.schema = Some(schema);
        self.columns = columns;
        Ok(())
    }

    /// Derive a subtype of this model
    ///
    /// A subtype of a model with a table shares that table and its columns.
    /// A subtype of a table-less base is bound to the table implied by its
    /// own name: `RealModel` maps to `real_models`. The parent is frozen by
    /// the `Arc`; methods and enums it defines stay visible through the
    /// subtype.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::Schema` if the implied table cannot be described and
    /// the parent requires a valid table.
    pub fn subclass(self: &Arc<Self>, name: impl Into<String>) -> Result<Self, EnumError> {
        let name = name.into();
        let mut model = Self::new(name.clone()).require_valid_table(self.require_valid_table);
        model.parent = Some(Arc::clone(self));
        match (&self.table, &self.schema) {
            (Some(table), schema) => {
                // Column accessors resolve through the parent
                model.table = Some(table.clone());
                model.schema = schema.clone();
                model.columns = self.columns.clone();
            }
            (None, Some(schema)) => model.set_table(tableize(&name), Arc::clone(schema))?,
            (None, None) => {}
        }
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn parent(&self) -> Option<&Arc<ModelType>> {
        self.parent.as_ref()
    }

    /// Storage columns of the table this type is bound to
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ask the storage backend whether `column` is a live column of this
    /// type's table
    ///
    /// A type with no table (or no schema) has no storage columns.
    pub fn probe_column(&self, column: &str) -> ColumnProbe {
        match (&self.table, &self.schema) {
            (Some(table), Some(schema)) => schema.probe_column(table, column),
            _ => ColumnProbe::Absent,
        }
    }

    // Method tables

    /// Define (or replace) a host class method
    pub fn define_class_method(&mut self, name: impl Into<String>) {
        self.class_methods.insert(name.into(), ClassMethod::Host);
    }

    /// Define (or replace) a host instance method
    pub fn define_instance_method<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(&mut dyn Record, &[Value]) -> Value + Send + Sync + 'static,
    {
        let body: HostFn = Arc::new(body);
        self.instance_methods.insert(name.into(), Method::Host(body));
    }

    /// Class method named `name`, including inherited ones
    pub fn class_method(&self, name: &str) -> Option<&ClassMethod> {
        self.class_methods
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.class_method(name)))
    }

    pub fn has_class_method(&self, name: &str) -> bool {
        self.class_method(name).is_some()
    }

    /// Instance method named `name`, including inherited ones
    pub fn instance_method(&self, name: &str) -> Option<&Method> {
        self.instance_methods
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.instance_method(name)))
    }

    pub fn has_instance_method(&self, name: &str) -> bool {
        self.instance_method(name).is_some()
    }

    pub(crate) fn insert_class_method(&mut self, name: String, method: ClassMethod) {
        self.class_methods.insert(name, method);
    }

    pub(crate) fn insert_instance_method(&mut self, name: String, method: Method) -> Option<Method> {
        self.instance_methods.insert(name, method)
    }

    pub(crate) fn insert_enum(&mut self, column: String, definition: Arc<EnumDefinition>) {
        self.enums.insert(column, definition);
    }

    // Enum registry

    /// Declare `column` as an enum with the default binder
    ///
    /// See [`EnumColumnBinder::register_enum`].
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` for a malformed spec and
    /// `EnumError::Conflict` when a generated method is already defined.
    pub fn register_enum<S: IntoEnumSpec>(
        &mut self,
        column: &str,
        values: S,
    ) -> Result<EnumAccessor, EnumError> {
        EnumColumnBinder::default().register_enum(self, column, values)
    }

    /// Reflection registry: column → definition, inherited entries first
    pub fn enums(&self) -> IndexMap<String, Arc<EnumDefinition>> {
        let mut merged = self
            .parent
            .as_ref()
            .map(|p| p.enums())
            .unwrap_or_default();
        for (column, definition) in &self.enums {
            merged.insert(column.clone(), Arc::clone(definition));
        }
        merged
    }

    /// Entries registered on this type itself
    pub fn own_enums(&self) -> &IndexMap<String, Arc<EnumDefinition>> {
        &self.enums
    }

    /// Definition for `column`, resolved through the parent chain
    pub fn enum_definition(&self, column: &str) -> Option<&Arc<EnumDefinition>> {
        self.enums
            .get(column)
            .or_else(|| self.parent.as_ref().and_then(|p| p.enum_definition(column)))
    }

    /// Result of calling the generated class accessor `accessor`
    /// (e.g. `conditions`)
    pub fn class_mapping(&self, accessor: &str) -> Option<&EnumDefinition> {
        match self.class_method(accessor)? {
            ClassMethod::EnumMapping { column } => self.enum_definition(column).map(|d| &**d),
            ClassMethod::Host => None,
        }
    }

    // Dispatch

    /// Call instance method `method` on `record`
    ///
    /// Generated enum getters return `Value::String` (null when the stored
    /// code is unknown), predicates return `Value::Bool`, setters return the
    /// value they stored. Column readers return a typed null for attributes
    /// that were never set.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::NoMethod` if the type defines no such method.
    pub fn send(
        &self,
        record: &mut dyn Record,
        method: &str,
        args: &[Value],
    ) -> Result<Value, EnumError> {
        let entry = self
            .instance_method(method)
            .ok_or_else(|| self.no_method(method))?;

        let value = match entry {
            Method::ColumnGetter { column } => record.attribute(column).unwrap_or_else(null_code),
            Method::ColumnSetter { column } => {
                let value = args.first().cloned().unwrap_or_else(null_code);
                record.set_attribute(column, value.clone());
                value
            }
            Method::EnumGetter { column } => {
                let key = self
                    .enum_definition(column)
                    .and_then(|d| accessor::read_key(d, &*record, column));
                symbol_value(key.map(|k| k.as_str()))
            }
            Method::EnumSetter { column } => match self.enum_definition(column) {
                Some(definition) => {
                    let key = args.first().and_then(crate::value::symbolic_key);
                    accessor::write_key(definition, record, column, key.as_deref())
                }
                None => {
                    record.set_attribute(column, null_code());
                    null_code()
                }
            },
            Method::EnumPredicate { column, key } => {
                let current = self.send(record, column, &[])?;
                Value::Bool(Some(current == symbol_value(Some(key.as_str()))))
            }
            Method::Host(body) => body(record, args),
        };
        Ok(value)
    }

    /// [`send`](Self::send) for read-only methods on a shared record
    ///
    /// # Errors
    ///
    /// Returns `EnumError::NoMethod` if the type defines no such method.
    pub fn send_get<R: Record + Clone>(&self, record: &R, method: &str) -> Result<Value, EnumError> {
        let mut scratch = record.clone();
        self.send(&mut scratch, method, &[])
    }

    /// Mass-assign attributes through their setters
    ///
    /// Every `(column, value)` pair is routed through `column=`, so enum
    /// columns accept symbolic values while plain columns store the value as
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::NoMethod` for a column without a setter. Pairs
    /// before the failing one have already been applied.
    pub fn assign<I, K, V>(&self, record: &mut dyn Record, attrs: I) -> Result<(), EnumError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (column, value) in attrs {
            let setter = format!("{}=", column.as_ref());
            self.send(record, &setter, &[value.into()])?;
        }
        Ok(())
    }

    /// Build a new in-memory record from mass-assigned attributes
    ///
    /// # Errors
    ///
    /// Returns `EnumError::NoMethod` for a column without a setter.
    pub fn new_record<I, K, V>(&self, attrs: I) -> Result<Row, EnumError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut row = Row::new();
        self.assign(&mut row, attrs)?;
        Ok(row)
    }

    fn no_method(&self, method: &str) -> EnumError {
        EnumError::NoMethod {
            model: self.name.clone(),
            method: method.to_string(),
        }
    }
}

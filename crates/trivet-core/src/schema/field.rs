use crate::stmt::Value;

use std::fmt;
use std::sync::Arc;

/// A pure per-field transform: raw input to normalized value (setter), or
/// stored value to presented value (getter).
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A zero-argument default-value producer, evaluated at insert time.
pub type Producer = Arc<dyn Fn() -> Value + Send + Sync>;

#[derive(Clone)]
pub enum DefaultValue {
    Static(Value),
    Producer(Producer),
}

impl DefaultValue {
    pub fn produce(&self) -> Value {
        match self {
            Self::Static(value) => value.clone(),
            Self::Producer(producer) => producer(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Producer(_) => f.debug_tuple("Producer").finish(),
        }
    }
}

/// A primitive type constraint. A rule listing several types accepts any of
/// them, which is how "integer or null" nullability is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
    Any,
}

impl FieldType {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => matches!(value, Value::String(_)),
            Self::Integer => matches!(value, Value::I64(_)),
            Self::Number => matches!(value, Value::I64(_) | Value::F64(_)),
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Null => value.is_null(),
            Self::Any => true,
        }
    }
}

/// A string-format constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
}

/// The validation rule a field may declare.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub required: bool,
    pub types: Vec<FieldType>,
    pub format: Option<Format>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Appends an acceptable type; call repeatedly to build a union.
    pub fn ty(mut self, ty: FieldType) -> Self {
        self.types.push(ty);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn email(self) -> Self {
        self.format(Format::Email)
    }
}

/// One field's descriptor: validation rule, default, write/read transforms,
/// and the `private` / `quote` flags.
#[derive(Clone, Default)]
pub struct Field {
    pub rule: Option<Rule>,
    pub default: Option<DefaultValue>,
    pub setter: Option<Transform>,
    pub getter: Option<Transform>,
    pub private: bool,
    pub quote: bool,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(DefaultValue::Static(value.into()));
        self
    }

    pub fn default_with(mut self, producer: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        self.default = Some(DefaultValue::Producer(Arc::new(producer)));
        self
    }

    /// Write-side transform, applied after validation so validation sees
    /// the raw input.
    pub fn setter(mut self, setter: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }

    /// Read-side transform, applied to every value returned from storage.
    pub fn getter(mut self, getter: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        self.getter = Some(Arc::new(getter));
        self
    }

    /// Strip this field from read results unless explicitly overridden.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Quote this field's name in generated statements.
    pub fn quote(mut self) -> Self {
        self.quote = true;
        self
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("rule", &self.rule)
            .field("default", &self.default)
            .field("setter", &self.setter.is_some())
            .field("getter", &self.getter.is_some())
            .field("private", &self.private)
            .field("quote", &self.quote)
            .finish()
    }
}

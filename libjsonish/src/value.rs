//! jsonish value representation.

use std::collections::HashMap;
use std::fmt;

/// A jsonish value.
///
/// Values own their children outright. Every "mutation" through the setters
/// below replaces the affected node with a freshly built one, so two values
/// never alias each other's payload.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    /// Null value.
    #[default]
    Null,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit floating-point number.
    Number(f64),
    /// UTF-8 string with all escapes resolved.
    String(String),
    /// Ordered array of values.
    Array(Vec<Value>),
    /// Object (key-value map). Key order carries no meaning.
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Boolean`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number truncated toward zero if this is a `Number`.
    ///
    /// This is a plain `as` conversion: no rounding, out-of-range values
    /// saturate and NaN becomes 0.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Mutable elements, if this is an array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Mutable members, if this is an object.
    pub fn as_object_mut(&mut self) -> Option<&mut HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Turns this value into a `Boolean`, or into `Null` when given `None`.
    pub fn set_boolean(&mut self, value: Option<bool>) {
        *self = value.map_or(Value::Null, Value::Boolean);
    }

    /// Turns this value into a `Number`, or into `Null` when given `None`.
    pub fn set_number(&mut self, value: Option<f64>) {
        *self = value.map_or(Value::Null, Value::Number);
    }

    /// Turns this value into a `Number` holding `value`, or into `Null`.
    pub fn set_integer(&mut self, value: Option<i64>) {
        *self = value.map_or(Value::Null, |n| Value::Number(n as f64));
    }

    /// Turns this value into a `String`, or into `Null` when given `None`.
    pub fn set_string(&mut self, value: Option<String>) {
        *self = value.map_or(Value::Null, Value::String);
    }

    /// Turns this value into an `Array`, or into `Null` when given `None`.
    pub fn set_array(&mut self, value: Option<Vec<Value>>) {
        *self = value.map_or(Value::Null, Value::Array);
    }

    /// Turns this value into an `Object`, or into `Null` when given `None`.
    pub fn set_object(&mut self, value: Option<HashMap<String, Value>>) {
        *self = value.map_or(Value::Null, Value::Object);
    }

    /// Looks up an array element by position or an object member by key.
    ///
    /// Returns `None` when the index is out of range, the key is absent, or
    /// the index kind does not match the variant.
    ///
    /// ```
    /// use libjsonish::{parse, Value};
    ///
    /// let value = parse("{list: [1, 2]}").unwrap();
    /// let second = value.get("list").and_then(|list| list.get(1));
    /// assert_eq!(second, Some(&Value::Number(2.0)));
    /// assert_eq!(value.get(0), None);
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Mutable element or member, or `None` if absent.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Assigns or removes an array element or object member.
    ///
    /// `Some` replaces an in-range array element or inserts/overwrites an
    /// object member. `None` removes the element (shifting later elements
    /// left) or the member. Anything else is a no-op: arrays never grow, and
    /// receivers of the wrong variant are left untouched.
    pub fn set<I: ValueIndex>(&mut self, index: I, value: Option<Value>) {
        index.assign(self, value);
    }

    /// Number of elements or members; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// True when `len()` is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Variant-tagged diagnostic rendering. Not JSON.
    pub fn describe(&self) -> String {
        match self {
            Value::Null => "Null".to_string(),
            Value::Boolean(b) => format!("Boolean({})", b),
            Value::Number(n) => format!("Number({})", n),
            Value::String(s) => format!("String({:?})", s),
            Value::Array(arr) => {
                let items: Vec<String> = arr.iter().map(Value::describe).collect();
                format!("Array[{}]", items.join(", "))
            }
            Value::Object(obj) => {
                let mut keys: Vec<&String> = obj.keys().collect();
                keys.sort();
                let items: Vec<String> = keys
                    .iter()
                    .map(|k| format!("{:?}: {}", k, obj[*k].describe()))
                    .collect();
                format!("Object{{{}}}", items.join(", "))
            }
        }
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A position (`usize`) or key (`&str`, `String`) usable with
/// [`Value::get`] and [`Value::set`].
///
/// This trait is sealed.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;

    #[doc(hidden)]
    fn assign(&self, value: &mut Value, new_value: Option<Value>);
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_array()?.get(*self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        value.as_array_mut()?.get_mut(*self)
    }

    fn assign(&self, value: &mut Value, new_value: Option<Value>) {
        let Some(arr) = value.as_array_mut() else {
            return;
        };
        // Out-of-range positions are ignored for both replace and remove.
        if *self >= arr.len() {
            return;
        }
        match new_value {
            Some(v) => arr[*self] = v,
            None => {
                arr.remove(*self);
            }
        }
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        value.as_object()?.get(self)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        value.as_object_mut()?.get_mut(self)
    }

    fn assign(&self, value: &mut Value, new_value: Option<Value>) {
        let Some(obj) = value.as_object_mut() else {
            return;
        };
        match new_value {
            Some(v) => {
                obj.insert(self.to_string(), v);
            }
            None => {
                obj.remove(self);
            }
        }
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }

    fn assign(&self, value: &mut Value, new_value: Option<Value>) {
        self.as_str().assign(value, new_value);
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }

    fn assign(&self, value: &mut Value, new_value: Option<Value>) {
        (**self).assign(value, new_value);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Display for Value {
    /// Writes the compact serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::serialize(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

use indexmap::IndexMap;

/// Tree shaped data whose text can be converted between charsets in one go.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Text(Vec<u8>),
  List(Vec<Value>),
  /// Keys are text too and get converted along with the values.
  Map(IndexMap<Vec<u8>, Value>),
}

impl Value {
  /// Numbers, including text spelling a number, are never reinterpreted as
  /// text.
  pub fn is_numeric(&self) -> bool {
    match self {
      Value::Int(_) | Value::Float(_) => true,
      Value::Text(text) => is_numeric_text(text),
      _ => false,
    }
  }
}

impl From<&str> for Value {
  fn from(text: &str) -> Self {
    Value::Text(text.as_bytes().to_vec())
  }
}

impl From<&[u8]> for Value {
  fn from(text: &[u8]) -> Self {
    Value::Text(text.to_vec())
  }
}

impl From<Vec<u8>> for Value {
  fn from(text: Vec<u8>) -> Self {
    Value::Text(text)
  }
}

impl From<i64> for Value {
  fn from(number: i64) -> Self {
    Value::Int(number)
  }
}

impl From<f64> for Value {
  fn from(number: f64) -> Self {
    Value::Float(number)
  }
}

impl From<bool> for Value {
  fn from(flag: bool) -> Self {
    Value::Bool(flag)
  }
}

impl FromIterator<Value> for Value {
  fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
    Value::List(iter.into_iter().collect())
  }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, Value)> for Value {
  fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
    Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
  }
}

/// Decimal or float literal with optional surrounding whitespace, sign,
/// fraction and exponent, e.g. ` -1.5e3`.
fn is_numeric_text(text: &[u8]) -> bool {
  let text = text.trim_ascii();
  let text = text.strip_prefix(b"+").or_else(|| text.strip_prefix(b"-")).unwrap_or(text);

  let digits = |s: &[u8]| s.iter().take_while(|b| b.is_ascii_digit()).count();
  let int_len = digits(text);
  let mut rest = &text[int_len..];
  let mut frac_len = 0;
  if let Some(frac) = rest.strip_prefix(b".") {
    frac_len = digits(frac);
    rest = &frac[frac_len..];
  }
  if int_len + frac_len == 0 {
    return false;
  }
  if let Some(exp) = rest.strip_prefix(b"e").or_else(|| rest.strip_prefix(b"E")) {
    let exp = exp.strip_prefix(b"+").or_else(|| exp.strip_prefix(b"-")).unwrap_or(exp);
    let exp_len = digits(exp);
    if exp_len == 0 {
      return false;
    }
    rest = &exp[exp_len..];
  }
  rest.is_empty()
}

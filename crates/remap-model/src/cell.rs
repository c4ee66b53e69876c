//! Raw cell values and their text normalization.

/// A raw cell value as produced by a tabular source.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Renders the value as the text the rewriter parses.
    ///
    /// Integral floats render without a decimal point (`7075.0` becomes
    /// `"7075"`), fractional floats with one. Empty renders as the empty
    /// string.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) if value.fract() == 0.0 => (*value as i64).to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// True for missing values and empty text; such cells are never rewritten.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.is_empty(),
            Self::Int(_) | Self::Float(_) => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_float_renders_without_decimal_point() {
        assert_eq!(CellValue::Float(7075.0).to_text(), "7075");
    }

    #[test]
    fn fractional_float_keeps_decimal_point() {
        assert_eq!(CellValue::Float(1.5).to_text(), "1.5");
    }

    #[test]
    fn int_and_text_render_naturally() {
        assert_eq!(CellValue::Int(220).to_text(), "220");
        assert_eq!(CellValue::from("220-221$1").to_text(), "220-221$1");
    }

    #[test]
    fn empty_detection() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("").is_empty());
        assert!(!CellValue::Int(0).is_empty());
        assert!(!CellValue::from("0").is_empty());
    }
}

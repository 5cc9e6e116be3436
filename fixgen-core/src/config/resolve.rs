use super::Config;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Configuration file contents before validation.
///
/// Fields stay as raw JSON so that a mistyped field only loses itself,
/// not the whole file.
#[derive(Debug, Default, Deserialize)]
pub struct PartialConfig {
    pub filename: Option<Value>,
    pub width: Option<Value>,
    pub height: Option<Value>,
    #[serde(rename = "outDir")]
    pub out_dir: Option<Value>,
}

/// Apply "value if valid, else default" to each field independently
pub fn resolve_fields(partial: PartialConfig) -> Config {
    let defaults = Config::default();

    Config {
        filename: text_field("filename", partial.filename).unwrap_or(defaults.filename),
        width: dimension_field("width", partial.width).unwrap_or(defaults.width),
        height: dimension_field("height", partial.height).unwrap_or(defaults.height),
        out_dir: text_field("outDir", partial.out_dir)
            .map(Into::into)
            .unwrap_or(defaults.out_dir),
    }
}

fn text_field(name: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() && !s.contains(['\n', '\r']) => Some(s),
        other => {
            warn!("⚠ Ignoring {name} = {other}: expected a non-empty single-line string");
            None
        }
    }
}

/// Accepts positive whole numbers that fit in `u32`; anything else is rejected.
fn dimension_field(name: &str, value: Option<Value>) -> Option<u32> {
    let value = value?;
    let pixels = match &value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        }),
        _ => None,
    };

    match pixels.and_then(|p| u32::try_from(p).ok()).filter(|p| *p > 0) {
        Some(p) => Some(p),
        None => {
            warn!("⚠ Ignoring {name} = {value}: expected a positive integer");
            None
        }
    }
}

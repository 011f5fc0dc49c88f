//! Response envelope the surrounding service hands back: `{"ok": bool,
//! "parsed_content": ..., "error": ...}`, absent fields omitted.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(content: Value) -> Self {
        Self {
            ok: true,
            parsed_content: Some(content),
            error: None,
        }
    }

    pub fn failure(error: &Error) -> Self {
        Self {
            ok: false,
            parsed_content: None,
            error: Some(error.to_string()),
        }
    }

    /// Strict JSON text. Re-checks finiteness before encoding so a
    /// hand-built tree with a stray NaN is rejected instead of emitted.
    pub fn to_json_string(&self) -> Result<String> {
        self.check_content()?;
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        self.check_content()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let s = self.to_json_string()?;
        writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn check_content(&self) -> Result<()> {
        match &self.parsed_content {
            Some(content) if !content.is_json_safe() => Err(Error::NonFinite),
            _ => Ok(()),
        }
    }
}

//! Turns core results into what the user sees.
//!
//! Every [`ErrorKind`] gets its own exit status so scripts can branch on
//! the kind without parsing messages:
//!
//! | Kind         | Exit |
//! |--------------|------|
//! | `type`       | 2    |
//! | `domain`     | 3    |
//! | `value`      | 4    |
//! | `transition` | 5    |
//!
//! Exit 1 is left to process-level failures (unreadable file, bad JSON).

use fastfood_core::{transition_table, ErrorKind, Money, OrderError, OrderResult, OrderStatus};
use serde::Serialize;
use serde_json::json;

use crate::config::OutputFormat;

/// Exit status for a failure of the given kind.
pub fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Type => 2,
        ErrorKind::Domain => 3,
        ErrorKind::Value => 4,
        ErrorKind::Transition => 5,
    }
}

/// Text for each stream plus the exit status.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit: u8,
}

#[derive(Serialize)]
struct Failure {
    ok: bool,
    kind: ErrorKind,
    message: String,
}

pub struct Renderer {
    format: OutputFormat,
    currency: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, currency: impl Into<String>) -> Self {
        Renderer {
            format,
            currency: currency.into(),
        }
    }

    pub fn total(&self, result: &OrderResult<Money>) -> Rendered {
        match result {
            Ok(total) => self.success(
                format!("{}{}", self.currency, total),
                json!({
                    "ok": true,
                    "total": total.to_decimal().to_string(),
                    "cents": total.cents(),
                }),
            ),
            Err(err) => self.failure(err),
        }
    }

    pub fn transition(&self, current: &str, desired: &str, result: &OrderResult<bool>) -> Rendered {
        match result {
            Ok(_) => {
                let name = |raw: &str| {
                    OrderStatus::parse_normalized(raw)
                        .map(|status| status.as_str().to_string())
                        .unwrap_or_else(|| raw.to_string())
                };
                let (from, to) = (name(current), name(desired));
                self.success(
                    format!("ok: {from} -> {to}"),
                    json!({ "ok": true, "from": from, "to": to }),
                )
            }
            Err(err) => self.failure(err),
        }
    }

    pub fn table(&self) -> Rendered {
        let table = transition_table();
        let text = table
            .iter()
            .map(|(status, next)| {
                let next = if next.is_empty() {
                    "(terminal)".to_string()
                } else {
                    next.iter()
                        .map(OrderStatus::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("{:<15}-> {}", status.as_str(), next)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let body: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|(status, next)| (status.as_str().to_string(), json!(next)))
            .collect();
        self.success(text, json!({ "ok": true, "transitions": body }))
    }

    fn success(&self, text: String, body: serde_json::Value) -> Rendered {
        let stdout = match self.format {
            OutputFormat::Text => text,
            OutputFormat::Json => body.to_string(),
        };
        Rendered {
            stdout: Some(stdout),
            stderr: None,
            exit: 0,
        }
    }

    fn failure(&self, err: &OrderError) -> Rendered {
        let kind = err.kind();
        let exit = exit_code(kind);
        match self.format {
            OutputFormat::Text => Rendered {
                stdout: None,
                stderr: Some(format!("error[{kind}]: {err}")),
                exit,
            },
            OutputFormat::Json => {
                let failure = Failure {
                    ok: false,
                    kind,
                    message: err.to_string(),
                };
                Rendered {
                    stdout: Some(json!(failure).to_string()),
                    stderr: None,
                    exit,
                }
            }
        }
    }
}

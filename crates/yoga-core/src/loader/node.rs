//! Loader for script modules evaluated by Node.js
//!
//! Spawns one Node process per batch. The process `require`s every file in
//! request order and prints the requested exports as JSON after a marker
//! line, so anything the modules print themselves is skipped. Functions
//! serialize as `"[Function]"` and back-references to an enclosing object
//! as `"[Circular]"`; client instances routinely hold both.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::process::Stdio;
use tokio::process::Command;

use super::{AuxiliaryLoader, LoadContext, LoadRequest};
use crate::{Error, Result};

const MARKER: &str = "__YOGA_EXPORTS__";

const SCRIPT: &str = r#"
const requests = __REQUESTS__;
const replacer = () => {
  const ancestors = [];
  return function (key, value) {
    if (typeof value === 'function') return '[Function]';
    if (typeof value === 'bigint') return value.toString();
    if (typeof value !== 'object' || value === null) return value;
    while (ancestors.length > 0 && ancestors[ancestors.length - 1] !== this) {
      ancestors.pop();
    }
    if (ancestors.includes(value)) return '[Circular]';
    ancestors.push(value);
    return value;
  };
};
let result = null;
const values = [];
for (const [file, name] of requests) {
  const mod = require(file);
  let value;
  if (name === 'default') {
    value = mod && (mod.__esModule || mod.default !== undefined) ? mod.default : mod;
  } else {
    value = mod == null ? undefined : mod[name];
  }
  if (value === undefined) {
    result = { missing: { path: file, export: name } };
    break;
  }
  values.push(value);
}
if (result === null) {
  result = { ok: values };
}
process.stdout.write('\n__MARKER__' + JSON.stringify(result, replacer()) + '\n', () => process.exit(0));
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeOutput {
    Ok(Vec<Value>),
    Missing { path: String, export: String },
}

/// Evaluates `.ts` and `.js` modules with Node.js.
///
/// The default command is `node --require ts-node/register/transpile-only`,
/// which resolves `ts-node` from the project's own dependencies.
#[derive(Debug, Clone)]
pub struct NodeModuleLoader {
    program: String,
    args: Vec<String>,
}

impl Default for NodeModuleLoader {
    fn default() -> Self {
        Self::new("node")
            .arg("--require")
            .arg("ts-node/register/transpile-only")
    }
}

impl NodeModuleLoader {
    /// Use `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument passed before the evaluated script.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The command as it would be typed in a shell, for error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn script(requests: &[LoadRequest]) -> Result<String> {
        let pairs: Vec<(String, &str)> = requests
            .iter()
            .map(|r| (r.path.to_native().to_string_lossy().into_owned(), r.export_name.as_str()))
            .collect();
        Ok(SCRIPT
            .replace("__REQUESTS__", &serde_json::to_string(&pairs)?)
            .replace("__MARKER__", MARKER))
    }

    fn parse_output(stdout: &str, expected: usize) -> Result<Vec<Value>> {
        let (_, payload) = stdout.rsplit_once(MARKER).ok_or_else(|| Error::LoaderOutput {
            message: "no exports found in node output".into(),
        })?;

        match serde_json::from_str::<NodeOutput>(payload.trim())? {
            NodeOutput::Ok(values) if values.len() == expected => Ok(values),
            NodeOutput::Ok(values) => Err(Error::LoaderOutput {
                message: format!("expected {} values, node returned {}", expected, values.len()),
            }),
            NodeOutput::Missing { path, export } => Err(Error::ExportNotFound {
                path: path.into(),
                export,
            }),
        }
    }
}

#[async_trait]
impl AuxiliaryLoader for NodeModuleLoader {
    async fn load(&self, requests: &[LoadRequest], ctx: &LoadContext) -> Result<Vec<Value>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(
            command = %self.command_line(),
            modules = requests.len(),
            "Loading script modules"
        );

        let compiler_options = json!({ "outDir": ctx.output_dir.as_str() }).to_string();
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("-e")
            .arg(Self::script(requests)?)
            .current_dir(ctx.project_dir.to_native())
            .env("TS_NODE_COMPILER_OPTIONS", compiler_options)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(Error::LoaderFailed {
                command: self.command_line(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Self::parse_output(&String::from_utf8_lossy(&output.stdout), requests.len())
    }
}

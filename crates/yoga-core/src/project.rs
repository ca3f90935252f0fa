//! Project facts and the TypeScript project descriptor

use serde::Deserialize;
use std::path::Path;
use yoga_fs::{ConfigStore, NormalizedPath, YogaPath, io};

use crate::{Error, Result};

/// Ambient facts about the project being resolved.
///
/// Passed explicitly so resolution never reads process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFacts {
    /// Absolute project root; every relative config path is joined onto it
    pub project_dir: NormalizedPath,
    /// Build directory from the project descriptor; overrides `output.buildPath`
    pub build_output_dir: Option<NormalizedPath>,
    /// Directory the tool was started from
    pub working_dir: NormalizedPath,
}

impl ProjectFacts {
    /// Facts for `project_dir`, started from the project dir itself.
    ///
    /// Every resolved path is joined onto `project_dir`, so it must be
    /// absolute; a relative directory is rejected with
    /// [`Error::RelativeProjectDir`].
    pub fn new(project_dir: impl Into<NormalizedPath>) -> Result<Self> {
        let project_dir = project_dir.into();
        if !project_dir.is_absolute() {
            return Err(Error::RelativeProjectDir {
                path: project_dir.to_string(),
            });
        }
        Ok(Self {
            working_dir: project_dir.clone(),
            project_dir,
            build_output_dir: None,
        })
    }

    /// Relative directories are taken from the project root.
    pub fn with_build_output_dir(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.build_output_dir = Some(self.project_dir.join(dir.into().as_str()));
        self
    }

    /// Relative directories are taken from the project root.
    pub fn with_working_dir(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.working_dir = self.project_dir.join(dir.into().as_str());
        self
    }

    /// Gather facts for the project containing `cwd`.
    pub fn discover(cwd: &Path, descriptor: &dyn ProjectDescriptor) -> Result<Self> {
        let working_dir = io::canonical_dir(cwd)?;
        let info = descriptor.describe(&working_dir)?;
        tracing::debug!(
            project_dir = %info.root_dir,
            out_dir = ?info.out_dir.as_ref().map(NormalizedPath::as_str),
            "Discovered project"
        );
        Ok(Self {
            project_dir: info.root_dir,
            build_output_dir: info.out_dir,
            working_dir,
        })
    }
}

/// What a project descriptor says about the project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub root_dir: NormalizedPath,
    pub out_dir: Option<NormalizedPath>,
}

/// Reads the project root and build directory from a project descriptor.
pub trait ProjectDescriptor: Send + Sync {
    /// Describe the project containing `start`, an absolute directory.
    fn describe(&self, start: &NormalizedPath) -> Result<ProjectInfo>;
}

/// [`ProjectDescriptor`] backed by `tsconfig.json`.
///
/// The nearest `tsconfig.json` at or above the start directory marks the
/// project root, and its `compilerOptions.outDir` is the build directory.
/// Without a tsconfig the start directory is the root.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsConfigDescriptor;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfigFile {
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    out_dir: Option<String>,
}

impl TsConfigDescriptor {
    /// Walk up from `start` to the nearest `tsconfig.json`.
    pub fn find(start: &NormalizedPath) -> Option<NormalizedPath> {
        let mut dir = Some(start.clone());
        while let Some(current) = dir {
            let candidate = current.join(YogaPath::TsConfig.as_str());
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = current.parent();
        }
        None
    }
}

impl ProjectDescriptor for TsConfigDescriptor {
    fn describe(&self, start: &NormalizedPath) -> Result<ProjectInfo> {
        let Some(tsconfig) = Self::find(start) else {
            tracing::debug!(%start, "No tsconfig.json found");
            return Ok(ProjectInfo {
                root_dir: start.clone(),
                out_dir: None,
            });
        };

        let root_dir = tsconfig.parent().unwrap_or_else(|| start.clone());
        let config: TsConfigFile = ConfigStore::new().load_jsonc(&tsconfig)?;
        let out_dir = config
            .compiler_options
            .out_dir
            .filter(|dir| !dir.is_empty())
            .map(|dir| root_dir.join(&dir));

        Ok(ProjectInfo { root_dir, out_dir })
    }
}

//! Well-known file names in a yoga project.

use std::path::Path;

/// Standard project files the resolver looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YogaPath {
    /// TypeScript project descriptor
    TsConfig,
    /// Prisma service descriptor at the project root
    PrismaYml,
    /// Directory holding the Prisma descriptor when run from a parent directory
    PrismaDir,
    ConfigTs,
    ConfigJs,
    ConfigJson,
    ConfigYaml,
    ConfigYml,
    ConfigToml,
}

impl YogaPath {
    /// Config file candidates in priority order.
    pub const CONFIG_CANDIDATES: [YogaPath; 6] = [
        YogaPath::ConfigTs,
        YogaPath::ConfigJs,
        YogaPath::ConfigJson,
        YogaPath::ConfigYaml,
        YogaPath::ConfigYml,
        YogaPath::ConfigToml,
    ];

    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TsConfig => "tsconfig.json",
            Self::PrismaYml => "prisma.yml",
            Self::PrismaDir => "prisma",
            Self::ConfigTs => "yoga.config.ts",
            Self::ConfigJs => "yoga.config.js",
            Self::ConfigJson => "yoga.config.json",
            Self::ConfigYaml => "yoga.config.yaml",
            Self::ConfigYml => "yoga.config.yml",
            Self::ConfigToml => "yoga.config.toml",
        }
    }

    /// Whether this is a config file that has to be evaluated as a script.
    pub fn is_script(&self) -> bool {
        matches!(self, Self::ConfigTs | Self::ConfigJs)
    }
}

impl AsRef<Path> for YogaPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for YogaPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for YogaPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

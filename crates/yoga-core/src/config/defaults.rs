//! Default values and path defaulting helpers

use yoga_fs::NormalizedPath;

pub const CONTEXT_PATH: &str = "./src/context.ts";
pub const RESOLVERS_PATH: &str = "./src/graphql/";
pub const EJECT_FILE_PATH: &str = "./src/index.ts";
pub const TYPEGEN_PATH: &str = "./yoga/nexus.ts";
pub const SCHEMA_PATH: &str = "./src/schema.graphql";
pub const BUILD_PATH: &str = "./dist";

pub const PRISMA_CLIENT_PATH: &str = "./yoga/prisma-client/index.ts";
pub const DATAMODEL_INFO_PATH: &str = "./yoga/nexus-prisma/datamodel-info.ts";
pub const CONTEXT_CLIENT_NAME: &str = "prisma";

/// Export read from the Prisma client module.
pub const PRISMA_CLIENT_EXPORT: &str = "prisma";
/// Export read from the datamodel info module.
pub const DATAMODEL_INFO_EXPORT: &str = "default";

/// Returns `input` unless it is missing or empty, else `default`.
///
/// Empty strings count as missing: an empty path is never what the user meant.
pub fn value_or_default<'a>(input: Option<&'a str>, default: &'a str) -> &'a str {
    match input {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Join `input` (or `default`) onto the project root.
pub fn path_or_default(
    root: &NormalizedPath,
    input: Option<&str>,
    default: &str,
) -> NormalizedPath {
    root.join(value_or_default(input, default))
}

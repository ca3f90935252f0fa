//! [`TestProject`] builder for yoga project scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yoga_fs::NormalizedPath;

/// A temporary project directory with helpers for laying out yoga projects.
///
/// # Example
///
/// ```rust,no_run
/// use yoga_test_utils::TestProject;
///
/// let project = TestProject::new().with_resolvers().with_context();
/// project.assert_file_exists("src/context.ts");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
    root: NormalizedPath,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = yoga_fs::io::canonical_dir(temp_dir.path())
            .expect("TestProject::new: failed to canonicalize temp dir");
        Self { temp_dir, root }
    }

    /// Native path of the project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Canonical, normalized project root.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Normalized absolute path of `relative` inside the project.
    pub fn resolve(&self, relative: &str) -> NormalizedPath {
        self.root.join(relative)
    }

    fn native(&self, relative: &str) -> PathBuf {
        self.resolve(relative).to_native()
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.native(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        self
    }

    /// Create the directory `relative` and its parents.
    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.native(relative)).unwrap();
        self
    }

    /// Create the default resolvers directory `src/graphql/`.
    pub fn with_resolvers(self) -> Self {
        self.mkdir("src/graphql");
        self.write("src/graphql/Query.ts", "export const Query = {}\n");
        self
    }

    /// Create the default context module `src/context.ts`.
    pub fn with_context(self) -> Self {
        self.write("src/context.ts", "export default () => ({})\n");
        self
    }

    /// Create the default eject entry point `src/index.ts`.
    pub fn with_eject_file(self) -> Self {
        self.write("src/index.ts", "export {}\n");
        self
    }

    /// Create a `prisma.yml` at the project root.
    pub fn with_prisma_yml(self) -> Self {
        self.write("prisma.yml", "endpoint: http://localhost:4466\ndatamodel: datamodel.prisma\n");
        self
    }

    /// Create the default Prisma client and datamodel info modules.
    pub fn with_prisma_modules(self) -> Self {
        self.write(
            "yoga/prisma-client/index.ts",
            "export const prisma = { endpoint: 'http://localhost:4466' }\n",
        );
        self.write(
            "yoga/nexus-prisma/datamodel-info.ts",
            "export default { uniqueFieldsByModel: { User: ['id'] } }\n",
        );
        self
    }

    /// Write a `tsconfig.json` with the given `outDir`.
    pub fn with_tsconfig(self, out_dir: &str) -> Self {
        self.write(
            "tsconfig.json",
            &format!(
                "{{\n  // generated by TestProject\n  \"compilerOptions\": {{ \"outDir\": \"{}\" }},\n}}\n",
                out_dir
            ),
        );
        self
    }

    /// Write a config file named `name` at the project root.
    pub fn with_config(self, name: &str, content: &str) -> Self {
        self.write(name, content);
        self
    }

    /// Assert that a file or directory exists at `relative`.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.native(relative);
        assert!(path.exists(), "Expected {} to exist", path.display());
    }
}

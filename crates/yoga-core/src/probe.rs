//! Presence probe for the database integration

use yoga_fs::{NormalizedPath, YogaPath};

use crate::project::ProjectFacts;

/// Detects whether a project uses the database integration without saying so.
pub trait PresenceProbe: Send + Sync {
    /// The descriptor file that was found, if any.
    fn detect(&self, facts: &ProjectFacts) -> Option<NormalizedPath>;
}

/// Looks for a `prisma.yml` service descriptor.
///
/// Checks `<project_dir>/prisma.yml` first, then
/// `<working_dir>/prisma/prisma.yml` for projects that keep the Prisma
/// service in a subdirectory of where the tool was started.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrismaYmlProbe;

impl PrismaYmlProbe {
    /// Paths checked, in order.
    pub fn candidates(facts: &ProjectFacts) -> [NormalizedPath; 2] {
        [
            facts.project_dir.join(YogaPath::PrismaYml.as_str()),
            facts
                .working_dir
                .join(YogaPath::PrismaDir.as_str())
                .join(YogaPath::PrismaYml.as_str()),
        ]
    }
}

impl PresenceProbe for PrismaYmlProbe {
    fn detect(&self, facts: &ProjectFacts) -> Option<NormalizedPath> {
        Self::candidates(facts).into_iter().find(|path| {
            let found = path.exists();
            tracing::trace!(%path, found, "Probing for prisma.yml");
            found
        })
    }
}

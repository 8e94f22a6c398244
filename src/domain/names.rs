use crate::domain::version::bump;
use crate::error::Result;

/// One major release line with all four versions resolved.
///
/// Built once per major line; the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLine {
    major: String,
    old_core_version: String,
    new_core_version: String,
    old_lae_version: String,
    new_lae_version: String,
}

impl VersionLine {
    /// Resolve a major line, bumping the patch of an old version wherever
    /// the matching new version is absent.
    pub fn resolve(
        major: impl Into<String>,
        old_core_version: impl Into<String>,
        new_core_version: Option<String>,
        old_lae_version: impl Into<String>,
        new_lae_version: Option<String>,
    ) -> Result<Self> {
        let old_core_version = old_core_version.into();
        let old_lae_version = old_lae_version.into();

        let new_core_version = match new_core_version {
            Some(version) => version,
            None => bump(&old_core_version)?,
        };
        let new_lae_version = match new_lae_version {
            Some(version) => version,
            None => bump(&old_lae_version)?,
        };

        Ok(VersionLine {
            major: major.into(),
            old_core_version,
            new_core_version,
            old_lae_version,
            new_lae_version,
        })
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn old_core_version(&self) -> &str {
        &self.old_core_version
    }

    pub fn new_core_version(&self) -> &str {
        &self.new_core_version
    }

    pub fn old_lae_version(&self) -> &str {
        &self.old_lae_version
    }

    pub fn new_lae_version(&self) -> &str {
        &self.new_lae_version
    }
}

/// Every tag and branch name used by the release procedures of one major line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub major: String,

    pub old_core_version: String,
    pub new_core_version: String,
    pub old_lae_version: String,
    pub new_lae_version: String,

    /// `v3.9.2`
    pub old_core_tag: String,
    /// `v3.9.3`
    pub new_core_tag: String,
    /// `v3.9.2-LAE19.0.2`
    pub old_lae_tag_package: String,
    /// `v3.9.2-LAE19.0.2-base`
    pub old_lae_tag_stable: String,
    pub new_lae_tag_package: String,
    pub new_lae_tag_stable: String,

    /// `LAE_39_STABLE`
    pub branch_stable: String,
    /// `LAE_39_PACKAGE`
    pub branch_package: String,
    /// `1903` for LAE version `19.0.3`
    pub beta_branch_num: String,
    /// `LAE_1903_STABLE`
    pub beta_branch_stable: String,
    /// `LAE_1903_PACKAGE`
    pub beta_branch_package: String,
}

/// Derive all tag and branch names for a version line.
///
/// Pure and total: the same line always yields the same names.
pub fn derive(line: &VersionLine) -> DerivedNames {
    let old_core_tag = format!("v{}", line.old_core_version);
    let new_core_tag = format!("v{}", line.new_core_version);

    let old_lae_tag_package = format!("{}-LAE{}", old_core_tag, line.old_lae_version);
    let old_lae_tag_stable = format!("{}-base", old_lae_tag_package);
    let new_lae_tag_package = format!("{}-LAE{}", new_core_tag, line.new_lae_version);
    let new_lae_tag_stable = format!("{}-base", new_lae_tag_package);

    let beta_branch_num = line.new_lae_version.replace('.', "");

    DerivedNames {
        major: line.major.clone(),
        old_core_version: line.old_core_version.clone(),
        new_core_version: line.new_core_version.clone(),
        old_lae_version: line.old_lae_version.clone(),
        new_lae_version: line.new_lae_version.clone(),
        old_core_tag,
        new_core_tag,
        old_lae_tag_package,
        old_lae_tag_stable,
        new_lae_tag_package,
        new_lae_tag_stable,
        branch_stable: format!("LAE_{}_STABLE", line.major),
        branch_package: format!("LAE_{}_PACKAGE", line.major),
        beta_branch_stable: format!("LAE_{}_STABLE", beta_branch_num),
        beta_branch_package: format!("LAE_{}_PACKAGE", beta_branch_num),
        beta_branch_num,
    }
}

//! Deployment parameters collected from the operator.
//!
//! All fields are free text and are never validated. The only policy applied
//! is the build-context default: an empty path becomes `"."`.

/// Build context used when the operator leaves the path empty.
pub const DEFAULT_BUILD_CONTEXT: &str = ".";

/// The seven operator-supplied values for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    pub region: String,
    pub account_id: String,
    pub function_name: String,
    pub repo_name: String,
    pub image_tag: String,
    pub dockerfile_path: String,
    pub role_name: String,
}

impl DeployParams {
    /// Build parameters from raw input, applying the build-context default.
    pub fn new(
        region: impl Into<String>,
        account_id: impl Into<String>,
        function_name: impl Into<String>,
        repo_name: impl Into<String>,
        image_tag: impl Into<String>,
        dockerfile_path: impl Into<String>,
        role_name: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            account_id: account_id.into(),
            function_name: function_name.into(),
            repo_name: repo_name.into(),
            image_tag: image_tag.into(),
            dockerfile_path: build_context_or_default(dockerfile_path.into()),
            role_name: role_name.into(),
        }
    }

    /// `arn:aws:iam::{account_id}:role/{role_name}`
    pub fn role_arn(&self) -> String {
        format!("arn:aws:iam::{}:role/{}", self.account_id, self.role_name)
    }

    /// ECR registry host for the account and region.
    pub fn registry_host(&self) -> String {
        format!("{}.dkr.ecr.{}.amazonaws.com", self.account_id, self.region)
    }

    /// Local image reference, `{repo_name}:{image_tag}`.
    pub fn local_image(&self) -> String {
        format!("{}:{}", self.repo_name, self.image_tag)
    }

    /// Fully-qualified registry image reference.
    pub fn image_uri(&self) -> String {
        format!("{}/{}", self.registry_host(), self.local_image())
    }

    /// Copy of these parameters with every field shell-quoted.
    ///
    /// Quoted fragments concatenate in POSIX shells, so derived values such
    /// as the registry host stay valid words after quoting.
    pub fn shell_quoted(&self) -> Self {
        let q = |s: &str| shell_words::quote(s).into_owned();
        Self {
            region: q(&self.region),
            account_id: q(&self.account_id),
            function_name: q(&self.function_name),
            repo_name: q(&self.repo_name),
            image_tag: q(&self.image_tag),
            dockerfile_path: q(&self.dockerfile_path),
            role_name: q(&self.role_name),
        }
    }
}

/// Apply the build-context default to a raw path.
pub fn build_context_or_default(path: String) -> String {
    if path.is_empty() {
        tracing::debug!(default = DEFAULT_BUILD_CONTEXT, "build context empty, using default");
        DEFAULT_BUILD_CONTEXT.to_string()
    } else {
        path
    }
}
